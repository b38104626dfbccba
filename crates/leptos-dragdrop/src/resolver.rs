//! Reorder Resolver
//!
//! Turns a stream of hover positions into list moves. A move only commits
//! once the pointer has crossed the hovered row's midpoint in the direction
//! of travel, which keeps the list from flapping when the pointer rests
//! near a row boundary.

use crate::surface::{Bounds, DragSurface};

/// Drag gesture state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    /// `source` is where the gesture began, `current` where the item sits now
    Dragging { source: usize, current: usize },
}

/// Drag state machine for a single vertical list
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReorderResolver {
    state: DragState,
}

impl ReorderResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Index the dragged item currently occupies
    pub fn current(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { current, .. } => Some(current),
            DragState::Idle => None,
        }
    }

    /// Begin dragging the row at `index`, replacing any gesture in progress
    pub fn start_drag(&mut self, index: usize) {
        self.state = DragState::Dragging {
            source: index,
            current: index,
        };
    }

    /// Feed one hover sample
    ///
    /// `commit(from, to)` performs the move and reports whether it took
    /// effect; `current` only advances when it did. Returns true on commit.
    pub fn hover<F>(&mut self, pointer_index: usize, pointer_y: f64, bounds: Bounds, commit: F) -> bool
    where
        F: FnOnce(usize, usize) -> bool,
    {
        let DragState::Dragging { source, current } = self.state else {
            return false;
        };
        if pointer_index == current {
            return false;
        }

        let middle = bounds.midpoint();
        // Downward: wait until the pointer is past the middle of the row below
        if current < pointer_index && pointer_y < middle {
            return false;
        }
        // Upward: wait until the pointer is above the middle of the row above
        if current > pointer_index && pointer_y > middle {
            return false;
        }

        if !commit(current, pointer_index) {
            return false;
        }
        log::debug!("[DND] reorder {} -> {} (drag began at {})", current, pointer_index, source);
        self.state = DragState::Dragging {
            source,
            current: pointer_index,
        };
        true
    }

    /// Hit-test the surface at the current pointer and hover the row found
    pub fn hover_surface<S, F>(&mut self, surface: &S, commit: F) -> bool
    where
        S: DragSurface + ?Sized,
        F: FnOnce(usize, usize) -> bool,
    {
        if !self.is_dragging() || surface.is_empty() {
            return false;
        }
        let Some(y) = surface.pointer_offset() else {
            return false;
        };
        match surface.hit_test() {
            Some((index, bounds)) => self.hover(index, y, bounds, commit),
            None => false,
        }
    }

    /// Finish the gesture, returning `(source, current)` if one was active
    pub fn end_drag(&mut self) -> Option<(usize, usize)> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging { source, current } => Some((source, current)),
            DragState::Idle => None,
        }
    }
}
