//! Leptos DragDrop Utilities
//!
//! Drag-to-reorder for a vertical Leptos list using pointer events.
//! Uses a movement threshold to distinguish click from drag, and the
//! midpoint rule in [`ReorderResolver`] to decide when a hover moves an item.

mod resolver;
mod surface;

pub use resolver::{DragState, ReorderResolver};
pub use surface::{Bounds, DomSurface, DragSurface};

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Default movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// How long clicks are ignored after a drop, in milliseconds
const CLICK_SUPPRESS_MS: i32 = 100;

/// Binding options
#[derive(Clone, Debug, PartialEq)]
pub struct DndConfig {
    /// CSS selector matching the draggable rows, in display order
    pub row_selector: String,
    /// Pointer travel before a press becomes a drag
    pub threshold_px: i32,
}

impl Default for DndConfig {
    fn default() -> Self {
        Self {
            row_selector: ".todo-row".to_string(),
            threshold_px: DRAG_THRESHOLD_PX,
        }
    }
}

/// Press recorded on pointerdown, before the threshold is crossed
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingDrag {
    pub index: usize,
    pub pointer_id: i32,
    pub start_x: i32,
    pub start_y: i32,
}

impl PendingDrag {
    fn exceeds(&self, x: i32, y: i32, threshold: i32) -> bool {
        (x - self.start_x).abs() > threshold || (y - self.start_y).abs() > threshold
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub resolver_read: ReadSignal<ReorderResolver>,
    pub resolver_write: WriteSignal<ReorderResolver>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pressed row (pointerdown but not yet dragging)
    pub pending_read: ReadSignal<Option<PendingDrag>>,
    pub pending_write: WriteSignal<Option<PendingDrag>>,
}

impl DndSignals {
    /// Index of the row being dragged, tracked
    pub fn dragging_index(&self) -> Option<usize> {
        self.resolver_read.get().current()
    }

    /// True right after a drop, while the trailing click should be ignored
    pub fn suppress_click(&self) -> bool {
        self.drag_just_ended_read.get_untracked() || self.resolver_read.get_untracked().is_dragging()
    }
}

pub fn create_dnd_signals() -> DndSignals {
    let (resolver_read, resolver_write) = signal(ReorderResolver::new());
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<PendingDrag>);
    DndSignals {
        resolver_read,
        resolver_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.pending_write.set(None);
    let mut resolver = dnd.resolver_read.get_untracked();
    let Some((source, current)) = resolver.end_drag() else {
        return;
    };
    log::debug!("[DND] drag ended: {} -> {}", source, current);
    dnd.resolver_write.set(resolver);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            CLICK_SUPPRESS_MS,
        );
        cb.forget();
    }
}

/// Create pointerdown handler for a draggable row
/// Records a pending drag with start position
pub fn make_on_pointerdown(dnd: DndSignals, index: Signal<usize>) -> impl Fn(web_sys::PointerEvent) + Copy + 'static {
    move |ev: web_sys::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                return;
            }
        }
        dnd.pending_write.set(Some(PendingDrag {
            index: index.get_untracked(),
            pointer_id: ev.pointer_id(),
            start_x: ev.client_x(),
            start_y: ev.client_y(),
        }));
    }
}

fn on_document<F>(event: &str, handler: F)
where
    F: FnMut(web_sys::PointerEvent) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let closure = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(handler);
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Bind document-level pointer handlers for one list
///
/// `on_reorder(from, to)` receives row indices and reports whether the
/// move was applied.
pub fn bind_global_pointer_handlers<F>(dnd: DndSignals, config: DndConfig, on_reorder: F)
where
    F: Fn(usize, usize) -> bool + 'static,
{
    let threshold = config.threshold_px;
    let selector = config.row_selector;

    on_document("pointermove", move |ev: web_sys::PointerEvent| {
        let mut resolver = dnd.resolver_read.get_untracked();
        let pointer_y = Some(f64::from(ev.client_y()));

        if !resolver.is_dragging() {
            // Start dragging once the press has moved far enough
            let Some(pending) = dnd.pending_read.get_untracked() else {
                return;
            };
            if pending.exceeds(ev.client_x(), ev.client_y(), threshold) {
                let surface = DomSurface::query(&selector, pointer_y);
                if pending.index < surface.len() {
                    surface.capture_pointer(pending.index, pending.pointer_id);
                    resolver.start_drag(pending.index);
                    log::debug!("[DND] drag started at row {}", pending.index);
                    dnd.resolver_write.set(resolver);
                }
            }
            return;
        }

        ev.prevent_default();
        let surface = DomSurface::query(&selector, pointer_y);
        if resolver.hover_surface(&surface, |from, to| on_reorder(from, to)) {
            dnd.resolver_write.set(resolver);
        }
    });

    on_document("pointerup", move |_ev: web_sys::PointerEvent| end_drag(&dnd));
    on_document("pointercancel", move |_ev: web_sys::PointerEvent| end_drag(&dnd));
}
