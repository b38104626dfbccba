//! Drag Surface
//!
//! Pointer capture and hit-testing as a capability, so the resolver can be
//! driven by the DOM in the app and by plain data in tests.

use wasm_bindgen::JsCast;

/// Vertical extent of a rendered row, in client coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    pub fn midpoint(&self) -> f64 {
        (self.top + self.bottom) / 2.0
    }

    /// Half-open: a pointer on the shared edge of two rows belongs to the lower one
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom
    }
}

/// What the resolver needs from the host UI
pub trait DragSurface {
    /// Route the rest of the gesture's pointer events to row `index`
    fn capture_pointer(&self, index: usize, pointer_id: i32);

    /// Bounds of the row rendered at `index`, if it exists
    fn bounding_box(&self, index: usize) -> Option<Bounds>;

    /// Current pointer y in the same coordinates as `bounding_box`
    fn pointer_offset(&self) -> Option<f64>;

    /// Number of rows
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row under the pointer, with its bounds
    fn hit_test(&self) -> Option<(usize, Bounds)> {
        let y = self.pointer_offset()?;
        (0..self.len())
            .filter_map(|index| self.bounding_box(index).map(|bounds| (index, bounds)))
            .find(|(_, bounds)| bounds.contains(y))
    }
}

/// Rows matched by a CSS selector, in document order
pub struct DomSurface {
    rows: Vec<web_sys::Element>,
    pointer_y: Option<f64>,
}

impl DomSurface {
    /// Collect the rows matching `selector`; empty outside a browser document
    pub fn query(selector: &str, pointer_y: Option<f64>) -> Self {
        let mut rows = Vec::new();
        let doc = web_sys::window().and_then(|win| win.document());
        if let Some(list) = doc.and_then(|doc| doc.query_selector_all(selector).ok()) {
            for i in 0..list.length() {
                if let Some(el) = list.get(i).and_then(|node| node.dyn_into::<web_sys::Element>().ok()) {
                    rows.push(el);
                }
            }
        }
        Self { rows, pointer_y }
    }
}

impl DragSurface for DomSurface {
    fn capture_pointer(&self, index: usize, pointer_id: i32) {
        if let Some(row) = self.rows.get(index) {
            if row.set_pointer_capture(pointer_id).is_err() {
                log::debug!("[DND] pointer capture refused for row {}", index);
            }
        }
    }

    fn bounding_box(&self, index: usize) -> Option<Bounds> {
        self.rows.get(index).map(|row| {
            let rect = row.get_bounding_client_rect();
            Bounds::new(rect.top(), rect.bottom())
        })
    }

    fn pointer_offset(&self) -> Option<f64> {
        self.pointer_y
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}
