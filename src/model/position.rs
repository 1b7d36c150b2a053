use serde::{Deserialize, Serialize};

/// Viewport position anchored to the top-left corner (CSS px).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchoredLeft {
    pub top: f64,
    pub left: f64,
}

/// Viewport position anchored to the top-right corner: `right` is the
/// distance from the viewport's right edge (CSS px).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchoredRight {
    pub top: f64,
    pub right: f64,
}

/// Bounding box of the element that triggered a floating menu, as measured
/// by the presentation layer. The core never touches the DOM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl AnchorRect {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Current viewport dimensions (CSS px).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}
