//! Layout provider abstraction
//!
//! The scroll logic never touches a rendering engine directly. It asks a
//! [`LayoutProvider`] for the scroll position, the viewport size, and the
//! bounds of every section, so it can be driven by real page measurements
//! or by synthetic values in tests.

use serde::{Deserialize, Serialize};

/// Vertical bounds of one on-page section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    /// Section identifier, without the leading `#`.
    pub id: String,
    /// Offset of the section's top edge from the top of the document.
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Whether a document y coordinate falls inside `[top, bottom)`.
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && y < self.bottom()
    }

    /// Whether any part of the section is visible in the viewport.
    pub fn intersects(&self, viewport: &Viewport) -> bool {
        viewport.scroll_y + viewport.height > self.top && viewport.scroll_y < self.bottom()
    }
}

/// The visible window onto the document.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }
}

/// Source of layout measurements.
pub trait LayoutProvider {
    /// Current vertical scroll offset of the page.
    fn scroll_y(&self) -> f64;

    /// Height of the visible viewport.
    fn viewport_height(&self) -> f64;

    /// Total scrollable height of the document.
    fn document_height(&self) -> f64;

    /// Section bounds in document order.
    fn sections(&self) -> &[SectionBounds];

    fn viewport(&self) -> Viewport {
        Viewport::new(self.scroll_y(), self.viewport_height())
    }

    fn section(&self, id: &str) -> Option<&SectionBounds> {
        self.sections().iter().find(|s| s.id == id)
    }
}

/// A frozen set of measurements.
///
/// Used both as the synthetic provider in tests and as the snapshot the
/// page script reports on every scroll frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StaticLayout {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
    pub sections: Vec<SectionBounds>,
}

impl StaticLayout {
    pub fn new(viewport_height: f64, sections: Vec<SectionBounds>) -> Self {
        let document_height = sections
            .iter()
            .map(SectionBounds::bottom)
            .fold(viewport_height, f64::max);
        Self {
            scroll_y: 0.0,
            viewport_height,
            document_height,
            sections,
        }
    }

    /// Same layout, scrolled to `scroll_y`.
    pub fn scrolled_to(mut self, scroll_y: f64) -> Self {
        self.scroll_y = scroll_y;
        self
    }

    pub fn set_scroll_y(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
    }
}

impl LayoutProvider for StaticLayout {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn document_height(&self) -> f64 {
        self.document_height
    }

    fn sections(&self) -> &[SectionBounds] {
        &self.sections
    }
}
