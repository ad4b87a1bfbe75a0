//! Page geometry and fixed layout constants.

use serde::{Deserialize, Serialize};

/// Canvas pixels per inch.
pub const PX_PER_INCH: f32 = 96.0;

/// Horizontal gap between adjacent pages.
pub const PAGE_GAP: f32 = 20.0;

/// Space added above a divider, independent of template.
pub const DIVIDER_SPACE_BEFORE: f32 = 6.0;

/// Space a divider occupies below its line, independent of template.
pub const DIVIDER_SPACE_AFTER: f32 = 10.0;

/// Divider stroke weight.
pub const DIVIDER_STROKE_WEIGHT: f32 = 1.0;

/// Prefix for top-level list items.
pub const LIST_BULLET: &str = "• ";

/// Prefix for nested list items.
pub const NESTED_LIST_MARKER: &str = "    - ";

/// Page size and spacing between pages, in px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page width
    pub width: f32,

    /// Page height
    pub height: f32,

    /// Gap between pages
    pub gap: f32,
}

impl PageGeometry {
    /// Create a geometry with the default page gap.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            gap: PAGE_GAP,
        }
    }

    /// US Letter (8.5 x 11 inches).
    pub fn letter() -> Self {
        Self::new(8.5 * PX_PER_INCH, 11.0 * PX_PER_INCH)
    }

    /// A4 (210 x 297 mm).
    pub fn a4() -> Self {
        Self::new(210.0 / 25.4 * PX_PER_INCH, 297.0 / 25.4 * PX_PER_INCH)
    }

    /// Set the gap between pages.
    pub fn with_gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    /// Canvas x offset of the page with the given 1-based number.
    pub fn page_x(&self, number: u32) -> f32 {
        (number.saturating_sub(1)) as f32 * (self.width + self.gap)
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::letter()
    }
}
