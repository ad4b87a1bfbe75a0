//! Layout and pagination.
//!
//! The engine consumes classified lines in document order, keeps a vertical
//! cursor, and starts a new page whenever an element no longer fits. Pages
//! are placed left to right in a single row.

mod engine;
mod geometry;
mod measure;
mod stats;

pub use engine::{layout_lines, LayoutEngine};
pub use geometry::{
    PageGeometry, DIVIDER_SPACE_AFTER, DIVIDER_SPACE_BEFORE, DIVIDER_STROKE_WEIGHT, LIST_BULLET,
    NESTED_LIST_MARKER, PAGE_GAP, PX_PER_INCH,
};
pub use measure::{HeuristicMeasurer, Size, TextMeasurer, TextStyle};
pub use stats::LayoutStats;
