//! Document model types for laid-out content.
//!
//! This module defines the in-memory representation produced by the layout
//! engine and consumed by the materialization pass. It knows nothing about
//! any particular host canvas.

mod document;
mod element;
mod line;
mod page;

pub use document::{Document, DocumentMetadata};
pub use element::{Color, Divider, Element, StyledRun, TextElement};
pub use line::{ClassifiedLine, LineKind};
pub use page::Page;
