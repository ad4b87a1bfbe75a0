//! Layout statistics.

use crate::model::{LineKind, TextElement};
use serde::{Deserialize, Serialize};

/// Counts collected while laying out a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Total number of pages produced
    pub page_count: u32,

    /// Number of source lines processed
    pub line_count: u32,

    /// Number of text elements placed
    pub text_element_count: u32,

    /// Number of headings placed
    pub heading_count: u32,

    /// Number of list items placed (nested included)
    pub list_item_count: u32,

    /// Number of dividers placed
    pub divider_count: u32,

    /// Number of blank lines
    pub empty_line_count: u32,

    /// Number of hyperlink runs
    pub link_count: u32,

    /// Number of text elements that had to wrap
    pub wrapped_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,
}

impl LayoutStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a processed source line.
    pub fn add_line(&mut self, kind: LineKind) {
        self.line_count += 1;
        match kind {
            LineKind::Empty => self.empty_line_count += 1,
            LineKind::Divider => self.divider_count += 1,
            LineKind::List | LineKind::NestedList => self.list_item_count += 1,
            LineKind::H1 | LineKind::H2 | LineKind::H3 | LineKind::H4 => self.heading_count += 1,
            LineKind::Body => {}
        }
    }

    /// Record a placed text element.
    pub fn add_text(&mut self, element: &TextElement) {
        self.text_element_count += 1;
        self.link_count += element.link_count() as u32;
        if element.fixed_width {
            self.wrapped_count += 1;
        }
        // Words can span run boundaries, as in `**Rust**y`.
        self.word_count += element.plain_text().split_whitespace().count() as u32;
    }

    /// Record a newly started page.
    pub fn add_page(&mut self) {
        self.page_count += 1;
    }
}
