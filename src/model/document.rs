//! Document-level types.

use super::{Element, Page};
use crate::template::Template;
use serde::{Deserialize, Serialize};

/// A laid-out document: the active template and its pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata
    pub metadata: DocumentMetadata,

    /// The template every element was styled with
    pub template: Template,

    /// Pages, left to right
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new document with no pages.
    pub fn new(template: Template) -> Self {
        Self {
            metadata: DocumentMetadata::for_template(&template.id),
            template,
            pages: Vec::new(),
        }
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_num: u32) -> Option<&Page> {
        if page_num == 0 {
            return None;
        }
        self.pages.get((page_num - 1) as usize)
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Iterate over every element in placement order.
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.pages.iter().flat_map(|page| page.elements.iter())
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.plain_text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Id of the template used for layout
    pub template: String,

    /// Visible text of the first H1, if any
    pub title: Option<String>,

    /// Number of source lines processed
    pub line_count: u32,

    /// Number of pages produced
    pub page_count: u32,
}

impl DocumentMetadata {
    /// Create metadata for a run with the given template id.
    pub fn for_template(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            ..Default::default()
        }
    }
}
