//! Page-level types.

use super::{Divider, Element, TextElement};
use serde::{Deserialize, Serialize};

/// A single page in the laid-out document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Display name given to the host frame
    pub name: String,

    /// X offset of the page on the canvas
    pub x: f32,

    /// Y offset of the page on the canvas (pages share one row)
    pub y: f32,

    /// Page width in px
    pub width: f32,

    /// Page height in px
    pub height: f32,

    /// Positioned elements, in placement order
    pub elements: Vec<Element>,
}

impl Page {
    /// Create a new empty page at the given canvas offset.
    pub fn new(number: u32, x: f32, width: f32, height: f32) -> Self {
        Self {
            number,
            name: format!("Page {}", number),
            x,
            y: 0.0,
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Add a text element to the page.
    pub fn add_text(&mut self, text: TextElement) {
        self.elements.push(Element::Text(text));
    }

    /// Add a divider to the page.
    pub fn add_divider(&mut self, divider: Divider) {
        self.elements.push(Element::Divider(divider));
    }

    /// Iterate over the text elements of the page.
    pub fn text_elements(&self) -> impl Iterator<Item = &TextElement> {
        self.elements.iter().filter_map(Element::as_text)
    }

    /// Get plain text content of the page, one line per text element.
    pub fn plain_text(&self) -> String {
        self.text_elements()
            .map(TextElement::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Check if the page is empty (no elements).
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the number of elements on the page.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Get page dimensions as (width, height) tuple.
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}
