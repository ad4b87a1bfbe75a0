//! Positioned elements and text-level types.

use super::LineKind;
use serde::{Deserialize, Serialize};

/// An RGB color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    /// Red
    pub r: f32,
    /// Green
    pub g: f32,
    /// Blue
    pub b: f32,
}

impl Color {
    /// Create a color from unit-range components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Opaque white.
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Check that every component lies in `0.0..=1.0`.
    pub fn is_valid(&self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| c.is_finite() && (0.0..=1.0).contains(c))
    }

    /// Hex form, e.g. `#1a1a1a`.
    pub fn to_hex(&self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

/// A run of text with one formatting state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StyledRun {
    /// The visible text (delimiters removed)
    pub text: String,

    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Hyperlink target
    pub link: Option<String>,
}

impl StyledRun {
    /// Create a plain run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            ..Default::default()
        }
    }

    /// Create an italic run.
    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            italic: true,
            ..Default::default()
        }
    }

    /// Create a hyperlink run.
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(url.into()),
            ..Default::default()
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if this run carries a hyperlink.
    pub fn is_link(&self) -> bool {
        self.link.is_some()
    }

    /// Length of the run in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A styled, positioned block of text produced from one source line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    /// The source line kind this element was built from
    pub kind: LineKind,

    /// X position relative to the page
    pub x: f32,

    /// Y position relative to the page
    pub y: f32,

    /// Measured width (content width when `fixed_width` is set)
    pub width: f32,

    /// Measured height
    pub height: f32,

    /// Whether the width is pinned to the content width and the text wraps
    pub fixed_width: bool,

    /// Font size in px
    pub font_size: f32,

    /// Element-wide bold (headings)
    pub bold: bool,

    /// Text color for runs without a link
    pub color: Color,

    /// Formatted runs
    pub runs: Vec<StyledRun>,
}

impl TextElement {
    /// Get the visible text of the element.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Bottom edge (y + height).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Number of runs carrying a hyperlink.
    pub fn link_count(&self) -> usize {
        self.runs.iter().filter(|run| run.is_link()).count()
    }
}

/// A horizontal rule spanning the content width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Divider {
    /// X position relative to the page
    pub x: f32,

    /// Y position relative to the page
    pub y: f32,

    /// Line length
    pub width: f32,

    /// Stroke color
    pub color: Color,

    /// Stroke weight in px
    pub stroke_weight: f32,
}

/// A positioned element on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    /// Styled text
    Text(TextElement),

    /// Horizontal rule
    Divider(Divider),
}

impl Element {
    /// Y position of the element.
    pub fn y(&self) -> f32 {
        match self {
            Element::Text(text) => text.y,
            Element::Divider(divider) => divider.y,
        }
    }

    /// Check if this element is text.
    pub fn is_text(&self) -> bool {
        matches!(self, Element::Text(_))
    }

    /// Check if this element is a divider.
    pub fn is_divider(&self) -> bool {
        matches!(self, Element::Divider(_))
    }

    /// Borrow the text element, if this is one.
    pub fn as_text(&self) -> Option<&TextElement> {
        match self {
            Element::Text(text) => Some(text),
            Element::Divider(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(runs: Vec<StyledRun>) -> TextElement {
        TextElement {
            kind: LineKind::Body,
            x: 48.0,
            y: 60.0,
            width: 100.0,
            height: 12.0,
            fixed_width: false,
            font_size: 10.0,
            bold: false,
            color: Color::default(),
            runs,
        }
    }

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::rgb(0.0, 0.4, 0.8).to_hex(), "#0066cc");
        assert_eq!(Color::white().to_hex(), "#ffffff");
    }

    #[test]
    fn test_color_validity() {
        assert!(Color::rgb(0.1, 0.2, 0.3).is_valid());
        assert!(!Color::rgb(1.2, 0.0, 0.0).is_valid());
        assert!(!Color::rgb(f32::NAN, 0.0, 0.0).is_valid());
    }

    #[test]
    fn test_text_element_plain_text() {
        let text = element(vec![
            StyledRun::plain("Hello "),
            StyledRun::bold("world"),
            StyledRun::link("!", "https://example.com"),
        ]);
        assert_eq!(text.plain_text(), "Hello world!");
        assert_eq!(text.link_count(), 1);
        assert_eq!(text.bottom(), 72.0);
    }

    #[test]
    fn test_element_variants() {
        let el = Element::Text(element(Vec::new()));
        assert!(el.is_text());
        assert!(!el.is_divider());
        assert_eq!(el.y(), 60.0);
    }
}
