//! Materialization through a host canvas.
//!
//! A host is whatever actually draws: it loads fonts, measures text, and
//! creates page frames, text nodes and lines. [`materialize`] walks a
//! finished [`Document`] and issues those primitives in document order.

use crate::error::{Error, Result};
use crate::layout::TextMeasurer;
use crate::model::{Color, Divider, Document, Element, LineKind, Page, TextElement};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four faces loaded for the template font family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontStyle {
    Regular,
    Bold,
    Italic,
    #[serde(rename = "Bold Italic")]
    BoldItalic,
}

impl FontStyle {
    /// Every style, in load order.
    pub const ALL: [FontStyle; 4] = [
        FontStyle::Regular,
        FontStyle::Bold,
        FontStyle::Italic,
        FontStyle::BoldItalic,
    ];

    /// Pick the face for a bold/italic combination.
    pub fn resolve(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => FontStyle::Regular,
            (true, false) => FontStyle::Bold,
            (false, true) => FontStyle::Italic,
            (true, true) => FontStyle::BoldItalic,
        }
    }

    /// Style name as font hosts spell it.
    pub fn as_str(self) -> &'static str {
        match self {
            FontStyle::Regular => "Regular",
            FontStyle::Bold => "Bold",
            FontStyle::Italic => "Italic",
            FontStyle::BoldItalic => "Bold Italic",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A font family plus style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: FontStyle,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: FontStyle) -> Self {
        Self {
            family: family.into(),
            style,
        }
    }
}

impl fmt::Display for FontName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

/// A run with its final font, color and hyperlink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRun {
    pub text: String,
    pub font: FontName,
    pub color: Color,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A text element ready for the host: geometry plus fully resolved runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedText {
    pub kind: LineKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,

    /// Width is pinned and the host must wrap inside it
    pub fixed_width: bool,

    pub font_size: f32,
    pub runs: Vec<ResolvedRun>,
}

impl ResolvedText {
    /// Resolve an element's runs against a font family and link color.
    ///
    /// A run is bold if it or its element is bold. Link runs take the link
    /// color; every other run takes the element color.
    pub fn resolve(element: &TextElement, family: &str, link_color: Color) -> Self {
        let runs = element
            .runs
            .iter()
            .map(|run| ResolvedRun {
                text: run.text.clone(),
                font: FontName::new(family, FontStyle::resolve(run.bold || element.bold, run.italic)),
                color: if run.is_link() { link_color } else { element.color },
                link: run.link.clone(),
            })
            .collect();

        Self {
            kind: element.kind,
            x: element.x,
            y: element.y,
            width: element.width,
            height: element.height,
            fixed_width: element.fixed_width,
            font_size: element.font_size,
            runs,
        }
    }

    /// Concatenated run text.
    pub fn characters(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }
}

/// A canvas that can measure text and build pages from primitives.
pub trait DocumentHost: TextMeasurer {
    /// Handle to a created page frame.
    type PageHandle;

    /// Make a font available. Must succeed before any text uses it.
    fn load_font(&mut self, font: &FontName) -> Result<()>;

    /// Create an empty page frame.
    fn create_page(&mut self, page: &Page) -> Result<Self::PageHandle>;

    /// Create a text node inside a page.
    fn create_text(&mut self, page: &mut Self::PageHandle, text: &ResolvedText) -> Result<()>;

    /// Create a horizontal line inside a page.
    fn create_line(&mut self, page: &mut Self::PageHandle, divider: &Divider) -> Result<()>;

    /// Select the created pages and bring them into view.
    fn focus(&mut self, pages: &[Self::PageHandle]) -> Result<()>;
}

/// Load all four styles of `family`.
///
/// Stops at the first failure, reported as [`Error::FontLoad`].
pub fn load_fonts<H: DocumentHost + ?Sized>(host: &mut H, family: &str) -> Result<()> {
    for style in FontStyle::ALL {
        let font = FontName::new(family, style);
        host.load_font(&font).map_err(|e| match e {
            Error::FontLoad { .. } => e,
            other => Error::FontLoad {
                family: family.to_string(),
                style: style.to_string(),
                reason: other.to_string(),
            },
        })?;
        log::debug!("Loaded font {}", font);
    }
    Ok(())
}

/// Create every page and element of `doc` on the host, then focus the pages.
///
/// Fonts must already be loaded. Returns the page handles in page order.
pub fn materialize<H: DocumentHost + ?Sized>(
    doc: &Document,
    host: &mut H,
) -> Result<Vec<H::PageHandle>> {
    let template = &doc.template;
    let mut handles = Vec::with_capacity(doc.pages.len());

    for page in &doc.pages {
        let mut handle = host.create_page(page)?;
        for element in &page.elements {
            match element {
                Element::Text(text) => {
                    let resolved = ResolvedText::resolve(text, &template.font, template.colors.link);
                    host.create_text(&mut handle, &resolved)?;
                }
                Element::Divider(divider) => host.create_line(&mut handle, divider)?,
            }
        }
        handles.push(handle);
    }

    host.focus(&handles)?;
    log::debug!("Materialized {} page(s)", handles.len());
    Ok(handles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StyledRun;

    fn element(bold: bool, runs: Vec<StyledRun>) -> TextElement {
        TextElement {
            kind: LineKind::Body,
            x: 48.0,
            y: 60.0,
            width: 100.0,
            height: 20.0,
            fixed_width: false,
            font_size: 12.0,
            bold,
            color: Color::rgb(0.1, 0.1, 0.1),
            runs,
        }
    }

    #[test]
    fn test_font_style_resolve() {
        assert_eq!(FontStyle::resolve(false, false), FontStyle::Regular);
        assert_eq!(FontStyle::resolve(true, false), FontStyle::Bold);
        assert_eq!(FontStyle::resolve(false, true), FontStyle::Italic);
        assert_eq!(FontStyle::resolve(true, true), FontStyle::BoldItalic);
        assert_eq!(FontStyle::BoldItalic.to_string(), "Bold Italic");
    }

    #[test]
    fn test_font_style_serde_name() {
        let json = serde_json::to_string(&FontStyle::BoldItalic).unwrap();
        assert_eq!(json, "\"Bold Italic\"");
    }

    #[test]
    fn test_resolve_runs() {
        let link = Color::rgb(0.0, 0.4, 0.8);
        let el = element(
            false,
            vec![
                StyledRun::plain("a "),
                StyledRun::bold("b"),
                StyledRun::italic("c"),
                StyledRun::link("d", "https://d.example"),
            ],
        );
        let resolved = ResolvedText::resolve(&el, "Inter", link);

        assert_eq!(resolved.characters(), "a bcd");
        assert_eq!(resolved.runs[0].font, FontName::new("Inter", FontStyle::Regular));
        assert_eq!(resolved.runs[1].font.style, FontStyle::Bold);
        assert_eq!(resolved.runs[2].font.style, FontStyle::Italic);
        assert_eq!(resolved.runs[0].color, el.color);
        assert_eq!(resolved.runs[3].color, link);
        assert_eq!(resolved.runs[3].link.as_deref(), Some("https://d.example"));
    }

    #[test]
    fn test_bold_element_makes_italic_runs_bold_italic() {
        let el = element(true, vec![StyledRun::plain("x"), StyledRun::italic("y")]);
        let resolved = ResolvedText::resolve(&el, "Inter", Color::white());
        assert_eq!(resolved.runs[0].font.style, FontStyle::Bold);
        assert_eq!(resolved.runs[1].font.style, FontStyle::BoldItalic);
    }
}
