//! Layout templates: named bundles of font, margin, color, size and spacing.
//!
//! Templates are plain data. They are loaded from a declarative TOML table
//! (see [`TemplateRegistry`]), validated once at load time, and then consulted
//! read-only by the layout engine.

mod registry;

pub use registry::TemplateRegistry;

use crate::error::{Error, Result};
use crate::layout::PageGeometry;
use crate::model::{Color, LineKind};
use serde::{Deserialize, Serialize};

/// A named style preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Lookup key (e.g. "classic")
    pub id: String,

    /// Display name (e.g. "Classic")
    pub name: String,

    /// Font family used for every text element
    pub font: String,

    /// Page margin on all four sides, in px
    pub margin: f32,

    /// Color set
    pub colors: ColorSet,

    /// Font sizes per line kind, in px
    pub sizes: SizeSet,

    /// Vertical spacing, in px
    pub spacing: SpacingSet,
}

/// Template colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorSet {
    /// Body and list text
    pub text: Color,
    /// Headings
    pub heading: Color,
    /// Link runs
    pub link: Color,
    /// Divider strokes
    pub divider: Color,
}

/// Template font sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeSet {
    pub h1: f32,
    pub h2: f32,
    pub h3: f32,
    pub h4: f32,
    pub body: f32,
}

/// Template spacing. Heading, body and list values are applied before an
/// element; `after_line` after every text element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingSet {
    pub h1: f32,
    pub h2: f32,
    pub h3: f32,
    pub h4: f32,
    pub body: f32,
    pub list: f32,
    pub empty: f32,
    #[serde(alias = "afterLine")]
    pub after_line: f32,
}

impl Template {
    /// Width available to text on a page of the given width.
    pub fn content_width(&self, page_width: f32) -> f32 {
        page_width - 2.0 * self.margin
    }

    /// Font size for a text-bearing line kind.
    pub fn font_size(&self, kind: LineKind) -> f32 {
        match kind {
            LineKind::H1 => self.sizes.h1,
            LineKind::H2 => self.sizes.h2,
            LineKind::H3 => self.sizes.h3,
            LineKind::H4 => self.sizes.h4,
            _ => self.sizes.body,
        }
    }

    /// Spacing applied above an element of the given kind.
    pub fn spacing_before(&self, kind: LineKind) -> f32 {
        match kind {
            LineKind::H1 => self.spacing.h1,
            LineKind::H2 => self.spacing.h2,
            LineKind::H3 => self.spacing.h3,
            LineKind::H4 => self.spacing.h4,
            LineKind::List | LineKind::NestedList => self.spacing.list,
            LineKind::Empty => self.spacing.empty,
            _ => self.spacing.body,
        }
    }

    /// Text color for a line kind.
    pub fn text_color(&self, kind: LineKind) -> Color {
        if kind.is_heading() {
            self.colors.heading
        } else {
            self.colors.text
        }
    }

    /// Check the template against a page geometry.
    pub fn validate(&self, geometry: &PageGeometry) -> Result<()> {
        let fail = |what: String| Err(Error::InvalidTemplate(format!("{}: {}", self.id, what)));

        if self.id.trim().is_empty() {
            return Err(Error::InvalidTemplate("template id is empty".into()));
        }
        if self.font.trim().is_empty() {
            return fail("font family is empty".into());
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return fail(format!("margin {} is not a non-negative length", self.margin));
        }
        if 2.0 * self.margin >= geometry.width || 2.0 * self.margin >= geometry.height {
            return fail(format!(
                "margin {} leaves no room on a {}x{} page",
                self.margin, geometry.width, geometry.height
            ));
        }

        let sizes = [
            ("sizes.h1", self.sizes.h1),
            ("sizes.h2", self.sizes.h2),
            ("sizes.h3", self.sizes.h3),
            ("sizes.h4", self.sizes.h4),
            ("sizes.body", self.sizes.body),
        ];
        for (key, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return fail(format!("{} must be positive, got {}", key, value));
            }
        }

        let spacing = [
            ("spacing.h1", self.spacing.h1),
            ("spacing.h2", self.spacing.h2),
            ("spacing.h3", self.spacing.h3),
            ("spacing.h4", self.spacing.h4),
            ("spacing.body", self.spacing.body),
            ("spacing.list", self.spacing.list),
            ("spacing.empty", self.spacing.empty),
            ("spacing.after_line", self.spacing.after_line),
        ];
        for (key, value) in spacing {
            if !value.is_finite() || value < 0.0 {
                return fail(format!("{} must be non-negative, got {}", key, value));
            }
        }

        let colors = [
            ("colors.text", self.colors.text),
            ("colors.heading", self.colors.heading),
            ("colors.link", self.colors.link),
            ("colors.divider", self.colors.divider),
        ];
        for (key, color) in colors {
            if !color.is_valid() {
                return fail(format!("{} components must be within 0..=1", key));
            }
        }

        Ok(())
    }
}
