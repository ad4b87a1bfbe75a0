//! Text measurement.
//!
//! Measuring is the host's job: only it knows the real font metrics. The
//! engine reaches it through [`TextMeasurer`]. [`HeuristicMeasurer`] is a
//! deterministic stand-in for running without a host.

use crate::error::Result;
use crate::model::StyledRun;
use serde::{Deserialize, Serialize};

/// Width and height in px.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Element-level text style passed to the measurer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font family
    pub family: String,

    /// Font size in px
    pub size: f32,

    /// Element-wide bold; runs may add bold on top of this
    pub bold: bool,
}

impl TextStyle {
    pub fn new(family: impl Into<String>, size: f32, bold: bool) -> Self {
        Self {
            family: family.into(),
            size,
            bold,
        }
    }
}

/// Measures styled text the way the host would lay it out.
///
/// A host that cannot measure (a missing face, a detached canvas) returns
/// an error, and layout stops with it.
pub trait TextMeasurer {
    /// Size of the runs on a single unwrapped line.
    fn natural_size(&self, runs: &[StyledRun], style: &TextStyle) -> Result<Size>;

    /// Size of the runs word-wrapped at `width`.
    fn wrapped_size(&self, runs: &[StyledRun], style: &TextStyle, width: f32) -> Result<Size>;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn natural_size(&self, runs: &[StyledRun], style: &TextStyle) -> Result<Size> {
        (**self).natural_size(runs, style)
    }

    fn wrapped_size(&self, runs: &[StyledRun], style: &TextStyle, width: f32) -> Result<Size> {
        (**self).wrapped_size(runs, style, width)
    }
}

/// Fixed-advance approximation of a proportional sans-serif font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicMeasurer {
    /// Average glyph advance, in em
    pub char_width_em: f32,

    /// Advance of a whitespace glyph, in em
    pub space_width_em: f32,

    /// Advance multiplier for bold glyphs
    pub bold_factor: f32,

    /// Line height, in em
    pub line_height_em: f32,
}

impl HeuristicMeasurer {
    pub fn new() -> Self {
        Self::default()
    }

    fn advance(&self, ch: char, bold: bool, size: f32) -> f32 {
        let em = if ch.is_whitespace() {
            self.space_width_em
        } else {
            self.char_width_em
        };
        let factor = if bold { self.bold_factor } else { 1.0 };
        em * size * factor
    }

    fn line_height(&self, size: f32) -> f32 {
        self.line_height_em * size
    }

    fn glyphs<'r>(
        &'r self,
        runs: &'r [StyledRun],
        style: &'r TextStyle,
    ) -> impl Iterator<Item = (char, f32)> + 'r {
        runs.iter().flat_map(move |run| {
            let bold = style.bold || run.bold;
            run.text
                .chars()
                .map(move |ch| (ch, self.advance(ch, bold, style.size)))
        })
    }

    /// Greedy word wrap; words wider than the line break between glyphs.
    fn line_count(&self, runs: &[StyledRun], style: &TextStyle, width: f32) -> usize {
        let glyphs: Vec<(char, f32)> = self.glyphs(runs, style).collect();
        let mut lines = 1;
        let mut line = 0.0_f32;
        let mut i = 0;

        while i < glyphs.len() {
            let word_start = i;
            while i < glyphs.len() && !glyphs[i].0.is_whitespace() {
                i += 1;
            }
            let word = &glyphs[word_start..i];
            let space_start = i;
            while i < glyphs.len() && glyphs[i].0.is_whitespace() {
                i += 1;
            }
            let trailing: f32 = glyphs[space_start..i].iter().map(|g| g.1).sum();
            let ink: f32 = word.iter().map(|g| g.1).sum();

            if line > 0.0 && line + ink > width {
                lines += 1;
                line = 0.0;
            }
            if ink > width {
                for &(_, advance) in word {
                    if line > 0.0 && line + advance > width {
                        lines += 1;
                        line = 0.0;
                    }
                    line += advance;
                }
            } else {
                line += ink;
            }
            // Trailing spaces hang past the edge instead of wrapping.
            line += trailing;
        }

        lines
    }
}

impl Default for HeuristicMeasurer {
    fn default() -> Self {
        Self {
            char_width_em: 0.55,
            space_width_em: 0.28,
            bold_factor: 1.06,
            line_height_em: 1.21,
        }
    }
}

impl TextMeasurer for HeuristicMeasurer {
    fn natural_size(&self, runs: &[StyledRun], style: &TextStyle) -> Result<Size> {
        let width = self.glyphs(runs, style).map(|g| g.1).sum();
        Ok(Size::new(width, self.line_height(style.size)))
    }

    fn wrapped_size(&self, runs: &[StyledRun], style: &TextStyle, width: f32) -> Result<Size> {
        let lines = self.line_count(runs, style, width);
        Ok(Size::new(width, lines as f32 * self.line_height(style.size)))
    }
}
