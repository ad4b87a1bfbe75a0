//! A host that records primitives instead of drawing them.
//!
//! The recorded commands serialize to JSON, so a thin script on the canvas
//! side can replay a run without linking this crate.

use super::host::{DocumentHost, FontName, ResolvedText};
use super::json::{serialize, JsonFormat};
use crate::error::{Error, Result};
use crate::layout::{HeuristicMeasurer, Size, TextMeasurer, TextStyle};
use crate::model::{Divider, Page, StyledRun};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One recorded host primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum HostCommand {
    LoadFont {
        font: FontName,
    },
    CreatePage {
        page: u32,
        name: String,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    CreateText {
        page: u32,
        text: ResolvedText,
    },
    CreateLine {
        page: u32,
        divider: Divider,
    },
    Focus {
        pages: Vec<u32>,
    },
}

/// Records every call as a [`HostCommand`] and measures with `M`.
///
/// Text using a font that was never loaded is rejected, the way a real
/// canvas refuses to set characters in an unloaded face.
#[derive(Debug, Clone, Default)]
pub struct ScriptHost<M = HeuristicMeasurer> {
    measurer: M,
    loaded: HashSet<FontName>,
    commands: Vec<HostCommand>,
}

impl ScriptHost {
    /// Create a recording host with the heuristic measurer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: TextMeasurer> ScriptHost<M> {
    /// Create a recording host with a custom measurer.
    pub fn with_measurer(measurer: M) -> Self {
        Self {
            measurer,
            loaded: HashSet::new(),
            commands: Vec::new(),
        }
    }

    /// Commands recorded so far.
    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    /// Take the recorded commands.
    pub fn into_commands(self) -> Vec<HostCommand> {
        self.commands
    }

    /// Whether `font` has been loaded.
    pub fn is_loaded(&self, font: &FontName) -> bool {
        self.loaded.contains(font)
    }

    /// Serialize the recorded commands.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        serialize(&self.commands, format)
    }
}

impl<M: TextMeasurer> TextMeasurer for ScriptHost<M> {
    fn natural_size(&self, runs: &[StyledRun], style: &TextStyle) -> Result<Size> {
        self.measurer.natural_size(runs, style)
    }

    fn wrapped_size(&self, runs: &[StyledRun], style: &TextStyle, width: f32) -> Result<Size> {
        self.measurer.wrapped_size(runs, style, width)
    }
}

impl<M: TextMeasurer> DocumentHost for ScriptHost<M> {
    type PageHandle = u32;

    fn load_font(&mut self, font: &FontName) -> Result<()> {
        if font.family.trim().is_empty() {
            return Err(Error::Host("font family is empty".to_string()));
        }
        if self.loaded.insert(font.clone()) {
            self.commands.push(HostCommand::LoadFont { font: font.clone() });
        }
        Ok(())
    }

    fn create_page(&mut self, page: &Page) -> Result<u32> {
        self.commands.push(HostCommand::CreatePage {
            page: page.number,
            name: page.name.clone(),
            x: page.x,
            y: page.y,
            width: page.width,
            height: page.height,
        });
        Ok(page.number)
    }

    fn create_text(&mut self, page: &mut u32, text: &ResolvedText) -> Result<()> {
        if let Some(run) = text.runs.iter().find(|run| !self.loaded.contains(&run.font)) {
            return Err(Error::Host(format!("font {} is not loaded", run.font)));
        }
        self.commands.push(HostCommand::CreateText {
            page: *page,
            text: text.clone(),
        });
        Ok(())
    }

    fn create_line(&mut self, page: &mut u32, divider: &Divider) -> Result<()> {
        self.commands.push(HostCommand::CreateLine {
            page: *page,
            divider: *divider,
        });
        Ok(())
    }

    fn focus(&mut self, pages: &[u32]) -> Result<()> {
        self.commands.push(HostCommand::Focus {
            pages: pages.to_vec(),
        });
        Ok(())
    }
}
