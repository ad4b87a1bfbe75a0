//! Classified source lines.

use serde::{Deserialize, Serialize};

/// The kind of a single Markdown source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LineKind {
    /// `# ` heading
    H1,
    /// `## ` heading
    H2,
    /// `### ` heading
    H3,
    /// `#### ` heading
    H4,
    /// Top-level `- ` or `* ` list item
    List,
    /// Indented `- ` list item
    NestedList,
    /// Horizontal rule (`---`, `***`, `___`)
    Divider,
    /// Blank or whitespace-only line
    Empty,
    /// Anything else
    Body,
}

impl LineKind {
    /// Heading level (1-4) or None.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            LineKind::H1 => Some(1),
            LineKind::H2 => Some(2),
            LineKind::H3 => Some(3),
            LineKind::H4 => Some(4),
            _ => None,
        }
    }

    /// Check if this is a heading kind.
    pub fn is_heading(self) -> bool {
        self.heading_level().is_some()
    }

    /// Check if this is a list item (nested or not).
    pub fn is_list_item(self) -> bool {
        matches!(self, LineKind::List | LineKind::NestedList)
    }

    /// Check if lines of this kind become text elements.
    pub fn is_text(self) -> bool {
        !matches!(self, LineKind::Divider | LineKind::Empty)
    }

    /// Short lowercase name, as used in CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            LineKind::H1 => "h1",
            LineKind::H2 => "h2",
            LineKind::H3 => "h3",
            LineKind::H4 => "h4",
            LineKind::List => "list",
            LineKind::NestedList => "nested-list",
            LineKind::Divider => "divider",
            LineKind::Empty => "empty",
            LineKind::Body => "body",
        }
    }
}

impl std::fmt::Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A source line after classification, with its marker syntax stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    /// Line kind
    pub kind: LineKind,

    /// Content without marker syntax
    pub content: String,
}

impl ClassifiedLine {
    /// Create a classified line.
    pub fn new(kind: LineKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
        }
    }

    /// Create a line of a kind that carries no content.
    pub fn bare(kind: LineKind) -> Self {
        Self::new(kind, String::new())
    }
}
