//! # md2page
//!
//! Markdown to paginated page layout.
//!
//! This library turns a small Markdown dialect (headings, bullet lists,
//! dividers, bold, italic and links) into absolutely positioned text and
//! divider elements on a row of US-Letter pages, styled by a named template.
//!
//! Layout happens in memory first. The resulting [`Document`] can be
//! serialized, inspected, or materialized on any canvas that implements
//! [`DocumentHost`].
//!
//! ## Quick Start
//!
//! ```
//! use md2page::layout;
//!
//! fn main() -> md2page::Result<()> {
//!     let doc = layout("# Jane Doe\n\n- **Rust** engineer\n", "classic")?;
//!     assert_eq!(doc.page_count(), 1);
//!     assert_eq!(doc.metadata.title.as_deref(), Some("Jane Doe"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Line classification**: headings, lists, nested lists, dividers
//! - **Inline formatting**: `**bold**`, `*italic*`, `[links](url)`
//! - **Templates**: built-in presets plus user TOML files
//! - **Pagination**: elements never straddle a page boundary
//! - **Host abstraction**: measure and draw through a pluggable canvas
//! - **Parallel classification**: uses Rayon for large inputs

pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;
pub mod template;

// Re-export commonly used types
pub use error::{Error, Result};
pub use layout::{
    layout_lines, HeuristicMeasurer, LayoutEngine, LayoutStats, PageGeometry, Size, TextMeasurer,
    TextStyle,
};
pub use model::{
    ClassifiedLine, Color, Divider, Document, DocumentMetadata, Element, LineKind, Page,
    StyledRun, TextElement,
};
pub use parser::{classify_line, classify_lines, format_inline, ParseOptions};
pub use render::{
    load_fonts, materialize, DocumentHost, FontName, FontStyle, HostCommand, JsonFormat,
    ResolvedRun, ResolvedText, ScriptHost,
};
pub use template::{Template, TemplateRegistry};

use std::borrow::Cow;

/// Lay out Markdown with a built-in template and the heuristic measurer.
///
/// An unknown template name falls back to the first built-in template.
///
/// # Example
///
/// ```
/// use md2page::layout;
///
/// let doc = layout("## Skills\n---\nRust", "modern").unwrap();
/// assert_eq!(doc.template.id, "modern");
/// ```
pub fn layout(markdown: &str, template_name: &str) -> Result<Document> {
    Md2Page::new()
        .with_template(template_name)
        .layout(markdown)
        .map(LayoutResult::into_document)
}

/// Lay out Markdown against a given registry, measurer and parse options.
///
/// Fails only if the measurer does.
pub fn layout_with<M>(
    markdown: &str,
    template_name: &str,
    registry: &TemplateRegistry,
    measurer: &M,
    options: &ParseOptions,
) -> Result<Document>
where
    M: TextMeasurer + ?Sized,
{
    let template = registry.resolve(template_name);
    let lines = classify_lines(markdown, options);
    let (document, _) = layout_lines(&lines, template, measurer, PageGeometry::letter())?;
    Ok(document)
}

/// Run a full conversion on a host.
///
/// Fonts are loaded first; a font failure aborts before any page exists.
/// The host then measures every element during layout, and the finished
/// document is materialized and focused.
///
/// # Example
///
/// ```
/// use md2page::{convert, ScriptHost};
///
/// let mut host = ScriptHost::new();
/// let doc = convert("# Title\nBody", "classic", &mut host).unwrap();
/// assert_eq!(doc.page_count(), 1);
/// assert!(!host.commands().is_empty());
/// ```
pub fn convert<H: DocumentHost>(
    markdown: &str,
    template_name: &str,
    host: &mut H,
) -> Result<Document> {
    Md2Page::new()
        .with_template(template_name)
        .convert(markdown, host)
        .map(LayoutResult::into_document)
}

/// Builder for laying out and converting Markdown documents.
///
/// # Example
///
/// ```
/// use md2page::{Md2Page, JsonFormat};
///
/// let json = Md2Page::new()
///     .with_template("compact")
///     .sequential()
///     .layout("# Name\n- item")?
///     .to_json(JsonFormat::Compact)?;
/// assert!(json.contains("\"compact\""));
/// # Ok::<(), md2page::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Md2Page {
    template: Option<String>,
    registry: Option<TemplateRegistry>,
    parse_options: ParseOptions,
    geometry: PageGeometry,
}

impl Md2Page {
    /// Create a new builder with the built-in templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a template by id or display name.
    pub fn with_template(mut self, name: impl Into<String>) -> Self {
        self.template = Some(name.into());
        self
    }

    /// Use a custom template registry.
    pub fn with_registry(mut self, registry: TemplateRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Set parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Set page geometry.
    ///
    /// The template is checked against it when laying out, so a margin that
    /// leaves no room on this page fails with [`Error::InvalidTemplate`].
    pub fn with_geometry(mut self, geometry: PageGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Disable parallel classification.
    pub fn sequential(mut self) -> Self {
        self.parse_options = self.parse_options.sequential();
        self
    }

    /// Lay out with the heuristic measurer.
    pub fn layout(&self, markdown: &str) -> Result<LayoutResult> {
        self.layout_measured(markdown, &HeuristicMeasurer::new())
    }

    /// Lay out with a custom measurer.
    pub fn layout_measured<M>(&self, markdown: &str, measurer: &M) -> Result<LayoutResult>
    where
        M: TextMeasurer + ?Sized,
    {
        let registry = self.registry()?;
        let template = self.resolve_template(&registry);
        template.validate(&self.geometry)?;

        let lines = classify_lines(markdown, &self.parse_options);
        let (document, stats) = layout_lines(&lines, template, measurer, self.geometry)?;
        log::debug!(
            "Laid out {} line(s) on {} page(s) with template {:?}",
            stats.line_count,
            stats.page_count,
            template.id
        );
        Ok(LayoutResult { document, stats })
    }

    /// Load fonts, lay out with the host as measurer, then materialize.
    ///
    /// Nothing reaches the host if the template does not fit the geometry.
    pub fn convert<H: DocumentHost>(&self, markdown: &str, host: &mut H) -> Result<LayoutResult> {
        let registry = self.registry()?;
        let template = self.resolve_template(&registry);
        template.validate(&self.geometry)?;
        load_fonts(host, &template.font)?;

        let result = self.layout_measured(markdown, &*host)?;
        materialize(&result.document, host)?;
        Ok(result)
    }

    fn registry(&self) -> Result<Cow<'_, TemplateRegistry>> {
        match &self.registry {
            Some(registry) => Ok(Cow::Borrowed(registry)),
            None => TemplateRegistry::builtin().map(Cow::Owned),
        }
    }

    fn resolve_template<'r>(&self, registry: &'r TemplateRegistry) -> &'r Template {
        match &self.template {
            Some(name) => registry.resolve(name),
            None => registry.default_template(),
        }
    }
}

/// A laid-out document together with its statistics.
#[derive(Debug, Clone)]
pub struct LayoutResult {
    document: Document,
    stats: LayoutStats,
}

impl LayoutResult {
    /// The laid-out document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Take the document.
    pub fn into_document(self) -> Document {
        self.document
    }

    /// Layout statistics.
    pub fn stats(&self) -> &LayoutStats {
        &self.stats
    }

    /// Serialize the document.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Load the template fonts on `host` and materialize the document there.
    pub fn materialize<H: DocumentHost>(&self, host: &mut H) -> Result<Vec<H::PageHandle>> {
        load_fonts(host, &self.document.template.font)?;
        render::materialize(&self.document, host)
    }
}
