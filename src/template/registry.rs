//! Template registry backed by a declarative TOML table.
//!
//! The built-in table is embedded from `templates/builtin.toml`. Additional
//! tables can be layered on top with [`TemplateRegistry::merge`]; a template
//! whose id is already registered replaces the existing one in place.
//!
//! # Example
//!
//! ```
//! use md2page::template::TemplateRegistry;
//!
//! let registry = TemplateRegistry::builtin()?;
//! assert_eq!(registry.resolve("modern").name, "Modern");
//! // Unknown names fall back to the first template.
//! assert_eq!(registry.resolve("fancy").id, "classic");
//! # Ok::<(), md2page::Error>(())
//! ```

use super::Template;
use crate::error::{Error, Result};
use crate::layout::PageGeometry;
use serde::Deserialize;
use std::path::Path;

const BUILTIN_TOML: &str = include_str!("../../templates/builtin.toml");

#[derive(Debug, Deserialize)]
struct TemplateTable {
    #[serde(default, rename = "template")]
    templates: Vec<Template>,
}

/// An ordered set of validated templates. The first one is the default.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    templates: Vec<Template>,
}

impl TemplateRegistry {
    /// Load the built-in templates.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_TOML)
    }

    /// Parse and validate a TOML table of `[[template]]` entries.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let table: TemplateTable = toml::from_str(source)?;
        Self::from_templates(table.templates)
    }

    /// Read, parse and validate a TOML template file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let source = std::fs::read_to_string(path.as_ref())?;
        log::debug!("Loading templates from {}", path.as_ref().display());
        Self::from_toml_str(&source)
    }

    /// Build a registry from templates, validating each one.
    ///
    /// Fails if the list is empty, if any template is invalid for a US Letter
    /// page, or if two templates share an id.
    pub fn from_templates(templates: Vec<Template>) -> Result<Self> {
        if templates.is_empty() {
            return Err(Error::NoTemplates);
        }

        let geometry = PageGeometry::letter();
        for (i, template) in templates.iter().enumerate() {
            template.validate(&geometry)?;
            let duplicate = templates[..i]
                .iter()
                .any(|t| t.id.eq_ignore_ascii_case(&template.id));
            if duplicate {
                return Err(Error::InvalidTemplate(format!(
                    "duplicate template id: {}",
                    template.id
                )));
            }
        }

        Ok(Self { templates })
    }

    /// Layer another registry on top of this one.
    pub fn merge(&mut self, other: TemplateRegistry) {
        for template in other.templates {
            match self
                .templates
                .iter_mut()
                .find(|t| t.id.eq_ignore_ascii_case(&template.id))
            {
                Some(existing) => {
                    log::debug!("Template {} overridden", template.id);
                    *existing = template;
                }
                None => self.templates.push(template),
            }
        }
    }

    /// Get a template by id or display name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Template> {
        let name = name.trim();
        self.templates
            .iter()
            .find(|t| t.id.eq_ignore_ascii_case(name))
            .or_else(|| {
                self.templates
                    .iter()
                    .find(|t| t.name.eq_ignore_ascii_case(name))
            })
    }

    /// Get a template by name, falling back to the default template when the
    /// name is unknown. This never fails.
    pub fn resolve(&self, name: &str) -> &Template {
        match self.get(name) {
            Some(template) => template,
            None => {
                let fallback = self.default_template();
                log::debug!(
                    "Unknown template {:?}, using default {}",
                    name,
                    fallback.id
                );
                fallback
            }
        }
    }

    /// The default (first) template.
    pub fn default_template(&self) -> &Template {
        // from_templates rejects empty lists
        &self.templates[0]
    }

    /// Check if a template name is known.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over the templates in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Template> {
        self.templates.iter()
    }

    /// Ids of all templates, in order.
    pub fn ids(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.id.as_str()).collect()
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Always false; a registry holds at least one template.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
