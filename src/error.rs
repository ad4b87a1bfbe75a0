//! Error types for the md2page library.

use std::io;
use thiserror::Error;

/// Result type alias for md2page operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while laying out or materializing a document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The host could not load a font style. Fatal to the run.
    #[error("Failed to load font \"{family}\" ({style}): {reason}")]
    FontLoad {
        /// Font family name
        family: String,
        /// Font style name (e.g. "Bold Italic")
        style: String,
        /// Host-supplied reason
        reason: String,
    },

    /// A template file is not valid TOML or does not match the schema.
    #[error("Template parse error: {0}")]
    TemplateParse(#[from] toml::de::Error),

    /// A template failed validation.
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    /// A registry was built with no templates in it.
    #[error("Template registry is empty")]
    NoTemplates,

    /// A host primitive call failed during materialization.
    #[error("Host error: {0}")]
    Host(String),

    /// Error during rendering (JSON, scripts).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::NoTemplates;
        assert_eq!(err.to_string(), "Template registry is empty");

        let err = Error::FontLoad {
            family: "Inter".to_string(),
            style: "Bold".to_string(),
            reason: "not installed".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to load font \"Inter\" (Bold): not installed"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("= nope").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::TemplateParse(_)));
    }
}
