//! Markdown parsing: line classification and inline formatting.

mod classify;
mod inline;
mod options;

pub use classify::{classify_line, classify_lines, LineClassifier};
pub use inline::{format_inline, InlineScanner};
pub use options::ParseOptions;
