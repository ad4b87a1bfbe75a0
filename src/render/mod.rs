//! Rendering a laid-out document: JSON output and materialization through a
//! host canvas.

mod host;
mod json;
mod script;

pub use host::{
    load_fonts, materialize, DocumentHost, FontName, FontStyle, ResolvedRun, ResolvedText,
};
pub use json::{to_json, JsonFormat};
pub use script::{HostCommand, ScriptHost};
