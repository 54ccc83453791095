//! # Archsynth Parser
//!
//! Reader for archsynth system descriptions. This crate turns a JSON mapping
//! describing a software system into the typed
//! [`EntityModel`](archsynth_core::model::EntityModel), filling in every
//! absent field with its default in a single pass.
//!
//! ## Usage
//!
//! ```
//! # use archsynth_parser::{parse, ParseError, ReaderConfig};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"{
//!         "system_name": "Shop",
//!         "users": [{"id": "buyer", "name": "Buyer"}],
//!         "component_dependencies": [{"id": "pg", "type": "PostgreSQL Database"}]
//!     }"#;
//!
//!     let model = parse(source, ReaderConfig::default())?;
//!     assert_eq!(model.system().name(), "Shop");
//!     assert!(model.dependencies()[0].kind().is_database());
//!     Ok(())
//! }
//! ```

mod classify;
pub mod error;
mod fields;
mod input;
mod reader;
mod span;
mod validate;

pub use classify::classify;
pub use error::{Diagnostic, ErrorCode, ParseError};
pub use input::Source;
pub use reader::{DEFAULT_MAX_DEPLOYMENT_DEPTH, MAX_SUPPORTED_DEPLOYMENT_DEPTH, ReaderConfig};
pub use span::Span;
pub use validate::check_references;

use archsynth_core::model::EntityModel;
use serde_json::Value;

/// Parse source text into an entity model.
///
/// The pipeline has two steps:
///
/// 1. **Decode** - Parse the text as JSON (`E001` on syntax errors)
/// 2. **Read** - Normalize the mapping into an [`EntityModel`]
///
/// # Arguments
///
/// * `source` - JSON text of a system description
/// * `config` - Reader settings (deployment depth limit)
///
/// # Errors
///
/// Returns a [`ParseError`] carrying every malformed section found.
pub fn parse(source: &str, config: ReaderConfig) -> Result<EntityModel, ParseError> {
    let value = input::decode(source)?;
    reader::read_model(&value, &config)
}

/// Read an already decoded JSON value into an entity model.
///
/// Use this when the description comes from somewhere other than text.
///
/// ```
/// # use archsynth_parser::{read, ReaderConfig};
/// use serde_json::json;
///
/// let model = read(&json!({"main_container_name": "Gateway"}), ReaderConfig::default()).unwrap();
/// assert_eq!(model.main_container(), "Gateway");
/// ```
pub fn read(value: &Value, config: ReaderConfig) -> Result<EntityModel, ParseError> {
    reader::read_model(value, &config)
}

/// Parse source text that may be a bare resource name instead of JSON.
///
/// Text that is not JSON and does not start like a JSON document is returned
/// as [`Source::Resource`] (trimmed). Blank text is an `E005` error.
///
/// ```
/// # use archsynth_parser::{parse_source, ReaderConfig, Source};
/// let source = parse_source("Order", ReaderConfig::default()).unwrap();
/// assert_eq!(source, Source::Resource("Order".to_string()));
/// ```
pub fn parse_source(source: &str, config: ReaderConfig) -> Result<Source, ParseError> {
    input::classify_source(source, config)
}
