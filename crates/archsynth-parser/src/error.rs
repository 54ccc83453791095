//! Error and diagnostic system for the archsynth reader.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled source spans for syntax errors
//! - JSON pointers locating structural problems in the input mapping
//! - Severity levels
//! - Diagnostic collector for accumulating multiple errors and warnings
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, source labels,
//! JSON pointer and help text. Multiple error diagnostics are wrapped in
//! [`ParseError`] for returning from the reader.
//!
//! # Example
//!
//! ```
//! # use archsynth_parser::error::{Diagnostic, ErrorCode};
//!
//! let diag = Diagnostic::error("`containers` must be a list")
//!     .with_code(ErrorCode::E003)
//!     .with_pointer("/containers")
//!     .with_help("wrap the container in `[...]`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;
pub(crate) use parse_error::Result;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::{Label, LabelStyle};
pub use parse_error::ParseError;
pub use severity::Severity;
