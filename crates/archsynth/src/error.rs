//! Error types for archsynth operations.
//!
//! This module provides the main error type [`ArchsynthError`] which wraps
//! the error conditions that can occur while reading descriptions and
//! producing artifacts.

use std::io;

use thiserror::Error;

use archsynth_parser::error::ParseError;

/// The main error type for archsynth operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant contains structured diagnostics together with the
/// source text they point into, so they can be rendered with context.
#[derive(Debug, Error)]
pub enum ArchsynthError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    Input(String),
}

impl ArchsynthError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
