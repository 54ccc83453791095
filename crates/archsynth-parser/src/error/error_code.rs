//! Error codes for the archsynth diagnostic system.
//!
//! Codes are organized by phase:
//! - `E0xx` - Input errors; the description cannot be read
//! - `W1xx` - Reference warnings; the model renders as written

use std::fmt;

/// Codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Input Errors (E0xx)
    // =========================================================================
    /// Malformed JSON.
    ///
    /// The input looks like a JSON document but does not parse.
    E001,

    /// Top level is not a mapping.
    ///
    /// A system description must be a JSON object.
    E002,

    /// Field of the wrong shape.
    ///
    /// A collection is not a list, a list entry is not a mapping, or a text
    /// field holds a list or mapping.
    E003,

    /// Deployment nesting too deep.
    ///
    /// Deployment nodes are nested deeper than the configured maximum.
    E004,

    /// Empty resource name.
    ///
    /// The input is neither a mapping nor a usable resource name.
    E005,

    // =========================================================================
    // Reference Warnings (W1xx)
    // =========================================================================
    /// Unknown identifier.
    ///
    /// A relationship endpoint names no declared entity. It is still rendered.
    W100,

    /// Duplicate identifier.
    ///
    /// Two entities of the same collection share an identifier.
    W101,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            ErrorCode::E005 => "E005",
            ErrorCode::W100 => "W100",
            ErrorCode::W101 => "W101",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "malformed JSON",
            ErrorCode::E002 => "description is not a mapping",
            ErrorCode::E003 => "field has the wrong shape",
            ErrorCode::E004 => "deployment nesting too deep",
            ErrorCode::E005 => "empty resource name",
            ErrorCode::W100 => "unknown identifier",
            ErrorCode::W101 => "duplicate identifier",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::W100.to_string(), "W100");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E004.description(), "deployment nesting too deep");
        assert_eq!(ErrorCode::W101.description(), "duplicate identifier");
    }
}
