//! Entity identifiers.
//!
//! Identifiers are short caller-supplied strings. They are never checked for
//! uniqueness or resolution; an identifier that names nothing is still a valid
//! [`Id`] and renders verbatim.

use std::{borrow::Borrow, fmt};

/// Identifier of an entity in the architecture model.
///
/// # Examples
///
/// ```
/// use archsynth_core::identifier::Id;
///
/// let api = Id::new("api");
/// assert_eq!(api, "api");
/// assert_eq!(api.to_string(), "api");
///
/// // Empty identifiers are allowed and render as empty tokens.
/// assert!(Id::new("").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(String);

impl Id {
    /// Creates an `Id` from anything convertible into a `String`.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier is the empty string.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Id {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Id {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
