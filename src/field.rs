//! Field identifiers for error collection and attribute assignment.
//!
//! This module provides [`FieldName`], the normalized key under which errors
//! are stored. Strings coming from callers are converted once at the API
//! boundary, so `"Name"`, `"name"` and `" name "` all address the same field.

use std::borrow::Borrow;
use std::fmt::{self, Display};

/// The reserved field holding errors that belong to the object as a whole.
pub const BASE: &str = "base";

/// A normalized field identifier.
///
/// Names are trimmed and lower-cased on construction. The reserved name
/// [`BASE`] marks object-level errors.
///
/// # Example
///
/// ```rust
/// use validateable::FieldName;
///
/// let field = FieldName::new(" Email ");
/// assert_eq!(field.as_str(), "email");
/// assert_eq!(field, FieldName::from("EMAIL"));
/// assert!(FieldName::base().is_base());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldName(String);

impl FieldName {
    /// Creates a normalized field name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_lowercase())
    }

    /// Returns the reserved `base` field.
    pub fn base() -> Self {
        Self(BASE.to_string())
    }

    /// Returns true if this is the reserved `base` field.
    pub fn is_base(&self) -> bool {
        self.0 == BASE
    }

    /// Returns the normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FieldName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FieldName {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&String> for FieldName {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl From<&FieldName> for FieldName {
    fn from(name: &FieldName) -> Self {
        name.clone()
    }
}

impl AsRef<str> for FieldName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for FieldName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        assert_eq!(FieldName::new("Name").as_str(), "name");
        assert_eq!(FieldName::new("  email\t").as_str(), "email");
        assert_eq!(FieldName::from("COUNTRY"), FieldName::from(String::from("country")));
    }

    #[test]
    fn test_base() {
        assert!(FieldName::base().is_base());
        assert!(FieldName::new("Base").is_base());
        assert!(!FieldName::new("name").is_base());
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldName::new("Number").to_string(), "number");
    }
}
