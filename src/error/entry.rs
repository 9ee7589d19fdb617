//! Error entries: literal messages or symbolic codes.

use std::fmt::{self, Display};

/// A symbolic error code, translated when the error is added.
///
/// # Example
///
/// ```rust
/// use validateable::ErrorCode;
///
/// assert_eq!(ErrorCode::Blank.as_str(), "blank");
/// assert_eq!(ErrorCode::from("required"), ErrorCode::Required);
/// assert_eq!(ErrorCode::custom("too_short").as_str(), "too_short");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// `blank`, default message "cannot be blank"
    Blank,
    /// `empty`, default message "cannot be empty"
    Empty,
    /// `invalid`, default message "is invalid"
    Invalid,
    /// `required`, default message "is required"
    Required,
    /// Any other code
    Custom(String),
}

impl ErrorCode {
    /// Creates a code from its name, mapping the built-in names to their
    /// variants.
    pub fn custom(code: impl Into<String>) -> Self {
        let code = code.into();
        match code.as_str() {
            "blank" => Self::Blank,
            "empty" => Self::Empty,
            "invalid" => Self::Invalid,
            "required" => Self::Required,
            _ => Self::Custom(code),
        }
    }

    /// Returns the translation key for this code.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Blank => "blank",
            Self::Empty => "empty",
            Self::Invalid => "invalid",
            Self::Required => "required",
            Self::Custom(code) => code,
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        Self::custom(code)
    }
}

/// An error as handed to [`Errors::add`](crate::Errors::add).
///
/// String types convert into [`ErrorEntry::Message`] and are stored as is;
/// [`ErrorCode`] converts into [`ErrorEntry::Code`] and is translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorEntry {
    /// A literal message, stored unchanged.
    Message(String),
    /// A code resolved through the translation catalog.
    Code(ErrorCode),
}

impl From<&str> for ErrorEntry {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

impl From<String> for ErrorEntry {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<ErrorCode> for ErrorEntry {
    fn from(code: ErrorCode) -> Self {
        Self::Code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_maps_builtins() {
        assert_eq!(ErrorCode::custom("blank"), ErrorCode::Blank);
        assert_eq!(ErrorCode::custom("empty"), ErrorCode::Empty);
        assert_eq!(ErrorCode::custom("invalid"), ErrorCode::Invalid);
        assert_eq!(ErrorCode::custom("declined"), ErrorCode::Custom("declined".to_string()));
    }

    #[test]
    fn test_entry_conversions() {
        assert_eq!(
            ErrorEntry::from("cannot be empty"),
            ErrorEntry::Message("cannot be empty".to_string())
        );
        assert_eq!(ErrorEntry::from(ErrorCode::Empty), ErrorEntry::Code(ErrorCode::Empty));
    }
}
