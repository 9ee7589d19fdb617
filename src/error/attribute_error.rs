//! Attribute assignment errors.

use crate::field::FieldName;

/// Errors raised while assigning attributes.
///
/// These are programming errors: they are returned immediately instead of
/// being collected like validation errors.
#[derive(Debug, thiserror::Error)]
pub enum AttributeError {
    /// The object has no setter for the field.
    #[error("no such field '{0}'")]
    NoSuchField(FieldName),

    /// The value could not be converted into the field's type.
    #[error("invalid value for field '{field}': {source}")]
    InvalidValue {
        /// The field being assigned.
        field: FieldName,
        /// The conversion failure.
        source: serde_json::Error,
    },

    /// The attributes were neither a mapping nor null.
    #[error("attributes must be a mapping of field names to values, got {0}")]
    NotAMapping(String),
}

impl AttributeError {
    /// Returns the field involved, if any.
    pub fn field(&self) -> Option<&FieldName> {
        match self {
            Self::NoSuchField(field) | Self::InvalidValue { field, .. } => Some(field),
            Self::NotAMapping(_) => None,
        }
    }
}
