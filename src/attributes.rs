//! Attribute mass-assignment.
//!
//! This module provides the [`Attributes`] trait, which applies a mapping of
//! field names to values through per-field setters, and the [`Blank`] helper
//! trait used by validation hooks to detect missing values.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::AttributeError;
use crate::field::FieldName;

/// Objects whose fields can be assigned by name.
///
/// Implementors provide [`assign_attribute`](Attributes::assign_attribute),
/// usually a `match` over the field name that calls [`coerce`] for the
/// value; the remaining methods are provided.
///
/// # Example
///
/// ```rust
/// use serde_json::{json, Value};
/// use validateable::{coerce, AttributeError, Attributes, FieldName};
///
/// #[derive(Default)]
/// struct Customer {
///     name: Option<String>,
/// }
///
/// impl Attributes for Customer {
///     fn assign_attribute(
///         &mut self,
///         field: &FieldName,
///         value: Value,
///     ) -> Result<(), AttributeError> {
///         match field.as_str() {
///             "name" => self.name = coerce(field, value)?,
///             _ => return Err(AttributeError::NoSuchField(field.clone())),
///         }
///         Ok(())
///     }
/// }
///
/// let customer = Customer::from_attributes([("name", json!("tobi"))]).unwrap();
/// assert_eq!(customer.name.as_deref(), Some("tobi"));
///
/// assert!(Customer::from_attributes([("age", json!(3))]).is_err());
/// ```
pub trait Attributes {
    /// Assigns one field.
    ///
    /// Returns [`AttributeError::NoSuchField`] if the object has no such
    /// field.
    fn assign_attribute(&mut self, field: &FieldName, value: Value) -> Result<(), AttributeError>;

    /// Assigns every entry of `attributes`, stopping at the first error.
    fn assign_attributes<I, K>(&mut self, attributes: I) -> Result<(), AttributeError>
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<FieldName>,
    {
        for (field, value) in attributes {
            let field = field.into();
            self.assign_attribute(&field, value)?;
        }
        Ok(())
    }

    /// Assigns the entries of a JSON object. `null` assigns nothing.
    fn assign_attributes_from_value(&mut self, attributes: Value) -> Result<(), AttributeError> {
        match attributes {
            Value::Null => Ok(()),
            Value::Object(map) => self.assign_attributes(map),
            other => Err(AttributeError::NotAMapping(value_kind(&other).to_string())),
        }
    }

    /// Creates a default object and assigns `attributes` to it.
    fn from_attributes<I, K>(attributes: I) -> Result<Self, AttributeError>
    where
        Self: Default + Sized,
        I: IntoIterator<Item = (K, Value)>,
        K: Into<FieldName>,
    {
        let mut object = Self::default();
        object.assign_attributes(attributes)?;
        Ok(object)
    }

    /// Creates a default object and assigns an optional attribute map.
    fn from_attribute_map(attributes: Option<Map<String, Value>>) -> Result<Self, AttributeError>
    where
        Self: Default + Sized,
    {
        Self::from_attributes(attributes.into_iter().flatten())
    }
}

/// Converts an attribute value into the field's type.
pub fn coerce<T: DeserializeOwned>(field: &FieldName, value: Value) -> Result<T, AttributeError> {
    serde_json::from_value(value).map_err(|source| AttributeError::InvalidValue {
        field: field.clone(),
        source,
    })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Values that can be blank: empty, whitespace only, or absent.
pub trait Blank {
    /// Returns true if the value is blank.
    fn is_blank(&self) -> bool;

    /// Returns true if the value is not blank.
    fn is_present(&self) -> bool {
        !self.is_blank()
    }
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.as_str().is_blank()
    }
}

impl<T: Blank + ?Sized> Blank for &T {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: Blank> Blank for Option<T> {
    fn is_blank(&self) -> bool {
        self.as_ref().map_or(true, Blank::is_blank)
    }
}

impl<T> Blank for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for Value {
    fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(_) => false,
            Value::String(s) => s.is_blank(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
        }
    }
}
