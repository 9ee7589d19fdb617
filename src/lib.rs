//! # Validateable
//!
//! Validation for model objects that collects every error per field and
//! renders localized messages.
//!
//! ## Overview
//!
//! A model embeds a [`ValidationState`] and implements [`Validateable`],
//! overriding the `validate` hook to add errors. Errors are either literal
//! messages or symbolic [`ErrorCode`]s; codes are translated when added, using
//! the [`i18n::Catalog`] with this priority:
//!
//! 1. `<owner scope>.errors.<code>` (e.g. `active_merchant.billing.credit_card.errors.invalid`)
//! 2. `active_merchant.errors.<code>`
//! 3. the built-in default (`blank`, `empty`, `invalid`, `required`)
//! 4. the humanized code
//!
//! ## Core Types
//!
//! - [`Validateable`]: the validation driver implemented by models
//! - [`Errors`]: per-field messages in insertion order
//! - [`Attributes`]: assignment of fields from a name/value mapping
//! - [`MessageResolver`]: turns error codes into display strings
//! - [`generator::TranslationsGenerator`]: installs the bundled locale file
//!
//! ## Example
//!
//! ```rust
//! use serde_json::{json, Value};
//! use validateable::{
//!     coerce, AttributeError, Attributes, Blank, ErrorCode, FieldName, Validateable,
//!     ValidationState,
//! };
//!
//! struct Dood {
//!     name: Option<String>,
//!     email: Option<String>,
//!     state: ValidationState,
//! }
//!
//! impl Default for Dood {
//!     fn default() -> Self {
//!         Self {
//!             name: None,
//!             email: None,
//!             state: ValidationState::named("ActiveMerchant::Billing::Dood"),
//!         }
//!     }
//! }
//!
//! impl Attributes for Dood {
//!     fn assign_attribute(
//!         &mut self,
//!         field: &FieldName,
//!         value: Value,
//!     ) -> Result<(), AttributeError> {
//!         match field.as_str() {
//!             "name" => self.name = coerce(field, value)?,
//!             "email" => self.email = coerce(field, value)?,
//!             _ => return Err(AttributeError::NoSuchField(field.clone())),
//!         }
//!         Ok(())
//!     }
//! }
//!
//! impl Validateable for Dood {
//!     fn validation_state(&self) -> &ValidationState {
//!         &self.state
//!     }
//!
//!     fn validation_state_mut(&mut self) -> &mut ValidationState {
//!         &mut self.state
//!     }
//!
//!     fn validate(&mut self) {
//!         if self.name.is_blank() {
//!             self.errors_mut().add("name", ErrorCode::Empty);
//!         }
//!         if self.email.is_blank() {
//!             self.errors_mut().add("email", "cannot be empty");
//!         }
//!     }
//! }
//!
//! let mut dood = Dood::from_attributes([("name", json!("tobi"))]).unwrap();
//! assert!(!dood.is_valid());
//! assert_eq!(dood.errors().full_messages(), vec!["Email cannot be empty"]);
//! ```

pub mod attributes;
pub mod error;
pub mod field;
pub mod fs;
pub mod generator;
pub mod i18n;
pub mod inflect;
pub mod resolver;
pub mod validateable;

pub use attributes::{coerce, Attributes, Blank};
pub use error::{AttributeError, ErrorCode, ErrorEntry, Errors};
pub use field::FieldName;
pub use resolver::{MessageResolver, OwnerScope, ResolverConfig};
pub use validateable::{Validateable, ValidationState};

/// Type alias for the outcome of [`Validateable::into_validation`].
pub type ValidationResult<T> = stillwater::Validation<T, Errors>;
