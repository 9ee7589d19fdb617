//! The validation driver.
//!
//! This module provides the [`Validateable`] trait implemented by model
//! objects, and [`ValidationState`], the lazily created error collection that
//! those objects embed.

use std::sync::{Arc, OnceLock};

use stillwater::Validation;

use crate::error::Errors;
use crate::i18n::Locale;
use crate::resolver::{MessageResolver, OwnerScope};

/// Error-collection state embedded in a validatable object.
///
/// The [`Errors`] collection is created on first access with the owner
/// scope, resolver and locale configured here.
///
/// # Example
///
/// ```rust
/// use validateable::ValidationState;
///
/// let state = ValidationState::named("ActiveMerchant::Billing::CreditCard")
///     .with_locale("pt");
///
/// assert!(state.errors().is_empty());
/// assert_eq!(state.owner().scope(), "active_merchant.billing.credit_card");
/// ```
#[derive(Debug, Clone)]
pub struct ValidationState {
    owner: OwnerScope,
    resolver: Option<Arc<MessageResolver>>,
    locale: Option<Locale>,
    errors: Option<Errors>,
    // Created through a shared borrow; moved into `errors` on first mutable use.
    lazy_errors: OnceLock<Errors>,
}

impl ValidationState {
    /// Creates state whose translation scope is derived from a type path.
    pub fn named(type_path: impl Into<String>) -> Self {
        Self::with_owner(OwnerScope::new(type_path))
    }

    /// Creates state whose translation scope is derived from `T`'s type name.
    pub fn for_type<T: ?Sized>() -> Self {
        Self::with_owner(OwnerScope::of::<T>())
    }

    /// Creates state for an explicit owner scope.
    pub fn with_owner(owner: OwnerScope) -> Self {
        Self {
            owner,
            resolver: None,
            locale: None,
            errors: None,
            lazy_errors: OnceLock::new(),
        }
    }

    /// Resolves codes with `resolver` instead of [`MessageResolver::global`].
    pub fn with_resolver(mut self, resolver: Arc<MessageResolver>) -> Self {
        self.resolver = Some(resolver);
        self.reset_errors();
        self
    }

    /// Resolves codes in `locale` instead of the process default.
    pub fn with_locale(mut self, locale: impl Into<Locale>) -> Self {
        self.locale = Some(locale.into());
        self.reset_errors();
        self
    }

    /// Returns the owner scope.
    pub fn owner(&self) -> &OwnerScope {
        &self.owner
    }

    /// Returns the error collection, creating it if needed.
    pub fn errors(&self) -> &Errors {
        match &self.errors {
            Some(errors) => errors,
            None => self.lazy_errors.get_or_init(|| self.new_errors()),
        }
    }

    /// Returns the error collection mutably, creating it if needed.
    pub fn errors_mut(&mut self) -> &mut Errors {
        let errors = match self.errors.take() {
            Some(errors) => errors,
            None => self
                .lazy_errors
                .take()
                .unwrap_or_else(|| self.new_errors()),
        };
        self.errors.insert(errors)
    }

    /// Returns true if the error collection has been created.
    pub fn is_initialized(&self) -> bool {
        self.errors.is_some() || self.lazy_errors.get().is_some()
    }

    fn reset_errors(&mut self) {
        self.errors = None;
        self.lazy_errors = OnceLock::new();
    }

    fn new_errors(&self) -> Errors {
        let resolver = self
            .resolver
            .clone()
            .unwrap_or_else(MessageResolver::global);
        let mut errors = Errors::new(self.owner.clone(), resolver);
        if let Some(locale) = &self.locale {
            errors.use_locale(locale.clone());
        }
        errors
    }
}

/// Objects that validate themselves into an [`Errors`] collection.
///
/// Implementors expose their embedded [`ValidationState`] and override the
/// [`before_validate`](Validateable::before_validate) and
/// [`validate`](Validateable::validate) hooks as needed; both default to
/// doing nothing.
///
/// # Example
///
/// ```rust
/// use validateable::{Blank, ErrorCode, Validateable, ValidationState};
///
/// struct Dood {
///     name: Option<String>,
///     state: ValidationState,
/// }
///
/// impl Validateable for Dood {
///     fn validation_state(&self) -> &ValidationState {
///         &self.state
///     }
///
///     fn validation_state_mut(&mut self) -> &mut ValidationState {
///         &mut self.state
///     }
///
///     fn validate(&mut self) {
///         if self.name.is_blank() {
///             self.errors_mut().add("name", ErrorCode::Empty);
///         }
///     }
/// }
///
/// let mut dood = Dood {
///     name: None,
///     state: ValidationState::named("ActiveMerchant::Billing::Dood"),
/// };
/// assert!(!dood.is_valid());
/// assert_eq!(dood.errors().on("name"), Some("cannot be empty"));
///
/// dood.name = Some("tobi".to_string());
/// assert!(dood.is_valid());
/// ```
pub trait Validateable {
    /// Returns the embedded validation state.
    fn validation_state(&self) -> &ValidationState;

    /// Returns the embedded validation state mutably.
    fn validation_state_mut(&mut self) -> &mut ValidationState;

    /// Runs before [`validate`](Validateable::validate) on every pass.
    fn before_validate(&mut self) {}

    /// Adds errors for every invalid field.
    fn validate(&mut self) {}

    /// Returns the errors from the last validation pass, plus any added since.
    fn errors(&self) -> &Errors {
        self.validation_state().errors()
    }

    /// Returns the error collection mutably.
    fn errors_mut(&mut self) -> &mut Errors {
        self.validation_state_mut().errors_mut()
    }

    /// Clears errors, runs the hooks and returns true iff no errors were
    /// added.
    fn is_valid(&mut self) -> bool {
        self.errors_mut().clear();
        self.before_validate();
        self.validate();

        let errors = self.errors();
        tracing::debug!(
            "validated {}: {} field(s) with errors",
            errors.owner().type_path(),
            errors.count()
        );
        errors.is_empty()
    }

    /// Validates and returns the object on success or its errors on failure.
    fn into_validation(mut self) -> Validation<Self, Errors>
    where
        Self: Sized,
    {
        if self.is_valid() {
            Validation::Success(self)
        } else {
            Validation::Failure(self.errors().clone())
        }
    }
}
