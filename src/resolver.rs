//! Error message resolution.
//!
//! This module turns an [`ErrorEntry`] into the display string stored by
//! [`Errors`](crate::Errors). Literal messages pass through untouched; error
//! codes are looked up in the [`Catalog`] with a fixed priority order:
//!
//! 1. `<owner scope>.errors.<code>`, e.g. `active_merchant.billing.credit_card.errors.invalid`
//! 2. `<library>.errors.<code>`, e.g. `active_merchant.errors.invalid`
//! 3. the built-in default message for the code
//! 4. the humanized, lower-cased code itself

use indexmap::IndexMap;
use std::sync::{Arc, OnceLock};

use crate::error::{ErrorCode, ErrorEntry};
use crate::field::FieldName;
use crate::i18n::{Catalog, Locale};
use crate::inflect::{underscore, DefaultHumanizer, Humanizer};

/// Library scope used for namespace-wide translations.
pub const DEFAULT_LIBRARY_SCOPE: &str = "active_merchant";

/// Messages used when no translation exists for a built-in code.
pub const DEFAULT_ERROR_MESSAGES: [(&str, &str); 4] = [
    ("blank", "cannot be blank"),
    ("empty", "cannot be empty"),
    ("invalid", "is invalid"),
    ("required", "is required"),
];

/// The translation scope of an object's type.
///
/// Derived from a fully-qualified type path by splitting on `::` (or `.`),
/// dropping generic arguments and converting each segment to `snake_case`.
///
/// # Example
///
/// ```rust
/// use validateable::OwnerScope;
///
/// let scope = OwnerScope::new("ActiveMerchant::Billing::CreditCard");
/// assert_eq!(scope.scope(), "active_merchant.billing.credit_card");
/// assert_eq!(scope.errors_scope(), "active_merchant.billing.credit_card.errors");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerScope {
    type_path: String,
    scope: String,
}

impl OwnerScope {
    /// Derives the scope from a type path.
    pub fn new(type_path: impl Into<String>) -> Self {
        let type_path = type_path.into();
        let without_generics = type_path.split('<').next().unwrap_or_default();
        let scope = without_generics
            .split("::")
            .flat_map(|segment| segment.split('.'))
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(underscore)
            .collect::<Vec<_>>()
            .join(".");

        Self { type_path, scope }
    }

    /// Derives the scope from the Rust type name of `T`.
    ///
    /// The crate name becomes the first segment, so a type `Dood` in module
    /// `billing` of crate `active_merchant` gets the scope
    /// `active_merchant.billing.dood`.
    pub fn of<T: ?Sized>() -> Self {
        Self::new(std::any::type_name::<T>())
    }

    /// Returns the type path this scope was derived from.
    pub fn type_path(&self) -> &str {
        &self.type_path
    }

    /// Returns the dotted scope.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Returns the scope holding this type's error translations.
    pub fn errors_scope(&self) -> String {
        if self.scope.is_empty() {
            "errors".to_string()
        } else {
            format!("{}.errors", self.scope)
        }
    }
}

/// Configuration for a [`MessageResolver`].
///
/// # Example
///
/// ```rust
/// use validateable::ResolverConfig;
///
/// let config = ResolverConfig::new()
///     .with_library_scope("my_gateway")
///     .with_default_message("expired", "has expired");
///
/// assert_eq!(config.library_scope(), "my_gateway");
/// assert_eq!(config.default_message("expired"), Some("has expired"));
/// assert_eq!(config.default_message("blank"), Some("cannot be blank"));
/// ```
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    library_scope: String,
    default_messages: IndexMap<String, String>,
    humanizer: Arc<dyn Humanizer>,
}

impl ResolverConfig {
    /// Creates the default configuration: `active_merchant` library scope,
    /// the built-in default messages and the Rails humanizer.
    pub fn new() -> Self {
        Self {
            library_scope: DEFAULT_LIBRARY_SCOPE.to_string(),
            default_messages: DEFAULT_ERROR_MESSAGES
                .iter()
                .map(|(code, message)| (code.to_string(), message.to_string()))
                .collect(),
            humanizer: Arc::new(DefaultHumanizer),
        }
    }

    /// Sets the library scope used for namespace-wide translations.
    pub fn with_library_scope(mut self, scope: impl Into<String>) -> Self {
        self.library_scope = scope.into();
        self
    }

    /// Adds or replaces the built-in default message for a code.
    pub fn with_default_message(
        mut self,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        self.default_messages.insert(code.into(), message.into());
        self
    }

    /// Sets the formatting policy for field names and untranslated codes.
    pub fn with_humanizer<H: Humanizer + 'static>(mut self, humanizer: H) -> Self {
        self.humanizer = Arc::new(humanizer);
        self
    }

    /// Returns the library scope.
    pub fn library_scope(&self) -> &str {
        &self.library_scope
    }

    /// Returns the built-in default message for a code.
    pub fn default_message(&self, code: &str) -> Option<&str> {
        self.default_messages.get(code).map(String::as_str)
    }

    /// Returns the formatting policy.
    pub fn humanizer(&self) -> &dyn Humanizer {
        &*self.humanizer
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves error entries into display strings.
///
/// # Example
///
/// ```rust
/// use validateable::{ErrorCode, ErrorEntry, MessageResolver, OwnerScope};
/// use validateable::i18n::{Catalog, Locale};
///
/// let catalog = Catalog::new();
/// let resolver = MessageResolver::new(catalog.clone());
/// let owner = OwnerScope::new("ActiveMerchant::Billing::Dood");
/// let pt = Locale::new("pt");
///
/// let blank = ErrorEntry::from(ErrorCode::Blank);
/// assert_eq!(resolver.resolve(&owner, &blank, &pt), "cannot be blank");
///
/// catalog.insert("pt", "active_merchant.billing.dood.errors.blank", "nunca deve estar em branco");
/// assert_eq!(resolver.resolve(&owner, &blank, &pt), "nunca deve estar em branco");
/// ```
#[derive(Debug, Clone)]
pub struct MessageResolver {
    catalog: Catalog,
    config: ResolverConfig,
}

impl MessageResolver {
    /// Creates a resolver over `catalog` with the default configuration.
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, ResolverConfig::new())
    }

    /// Creates a resolver with an explicit configuration.
    pub fn with_config(catalog: Catalog, config: ResolverConfig) -> Self {
        Self { catalog, config }
    }

    /// Returns the process-wide resolver backed by [`Catalog::global`].
    pub fn global() -> Arc<MessageResolver> {
        static GLOBAL: OnceLock<Arc<MessageResolver>> = OnceLock::new();
        let resolver =
            GLOBAL.get_or_init(|| Arc::new(MessageResolver::new(Catalog::global().clone())));
        Arc::clone(resolver)
    }

    /// Returns the catalog this resolver reads from.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Returns the resolver configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves an entry for an owner type in the given locale.
    pub fn resolve(&self, owner: &OwnerScope, entry: &ErrorEntry, locale: &Locale) -> String {
        match entry {
            ErrorEntry::Message(message) => message.clone(),
            ErrorEntry::Code(code) => self.resolve_code(owner, code, locale),
        }
    }

    /// Resolves an error code for an owner type in the given locale.
    pub fn resolve_code(&self, owner: &OwnerScope, code: &ErrorCode, locale: &Locale) -> String {
        let owner_scope = owner.errors_scope();
        match self.catalog.lookup(locale, &owner_scope, code.as_str()) {
            Some(message) => {
                tracing::debug!(
                    "resolved '{}' from {}.{} ({})",
                    code,
                    owner_scope,
                    code,
                    locale
                );
                message
            }
            None => self.default_message(code, locale),
        }
    }

    /// Resolves a code without any owner-specific translation.
    ///
    /// Tries the library scope, then the built-in defaults, then the
    /// humanized code.
    pub fn default_message(&self, code: &ErrorCode, locale: &Locale) -> String {
        let library_scope = format!("{}.errors", self.config.library_scope);
        if let Some(message) = self.catalog.lookup(locale, &library_scope, code.as_str()) {
            tracing::debug!("resolved '{}' from {}.{} ({})", code, library_scope, code, locale);
            return message;
        }

        if let Some(message) = self.config.default_message(code.as_str()) {
            tracing::trace!("resolved '{}' from built-in defaults", code);
            return message.to_string();
        }

        tracing::trace!("no message for '{}', humanizing the code", code);
        self.config.humanizer().humanize_code(code.as_str())
    }

    /// Renders a field name as the prefix of a full message.
    pub fn humanize_field(&self, field: &FieldName) -> String {
        self.config.humanizer().humanize_field(field.as_str())
    }
}
