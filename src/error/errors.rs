//! Per-field error collection.
//!
//! This module provides [`Errors`], the ordered map from field to resolved
//! messages that every validatable object carries.

use indexmap::IndexMap;
use std::fmt::{self, Display};
use std::sync::Arc;

use super::entry::ErrorEntry;
use crate::field::FieldName;
use crate::i18n::{default_locale, Locale};
use crate::resolver::{MessageResolver, OwnerScope};

/// The errors collected for one object.
///
/// Each field maps to the messages added for it, in the order they were
/// added. Fields keep the order in which they first received an error.
///
/// Codes are resolved into strings when they are added, using the
/// collection's locale at that moment: either the locale set with
/// [`use_locale`](Errors::use_locale) or, if none, the process-wide
/// [`default_locale`]. Changing the locale later never rewrites stored
/// messages.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use validateable::{ErrorCode, Errors, MessageResolver, OwnerScope};
/// use validateable::i18n::Catalog;
///
/// let resolver = Arc::new(MessageResolver::new(Catalog::new()));
/// let mut errors = Errors::new(OwnerScope::new("ActiveMerchant::Billing::Dood"), resolver);
///
/// errors.add("name", ErrorCode::Empty);
/// errors.add("email", "cannot be empty");
/// errors.add_to_base("The country cannot be blank");
///
/// assert_eq!(errors.on("name"), Some("cannot be empty"));
/// assert_eq!(errors.on("doesnt_exist"), None);
/// assert_eq!(errors.count(), 3);
/// assert_eq!(
///     errors.full_messages(),
///     vec!["Name cannot be empty", "Email cannot be empty", "The country cannot be blank"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Errors {
    owner: OwnerScope,
    resolver: Arc<MessageResolver>,
    locale: Option<Locale>,
    messages: IndexMap<FieldName, Vec<String>>,
}

impl Errors {
    /// Creates an empty collection for `owner`, resolving codes with
    /// `resolver`.
    pub fn new(owner: OwnerScope, resolver: Arc<MessageResolver>) -> Self {
        Self {
            owner,
            resolver,
            locale: None,
            messages: IndexMap::new(),
        }
    }

    /// Creates an empty collection that resolves codes with the
    /// process-wide [`MessageResolver::global`].
    pub fn for_owner(owner: OwnerScope) -> Self {
        Self::new(owner, MessageResolver::global())
    }

    /// Removes all stored errors.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Resolves `error` and appends it to the messages of `field`.
    pub fn add(&mut self, field: impl Into<FieldName>, error: impl Into<ErrorEntry>) {
        let field = field.into();
        let message = self
            .resolver
            .resolve(&self.owner, &error.into(), &self.locale());
        tracing::trace!("{}: {} {}", self.owner.scope(), field, message);
        self.messages.entry(field).or_default().push(message);
    }

    /// Adds an error that belongs to the object as a whole.
    pub fn add_to_base(&mut self, error: impl Into<ErrorEntry>) {
        self.add(FieldName::base(), error);
    }

    /// Returns the first message for `field`, or `None` if it has none.
    pub fn on(&self, field: impl Into<FieldName>) -> Option<&str> {
        let field: FieldName = field.into();
        self.messages
            .get(&field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// Returns every message for `field`.
    pub fn messages_for(&self, field: impl Into<FieldName>) -> &[String] {
        let field: FieldName = field.into();
        self.messages
            .get(&field)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Renders one message per field.
    ///
    /// Each field contributes its first message prefixed with the humanized
    /// field name; `base` contributes its first message alone.
    pub fn full_messages(&self) -> Vec<String> {
        self.messages
            .iter()
            .filter_map(|(field, messages)| {
                let first = messages.first()?;
                Some(if field.is_base() {
                    first.clone()
                } else {
                    format!("{} {}", self.resolver.humanize_field(field), first)
                })
            })
            .collect()
    }

    /// Calls `f` with each of the [`full_messages`](Errors::full_messages).
    pub fn each_full(&self, mut f: impl FnMut(&str)) {
        for message in self.full_messages() {
            f(&message);
        }
    }

    /// Returns true if no errors are stored.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the number of fields with errors.
    pub fn count(&self) -> usize {
        self.messages.len()
    }

    /// Returns the number of messages across all fields.
    pub fn total_messages(&self) -> usize {
        self.messages.values().map(Vec::len).sum()
    }

    /// Returns an iterator over fields and their messages, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &[String])> {
        self.messages
            .iter()
            .map(|(field, messages)| (field, messages.as_slice()))
    }

    /// Returns the locale used for the next resolution.
    pub fn locale(&self) -> Locale {
        self.locale.clone().unwrap_or_else(default_locale)
    }

    /// Resolves future codes in `locale` instead of the process default.
    pub fn use_locale(&mut self, locale: impl Into<Locale>) {
        self.locale = Some(locale.into());
    }

    /// Goes back to resolving in the process-wide default locale.
    pub fn use_default_locale(&mut self) {
        self.locale = None;
    }

    /// Returns the owner scope used for translations.
    pub fn owner(&self) -> &OwnerScope {
        &self.owner
    }

    /// Returns the resolver used for codes.
    pub fn resolver(&self) -> &MessageResolver {
        &self.resolver
    }
}

impl Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.count())?;
        for (i, message) in self.full_messages().iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, message)?;
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}

// Errors is shared across threads when the catalog is; keep it Send + Sync.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Errors>();
    assert_sync::<Errors>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::i18n::Catalog;

    fn errors_with(catalog: Catalog) -> Errors {
        Errors::new(
            OwnerScope::new("ActiveMerchant::Billing::Dood"),
            Arc::new(MessageResolver::new(catalog)),
        )
    }

    #[test]
    fn test_add_and_on() {
        let mut errors = errors_with(Catalog::new());
        errors.add("name", ErrorCode::Blank);
        errors.add("name", "is too short");

        assert_eq!(errors.on("name"), Some("cannot be blank"));
        assert_eq!(errors.messages_for("name"), ["cannot be blank", "is too short"]);
        assert_eq!(errors.count(), 1);
        assert_eq!(errors.total_messages(), 2);
    }

    #[test]
    fn test_field_names_are_normalized() {
        let mut errors = errors_with(Catalog::new());
        errors.add("Name", ErrorCode::Empty);

        assert_eq!(errors.on("name"), Some("cannot be empty"));
        assert_eq!(errors.on(FieldName::new("NAME")), Some("cannot be empty"));
    }

    #[test]
    fn test_on_missing_field() {
        let errors = errors_with(Catalog::new());
        assert_eq!(errors.on("doesnt_exist"), None);
        assert!(errors.messages_for("doesnt_exist").is_empty());
    }

    #[test]
    fn test_full_messages_order_and_base() {
        let mut errors = errors_with(Catalog::new());
        errors.add("first_name", ErrorCode::Required);
        errors.add_to_base("Card was declined");
        errors.add("email", "cannot be empty");
        errors.add("first_name", "is too long");

        assert_eq!(
            errors.full_messages(),
            vec!["First name is required", "Card was declined", "Email cannot be empty"]
        );
    }

    #[test]
    fn test_each_full() {
        let mut errors = errors_with(Catalog::new());
        errors.add("name", ErrorCode::Invalid);

        let mut seen = Vec::new();
        errors.each_full(|message| seen.push(message.to_string()));
        assert_eq!(seen, vec!["Name is invalid"]);
    }

    #[test]
    fn test_clear_does_not_leak() {
        let mut errors = errors_with(Catalog::new());
        for round in 0..3 {
            errors.clear();
            assert!(errors.is_empty());
            errors.add("name", format!("round {}", round));
            assert_eq!(errors.messages_for("name"), [format!("round {}", round)]);
        }
    }

    #[test]
    fn test_locale_switch_affects_only_new_messages() {
        let catalog = Catalog::new();
        catalog.insert("en", "active_merchant.errors.blank", "blank is invalid");
        catalog.insert("pt", "active_merchant.errors.blank", "deve ser preenchido");

        let mut errors = errors_with(catalog);
        errors.use_locale("en");
        errors.add("name", ErrorCode::Blank);
        errors.use_locale("pt");
        errors.add("name", ErrorCode::Blank);

        assert_eq!(errors.messages_for("name"), ["blank is invalid", "deve ser preenchido"]);
        assert_eq!(errors.locale(), Locale::new("pt"));
    }

    #[test]
    fn test_display() {
        let mut errors = errors_with(Catalog::new());
        errors.add("name", ErrorCode::Empty);
        errors.add_to_base("Country is missing");

        let display = errors.to_string();
        assert!(display.contains("2 error(s)"));
        assert!(display.contains("1. Name cannot be empty"));
        assert!(display.contains("2. Country is missing"));
    }
}
