//! Translation catalog with per-locale nested translation trees.
//!
//! This module provides the [`Catalog`] type that stores translations for each
//! locale as a nested `serde_json::Value` tree and answers scoped lookups such
//! as `active_merchant.errors.blank`.

use parking_lot::RwLock;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use super::locale::Locale;

/// Type alias for the translation storage map.
type TranslationMap = Arc<RwLock<HashMap<Locale, Value>>>;

/// A thread-safe store of translations keyed by locale.
///
/// Each locale owns a tree of nested objects whose leaves are strings.
/// Storing translations deep-merges the new tree into the existing one, so
/// several locale files can contribute to the same scope.
///
/// Cloning a catalog is cheap; every clone shares the same storage.
///
/// # Example
///
/// ```rust
/// use validateable::i18n::{Catalog, Locale};
/// use serde_json::json;
///
/// let catalog = Catalog::new();
/// catalog.store_translations(
///     "en",
///     json!({"active_merchant": {"errors": {"blank": "blank is invalid"}}}),
/// );
///
/// let en = Locale::new("en");
/// assert_eq!(
///     catalog.lookup(&en, "active_merchant.errors", "blank"),
///     Some("blank is invalid".to_string())
/// );
/// assert_eq!(catalog.lookup(&en, "active_merchant.errors", "empty"), None);
/// ```
pub struct Catalog {
    translations: TranslationMap,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            translations: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the process-wide catalog.
    ///
    /// [`MessageResolver::global`](crate::MessageResolver::global) reads from
    /// this catalog. Populate it during startup.
    pub fn global() -> &'static Catalog {
        static GLOBAL: OnceLock<Catalog> = OnceLock::new();
        GLOBAL.get_or_init(Catalog::new)
    }

    /// Deep-merges a translation tree into the given locale.
    ///
    /// Object nodes are merged key by key; any other value replaces what was
    /// stored at the same key.
    pub fn store_translations(&self, locale: impl Into<Locale>, tree: Value) {
        let locale = locale.into();
        let mut translations = self.translations.write();
        let root = translations
            .entry(locale)
            .or_insert_with(|| Value::Object(Map::new()));
        deep_merge(root, tree);
    }

    /// Stores a single translation under a dotted key.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validateable::i18n::{Catalog, Locale};
    ///
    /// let catalog = Catalog::new();
    /// catalog.insert("pt", "active_merchant.errors.blank", "deve ser preenchido");
    ///
    /// assert_eq!(
    ///     catalog.lookup(&Locale::new("pt"), "active_merchant.errors", "blank"),
    ///     Some("deve ser preenchido".to_string())
    /// );
    /// ```
    pub fn insert(&self, locale: impl Into<Locale>, key: &str, text: impl Into<String>) {
        let tree = key
            .split('.')
            .filter(|segment| !segment.is_empty())
            .rev()
            .fold(Value::String(text.into()), |inner, segment| {
                let mut map = Map::new();
                map.insert(segment.to_string(), inner);
                Value::Object(map)
            });
        self.store_translations(locale, tree);
    }

    /// Looks up `key` under the dotted `scope` for `locale`.
    ///
    /// A dotted `key` descends further, so `("lib.errors", "card.expired")`
    /// reads the same node as `("lib.errors.card", "expired")`. Returns `None`
    /// when any segment is missing or when the value found is not a string.
    pub fn lookup(&self, locale: &Locale, scope: &str, key: &str) -> Option<String> {
        let translations = self.translations.read();
        let mut node = translations.get(locale)?;

        for segment in scope.split('.').chain(key.split('.')) {
            if !segment.is_empty() {
                node = node.get(segment)?;
            }
        }

        node.as_str().map(str::to_string)
    }

    /// Returns true if any translations are stored for `locale`.
    pub fn has_locale(&self, locale: &Locale) -> bool {
        self.translations.read().contains_key(locale)
    }

    /// Returns all locales with stored translations, sorted.
    pub fn locales(&self) -> Vec<Locale> {
        let mut locales: Vec<_> = self.translations.read().keys().cloned().collect();
        locales.sort();
        locales
    }

    /// Removes every stored translation.
    pub fn clear(&self) {
        self.translations.write().clear();
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Catalog {
    fn clone(&self) -> Self {
        Self {
            translations: Arc::clone(&self.translations),
        }
    }
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("locales", &self.locales())
            .finish()
    }
}

fn deep_merge(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => {
            for (key, value) in source {
                match target.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        target.insert(key, value);
                    }
                }
            }
        }
        (target, source) => *target = source,
    }
}
