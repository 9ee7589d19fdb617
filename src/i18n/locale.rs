//! Locale tags and the process-wide default locale.

use std::fmt::{self, Display};
use std::sync::OnceLock;

use parking_lot::RwLock;

/// A locale tag such as `en`, `pt` or `pt-br`.
///
/// Tags are trimmed, lower-cased and use `-` as the region separator, so
/// `pt_BR` and `pt-br` name the same locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale(String);

impl Locale {
    /// Creates a normalized locale tag.
    pub fn new(tag: impl AsRef<str>) -> Self {
        Self(tag.as_ref().trim().replace('_', "-").to_lowercase())
    }

    /// English, the locale used until [`set_default_locale`] is called.
    pub fn english() -> Self {
        Self("en".to_string())
    }

    /// Returns the normalized tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

fn default_slot() -> &'static RwLock<Locale> {
    static DEFAULT: OnceLock<RwLock<Locale>> = OnceLock::new();
    DEFAULT.get_or_init(|| RwLock::new(Locale::english()))
}

/// Returns the process-wide default locale.
///
/// Error collections that were not given an explicit locale resolve their
/// messages with this value at the moment each error is added.
pub fn default_locale() -> Locale {
    default_slot().read().clone()
}

/// Sets the process-wide default locale.
///
/// Intended to be called once during startup. Messages already stored are
/// not affected.
pub fn set_default_locale(locale: impl Into<Locale>) {
    let locale = locale.into();
    tracing::debug!("default locale set to {}", locale);
    *default_slot().write() = locale;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        assert_eq!(Locale::new("EN").as_str(), "en");
        assert_eq!(Locale::new("pt_BR"), Locale::new("pt-br"));
        assert_eq!(Locale::from(" pt "), Locale::new("pt"));
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Locale::default(), Locale::english());
        assert_eq!(Locale::english().to_string(), "en");
    }
}
