//! Inflection helpers used to turn identifiers into display text.
//!
//! The rules follow the Rails inflector: [`underscore`] converts a
//! `CamelCase` type segment into `snake_case`, and [`humanize`] turns a
//! `snake_case` identifier into a capitalized phrase. Both are wrapped by the
//! [`Humanizer`] policy so callers can swap in locale-specific formatting.

use std::fmt::Debug;
use std::sync::OnceLock;

use regex::Regex;

fn acronym_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([A-Z\d]+)([A-Z][a-z])").expect("static regex"))
}

fn word_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([a-z\d])([A-Z])").expect("static regex"))
}

/// Converts a `CamelCase` identifier into `snake_case`.
///
/// # Example
///
/// ```rust
/// use validateable::inflect::underscore;
///
/// assert_eq!(underscore("CreditCard"), "credit_card");
/// assert_eq!(underscore("ActiveMerchant"), "active_merchant");
/// assert_eq!(underscore("HTTPGateway"), "http_gateway");
/// ```
pub fn underscore(word: &str) -> String {
    let word = acronym_boundary().replace_all(word, "${1}_${2}");
    let word = word_boundary().replace_all(&word, "${1}_${2}");
    word.replace('-', "_").to_lowercase()
}

/// Turns an underscored identifier into a capitalized phrase.
///
/// A trailing `_id` is dropped, every underscore becomes a space and only
/// the first character is upper-cased. Leading underscores are not trimmed,
/// so `"_id"` humanizes to `""` and `"_note"` to `" note"`.
///
/// # Example
///
/// ```rust
/// use validateable::inflect::humanize;
///
/// assert_eq!(humanize("first_name"), "First name");
/// assert_eq!(humanize("country_id"), "Country");
/// assert_eq!(humanize("_id"), "");
/// ```
pub fn humanize(word: &str) -> String {
    let trimmed = word.strip_suffix("_id").unwrap_or(word);
    let lowered = trimmed.replace('_', " ").to_lowercase();

    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Formatting policy for text derived from identifiers.
///
/// Field names are rendered as the prefix of full messages, and error codes
/// without any translation or built-in default are rendered as the message
/// itself.
pub trait Humanizer: Debug + Send + Sync {
    /// Renders a field name as the prefix of a full message.
    fn humanize_field(&self, field: &str) -> String;

    /// Renders an error code that has no translation.
    fn humanize_code(&self, code: &str) -> String;
}

/// The Rails 2 policy: [`humanize`] for fields, [`humanize`] then lower-case
/// for codes.
///
/// Unlike later Rails versions, leading underscores are kept as spaces
/// rather than stripped.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHumanizer;

impl Humanizer for DefaultHumanizer {
    fn humanize_field(&self, field: &str) -> String {
        humanize(field)
    }

    fn humanize_code(&self, code: &str) -> String {
        humanize(code).to_lowercase()
    }
}
