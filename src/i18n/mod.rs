//! Translations for error messages.
//!
//! This module provides the [`Catalog`] of per-locale translation trees, the
//! [`Locale`] tag type with its process-wide default, and loaders for YAML and
//! JSON locale files.

mod catalog;
mod loading;
mod locale;

pub use catalog::Catalog;
pub use loading::{CatalogError, LocaleFormat};
pub use locale::{default_locale, set_default_locale, Locale};
