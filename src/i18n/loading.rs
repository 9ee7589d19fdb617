//! Locale file loading.
//!
//! Locale files use the Rails layout: the top-level keys are locale tags and
//! each maps to a nested tree of translations.
//!
//! ```yaml
//! en:
//!   active_merchant:
//!     errors:
//!       blank: "cannot be blank"
//! ```
//!
//! YAML (`.yml`, `.yaml`) and JSON (`.json`) files are supported. Loading a
//! directory parses every locale file in parallel, then merges them into the
//! catalog in path order so later files deterministically win on conflicts.

use rayon::prelude::*;
use serde_json::Value;
use std::path::{Path, PathBuf};

use super::catalog::Catalog;
use super::locale::Locale;
use crate::fs::{FileSystem, StdFileSystem};

/// Serialization format of a locale file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleFormat {
    /// YAML, the format of the bundled locale file.
    Yaml,
    /// JSON.
    Json,
}

impl LocaleFormat {
    /// Picks the format from a file extension, if it is a locale file.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yml") | Some("yaml") => Some(Self::Yaml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

/// Errors that can occur while loading locale files.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// IO error reading a file or directory
    #[error("IO error reading {0}: {1}")]
    Io(PathBuf, Box<dyn std::error::Error + Send + Sync>),

    /// YAML parsing error
    #[error("YAML parse error in {0}: {1}")]
    Yaml(PathBuf, serde_yaml::Error),

    /// JSON parsing error
    #[error("JSON parse error in {0}: {1}")]
    Json(PathBuf, serde_json::Error),

    /// The document is not a mapping from locale tags to translation trees
    #[error("Invalid locale file {0}: {1}")]
    InvalidLayout(PathBuf, String),

    /// The file extension is not a known locale format
    #[error("Unsupported locale file format: {0}")]
    UnsupportedFormat(PathBuf),

    /// Multiple errors occurred
    #[error("Multiple errors: {0:?}")]
    Multiple(Vec<CatalogError>),
}

type ParsedLocales = Vec<(Locale, Value)>;

impl Catalog {
    /// Parses locale file contents and stores every locale they define.
    ///
    /// `origin` only labels errors.
    ///
    /// # Example
    ///
    /// ```rust
    /// use validateable::i18n::{Catalog, Locale, LocaleFormat};
    /// use std::path::Path;
    ///
    /// let catalog = Catalog::new();
    /// catalog
    ///     .load_str(
    ///         "pt:\n  active_merchant:\n    errors:\n      blank: deve ser preenchido\n",
    ///         LocaleFormat::Yaml,
    ///         Path::new("inline.yml"),
    ///     )
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     catalog.lookup(&Locale::new("pt"), "active_merchant.errors", "blank"),
    ///     Some("deve ser preenchido".to_string())
    /// );
    /// ```
    pub fn load_str(
        &self,
        content: &str,
        format: LocaleFormat,
        origin: &Path,
    ) -> Result<(), CatalogError> {
        for (locale, tree) in parse_locale_file(content, format, origin)? {
            self.store_translations(locale, tree);
        }
        Ok(())
    }

    /// Loads a single locale file through the given filesystem.
    pub fn load_file_with<Fs: FileSystem>(&self, path: &Path, fs: &Fs) -> Result<(), CatalogError> {
        let parsed = read_locale_file(path, fs)?;
        tracing::debug!("loaded {} locale(s) from {}", parsed.len(), path.display());
        for (locale, tree) in parsed {
            self.store_translations(locale, tree);
        }
        Ok(())
    }

    /// Loads a single locale file from disk.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<(), CatalogError> {
        self.load_file_with(path.as_ref(), &StdFileSystem)
    }

    /// Loads every locale file in a directory.
    ///
    /// This method:
    /// - Lists the directory and keeps files with a locale extension
    /// - Parses them in parallel
    /// - Stores successfully parsed files in path order
    /// - Accumulates all errors that occur
    ///
    /// Files that parse are stored even when others fail.
    pub fn load_dir_with<Fs: FileSystem>(&self, dir: &Path, fs: &Fs) -> Result<(), CatalogError> {
        let mut files: Vec<PathBuf> = fs
            .read_dir(dir)
            .map_err(|e| CatalogError::Io(dir.to_path_buf(), Box::new(e)))?
            .into_iter()
            .filter(|path| LocaleFormat::from_path(path).is_some())
            .collect();
        files.sort();

        let results: Vec<Result<ParsedLocales, CatalogError>> = files
            .par_iter()
            .map(|path| read_locale_file(path, fs))
            .collect();

        let mut errors = Vec::new();
        for (path, result) in files.iter().zip(results) {
            match result {
                Ok(parsed) => {
                    for (locale, tree) in parsed {
                        self.store_translations(locale, tree);
                    }
                }
                Err(e) => {
                    tracing::warn!("skipping locale file {}: {}", path.display(), e);
                    errors.push(e);
                }
            }
        }

        tracing::debug!(
            "loaded {} of {} locale file(s) from {}",
            files.len() - errors.len(),
            files.len(),
            dir.display()
        );

        if errors.is_empty() {
            Ok(())
        } else {
            Err(CatalogError::Multiple(errors))
        }
    }

    /// Loads every locale file in a directory on disk.
    pub fn load_dir(&self, dir: impl AsRef<Path>) -> Result<(), CatalogError> {
        self.load_dir_with(dir.as_ref(), &StdFileSystem)
    }
}

fn read_locale_file<Fs: FileSystem>(path: &Path, fs: &Fs) -> Result<ParsedLocales, CatalogError> {
    let format = LocaleFormat::from_path(path)
        .ok_or_else(|| CatalogError::UnsupportedFormat(path.to_path_buf()))?;
    let content = fs
        .read_file(path)
        .map_err(|e| CatalogError::Io(path.to_path_buf(), Box::new(e)))?;
    parse_locale_file(&content, format, path)
}

fn parse_locale_file(
    content: &str,
    format: LocaleFormat,
    origin: &Path,
) -> Result<ParsedLocales, CatalogError> {
    let document: Value = match format {
        LocaleFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| CatalogError::Yaml(origin.to_path_buf(), e))?,
        LocaleFormat::Json => serde_json::from_str(content)
            .map_err(|e| CatalogError::Json(origin.to_path_buf(), e))?,
    };

    let Value::Object(locales) = document else {
        return Err(CatalogError::InvalidLayout(
            origin.to_path_buf(),
            "top level must map locale tags to translations".to_string(),
        ));
    };

    locales
        .into_iter()
        .map(|(tag, tree)| {
            if tree.is_object() {
                Ok((Locale::new(tag), tree))
            } else {
                Err(CatalogError::InvalidLayout(
                    origin.to_path_buf(),
                    format!("locale '{}' must map to a mapping of translations", tag),
                ))
            }
        })
        .collect()
}
