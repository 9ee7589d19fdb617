//! Installs the bundled locale file into an application.
//!
//! The generator copies `active_merchant_en.yml` into `config/locales/` below
//! a destination root, creating the directory when needed. Applications then
//! edit or translate the copy and load it with
//! [`Catalog::load_dir`](crate::i18n::Catalog::load_dir).

use std::path::{Path, PathBuf};

use crate::fs::{FileSystem, StdFileSystem};

/// Directory, relative to the destination root, receiving locale files.
pub const LOCALE_DIR: &str = "config/locales";

/// Name of the bundled locale file.
pub const LOCALE_FILE: &str = "active_merchant_en.yml";

/// Contents of the bundled locale file.
pub const BUNDLED_LOCALE: &str = include_str!("../locales/active_merchant_en.yml");

/// Name under which the generator is invoked.
pub const GENERATOR_NAME: &str = "translations_for_active_merchant";

/// Something the generator installs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestEntry {
    /// A directory, relative to the destination root.
    Directory(PathBuf),
    /// A file, relative to the destination root, with its contents.
    File {
        /// Where the file goes.
        path: PathBuf,
        /// What the file contains.
        contents: &'static str,
    },
}

/// What the generator did for one manifest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The directory was created.
    CreatedDirectory(PathBuf),
    /// The directory already existed.
    ExistingDirectory(PathBuf),
    /// The file was written.
    CreatedFile(PathBuf),
    /// The file already had the bundled contents.
    Identical(PathBuf),
    /// The file differed and was left alone.
    Skipped(PathBuf),
    /// The file differed and was replaced.
    Overwrote(PathBuf),
}

impl Action {
    /// Short status label, as printed by the command line tool.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CreatedDirectory(_) | Self::CreatedFile(_) => "create",
            Self::ExistingDirectory(_) => "exists",
            Self::Identical(_) => "identical",
            Self::Skipped(_) => "skip",
            Self::Overwrote(_) => "force",
        }
    }

    /// The path acted on.
    pub fn path(&self) -> &Path {
        match self {
            Self::CreatedDirectory(path)
            | Self::ExistingDirectory(path)
            | Self::CreatedFile(path)
            | Self::Identical(path)
            | Self::Skipped(path)
            | Self::Overwrote(path) => path,
        }
    }
}

/// Errors that can occur while generating.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// A directory could not be created
    #[error("failed to create directory {0}: {1}")]
    CreateDir(PathBuf, Box<dyn std::error::Error + Send + Sync>),

    /// A file could not be read or written
    #[error("failed to write {0}: {1}")]
    Write(PathBuf, Box<dyn std::error::Error + Send + Sync>),
}

/// Copies the bundled locale file below a destination root.
///
/// # Example
///
/// ```rust,no_run
/// use validateable::generator::TranslationsGenerator;
///
/// let actions = TranslationsGenerator::new("/path/to/app").run().unwrap();
/// for action in actions {
///     println!("{:>10}  {}", action.label(), action.path().display());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TranslationsGenerator {
    destination_root: PathBuf,
    force: bool,
}

impl TranslationsGenerator {
    /// Creates a generator that installs below `destination_root`.
    pub fn new(destination_root: impl Into<PathBuf>) -> Self {
        Self {
            destination_root: destination_root.into(),
            force: false,
        }
    }

    /// Replaces existing files that differ from the bundled ones.
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Returns the destination root.
    pub fn destination_root(&self) -> &Path {
        &self.destination_root
    }

    /// Lists what the generator installs.
    pub fn manifest(&self) -> Vec<ManifestEntry> {
        vec![
            ManifestEntry::Directory(PathBuf::from(LOCALE_DIR)),
            ManifestEntry::File {
                path: Path::new(LOCALE_DIR).join(LOCALE_FILE),
                contents: BUNDLED_LOCALE,
            },
        ]
    }

    /// Usage line for the command line tool, without the `Usage:` prefix.
    pub fn banner(program: &str) -> String {
        format!("{} [--force] [DESTINATION]", program)
    }

    /// Installs the manifest on disk.
    pub fn run(&self) -> Result<Vec<Action>, GeneratorError> {
        self.run_with(&StdFileSystem)
    }

    /// Installs the manifest through the given filesystem.
    pub fn run_with<Fs: FileSystem>(&self, fs: &Fs) -> Result<Vec<Action>, GeneratorError> {
        let mut actions = Vec::new();

        for entry in self.manifest() {
            let action = match entry {
                ManifestEntry::Directory(relative) => self.install_dir(&relative, fs)?,
                ManifestEntry::File { path, contents } => self.install_file(&path, contents, fs)?,
            };
            tracing::debug!("{} {}", action.label(), action.path().display());
            actions.push(action);
        }

        Ok(actions)
    }

    fn install_dir<Fs: FileSystem>(
        &self,
        relative: &Path,
        fs: &Fs,
    ) -> Result<Action, GeneratorError> {
        let path = self.destination_root.join(relative);
        if fs.is_dir(&path) {
            return Ok(Action::ExistingDirectory(path));
        }
        if fs.exists(&path) {
            return Err(GeneratorError::CreateDir(
                path,
                "a file already exists at this path".into(),
            ));
        }

        fs.create_dir_all(&path)
            .map_err(|e| GeneratorError::CreateDir(path.clone(), Box::new(e)))?;
        Ok(Action::CreatedDirectory(path))
    }

    fn install_file<Fs: FileSystem>(
        &self,
        relative: &Path,
        contents: &str,
        fs: &Fs,
    ) -> Result<Action, GeneratorError> {
        let path = self.destination_root.join(relative);

        let action = if fs.exists(&path) {
            let existing = fs
                .read_file(&path)
                .map_err(|e| GeneratorError::Write(path.clone(), Box::new(e)))?;
            if existing == contents {
                return Ok(Action::Identical(path));
            }
            if !self.force {
                tracing::warn!("{} exists and differs, skipping", path.display());
                return Ok(Action::Skipped(path));
            }
            Action::Overwrote(path.clone())
        } else {
            Action::CreatedFile(path.clone())
        };

        fs.write_file(&path, contents)
            .map_err(|e| GeneratorError::Write(path.clone(), Box::new(e)))?;
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFileSystem;
    use crate::i18n::{Catalog, Locale, LocaleFormat};

    fn locale_path() -> PathBuf {
        Path::new("app").join(LOCALE_DIR).join(LOCALE_FILE)
    }

    #[test]
    fn test_fresh_install() {
        let fs = MockFileSystem::new();
        let actions = TranslationsGenerator::new("app").run_with(&fs).unwrap();

        assert_eq!(
            actions,
            vec![
                Action::CreatedDirectory(Path::new("app").join(LOCALE_DIR)),
                Action::CreatedFile(locale_path()),
            ]
        );
        assert_eq!(fs.file(locale_path()).as_deref(), Some(BUNDLED_LOCALE));
    }

    #[test]
    fn test_rerun_is_identical() {
        let fs = MockFileSystem::new();
        let generator = TranslationsGenerator::new("app");
        generator.run_with(&fs).unwrap();

        let actions = generator.run_with(&fs).unwrap();
        assert_eq!(actions[0].label(), "exists");
        assert_eq!(actions[1], Action::Identical(locale_path()));
    }

    #[test]
    fn test_modified_file_is_skipped_unless_forced() {
        let fs = MockFileSystem::new();
        fs.add_file(locale_path(), "en: {}\n");

        let actions = TranslationsGenerator::new("app").run_with(&fs).unwrap();
        assert_eq!(actions[1], Action::Skipped(locale_path()));
        assert_eq!(fs.file(locale_path()).as_deref(), Some("en: {}\n"));

        let actions = TranslationsGenerator::new("app")
            .with_force(true)
            .run_with(&fs)
            .unwrap();
        assert_eq!(actions[1], Action::Overwrote(locale_path()));
        assert_eq!(fs.file(locale_path()).as_deref(), Some(BUNDLED_LOCALE));
    }

    #[test]
    fn test_file_in_place_of_locale_dir() {
        let fs = MockFileSystem::new();
        fs.add_file(Path::new("app").join(LOCALE_DIR), "not a directory");

        let err = TranslationsGenerator::new("app").run_with(&fs).unwrap_err();
        match err {
            GeneratorError::CreateDir(path, _) => {
                assert_eq!(path, Path::new("app").join(LOCALE_DIR));
            }
            other => panic!("unexpected error: {}", other),
        }
        assert_eq!(fs.file(locale_path()), None);
    }

    #[test]
    fn test_banner() {
        assert_eq!(
            TranslationsGenerator::banner(GENERATOR_NAME),
            "translations_for_active_merchant [--force] [DESTINATION]"
        );
    }

    #[test]
    fn test_bundled_locale_matches_defaults() {
        let catalog = Catalog::new();
        catalog
            .load_str(BUNDLED_LOCALE, LocaleFormat::Yaml, Path::new(LOCALE_FILE))
            .unwrap();

        let en = Locale::english();
        for (code, message) in crate::resolver::DEFAULT_ERROR_MESSAGES {
            assert_eq!(
                catalog.lookup(&en, "active_merchant.errors", code).as_deref(),
                Some(message)
            );
        }
    }
}
