//! Filesystem abstraction shared by locale loading and the translations
//! generator.
//!
//! This trait enables testing with mock filesystems; [`StdFileSystem`] is the
//! implementation backed by `std::fs`.

use std::io;
use std::path::{Path, PathBuf};

/// Abstraction for the filesystem operations this crate performs.
pub trait FileSystem: Send + Sync {
    /// The error type for filesystem operations
    type Error: std::error::Error + Send + Sync + 'static;

    /// Reads the contents of a file as a string.
    fn read_file(&self, path: &Path) -> Result<String, Self::Error>;

    /// Lists all entries in a directory.
    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, Self::Error>;

    /// Returns true if a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Returns true if `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Creates a directory and all of its missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<(), Self::Error>;

    /// Writes `contents` to a file, replacing it if present.
    fn write_file(&self, path: &Path, contents: &str) -> Result<(), Self::Error>;
}

/// The real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    type Error = io::Error;

    fn read_file(&self, path: &Path) -> Result<String, Self::Error> {
        std::fs::read_to_string(path)
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<PathBuf>, Self::Error> {
        std::fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.path()))
            .collect()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), Self::Error> {
        std::fs::create_dir_all(path)
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), Self::Error> {
        std::fs::write(path, contents)
    }
}
