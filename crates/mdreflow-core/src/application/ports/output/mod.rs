//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `mdreflow-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::ReflowResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `mdreflow_adapters::filesystem::LocalFilesystem` (production)
/// - `mdreflow_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Documents are read and written whole, as UTF-8 text
/// - `find_files` only reports regular files
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> ReflowResult<String>;

    /// Replace a file's content.
    fn write_file(&self, path: &Path, content: &str) -> ReflowResult<()>;

    /// Recursively find regular files under `dir` with the given extension
    /// (no leading dot), ordered by path.
    fn find_files(&self, dir: &Path, extension: &str) -> ReflowResult<Vec<PathBuf>>;
}
