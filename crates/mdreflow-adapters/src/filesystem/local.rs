//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::{Path, PathBuf};

use tracing::trace;
use walkdir::WalkDir;

use mdreflow_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{ReflowError, ReflowResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_to_string(&self, path: &Path) -> ReflowResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, e, "read file"))
    }

    fn write_file(&self, path: &Path, content: &str) -> ReflowResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    /// Any walk error (unreadable subdirectory, broken entry) fails the whole
    /// search; callers decide whether that is fatal.
    fn find_files(&self, dir: &Path, extension: &str) -> ReflowResult<Vec<PathBuf>> {
        let mut found = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| ApplicationError::DiscoveryFailed {
                path: dir.to_path_buf(),
                reason: format!("directory walk error: {e}"),
            })?;

            // Skip directories, symlinks and other special types.
            if !entry.file_type().is_file() {
                continue;
            }

            if entry.path().extension().is_some_and(|ext| ext == extension) {
                trace!(path = %entry.path().display(), "Matched document");
                found.push(entry.into_path());
            }
        }

        Ok(found)
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> ReflowError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
