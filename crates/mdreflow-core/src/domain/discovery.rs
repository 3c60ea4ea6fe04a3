//! Document discovery rules.
//!
//! Pure selection logic: which root files and directories to look at, which
//! extension qualifies, and which path segments disqualify. Walking the
//! filesystem is the job of the `Filesystem` port.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Where to look for documents, relative to a root directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveryRules {
    /// Individual files included when they exist.
    pub root_files: Vec<PathBuf>,
    /// Directories searched recursively.
    pub directories: Vec<PathBuf>,
    /// Extension (without the dot) a file needs to qualify.
    pub extension: String,
    /// Any path with one of these as a component is skipped.
    pub exclude: Vec<String>,
}

impl Default for DiscoveryRules {
    fn default() -> Self {
        Self {
            root_files: vec!["README.md".into(), "CHANGELOG.md".into()],
            directories: vec![".github".into(), "docs".into(), "src".into()],
            extension: "md".into(),
            exclude: vec!["node_modules".into(), "dist".into()],
        }
    }
}

impl DiscoveryRules {
    pub fn validate(&self) -> Result<(), DomainError> {
        let ext = self.extension.as_str();
        if ext.is_empty() || ext.contains('.') || ext.contains(['/', '\\']) {
            return Err(DomainError::InvalidExtension {
                extension: self.extension.clone(),
            });
        }

        if self.root_files.is_empty() && self.directories.is_empty() {
            return Err(DomainError::InvalidRules(
                "no root files and no directories to search".into(),
            ));
        }

        if let Some(abs) = self
            .root_files
            .iter()
            .chain(&self.directories)
            .find(|p| p.is_absolute())
        {
            return Err(DomainError::InvalidRules(format!(
                "search locations must be relative to the root: {}",
                abs.display()
            )));
        }

        Ok(())
    }

    /// Whether `path` (relative to the discovery root) has an excluded component.
    pub fn is_excluded(&self, path: &Path) -> bool {
        path.components().any(|component| match component {
            Component::Normal(segment) => self
                .exclude
                .iter()
                .any(|excluded| segment == excluded.as_str()),
            _ => false,
        })
    }

    /// Whether `path` has the configured extension.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext == self.extension.as_str())
    }

    /// Deduplicate (first occurrence wins) and drop excluded paths.
    ///
    /// `root` is stripped before exclusion is checked, so a root that itself
    /// lives under e.g. `dist/` does not exclude everything.
    pub fn select(&self, root: &Path, candidates: impl IntoIterator<Item = PathBuf>) -> Vec<PathBuf> {
        let mut seen = HashSet::new();

        candidates
            .into_iter()
            .filter(|path| {
                let relative = path.strip_prefix(root).unwrap_or(path);
                !self.is_excluded(relative)
            })
            .filter(|path| seen.insert(path.clone()))
            .collect()
    }
}
