//! Discovery Service - decides which documents a run touches.
//!
//! Errors while searching a single directory never abort the scan: the
//! directory is logged and contributes nothing.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::Filesystem,
    domain::{DiscoveryRules, DomainValidator as validator},
    error::{ReflowError, ReflowResult},
};

/// Finds candidate documents through the [`Filesystem`] port.
pub struct DiscoveryService {
    filesystem: Box<dyn Filesystem>,
}

impl DiscoveryService {
    /// Create a new discovery service with the given adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Collect documents under `root` according to `rules`.
    ///
    /// Root files come first, then each search directory in rule order.
    /// Only invalid rules are an error.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn discover(&self, root: &Path, rules: &DiscoveryRules) -> ReflowResult<Vec<PathBuf>> {
        validator::validate_rules(rules).map_err(ReflowError::Domain)?;

        let mut candidates = Vec::new();

        for file in &rules.root_files {
            let path = root.join(file);
            if self.filesystem.exists(&path) && !self.filesystem.is_dir(&path) {
                candidates.push(path);
            } else {
                debug!(file = %path.display(), "Root file not present");
            }
        }

        for dir in &rules.directories {
            candidates.extend(self.search(&root.join(dir), &rules.extension));
        }

        let selected = rules.select(root, candidates);
        info!(count = selected.len(), "Discovery finished");
        Ok(selected)
    }

    /// Resolve explicitly requested paths: files are taken as-is, directories
    /// are searched like discovery directories, missing paths are skipped.
    #[instrument(skip_all, fields(root = %root.display(), requested = paths.len()))]
    pub fn resolve(
        &self,
        root: &Path,
        paths: &[PathBuf],
        rules: &DiscoveryRules,
    ) -> ReflowResult<Vec<PathBuf>> {
        validator::validate_rules(rules).map_err(ReflowError::Domain)?;

        let mut candidates = Vec::new();

        for requested in paths {
            let path = root.join(requested);
            if self.filesystem.is_dir(&path) {
                candidates.extend(self.search(&path, &rules.extension));
            } else if self.filesystem.exists(&path) {
                candidates.push(path);
            } else {
                warn!(path = %path.display(), "Requested path does not exist, skipping");
            }
        }

        Ok(rules.select(root, candidates))
    }

    /// Search one directory, swallowing failures.
    fn search(&self, dir: &Path, extension: &str) -> Vec<PathBuf> {
        if !self.filesystem.is_dir(dir) {
            debug!(dir = %dir.display(), "Search directory not present");
            return Vec::new();
        }

        match self.filesystem.find_files(dir, extension) {
            Ok(found) => {
                debug!(dir = %dir.display(), count = found.len(), "Searched directory");
                found
            }
            Err(e) => {
                warn!(
                    error = %e,
                    dir = %dir.display(),
                    "Directory could not be searched, skipping"
                );
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::output::MockFilesystem};

    fn root() -> PathBuf {
        PathBuf::from("/repo")
    }

    /// A mock where `files` exist as regular files and `dirs` as directories.
    fn mock(files: &'static [&'static str], dirs: &'static [&'static str]) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(move |path| {
            files.iter().chain(dirs).any(|p| path == root().join(p))
        });
        fs.expect_is_dir()
            .returning(move |path| dirs.iter().any(|p| path == root().join(p)));
        fs
    }

    #[test]
    fn root_files_then_directories() {
        let mut fs = mock(&["README.md"], &["docs", "src"]);
        fs.expect_find_files().returning(|dir, ext| {
            assert_eq!(ext, "md");
            Ok(vec![dir.join("a.md"), dir.join("b.md")])
        });

        let service = DiscoveryService::new(Box::new(fs));
        let found = service.discover(&root(), &DiscoveryRules::default()).unwrap();

        assert_eq!(
            found,
            vec![
                root().join("README.md"),
                root().join("docs/a.md"),
                root().join("docs/b.md"),
                root().join("src/a.md"),
                root().join("src/b.md"),
            ]
        );
    }

    #[test]
    fn missing_directories_are_skipped() {
        let mut fs = mock(&[], &[]);
        fs.expect_find_files().times(0);

        let service = DiscoveryService::new(Box::new(fs));
        let found = service.discover(&root(), &DiscoveryRules::default()).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn failing_directory_does_not_abort_scan() {
        let mut fs = mock(&[], &["docs", "src"]);
        fs.expect_find_files().returning(|dir, _| {
            if dir.ends_with("docs") {
                Err(ApplicationError::DiscoveryFailed {
                    path: dir.to_path_buf(),
                    reason: "permission denied".into(),
                }
                .into())
            } else {
                Ok(vec![dir.join("lib.md")])
            }
        });

        let service = DiscoveryService::new(Box::new(fs));
        let found = service.discover(&root(), &DiscoveryRules::default()).unwrap();
        assert_eq!(found, vec![root().join("src/lib.md")]);
    }

    #[test]
    fn duplicates_and_excluded_paths_are_dropped() {
        let mut fs = mock(&["README.md"], &["docs", "src"]);
        fs.expect_find_files().returning(|dir, _| {
            let root = root();
            if dir.ends_with("docs") {
                Ok(vec![root.join("README.md"), root.join("docs/dist/out.md")])
            } else {
                Ok(vec![root.join("src/node_modules/pkg.md"), root.join("src/x.md")])
            }
        });

        let service = DiscoveryService::new(Box::new(fs));
        let found = service.discover(&root(), &DiscoveryRules::default()).unwrap();
        assert_eq!(found, vec![root().join("README.md"), root().join("src/x.md")]);
    }

    #[test]
    fn invalid_rules_are_rejected() {
        let service = DiscoveryService::new(Box::new(MockFilesystem::new()));
        let rules = DiscoveryRules {
            extension: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            service.discover(&root(), &rules),
            Err(ReflowError::Domain(_))
        ));
    }

    #[test]
    fn resolve_mixes_files_and_directories() {
        let mut fs = mock(&["notes.md"], &["docs"]);
        fs.expect_find_files()
            .returning(|dir, _| Ok(vec![dir.join("guide.md")]));

        let service = DiscoveryService::new(Box::new(fs));
        let found = service
            .resolve(
                &root(),
                &[
                    PathBuf::from("notes.md"),
                    PathBuf::from("docs"),
                    PathBuf::from("missing.md"),
                ],
                &DiscoveryRules::default(),
            )
            .unwrap();

        assert_eq!(found, vec![root().join("notes.md"), root().join("docs/guide.md")]);
    }
}
