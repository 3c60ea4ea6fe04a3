//! Command handlers, one module per subcommand.

use std::path::{Path, PathBuf};

use mdreflow_adapters::LocalFilesystem;
use mdreflow_core::{application::DiscoveryService, domain::DiscoveryRules};

use crate::error::{CliError, CliResult};

pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod reflow;

/// Find the documents to work on.
///
/// With no explicit `paths` the discovery rules apply; otherwise each path
/// (relative to `root`) is taken as a file or searched as a directory.
pub(crate) fn collect_documents(
    root: &Path,
    paths: &[PathBuf],
    rules: &DiscoveryRules,
) -> CliResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(CliError::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let service = DiscoveryService::new(Box::new(LocalFilesystem::new()));
    let documents = if paths.is_empty() {
        service.discover(root, rules)?
    } else {
        service.resolve(root, paths, rules)?
    };
    Ok(documents)
}

/// How a document path is shown to the user: relative to `root` when
/// possible.
pub(crate) fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
