//! Reflow Service - main application orchestrator.
//!
//! This service coordinates the per-document workflow:
//! 1. Read the document
//! 2. Reflow it in the domain layer
//! 3. Write it back, only if something changed and writing is enabled
//!
//! A failure on one document is logged and recorded; the run carries on.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, error, info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{LineWidth, WriteMode, reflow},
    error::ReflowResult,
};

/// What happened to a single document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// Every line already fit.
    Unchanged,
    /// Reflowed and written back.
    Rewritten,
    /// Would be reflowed, but the run does not write.
    WouldRewrite,
}

impl FileStatus {
    pub const fn is_modified(self) -> bool {
        matches!(self, Self::Rewritten | Self::WouldRewrite)
    }
}

/// Per-document result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
    pub wrapped_lines: usize,
}

/// A document that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Aggregate result of a run, reported by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub mode: WriteMode,
    pub width: LineWidth,
    /// Number of documents considered.
    pub found: usize,
    /// Documents that were (or would be) rewritten, in processing order.
    pub modified: Vec<PathBuf>,
    /// Documents skipped because of an error.
    pub failed: Vec<FailedFile>,
}

impl RunSummary {
    fn new(mode: WriteMode, width: LineWidth, found: usize) -> Self {
        Self {
            mode,
            width,
            found,
            modified: Vec::new(),
            failed: Vec::new(),
        }
    }

    pub fn modified_count(&self) -> usize {
        self.modified.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }

    /// A check run found documents that need reflowing.
    pub fn has_pending_changes(&self) -> bool {
        self.mode == WriteMode::Check && !self.modified.is_empty()
    }
}

/// Main reflow service.
pub struct ReflowService {
    filesystem: Box<dyn Filesystem>,
}

impl ReflowService {
    /// Create a new reflow service with the given adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Reflow a single document.
    ///
    /// The document is written only when the engine changed it and `mode`
    /// allows writing; an unchanged document is never touched.
    #[instrument(skip_all, fields(path = %path.display(), width = %width, mode = %mode))]
    pub fn reflow_file(
        &self,
        path: &Path,
        width: LineWidth,
        mode: WriteMode,
    ) -> ReflowResult<FileOutcome> {
        let original = self.filesystem.read_to_string(path)?;
        let outcome = reflow(&original, width);

        let status = match (outcome.modified, mode.writes()) {
            (false, _) => FileStatus::Unchanged,
            (true, true) => {
                self.filesystem.write_file(path, &outcome.text)?;
                info!(wrapped = outcome.wrapped_lines, "Fixed line length issues");
                FileStatus::Rewritten
            }
            (true, false) => {
                debug!(wrapped = outcome.wrapped_lines, "Would fix line length issues");
                FileStatus::WouldRewrite
            }
        };

        Ok(FileOutcome {
            path: path.to_path_buf(),
            status,
            wrapped_lines: outcome.wrapped_lines,
        })
    }

    /// Reflow every document in order.
    ///
    /// Per-document errors are logged with the offending path and recorded in
    /// [`RunSummary::failed`]; they never stop the run.
    #[instrument(skip_all, fields(documents = paths.len(), width = %width, mode = %mode))]
    pub fn process(&self, paths: &[PathBuf], width: LineWidth, mode: WriteMode) -> RunSummary {
        let mut summary = RunSummary::new(mode, width, paths.len());

        for path in paths {
            match self.reflow_file(path, width, mode) {
                Ok(outcome) if outcome.status.is_modified() => summary.modified.push(outcome.path),
                Ok(_) => {}
                Err(e) => {
                    error!(error = %e, path = %path.display(), "Error processing file");
                    summary.failed.push(FailedFile {
                        path: path.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            found = summary.found,
            modified = summary.modified_count(),
            failed = summary.failed.len(),
            "Run finished"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::output::MockFilesystem};

    fn long_doc() -> String {
        format!("# Title\n\n{}\n", "lorem ipsum dolor ".repeat(10).trim_end())
    }

    fn read_error(path: &Path) -> crate::error::ReflowError {
        ApplicationError::FilesystemError {
            path: path.to_path_buf(),
            reason: "Failed to read file: stream did not contain valid UTF-8".into(),
        }
        .into()
    }

    #[test]
    fn modified_document_is_written_back() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string().returning(|_| Ok(long_doc()));
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("README.md") && content.lines().all(|l| l.chars().count() <= 80)
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ReflowService::new(Box::new(fs));
        let outcome = service
            .reflow_file(Path::new("README.md"), LineWidth::DEFAULT, WriteMode::Apply)
            .unwrap();

        assert_eq!(outcome.status, FileStatus::Rewritten);
        assert_eq!(outcome.wrapped_lines, 1);
    }

    #[test]
    fn unchanged_document_is_not_written() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string()
            .returning(|_| Ok("# Title\n\nshort\n".into()));
        fs.expect_write_file().times(0);

        let service = ReflowService::new(Box::new(fs));
        let outcome = service
            .reflow_file(Path::new("README.md"), LineWidth::DEFAULT, WriteMode::Apply)
            .unwrap();
        assert_eq!(outcome.status, FileStatus::Unchanged);
    }

    #[test]
    fn check_mode_never_writes() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string().returning(|_| Ok(long_doc()));
        fs.expect_write_file().times(0);

        let service = ReflowService::new(Box::new(fs));
        let summary = service.process(
            &[PathBuf::from("a.md"), PathBuf::from("b.md")],
            LineWidth::DEFAULT,
            WriteMode::Check,
        );

        assert_eq!(summary.found, 2);
        assert_eq!(summary.modified_count(), 2);
        assert!(summary.has_pending_changes());
    }

    #[test]
    fn failing_document_does_not_abort_run() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string().returning(|path| {
            if path == Path::new("bad.md") {
                Err(read_error(path))
            } else {
                Ok(long_doc())
            }
        });
        fs.expect_write_file().times(2).returning(|_, _| Ok(()));

        let service = ReflowService::new(Box::new(fs));
        let summary = service.process(
            &[
                PathBuf::from("a.md"),
                PathBuf::from("bad.md"),
                PathBuf::from("c.md"),
            ],
            LineWidth::DEFAULT,
            WriteMode::Apply,
        );

        assert_eq!(summary.found, 3);
        assert_eq!(summary.modified, vec![PathBuf::from("a.md"), PathBuf::from("c.md")]);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].path, PathBuf::from("bad.md"));
        assert!(summary.has_failures());
        assert!(!summary.has_pending_changes());
    }

    #[test]
    fn write_failure_is_recorded_not_counted_as_modified() {
        let mut fs = MockFilesystem::new();
        fs.expect_read_to_string().returning(|_| Ok(long_doc()));
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });

        let service = ReflowService::new(Box::new(fs));
        let summary = service.process(&[PathBuf::from("a.md")], LineWidth::DEFAULT, WriteMode::Apply);

        assert_eq!(summary.modified_count(), 0);
        assert_eq!(summary.failed.len(), 1);
        assert!(summary.failed[0].reason.contains("read-only"));
    }

    #[test]
    fn summary_serializes_to_json() {
        let mut summary = RunSummary::new(WriteMode::Check, LineWidth::DEFAULT, 1);
        summary.modified.push(PathBuf::from("README.md"));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["mode"], "check");
        assert_eq!(json["width"], 80);
        assert_eq!(json["found"], 1);
        assert_eq!(json["modified"][0], "README.md");
    }
}
