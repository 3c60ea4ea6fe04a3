//! `mdreflow fix` and `mdreflow check`.
//!
//! Both run the same pipeline: collect documents, reflow each one, report.
//! `fix` writes modified documents back; `check` only reports them and
//! fails when any would change.

use mdreflow_adapters::LocalFilesystem;
use mdreflow_core::{
    application::{ReflowService, RunSummary},
    domain::WriteMode,
};
use tracing::{debug, instrument};

use super::{collect_documents, display_path};
use crate::{
    cli::{OutputFormat, ReflowArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Rewrite over-long lines in place.
pub fn fix(args: ReflowArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    run(args, WriteMode::Apply, &config, &output).map(|_| ())
}

/// Report documents with over-long lines; error if there are any.
pub fn check(args: ReflowArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let summary = run(args, WriteMode::Check, &config, &output)?;

    if summary.has_pending_changes() {
        return Err(CliError::PendingChanges {
            count: summary.modified_count(),
        });
    }
    Ok(())
}

#[instrument(skip_all, fields(mode = %mode))]
fn run(
    args: ReflowArgs,
    mode: WriteMode,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<RunSummary> {
    let root = args.root.root;
    let width = args.width.unwrap_or_else(|| config.width());
    debug!(root = %root.display(), width = %width, "Starting run");

    let documents = collect_documents(&root, &args.paths, &config.discovery)?;
    output.print(&format!(
        "Found {} markdown files to process",
        documents.len()
    ))?;

    let service = ReflowService::new(Box::new(LocalFilesystem::new()));
    let summary = service.process(&documents, width, mode);

    if output.format() == OutputFormat::Json {
        output.json(&summary)?;
    } else {
        report(&summary, &root, output)?;
    }

    Ok(summary)
}

fn report(summary: &RunSummary, root: &std::path::Path, output: &OutputManager) -> CliResult<()> {
    let verb = match summary.mode {
        WriteMode::Apply => "Fixed",
        WriteMode::Check => "Would fix",
    };

    for path in &summary.modified {
        output.success(&format!(
            "{verb} line length issues in {}",
            display_path(root, path)
        ))?;
    }

    // Failures stay visible in quiet mode.
    for failed in &summary.failed {
        output.error(&format!(
            "Skipped {}: {}",
            display_path(root, &failed.path),
            failed.reason
        ))?;
    }

    match summary.mode {
        WriteMode::Apply => output.print(&format!(
            "Fixed line length issues in {} files",
            summary.modified_count()
        ))?,
        WriteMode::Check if summary.modified.is_empty() => output.success(&format!(
            "All {} files fit within {} columns",
            summary.found, summary.width
        ))?,
        WriteMode::Check => output.print(&format!(
            "{} of {} files exceed {} columns",
            summary.modified_count(),
            summary.found,
            summary.width
        ))?,
    }

    Ok(())
}
