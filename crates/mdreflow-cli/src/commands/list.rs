//! Implementation of the `mdreflow list` command.

use super::{collect_documents, display_path};
use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let root = args.root.root;
    let documents = collect_documents(&root, &[], &config.discovery)?;
    let names: Vec<String> = documents
        .iter()
        .map(|path| display_path(&root, path))
        .collect();

    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Markdown documents:")?;
            for name in &names {
                output.print(&format!("  {name}"))?;
            }
            output.print(&format!("{} documents", names.len()))?;
        }

        // Bypasses OutputManager so the list stays usable in pipes even
        // with --quiet.
        ListFormat::List => {
            for name in &names {
                println!("{name}");
            }
        }

        ListFormat::Json => output.json(&names)?,
    }

    Ok(())
}
