//! `mdreflow config`: inspect configuration values.

use std::path::PathBuf;

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config: AppConfig,
    config_file: Option<&PathBuf>,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            let serialised = toml::to_string_pretty(&config)
                .with_cli_context(|| "Failed to serialise config")?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            let paths = AppConfig::active_paths(config_file);
            if paths.is_empty() {
                output.info("No config file found, built-in defaults apply")?;
            }
            for path in paths {
                output.print(&path.display().to_string())?;
            }
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let rules = &config.discovery;
    match key {
        "wrap.max_width" => Ok(config.wrap.max_width.to_string()),
        "discovery.root_files" => Ok(join_paths(&rules.root_files)),
        "discovery.directories" => Ok(join_paths(&rules.directories)),
        "discovery.extension" => Ok(rules.extension.clone()),
        "discovery.exclude" => Ok(rules.exclude.join(", ")),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::InvalidInput {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

// ── tests ─────────────────────────────────────────────────────────────────────
