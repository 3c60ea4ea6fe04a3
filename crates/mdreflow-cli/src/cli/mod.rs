//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use mdreflow_core::domain::LineWidth;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "mdreflow",
    bin_name = "mdreflow",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Wrap over-long lines in markdown documents",
    long_about = "mdreflow rewrites markdown lines longer than the configured width \
                  into several shorter lines, leaving code, tables and HTML untouched.",
    after_help = "EXAMPLES:\n\
        \x20 mdreflow fix\n\
        \x20 mdreflow fix docs/guide.md --width 100\n\
        \x20 mdreflow check --root ../other-repo\n\
        \x20 mdreflow completions bash > /usr/share/bash-completion/completions/mdreflow",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Reflow documents in place.
    #[command(
        visible_alias = "f",
        about = "Wrap long lines in place",
        after_help = "EXAMPLES:\n\
            \x20 mdreflow fix\n\
            \x20 mdreflow fix README.md docs/\n\
            \x20 mdreflow fix --width 100"
    )]
    Fix(ReflowArgs),

    /// Report documents that need reflowing without touching them.
    #[command(
        about = "Check for long lines without writing",
        after_help = "EXAMPLES:\n\
            \x20 mdreflow check\n\
            \x20 mdreflow check --width 120 docs/\n\n\
            Exits with status 1 when any document would change."
    )]
    Check(ReflowArgs),

    /// List the documents that would be processed.
    #[command(
        visible_alias = "ls",
        about = "List discovered markdown documents",
        after_help = "EXAMPLES:\n\
            \x20 mdreflow list\n\
            \x20 mdreflow list --format json"
    )]
    List(ListArgs),

    /// Initialise an mdreflow configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 mdreflow init           # platform config directory\n\
            \x20 mdreflow init --local   # ./.mdreflow.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 mdreflow completions bash > ~/.local/share/bash-completion/completions/mdreflow\n\
            \x20 mdreflow completions zsh  > ~/.zfunc/_mdreflow\n\
            \x20 mdreflow completions fish > ~/.config/fish/completions/mdreflow.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the mdreflow configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 mdreflow config get wrap.max_width\n\
            \x20 mdreflow config list\n\
            \x20 mdreflow config path"
    )]
    Config(ConfigCommands),
}

// ── fix / check ───────────────────────────────────────────────────────────────

/// Arguments shared by `mdreflow fix` and `mdreflow check`.
#[derive(Debug, Args)]
pub struct ReflowArgs {
    /// Explicit files or directories. When empty, documents are discovered.
    #[arg(value_name = "PATHS", help = "Files or directories to process")]
    pub paths: Vec<PathBuf>,

    /// Maximum line width, overriding `wrap.max_width`.
    #[arg(
        short = 'w',
        long = "width",
        value_name = "COLUMNS",
        help = "Maximum line width (default: 80)"
    )]
    pub width: Option<LineWidth>,

    #[command(flatten)]
    pub root: RootArg,
}

/// Directory that discovery and relative paths start from.
#[derive(Debug, Args)]
pub struct RootArg {
    #[arg(
        long = "root",
        value_name = "DIR",
        default_value = ".",
        help = "Repository root to search from"
    )]
    pub root: PathBuf,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `mdreflow list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub root: RootArg,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable listing with a header.
    Table,
    /// One path per line.
    List,
    /// JSON array.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `mdreflow init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.mdreflow.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `mdreflow completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `mdreflow config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `wrap.max_width`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the config files in effect, highest priority first.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
