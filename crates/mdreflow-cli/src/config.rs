//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the values taken from it
//! ([`LineWidth`], [`DiscoveryRules`]).
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `MDREFLOW_<SECTION>__<KEY>`, e.g.
//!    `MDREFLOW_WRAP__MAX_WIDTH=100`
//! 3. Config file: `--config FILE` (must exist), otherwise
//!    `./.mdreflow.toml` and the platform config file (both optional; the
//!    local file wins)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use mdreflow_core::domain::{DiscoveryRules, DomainValidator, LineWidth};

/// Name of the per-repository config file.
pub const LOCAL_CONFIG_FILE: &str = ".mdreflow.toml";

const ENV_PREFIX: &str = "MDREFLOW";

/// Keys that the environment may set as comma-separated lists.
const LIST_KEYS: [&str; 3] = [
    "discovery.root_files",
    "discovery.directories",
    "discovery.exclude",
];

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Line wrapping settings.
    pub wrap: WrapConfig,
    /// Which documents are processed.
    pub discovery: DiscoveryRules,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapConfig {
    pub max_width: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            wrap: WrapConfig {
                max_width: LineWidth::DEFAULT.get(),
            },
            discovery: DiscoveryRules::default(),
            output: OutputConfig {
                no_color: false,
                format: "auto".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, files and the environment.
    ///
    /// `config_file` is the path the user passed via `--config`; when given
    /// it must exist and the implicit locations are not consulted.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        Self::load_from(
            &Self::file_sources(config_file),
            Some(Environment::with_prefix(ENV_PREFIX)),
        )
    }

    /// Config files [`Self::load`] reads, highest priority first. Optional
    /// files that do not exist are left out.
    pub fn active_paths(config_file: Option<&PathBuf>) -> Vec<PathBuf> {
        Self::file_sources(config_file)
            .into_iter()
            .rev()
            .filter(|(path, required)| *required || path.is_file())
            .map(|(path, _)| path)
            .collect()
    }

    /// Candidate files in increasing priority, each with its `required` flag.
    fn file_sources(config_file: Option<&PathBuf>) -> Vec<(PathBuf, bool)> {
        match config_file {
            Some(path) => vec![(path.clone(), true)],
            None => vec![
                (Self::config_path(), false),
                (PathBuf::from(LOCAL_CONFIG_FILE), false),
            ],
        }
    }

    /// Layer `files` (in increasing priority) and `env` over the defaults.
    fn load_from(files: &[(PathBuf, bool)], env: Option<Environment>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to build default configuration")?;

        let mut builder = Config::builder().add_source(defaults);

        for (path, required) in files {
            builder = builder.add_source(
                File::from(path.as_path())
                    .format(FileFormat::Toml)
                    .required(*required),
            );
        }

        if let Some(env) = env {
            let env = LIST_KEYS.iter().fold(
                env.prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(","),
                |env, key| env.with_list_parse_key(key),
            );
            builder = builder.add_source(env);
        }

        let config: Self = builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Configuration has an invalid shape")?;

        config.validate()?;
        Ok(config)
    }

    /// Check that the loaded values are usable by the core crate.
    pub fn validate(&self) -> anyhow::Result<()> {
        DomainValidator::validate_width(self.wrap.max_width)
            .context("Invalid value for wrap.max_width")?;
        DomainValidator::validate_rules(&self.discovery)
            .context("Invalid discovery configuration")?;
        Ok(())
    }

    /// Configured width; [`Self::validate`] guarantees it is non-zero.
    pub fn width(&self) -> LineWidth {
        LineWidth::new(self.wrap.max_width).unwrap_or_default()
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.mdreflow.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "mdreflow", "mdreflow")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// Path written by `mdreflow init`.
    pub fn init_path(local: bool) -> PathBuf {
        if local {
            Path::new(".").join(LOCAL_CONFIG_FILE)
        } else {
            Self::config_path()
        }
    }
}
