//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::classify::InclusionPolicy;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Output format after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text, one item per line.
    Text,
    /// A single JSON document with the summary and candidate list.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional
/// TOML config, or [`ValidatedConfig::load`] to resolve the config file
/// path first.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Which interfaces participate in classification
    pub policy: InclusionPolicy,

    /// Output format
    pub format: OutputFormat,

    /// Print the full summary instead of candidate names only
    pub summary: bool,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ prefix: {:?}, require_up: {}, format: {}, summary: {} }}",
            self.policy.name_prefix, self.policy.require_up, self.format, self.summary,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if the output format value is not recognized.
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let policy = Self::build_policy(cli, toml);
        let format = Self::resolve_format(cli, toml)?;

        // OR semantics: either source can enable the full summary
        let summary = cli.summary || toml.is_some_and(|t| t.output.summary);

        Ok(Self {
            policy,
            format,
            summary,
            verbose: cli.verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path. Otherwise
    /// the per-user config file is loaded when it exists (see
    /// [`default_config_path`]).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else if let Some(path) = default_config_path().filter(|p| p.exists()) {
            Some(TomlConfig::load(&path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn build_policy(cli: &Cli, toml: Option<&TomlConfig>) -> InclusionPolicy {
        // Priority: CLI explicit > TOML > default
        let name_prefix = cli
            .prefix
            .clone()
            .or_else(|| toml.and_then(|t| t.filter.name_prefix.clone()))
            .unwrap_or_else(|| defaults::NAME_PREFIX.to_string());

        // --include-down clears the liveness requirement regardless of TOML
        let require_up = if cli.include_down {
            false
        } else {
            toml.and_then(|t| t.filter.require_up)
                .unwrap_or(defaults::REQUIRE_UP)
        };

        InclusionPolicy::new(name_prefix, require_up)
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        // CLI takes precedence
        if let Some(format) = cli.format {
            return Ok(format.into());
        }

        // Fall back to TOML
        if let Some(toml) = toml {
            if let Some(ref value) = toml.output.format {
                return parse_format(value);
            }
        }

        Ok(OutputFormat::Text)
    }
}

/// Well-known per-user config file location, if a config root exists.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(defaults::CONFIG_DIR).join(defaults::CONFIG_FILE))
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

// Helper functions

fn parse_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s.to_lowercase().as_str() {
        "text" | "plain" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        _ => Err(ConfigError::InvalidFormat {
            value: s.to_string(),
        }),
    }
}
