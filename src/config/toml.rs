//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Interface inclusion filter configuration
    #[serde(default)]
    pub filter: FilterSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Interface inclusion filter section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSection {
    /// Interface-name prefix that qualifies for classification
    pub name_prefix: Option<String>,

    /// Whether interfaces must be administratively up
    pub require_up: Option<bool>,
}

/// Output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output format: "text" or "json"
    pub format: Option<String>,

    /// Print the full per-interface summary instead of candidate names only
    #[serde(default)]
    pub summary: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# ifscout Configuration File

[filter]
# Interface-name prefix that qualifies for classification (default: "en").
# An empty prefix admits every interface name.
# name_prefix = "en"

# Require the interface to be administratively up (default: true).
# The --include-down CLI flag forces this off.
# require_up = true

[output]
# Output format: "text" or "json" (default: text)
# format = "text"

# Print the full per-interface summary instead of candidate names only
summary = false
"#
    .to_string()
}
