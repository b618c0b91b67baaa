//! Configuration layer for ifscout.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! Without `--config`, a per-user config file is used when one exists at the
//! well-known location (see [`default_config_path`]).
//!
//! # Boolean Flag Semantics
//!
//! Boolean flags (`--summary`, `--include-down`) use OR semantics: set in
//! either CLI or config file, the behavior is enabled. Flags only enable,
//! never disable (`--include-down` corresponds to `require_up = false`).

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;


pub use cli::{Cli, Command, FormatArg};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{OutputFormat, ValidatedConfig, default_config_path, write_default_config};
