//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::Result;
use autotypo_core::config::defaults;
use autotypo_core::SpaceStyle;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Language used when `--language` is not given
    pub default_language: String,

    /// Space style; the language default applies when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_style: Option<SpaceStyle>,

    /// Normalize spacing around existing curly quotes; the language default
    /// applies when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replace_existing: Option<bool>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            default_language: defaults::LANGUAGE.to_string(),
            space_style: None,
            replace_existing: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
    }

    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
