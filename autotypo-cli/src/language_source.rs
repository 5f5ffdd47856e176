//! Language source management for CLI

use anyhow::{Context, Result};
use autotypo_core::{language, LanguageProfile};
use std::path::PathBuf;

/// Source of the language profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageSource {
    /// Built-in profile by language code
    BuiltIn(String),
    /// External profile file
    External {
        /// Path to the profile file
        path: PathBuf,
    },
}

impl LanguageSource {
    /// Get the display name for the language source
    pub fn display_name(&self) -> String {
        match self {
            LanguageSource::BuiltIn(code) => format!("Built-in: {code}"),
            LanguageSource::External { path } => format!("External: {}", path.display()),
        }
    }

    /// Load the profile
    pub fn load(&self) -> Result<LanguageProfile> {
        match self {
            LanguageSource::BuiltIn(code) => Ok(language::resolve(code)?),
            LanguageSource::External { path } => language::from_file(path)
                .with_context(|| format!("Failed to load language profile {}", path.display())),
        }
    }
}
