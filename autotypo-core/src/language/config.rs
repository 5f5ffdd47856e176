//! TOML schema for external language profiles

use serde::{Deserialize, Serialize};

use super::profile::{LanguageProfile, QuoteGlyphs};

/// Root of a language profile file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub metadata: Metadata,
    pub quotes: Quotes,
    #[serde(default)]
    pub spacing: Spacing,
}

/// Profile metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    #[serde(default)]
    pub name: String,
}

/// Quote glyphs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quotes {
    pub lead_double: char,
    pub trail_double: char,
    pub lead_single: char,
    pub trail_single: char,
}

/// Punctuation spacing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Spacing {
    #[serde(default)]
    pub punctuation: Vec<char>,
}

impl From<&ProfileConfig> for LanguageProfile {
    fn from(config: &ProfileConfig) -> Self {
        let name = if config.metadata.name.is_empty() {
            config.metadata.code.clone()
        } else {
            config.metadata.name.clone()
        };

        LanguageProfile::new(
            config.metadata.code.trim(),
            name,
            QuoteGlyphs::new(
                config.quotes.lead_double,
                config.quotes.trail_double,
                config.quotes.lead_single,
                config.quotes.trail_single,
            ),
            config.spacing.punctuation.clone(),
        )
    }
}

impl From<&LanguageProfile> for ProfileConfig {
    fn from(profile: &LanguageProfile) -> Self {
        Self {
            metadata: Metadata {
                code: profile.code().to_string(),
                name: profile.name().to_string(),
            },
            quotes: Quotes {
                lead_double: profile.lead_double(),
                trail_double: profile.trail_double(),
                lead_single: profile.lead_single(),
                trail_single: profile.trail_single(),
            },
            spacing: Spacing {
                punctuation: profile.spaced_punctuation().to_vec(),
            },
        }
    }
}
