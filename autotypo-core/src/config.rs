//! Configuration for a normalization run

use crate::error::{Result, TypoError};
use crate::language;
use crate::space::SpaceStyle;

/// Default configuration values
pub mod defaults {
    use crate::space::SpaceStyle;

    /// Language used when none is given
    pub const LANGUAGE: &str = "fr";

    /// Default space style for a language.
    ///
    /// French gets a non-breaking thin space, other languages no space.
    pub fn space_style(code: &str) -> SpaceStyle {
        if is_french(code) {
            SpaceStyle::NonBreakingThin
        } else {
            SpaceStyle::None
        }
    }

    /// Whether existing quotes get their spacing normalized by default
    pub fn replace_existing(code: &str) -> bool {
        is_french(code)
    }

    fn is_french(code: &str) -> bool {
        code.trim().eq_ignore_ascii_case("fr")
    }
}

/// Immutable settings for one scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizerConfig {
    pub(crate) language: String,
    pub(crate) space_style: SpaceStyle,
    pub(crate) replace_existing: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self::for_language(defaults::LANGUAGE)
    }
}

impl NormalizerConfig {
    /// Create a configuration builder
    pub fn builder() -> NormalizerConfigBuilder {
        NormalizerConfigBuilder::default()
    }

    /// Configuration with the per-language defaults
    pub fn for_language(code: &str) -> Self {
        Self {
            language: code.to_string(),
            space_style: defaults::space_style(code),
            replace_existing: defaults::replace_existing(code),
        }
    }

    /// Language code
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Space inserted next to quotes and spaced punctuation
    pub fn space_style(&self) -> SpaceStyle {
        self.space_style
    }

    /// Whether spacing around already curly quotes is normalized too
    pub fn replace_existing(&self) -> bool {
        self.replace_existing
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.language.trim().is_empty() {
            return Err(TypoError::Configuration(
                "language must not be empty".into(),
            ));
        }

        if !language::is_supported(&self.language) {
            return Err(TypoError::UnsupportedLanguage {
                code: self.language.clone(),
            });
        }

        Ok(())
    }
}

/// Fluent builder for [`NormalizerConfig`]
///
/// Options left unset fall back to the defaults of the chosen language.
#[derive(Debug, Default)]
pub struct NormalizerConfigBuilder {
    language: Option<String>,
    space_style: Option<SpaceStyle>,
    replace_existing: Option<bool>,
}

impl NormalizerConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the language by code
    pub fn language(mut self, code: impl Into<String>) -> Self {
        self.language = Some(code.into());
        self
    }

    /// Set the space style
    pub fn space_style(mut self, style: SpaceStyle) -> Self {
        self.space_style = Some(style);
        self
    }

    /// Set whether existing quotes are normalized
    pub fn replace_existing(mut self, replace: bool) -> Self {
        self.replace_existing = Some(replace);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<NormalizerConfig> {
        let language = self
            .language
            .unwrap_or_else(|| defaults::LANGUAGE.to_string());
        let mut config = NormalizerConfig::for_language(&language);

        if let Some(style) = self.space_style {
            config.space_style = style;
        }

        if let Some(replace) = self.replace_existing {
            config.replace_existing = replace;
        }

        config.validate()?;
        Ok(config)
    }
}
