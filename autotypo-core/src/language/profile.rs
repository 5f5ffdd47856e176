//! Language profile value type

use crate::error::{Result, TypoError};
use crate::space::is_space;
use serde::Serialize;

/// The four quotation glyphs of a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuoteGlyphs {
    /// Opening double quote
    pub lead_double: char,
    /// Closing double quote
    pub trail_double: char,
    /// Opening single quote
    pub lead_single: char,
    /// Closing single quote, also used as apostrophe
    pub trail_single: char,
}

impl QuoteGlyphs {
    /// Build a glyph set from its four characters
    pub const fn new(
        lead_double: char,
        trail_double: char,
        lead_single: char,
        trail_single: char,
    ) -> Self {
        Self {
            lead_double,
            trail_double,
            lead_single,
            trail_single,
        }
    }

    fn as_array(&self) -> [char; 4] {
        [
            self.lead_double,
            self.trail_double,
            self.lead_single,
            self.trail_single,
        ]
    }
}

/// Quotation and spacing conventions for one language
///
/// Profiles are immutable once built. The scan reads exactly one of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageProfile {
    code: String,
    name: String,
    glyphs: QuoteGlyphs,
    spaced_punctuation: Vec<char>,
}

impl LanguageProfile {
    /// Create a profile
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        glyphs: QuoteGlyphs,
        spaced_punctuation: Vec<char>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            glyphs,
            spaced_punctuation,
        }
    }

    /// Language code, e.g. `fr` or `de-g`
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human readable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The glyph set
    pub fn glyphs(&self) -> QuoteGlyphs {
        self.glyphs
    }

    /// Opening double quote
    pub fn lead_double(&self) -> char {
        self.glyphs.lead_double
    }

    /// Closing double quote
    pub fn trail_double(&self) -> char {
        self.glyphs.trail_double
    }

    /// Opening single quote
    pub fn lead_single(&self) -> char {
        self.glyphs.lead_single
    }

    /// Closing single quote
    pub fn trail_single(&self) -> char {
        self.glyphs.trail_single
    }

    /// Marks that take a space before them in this language
    pub fn spaced_punctuation(&self) -> &[char] {
        &self.spaced_punctuation
    }

    /// Whether `ch` takes a space before it
    #[inline]
    pub fn is_spaced_punctuation(&self, ch: char) -> bool {
        self.spaced_punctuation.contains(&ch)
    }

    /// Whether opening and closing double quotes share one glyph (”…”)
    pub fn is_symmetric_double(&self) -> bool {
        self.glyphs.lead_double == self.glyphs.trail_double
    }

    /// Check that the profile can drive a scan
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(TypoError::InvalidProfile(
                "language code must not be empty".into(),
            ));
        }

        for glyph in self.glyphs.as_array() {
            if is_straight_quote(glyph) || is_space(glyph) {
                return Err(TypoError::InvalidProfile(format!(
                    "quote glyph {glyph:?} must not be a straight quote or a space"
                )));
            }
        }

        if let Some(&bad) = self
            .spaced_punctuation
            .iter()
            .find(|&&ch| is_straight_quote(ch) || is_space(ch))
        {
            return Err(TypoError::InvalidProfile(format!(
                "spaced punctuation {bad:?} must not be a straight quote or a space"
            )));
        }

        Ok(())
    }
}

/// `"` or `'`
#[inline]
pub(crate) fn is_straight_quote(ch: char) -> bool {
    matches!(ch, '"' | '\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn french() -> LanguageProfile {
        LanguageProfile::new(
            "fr",
            "French",
            QuoteGlyphs::new('«', '»', '‘', '’'),
            vec!['»', ';', '!', '?', ':', '…'],
        )
    }

    #[test]
    fn test_accessors() {
        let profile = french();
        assert_eq!(profile.code(), "fr");
        assert_eq!(profile.lead_double(), '«');
        assert_eq!(profile.trail_double(), '»');
        assert_eq!(profile.lead_single(), '‘');
        assert_eq!(profile.trail_single(), '’');
        assert!(profile.is_spaced_punctuation('!'));
        assert!(!profile.is_spaced_punctuation('.'));
        assert!(!profile.is_symmetric_double());
        assert!(profile.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_straight_glyphs() {
        let profile = LanguageProfile::new(
            "xx",
            "Broken",
            QuoteGlyphs::new('"', '"', '‘', '’'),
            Vec::new(),
        );
        assert!(matches!(
            profile.validate(),
            Err(TypoError::InvalidProfile(_))
        ));
    }

    #[test]
    fn test_validate_rejects_spaced_space() {
        let profile = LanguageProfile::new(
            "xx",
            "Broken",
            QuoteGlyphs::new('«', '»', '‹', '›'),
            vec!['!', '\u{00A0}'],
        );
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_code() {
        let profile = LanguageProfile::new(" ", "", QuoteGlyphs::new('«', '»', '‹', '›'), vec![]);
        assert!(profile.validate().is_err());
    }
}
