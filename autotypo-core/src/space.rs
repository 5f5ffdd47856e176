//! Space classification
//!
//! The normalizer only knows four space variants. Anything else, tabs and
//! line breaks included, counts as a regular character.

use crate::error::TypoError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// U+0020 SPACE
pub const SPACE: char = ' ';
/// U+00A0 NO-BREAK SPACE
pub const NON_BREAKING_SPACE: char = '\u{00A0}';
/// U+202F NARROW NO-BREAK SPACE
pub const NON_BREAKING_THIN_SPACE: char = '\u{202F}';
/// U+2009 THIN SPACE
pub const THIN_SPACE: char = '\u{2009}';

/// Check whether `ch` is one of the recognized space variants
#[inline]
pub fn is_space(ch: char) -> bool {
    matches!(
        ch,
        SPACE | NON_BREAKING_SPACE | NON_BREAKING_THIN_SPACE | THIN_SPACE
    )
}

/// Space inserted next to quotes and spaced punctuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpaceStyle {
    /// Insert nothing
    #[default]
    None,
    /// U+202F
    #[serde(alias = "nbthin")]
    NonBreakingThin,
    /// U+00A0
    #[serde(alias = "nbsp")]
    NonBreaking,
    /// U+2009
    Thin,
}

impl SpaceStyle {
    /// All styles, in the order of their numeric codes
    pub const ALL: [SpaceStyle; 4] = [
        SpaceStyle::None,
        SpaceStyle::NonBreakingThin,
        SpaceStyle::NonBreaking,
        SpaceStyle::Thin,
    ];

    /// The literal character this style inserts, if any
    pub fn character(self) -> Option<char> {
        match self {
            SpaceStyle::None => None,
            SpaceStyle::NonBreakingThin => Some(NON_BREAKING_THIN_SPACE),
            SpaceStyle::NonBreaking => Some(NON_BREAKING_SPACE),
            SpaceStyle::Thin => Some(THIN_SPACE),
        }
    }

    /// Number of scanning units the style inserts (0 or 1)
    pub fn len(self) -> usize {
        usize::from(self.character().is_some())
    }

    /// True for [`SpaceStyle::None`]
    pub fn is_empty(self) -> bool {
        self.character().is_none()
    }

    /// Short name accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            SpaceStyle::None => "none",
            SpaceStyle::NonBreakingThin => "nbthin",
            SpaceStyle::NonBreaking => "nbsp",
            SpaceStyle::Thin => "thin",
        }
    }

    /// Numeric code, `0` to `3`
    pub fn code(self) -> u8 {
        match self {
            SpaceStyle::None => 0,
            SpaceStyle::NonBreakingThin => 1,
            SpaceStyle::NonBreaking => 2,
            SpaceStyle::Thin => 3,
        }
    }

    /// Human readable description
    pub fn description(self) -> &'static str {
        match self {
            SpaceStyle::None => "no space added",
            SpaceStyle::NonBreakingThin => "non-breaking thin space (U+202F)",
            SpaceStyle::NonBreaking => "non-breaking space (U+00A0)",
            SpaceStyle::Thin => "thin space (U+2009)",
        }
    }
}

impl fmt::Display for SpaceStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SpaceStyle {
    type Err = TypoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "0" | "none" => Ok(SpaceStyle::None),
            "1" | "nbthin" | "non-breaking-thin" => Ok(SpaceStyle::NonBreakingThin),
            "2" | "nbsp" | "non-breaking" => Ok(SpaceStyle::NonBreaking),
            "3" | "thin" => Ok(SpaceStyle::Thin),
            other => Err(TypoError::InvalidSpaceStyle(other.to_string())),
        }
    }
}
