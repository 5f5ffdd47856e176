//! Error types for the normalizer
//!
//! Every variant here is a pre-scan failure or an adapter contract
//! violation. Inconsistent quoting found during a scan is not an error;
//! it is reported as a [`QuoteWarning`](crate::QuoteWarning).

use thiserror::Error;

/// Errors raised by the normalizer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypoError {
    /// The language code has no profile in the table
    #[error("language '{code}' not supported")]
    UnsupportedLanguage {
        /// The requested language code
        code: String,
    },

    /// Nothing was selected for processing
    #[error("no text run selected")]
    NoSelection,

    /// More than one text run was selected
    #[error("{count} text runs selected, exactly one is required")]
    AmbiguousSelection {
        /// Number of candidates found
        count: usize,
    },

    /// The space style could not be parsed
    #[error("invalid space style: {0}")]
    InvalidSpaceStyle(String),

    /// An external language profile failed to parse or validate
    #[error("invalid language profile: {0}")]
    InvalidProfile(String),

    /// Generic configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A text run adapter was asked for an offset past its end
    #[error("offset {offset} out of range for run of length {len}")]
    OffsetOutOfRange {
        /// Requested offset
        offset: usize,
        /// Length of the run at the time of the request
        len: usize,
    },
}

/// Result type for normalizer operations
pub type Result<T> = std::result::Result<T, TypoError>;

/// Pick the single candidate out of a selection.
///
/// Zero candidates fail with [`TypoError::NoSelection`], more than one with
/// [`TypoError::AmbiguousSelection`].
pub fn select_single<T>(candidates: Vec<T>) -> Result<T> {
    let count = candidates.len();
    let mut iter = candidates.into_iter();
    match (iter.next(), count) {
        (None, _) => Err(TypoError::NoSelection),
        (Some(only), 1) => Ok(only),
        (Some(_), count) => Err(TypoError::AmbiguousSelection { count }),
    }
}
