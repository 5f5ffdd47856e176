//! Character-addressable text runs
//!
//! The engine never owns the text it edits. It goes through [`TextRun`],
//! which a host implements over whatever storage it has. [`CharRun`] is the
//! in-memory implementation used by the CLI and the tests.

use crate::error::{Result, TypoError};
use std::fmt;

/// Read/write access to a run of characters addressed by offset
pub trait TextRun {
    /// Current length in scanning units
    fn len(&self) -> usize;

    /// Whether the run is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Character at `offset`, `None` past the end
    fn char_at(&self, offset: usize) -> Option<char>;

    /// Remove the unit at `offset`
    fn delete_char(&mut self, offset: usize) -> Result<()>;

    /// Insert `text` before `offset`; `offset == len()` appends
    fn insert_text(&mut self, offset: usize, text: &str) -> Result<()>;

    /// Replace the unit at `offset` with `text` as one mutation
    fn replace_char(&mut self, offset: usize, text: &str) -> Result<()> {
        self.delete_char(offset)?;
        self.insert_text(offset, text)
    }
}

/// A text run backed by a vector of chars
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharRun {
    chars: Vec<char>,
}

impl CharRun {
    /// Create a run from text
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Borrow the characters
    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Consume the run into a string
    pub fn into_string(self) -> String {
        self.chars.into_iter().collect()
    }

    fn check(&self, offset: usize, limit: usize) -> Result<()> {
        if offset > limit {
            return Err(TypoError::OffsetOutOfRange {
                offset,
                len: self.chars.len(),
            });
        }
        Ok(())
    }
}

impl From<&str> for CharRun {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for CharRun {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl fmt::Display for CharRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}

impl TextRun for CharRun {
    fn len(&self) -> usize {
        self.chars.len()
    }

    fn char_at(&self, offset: usize) -> Option<char> {
        self.chars.get(offset).copied()
    }

    fn delete_char(&mut self, offset: usize) -> Result<()> {
        if offset >= self.chars.len() {
            return Err(TypoError::OffsetOutOfRange {
                offset,
                len: self.chars.len(),
            });
        }
        self.chars.remove(offset);
        Ok(())
    }

    fn insert_text(&mut self, offset: usize, text: &str) -> Result<()> {
        self.check(offset, self.chars.len())?;
        self.chars.splice(offset..offset, text.chars());
        Ok(())
    }

    fn replace_char(&mut self, offset: usize, text: &str) -> Result<()> {
        if offset >= self.chars.len() {
            return Err(TypoError::OffsetOutOfRange {
                offset,
                len: self.chars.len(),
            });
        }
        self.chars.splice(offset..=offset, text.chars());
        Ok(())
    }
}
