//! Per-scan mutable state

use crate::space::SPACE;
use crate::url_guard::UrlGuard;

/// Which double quote the scanner expects next
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteParity {
    /// No quote is open
    #[default]
    ExpectOpen,
    /// A quote is open and awaits its closing mark
    ExpectClose,
}

/// State threaded through one scan and dropped at its end
#[derive(Debug, Clone)]
pub struct ScanState {
    /// Offset of the character under the scanner
    pub position: usize,
    /// Open/close alternation
    pub parity: QuoteParity,
    /// URL tracking for punctuation spacing
    pub url_guard: UrlGuard,
    /// Character read at the previous step, before any edit made there.
    /// Starts as a space, the virtual boundary before the run.
    pub previous: char,
    /// Number of edits so far
    pub change_count: usize,
}

impl ScanState {
    /// State at the start of a run
    pub fn new() -> Self {
        Self {
            position: 0,
            parity: QuoteParity::ExpectOpen,
            url_guard: UrlGuard::new(),
            previous: SPACE,
            change_count: 0,
        }
    }

    /// Move past the current character plus `shift` units inserted before it
    /// (negative when units were removed)
    pub(crate) fn advance(&mut self, current: char, shift: isize) {
        self.previous = current;
        self.position = self.position.saturating_add_signed(1 + shift);
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}
