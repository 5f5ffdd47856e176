//! URL detection for punctuation spacing
//!
//! A token is considered a URL once the scanner sees `p:/`, the tail of
//! `http://` or `ftp://`. Any other `p:/` triple matches too.

/// Tracks whether the scan position is inside a URL-like token
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrlGuard {
    in_url: bool,
}

impl UrlGuard {
    /// Create a guard outside of any URL
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the guard a `:` candidate with its neighbours.
    ///
    /// Once inside a URL the guard stays there until [`reset`](Self::reset).
    pub fn observe(&mut self, prev: char, ch: char, next: char) {
        if !self.in_url {
            self.in_url = ch == ':' && prev == 'p' && next == '/';
        }
    }

    /// Leave the URL, called on every recognized space
    pub fn reset(&mut self) {
        self.in_url = false;
    }

    /// Whether the scan is inside a URL
    pub fn in_url(&self) -> bool {
        self.in_url
    }

    /// Whether spacing before the mark at the current position is suppressed.
    ///
    /// A mark that ends its token is sentence punctuation following the URL
    /// and is not suppressed.
    pub fn suppresses(&self, ends_token: bool) -> bool {
        self.in_url && !ends_token
    }
}
