//! Scan observer that surfaces warnings through the log facade

use autotypo_core::{QuoteWarning, ScanObserver, ScanSummary};

/// Logs each warning as it occurs and keeps it for the output
#[derive(Debug, Default)]
pub struct WarningReporter {
    source: String,
    warnings: Vec<QuoteWarning>,
}

impl WarningReporter {
    /// Create a reporter for the named input
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            warnings: Vec::new(),
        }
    }

    /// Warnings seen so far
    pub fn warnings(&self) -> &[QuoteWarning] {
        &self.warnings
    }

    /// Take the collected warnings
    pub fn into_warnings(self) -> Vec<QuoteWarning> {
        self.warnings
    }
}

impl ScanObserver for WarningReporter {
    fn on_warning(&mut self, warning: &QuoteWarning) {
        log::warn!("{}: {warning}", self.source);
        self.warnings.push(*warning);
    }

    fn on_finish(&mut self, summary: &ScanSummary) {
        log::info!(
            "{}: {} changes, {} warnings",
            self.source,
            summary.change_count,
            self.warnings.len()
        );
    }
}
