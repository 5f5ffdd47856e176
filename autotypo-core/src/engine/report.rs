//! Warnings, summaries and the observer that receives them

use serde::Serialize;
use std::fmt;

/// Kind of quote inconsistency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningKind {
    /// An opening quote was found while a quote was still open
    MissingClose,
    /// A closing quote was found with no quote open
    MissingOpen,
}

/// A non-fatal quoting inconsistency found during a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuoteWarning {
    /// Offset in the run, at the time of detection, of the offending glyph
    pub position: usize,
    /// What is missing
    pub kind: WarningKind,
}

impl fmt::Display for QuoteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            WarningKind::MissingClose => write!(
                f,
                "text is not consistent: closing double quote missing before position {}",
                self.position
            ),
            WarningKind::MissingOpen => write!(
                f,
                "text is not consistent: opening double quote missing before position {}",
                self.position
            ),
        }
    }
}

/// End-of-scan summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    /// Number of replacements and spacing edits made
    pub change_count: usize,
}

/// Everything a scan reports
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    /// Number of replacements and spacing edits made
    pub change_count: usize,
    /// Inconsistencies, in scan order
    pub warnings: Vec<QuoteWarning>,
}

impl ScanReport {
    /// Whether the scan found no inconsistency
    pub fn is_consistent(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Receives scan events as they happen
pub trait ScanObserver {
    /// Called once per inconsistency, in scan order
    fn on_warning(&mut self, warning: &QuoteWarning);

    /// Called exactly once when the scan completes
    fn on_finish(&mut self, _summary: &ScanSummary) {}
}

/// Observer that collects everything into a [`ScanReport`]
#[derive(Debug, Default)]
pub struct ReportCollector {
    report: ScanReport,
}

impl ReportCollector {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the collected report
    pub fn into_report(self) -> ScanReport {
        self.report
    }
}

impl ScanObserver for ReportCollector {
    fn on_warning(&mut self, warning: &QuoteWarning) {
        self.report.warnings.push(*warning);
    }

    fn on_finish(&mut self, summary: &ScanSummary) {
        self.report.change_count = summary.change_count;
    }
}

impl<O: ScanObserver + ?Sized> ScanObserver for &mut O {
    fn on_warning(&mut self, warning: &QuoteWarning) {
        (**self).on_warning(warning);
    }

    fn on_finish(&mut self, summary: &ScanSummary) {
        (**self).on_finish(summary);
    }
}
