//! Output formatting module

use anyhow::Result;
use autotypo_core::{QuoteWarning, ScanReport};
use serde::{Deserialize, Serialize};
use std::io::Write;

pub mod json;
pub mod reporter;
pub mod text;

pub use json::JsonFormatter;
pub use reporter::WarningReporter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The normalized text, nothing else
    #[default]
    Text,
    /// JSON object with the text, the change count and the warnings
    Json,
}

/// The result of one normalization, as handed to a formatter
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedDocument {
    /// Normalized text
    pub text: String,
    /// Code of the language profile used
    pub language: String,
    /// Number of changes made
    pub change_count: usize,
    /// Inconsistencies found during the scan
    pub warnings: Vec<QuoteWarning>,
}

impl NormalizedDocument {
    /// Bundle a normalized text with its report
    pub fn new(text: String, language: impl Into<String>, report: ScanReport) -> Self {
        Self {
            text,
            language: language.into(),
            change_count: report.change_count,
            warnings: report.warnings,
        }
    }
}

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format and output a normalized document
    fn format_document(&mut self, document: &NormalizedDocument) -> Result<()>;

    /// Flush the output
    fn finish(&mut self) -> Result<()>;
}

/// Create the formatter for `format` over `writer`
pub fn formatter_for<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    pretty_json: bool,
) -> Box<dyn OutputFormatter + 'a> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
    }
}
