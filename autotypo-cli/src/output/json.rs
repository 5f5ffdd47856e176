//! JSON output formatter

use super::{NormalizedDocument, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// JSON formatter - outputs the document as one JSON object
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self { writer, pretty }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &NormalizedDocument) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, document)?;
        } else {
            serde_json::to_writer(&mut self.writer, document)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
