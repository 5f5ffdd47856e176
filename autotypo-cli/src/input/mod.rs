//! Input handling module

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_pattern;

use anyhow::{Context, Result};
use autotypo_core::select_single;
use std::path::PathBuf;

/// Where the document to normalize comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input, selected with `-`
    Stdin,
    /// The single file a pattern resolved to
    File(PathBuf),
}

impl InputSource {
    /// Resolve the `--input` argument.
    ///
    /// A pattern must match exactly one file.
    pub fn resolve(input: &str) -> Result<Self> {
        if input == "-" {
            return Ok(Self::Stdin);
        }

        let files = resolve_pattern(input)?;
        let file = select_single(files)
            .with_context(|| format!("Input '{input}' must match exactly one file"))?;
        Ok(Self::File(file))
    }

    /// Read the whole document
    pub fn read(&self) -> Result<String> {
        match self {
            Self::Stdin => FileReader::read_stdin(),
            Self::File(path) => FileReader::read_text(path),
        }
    }

    /// Name used in log messages
    pub fn display_name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}
