//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve a file pattern to the files it matches, sorted and deduplicated.
///
/// An empty result is not an error here; the caller decides how many
/// matches it accepts.
pub fn resolve_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;

    let mut files = Vec::new();
    for path_result in paths {
        let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

        if path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    files.dedup();
    log::debug!("pattern '{pattern}' matched {} files", files.len());

    Ok(files)
}
