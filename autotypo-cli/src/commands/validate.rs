//! Validate command implementation

use crate::error::CliError;
use anyhow::Result;
use autotypo_core::language;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to language profile file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub language_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating language profile: {}",
            self.language_config.display()
        );

        match language::from_file(&self.language_config) {
            Ok(profile) => {
                let glyphs = profile.glyphs();
                println!("✓ Profile is valid!");
                println!("  Language code: {}", profile.code());
                println!("  Language name: {}", profile.name());
                println!(
                    "  Double quotes: {} {}",
                    glyphs.lead_double, glyphs.trail_double
                );
                println!(
                    "  Single quotes: {} {}",
                    glyphs.lead_single, glyphs.trail_single
                );
                if !profile.spaced_punctuation().is_empty() {
                    let marks: Vec<String> = profile
                        .spaced_punctuation()
                        .iter()
                        .map(char::to_string)
                        .collect();
                    println!("  Spaced punctuation: {}", marks.join(" "));
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Profile is invalid!");
                println!("  Error: {e}");
                Err(CliError::ValidationFailed(e.to_string()).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            language_config: PathBuf::from("test.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_profile() {
        let toml_content = r#"
[metadata]
code = "test"
name = "Test Language"

[quotes]
lead_double = "«"
trail_double = "»"
lead_single = "‹"
trail_single = "›"

[spacing]
punctuation = ["!", "?"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            language_config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_profile() {
        let toml_content = r#"
[metadata]
code = ""
name = "Test"

[quotes]
lead_double = "«"
trail_double = "»"
lead_single = "‹"
trail_single = "›"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            language_config: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ValidationFailed(_))
        ));
    }
}
