//! Generate config command implementation

use anyhow::{Context, Result};
use autotypo_core::language;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Language code for the new profile
    #[arg(short = 'l', long, value_name = "CODE", required = true)]
    pub language_code: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating language profile template...");
        println!("  Language code: {}", self.language_code);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Profile template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the file to set the quotation marks of your language");
        println!("2. Validate your profile:");
        println!("   autotypo validate -c {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   autotypo process -i input.txt --language-config {}",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template content, starting from the built-in profile when
    /// the code is known
    fn generate_template(&self) -> Result<String> {
        if language::is_supported(&self.language_code) {
            let profile = language::resolve(&self.language_code)?;
            let body = language::to_toml_string(&profile)?;
            return Ok(format!(
                "# Language profile for {} ({}), based on the built-in table\n\n{body}",
                profile.code(),
                profile.name()
            ));
        }

        Ok(format!(
            r#"# Language profile for {code}

[metadata]
code = "{code}"
name = "Custom Language"

# Quotation marks. None of them may be a straight quote or a space.
[quotes]
lead_double = "“"
trail_double = "”"
lead_single = "‘"
trail_single = "’"

# Marks that take a space before them, as in French typography
[spacing]
punctuation = []
# punctuation = [";", "!", "?", ":", "…"]
"#,
            code = self.language_code
        ))
    }
}
