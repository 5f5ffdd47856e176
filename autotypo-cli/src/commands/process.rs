//! Process command implementation

use crate::config::CliConfig;
use crate::input::InputSource;
use crate::language_source::LanguageSource;
use crate::output::{formatter_for, NormalizedDocument, OutputFormat, WarningReporter};
use anyhow::{Context, Result};
use autotypo_core::config::defaults;
use autotypo_core::{CharRun, Normalizer, NormalizerConfig, ScanReport, SpaceStyle};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input file or pattern matching exactly one file, `-` for stdin
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Language code of a built-in profile (see `list languages`)
    #[arg(short, long, value_name = "CODE", conflicts_with = "language_config")]
    pub language: Option<String>,

    /// External language profile file
    #[arg(long, value_name = "FILE")]
    pub language_config: Option<PathBuf>,

    /// Space to insert: none, nbthin, nbsp, thin, or 0 to 3
    #[arg(short, long, value_name = "STYLE")]
    pub space_style: Option<SpaceStyle>,

    /// Also normalize spacing around quotes that are already curly
    #[arg(long, conflicts_with = "keep_existing")]
    pub replace_existing: bool,

    /// Leave spacing around existing curly quotes alone
    #[arg(long)]
    pub keep_existing: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress the summary and warnings
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let normalizer = self.build_normalizer(&config)?;
        let source = InputSource::resolve(&self.input)?;
        let text = source.read()?;

        let (text, report) = Self::normalize(&normalizer, &source, &text)?;
        let change_count = report.change_count;
        let document = NormalizedDocument::new(text, normalizer.profile().code(), report);

        let format = self.format.unwrap_or(config.output.default_format);
        self.write_output(&document, format, config.output.pretty_json)?;

        if !self.quiet {
            eprintln!("{change_count} replacements have occurred");
        }

        Ok(())
    }

    /// Where the language profile comes from: flags first, then the config file
    pub fn language_source(&self, config: &CliConfig) -> LanguageSource {
        if let Some(path) = &self.language_config {
            LanguageSource::External { path: path.clone() }
        } else if let Some(code) = &self.language {
            LanguageSource::BuiltIn(code.clone())
        } else {
            LanguageSource::BuiltIn(config.processing.default_language.clone())
        }
    }

    /// Merge flags, config file and language defaults into a normalizer
    pub fn build_normalizer(&self, config: &CliConfig) -> Result<Normalizer> {
        let source = self.language_source(config);
        log::info!("Language: {}", source.display_name());

        let replace_existing = if self.replace_existing {
            Some(true)
        } else if self.keep_existing {
            Some(false)
        } else {
            config.processing.replace_existing
        };
        let space_style = self.space_style.or(config.processing.space_style);

        match source {
            LanguageSource::BuiltIn(code) => {
                let mut builder = NormalizerConfig::builder().language(code);
                if let Some(style) = space_style {
                    builder = builder.space_style(style);
                }
                if let Some(replace) = replace_existing {
                    builder = builder.replace_existing(replace);
                }
                Ok(Normalizer::new(builder.build()?)?)
            }
            external @ LanguageSource::External { .. } => {
                let profile = external.load()?;
                let space_style =
                    space_style.unwrap_or_else(|| defaults::space_style(profile.code()));
                let replace_existing = replace_existing
                    .unwrap_or_else(|| defaults::replace_existing(profile.code()));
                Ok(Normalizer::with_profile(
                    profile,
                    space_style,
                    replace_existing,
                )?)
            }
        }
    }

    fn normalize(
        normalizer: &Normalizer,
        source: &InputSource,
        text: &str,
    ) -> Result<(String, ScanReport)> {
        let mut run = CharRun::new(text);
        let mut reporter = WarningReporter::new(source.display_name());

        let summary = normalizer
            .normalize_with(&mut run, &mut reporter)
            .with_context(|| format!("Failed to normalize {}", source.display_name()))?;

        let report = ScanReport {
            change_count: summary.change_count,
            warnings: reporter.into_warnings(),
        };
        Ok((run.into_string(), report))
    }

    fn write_output(
        &self,
        document: &NormalizedDocument,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<()> {
        let writer: Box<dyn Write> = match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?,
            )),
            None => Box::new(io::stdout().lock()),
        };

        let mut formatter = formatter_for(format, writer, pretty_json);
        formatter.format_document(document)?;
        formatter.finish()
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A second initialization only happens in tests
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> ProcessArgs {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: ProcessArgs,
        }

        let mut argv = vec!["process", "-i", "input.txt"];
        argv.extend_from_slice(extra);
        Wrapper::parse_from(argv).args
    }

    #[test]
    fn test_french_defaults() {
        let normalizer = args(&[]).build_normalizer(&CliConfig::default()).unwrap();
        assert_eq!(normalizer.profile().code(), "fr");
        assert_eq!(normalizer.space_style(), SpaceStyle::NonBreakingThin);
        assert!(normalizer.replace_existing());
    }

    #[test]
    fn test_other_language_defaults() {
        let normalizer = args(&["-l", "en"])
            .build_normalizer(&CliConfig::default())
            .unwrap();
        assert_eq!(normalizer.space_style(), SpaceStyle::None);
        assert!(!normalizer.replace_existing());
    }

    #[test]
    fn test_flags_override_config_file() {
        let config = CliConfig::from_toml_str(
            "[processing]\ndefault_language = \"de\"\nspace_style = \"thin\"\nreplace_existing = true\n",
        )
        .unwrap();

        let from_file = args(&[]).build_normalizer(&config).unwrap();
        assert_eq!(from_file.profile().code(), "de");
        assert_eq!(from_file.space_style(), SpaceStyle::Thin);
        assert!(from_file.replace_existing());

        let from_flags = args(&["-l", "en", "-s", "2", "--keep-existing"])
            .build_normalizer(&config)
            .unwrap();
        assert_eq!(from_flags.profile().code(), "en");
        assert_eq!(from_flags.space_style(), SpaceStyle::NonBreaking);
        assert!(!from_flags.replace_existing());
    }

    #[test]
    fn test_unsupported_language_fails_before_input() {
        let result = args(&["-l", "tlh"]).build_normalizer(&CliConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_language_source_precedence() {
        let config = CliConfig::default();
        assert_eq!(
            args(&[]).language_source(&config),
            LanguageSource::BuiltIn("fr".to_string())
        );
        assert_eq!(
            args(&["--language-config", "p.toml"]).language_source(&config),
            LanguageSource::External {
                path: PathBuf::from("p.toml")
            }
        );
    }
}
