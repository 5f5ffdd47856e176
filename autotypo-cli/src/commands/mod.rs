//! CLI command implementations

use anyhow::Result;
use autotypo_core::{language, SpaceStyle};
use clap::Subcommand;

pub mod generate_config;
pub mod process;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Normalize quotes and punctuation spacing of one text file
    Process(process::ProcessArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate an external language profile
    Validate(validate::ValidateArgs),

    /// Write a language profile template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List built-in language profiles
    Languages,

    /// List space styles
    SpaceStyles,
}

impl Commands {
    /// Run the command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// The listing as printed
    pub fn render(&self) -> String {
        match self {
            ListCommands::Languages => {
                let mut out = String::from("Available languages:\n");
                for profile in language::builtin_profiles() {
                    let glyphs = profile.glyphs();
                    out.push_str(&format!(
                        "  {:<6}{:<22}{} {}  {} {}\n",
                        profile.code(),
                        profile.name(),
                        glyphs.lead_double,
                        glyphs.trail_double,
                        glyphs.lead_single,
                        glyphs.trail_single
                    ));
                }
                out
            }
            ListCommands::SpaceStyles => {
                let mut out = String::from("Available space styles:\n");
                for style in SpaceStyle::ALL {
                    out.push_str(&format!(
                        "  {}  {:<8}{}\n",
                        style.code(),
                        style.name(),
                        style.description()
                    ));
                }
                out
            }
        }
    }
}
