//! `autotypo` command-line entry point

use anyhow::Result;
use autotypo_cli::commands::Commands;
use clap::Parser;

/// Typographic quote and punctuation spacing normalizer
#[derive(Debug, Parser)]
#[command(name = "autotypo", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
