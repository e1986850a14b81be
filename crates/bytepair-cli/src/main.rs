//! # `bytepair-cli`

mod commands;
mod tokenizer_source;

use clap::Parser;
use commands::Commands;

/// bytepair-cli
#[derive(clap::Parser, Debug)]
pub struct Args {
    /// Silence log output.
    #[clap(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Warnings by default; each -v steps the level up.
    stderrlog::new()
        .quiet(args.quiet)
        .verbosity(1 + usize::from(args.verbose))
        .init()?;

    args.command.run()
}
