mod decode;
mod encode;

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

/// Top-level commands.
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode UTF-8 text lines into token ids.
    Encode(encode::EncodeArgs),

    /// Decode lines of whitespace-separated token ids into text.
    Decode(decode::DecodeArgs),
}

impl Commands {
    /// Run the selected command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(args) => args.run(),
            Commands::Decode(args) => args.run(),
        }
    }
}

/// Open the line source for a command; `None` reads stdin.
pub(crate) fn open_input(path: Option<&PathBuf>) -> std::io::Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(std::io::stdin().lock())),
    })
}

/// Open the line sink for a command; `None` writes stdout.
pub(crate) fn open_output(path: Option<&PathBuf>) -> std::io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(std::io::stdout().lock())),
    })
}
