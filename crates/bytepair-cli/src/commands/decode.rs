use std::io::{BufRead, Write};
use std::path::PathBuf;

use bytepair::{TokenId, Tokenizer};

use crate::commands::{open_input, open_output};
use crate::tokenizer_source::TokenizerArgs;

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    tokenizer: TokenizerArgs,

    /// Input id file; reads stdin when absent.
    #[clap(long)]
    input: Option<PathBuf>,

    /// Output text file; writes stdout when absent.
    #[clap(long)]
    output: Option<PathBuf>,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.tokenizer.load_tokenizer()?;

        let mut reader = open_input(self.input.as_ref())?;
        let mut writer = open_output(self.output.as_ref())?;

        run_decode(&mut reader, &mut writer, &tokenizer)
    }
}

fn run_decode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &Tokenizer,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let tokens = line
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<TokenId>, _>>()?;

        let text = tokenizer.decode(&tokens)?;

        write!(writer, "{}", text)?;
        writer.flush()?;
    }
    Ok(())
}
