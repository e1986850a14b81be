use std::io::{BufRead, Write};
use std::path::PathBuf;

use bytepair::Tokenizer;

use crate::commands::{open_input, open_output};
use crate::tokenizer_source::TokenizerArgs;

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    tokenizer: TokenizerArgs,

    /// Input text file; reads stdin when absent.
    #[clap(long)]
    input: Option<PathBuf>,

    /// Output id file; writes stdout when absent.
    #[clap(long)]
    output: Option<PathBuf>,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tokenizer = self.tokenizer.load_tokenizer()?;

        let mut reader = open_input(self.input.as_ref())?;
        let mut writer = open_output(self.output.as_ref())?;

        run_encode(&mut reader, &mut writer, &tokenizer)
    }
}

fn run_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    tokenizer: &Tokenizer,
) -> Result<(), Box<dyn std::error::Error>> {
    // Read lines, but keep the end-of-line characters; each input line
    // becomes one space-separated id line.
    let mut line = String::new();
    while reader.read_line(&mut line)? > 0 {
        let tokens = tokenizer.encode(&line)?;

        for (idx, token) in tokens.iter().enumerate() {
            write!(writer, "{}{}", if idx == 0 { "" } else { " " }, token)?;
        }
        writeln!(writer)?;
        writer.flush()?;

        line.clear();
    }
    Ok(())
}
