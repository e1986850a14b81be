use bytepair::Tokenizer;

/// Tokenizer selection arg group.
#[derive(clap::Args, Debug)]
pub struct TokenizerArgs {
    /// Path to a `tokenizer.json` file.
    #[clap(long)]
    pub tokenizer: String,
}

impl TokenizerArgs {
    /// Read and build the tokenizer.
    pub fn load_tokenizer(&self) -> Result<Tokenizer, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(&self.tokenizer)?;
        let tokenizer = Tokenizer::from_json(&json)?;

        log::info!("loaded {}: {:?}", self.tokenizer, tokenizer);

        Ok(tokenizer)
    }
}
