//! # Error Types

/// Errors from bytepair operations.
#[derive(Debug, thiserror::Error)]
pub enum BytepairError {
    /// The tokenizer JSON document failed to parse.
    #[error("tokenizer JSON parse failure: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The tokenizer JSON has no `model.vocab` table.
    #[error("tokenizer JSON has no model.vocab table")]
    VocabMissing,

    /// A split pattern failed to compile, or the engine failed at match time.
    #[error("split pattern failure: {0}")]
    Regex(#[from] fancy_regex::Error),

    /// A required vocabulary entry is absent.
    #[error("vocabulary has no entry for {entry}")]
    TokenNotFound {
        /// Description of the missing entry (token text or id).
        entry: String,
    },

    /// The input to an operation is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// The tokenizer JSON uses a pre-tokenizer this crate does not support.
    ///
    /// Fatal rather than ignored: silently dropping a pre-tokenizer would
    /// produce wrong encodings.
    #[error("unsupported pre-tokenizer type {kind:?}")]
    UnsupportedType {
        /// The unrecognized `type` value.
        kind: String,
    },
}

/// Result type for bytepair operations.
pub type BpResult<T> = core::result::Result<T, BytepairError>;
