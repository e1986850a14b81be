//! # Tokenizer Handle

use core::fmt::Debug;

use crate::alphabet::ByteAlphabet;
use crate::errors::BpResult;
use crate::pretokenizer::PreTokenizerChain;
use crate::segmentation::SpecialSplitter;
use crate::types::TokenId;
use crate::vocab::{MergeTable, SpecialVocab, TokenVocab};

/// Byte-level BPE tokenizer.
///
/// Owns every index built by [`Tokenizer::from_json`]: the byte alphabet,
/// the vocabulary, the merge table, the special tokens and their scanner,
/// and the pre-tokenizer chain. All state is immutable after construction,
/// so a shared `&Tokenizer` supports concurrent [`encode`](Self::encode) and
/// [`decode`](Self::decode) calls.
pub struct Tokenizer {
    /// Byte/code-point alphabet.
    pub(crate) alphabet: ByteAlphabet,

    /// Token vocabulary: text map + id array.
    pub(crate) vocab: TokenVocab,

    /// Merge rules, indexed by left token.
    pub(crate) merges: MergeTable,

    /// Special-token map.
    pub(crate) specials: SpecialVocab,

    /// Literal scanner over the specials.
    pub(crate) splitter: SpecialSplitter,

    /// Pre-tokenizer chain.
    pub(crate) chain: PreTokenizerChain,

    /// Byte value to byte-singleton token id, precomputed for byte expansion.
    pub(crate) byte_tokens: [Option<TokenId>; 256],
}

impl Debug for Tokenizer {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("vocab_size", &self.vocab.len())
            .field("merge_rules", &self.merges.rule_count())
            .field("specials", &self.specials.len())
            .field("pre_tokenizers", &self.chain.len())
            .finish()
    }
}

impl Tokenizer {
    /// Build a tokenizer from a `tokenizer.json` document.
    ///
    /// ## Arguments
    /// * `json` - The UTF-8 JSON text.
    ///
    /// ## Returns
    /// A fully populated tokenizer, or the first construction error.
    pub fn from_json(json: &str) -> BpResult<Self> {
        crate::loader::load(json)
    }

    /// The id-array length (`max_id + 1`, specials included).
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Look up the id for an exact token text.
    ///
    /// Checks the vocabulary first, then the special tokens.
    ///
    /// ## Arguments
    /// * `text` - The token text.
    ///
    /// ## Returns
    /// An `Option` containing the id.
    pub fn token_to_id(
        &self,
        text: &str,
    ) -> Option<TokenId> {
        self.vocab
            .lookup(text.as_bytes())
            .or_else(|| self.specials.lookup_token(text.as_bytes()))
    }

    /// Look up the token text at an id.
    ///
    /// ## Arguments
    /// * `id` - The token id.
    ///
    /// ## Returns
    /// An `Option` containing the text (vocabulary or special).
    pub fn id_to_token(
        &self,
        id: TokenId,
    ) -> Option<&str> {
        self.vocab.text(id)
    }
}
