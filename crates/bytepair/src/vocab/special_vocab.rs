//! # Special Words Vocabulary

use crate::types::{SpanTokenMap, TokenId};

/// Special-token vocabulary as a dictionary map of `{ Vec<u8> -> TokenId }`.
///
/// Special tokens are matched as literal substrings *before* any
/// pre-tokenization; they never participate in BPE merging.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct SpecialVocab {
    /// Map of `{ Vec<u8> -> TokenId }`.
    pub span_map: SpanTokenMap,
}

impl From<SpanTokenMap> for SpecialVocab {
    fn from(span_map: SpanTokenMap) -> Self {
        Self::from_map(span_map)
    }
}

impl SpecialVocab {
    /// Create a new special words vocab.
    ///
    /// ## Arguments
    /// * `span_map` - A mapping of byte spans to tokens.
    ///
    /// ## Returns
    /// A new `SpecialVocab` instance.
    pub fn from_map(span_map: SpanTokenMap) -> Self {
        Self { span_map }
    }

    /// Get the length of the special words vocab.
    pub fn len(&self) -> usize {
        self.span_map.len()
    }

    /// Returns `true` if the special words vocab contains no words.
    pub fn is_empty(&self) -> bool {
        self.span_map.is_empty()
    }

    /// Add a word to the vocab.
    ///
    /// ## Arguments
    /// * `word` - The word string to add.
    /// * `token` - The token value to assign to the word.
    pub fn add_str_word(
        &mut self,
        word: &str,
        token: TokenId,
    ) {
        self.span_map.insert(word.as_bytes().to_vec(), token);
    }

    /// Extend the vocabulary with the given special words.
    ///
    /// ## Arguments
    /// * `special_words` - An iterator of word strings and tokens.
    ///
    /// ## Returns
    /// The updated `SpecialVocab` instance.
    pub fn with_special_words<W, S>(
        self,
        special_words: W,
    ) -> Self
    where
        W: IntoIterator<Item = (S, TokenId)>,
        S: AsRef<str>,
    {
        let mut vocab = self;
        for (word, token) in special_words {
            vocab.add_str_word(word.as_ref(), token);
        }
        vocab
    }

    /// Return the associated token for the word, if any.
    ///
    /// ## Arguments
    /// * `chunk` - The byte slice to look up.
    ///
    /// ## Returns
    /// An `Option` containing the token if the span exists in the special vocabulary.
    pub fn lookup_token(
        &self,
        chunk: &[u8],
    ) -> Option<TokenId> {
        self.span_map.get(chunk).copied()
    }
}
