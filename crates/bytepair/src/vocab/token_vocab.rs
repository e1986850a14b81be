//! # Token Vocabulary

use crate::errors::{BpResult, BytepairError};
use crate::types::{SpanTokenMap, TokenId};

/// Token vocabulary: `{ text -> id }` map plus a dense `id -> text` array.
///
/// Lookup is by exact UTF-8 bytes, case-sensitive, no normalization.
/// The reverse array has length `max_id + 1`; ids with no entry are `None`.
/// Both views own their text.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct TokenVocab {
    /// Map of `{ text bytes -> id }`.
    span_map: SpanTokenMap,

    /// Dense `id -> text` array.
    texts: Vec<Option<Box<str>>>,
}

impl TokenVocab {
    /// Build a vocabulary from `(text, id)` entries.
    ///
    /// ## Arguments
    /// * `entries` - An iterator of token text and id pairs.
    ///
    /// ## Returns
    /// A new `TokenVocab` instance.
    pub fn from_entries<E, S>(entries: E) -> Self
    where
        E: IntoIterator<Item = (S, TokenId)>,
        S: AsRef<str>,
    {
        let mut vocab = Self::default();
        for (text, id) in entries {
            vocab.insert(text.as_ref(), id);
        }
        vocab
    }

    /// Add a token to the vocabulary, growing the id array as needed.
    ///
    /// ## Arguments
    /// * `text` - The token text.
    /// * `id` - The token id.
    pub fn insert(
        &mut self,
        text: &str,
        id: TokenId,
    ) {
        let slot = id as usize;
        if slot >= self.texts.len() {
            self.texts.resize(slot + 1, None);
        }
        self.texts[slot] = Some(text.into());
        self.span_map.insert(text.as_bytes().to_vec(), id);
    }

    /// Grow the id array to cover `len` slots; new slots are empty.
    ///
    /// ## Arguments
    /// * `len` - The minimum id-array length.
    pub fn grow(
        &mut self,
        len: usize,
    ) {
        if len > self.texts.len() {
            self.texts.resize(len, None);
        }
    }

    /// The id-array length (`max_id + 1`).
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Returns `true` if the vocabulary contains no tokens.
    pub fn is_empty(&self) -> bool {
        self.span_map.is_empty()
    }

    /// The number of interned token texts.
    pub fn entry_count(&self) -> usize {
        self.span_map.len()
    }

    /// Return the id for the exact byte sequence, if any.
    ///
    /// ## Arguments
    /// * `span` - The byte slice to look up.
    ///
    /// ## Returns
    /// An `Option` containing the id if the span is a vocabulary entry.
    #[inline(always)]
    pub fn lookup(
        &self,
        span: &[u8],
    ) -> Option<TokenId> {
        self.span_map.get(span).copied()
    }

    /// Return the text at an id slot, if any.
    ///
    /// ## Arguments
    /// * `id` - The token id to look up.
    ///
    /// ## Returns
    /// An `Option` containing the token text.
    #[inline(always)]
    pub fn text(
        &self,
        id: TokenId,
    ) -> Option<&str> {
        self.texts.get(id as usize)?.as_deref()
    }

    /// Whether the id slot is empty.
    ///
    /// Slots past the end of the array count as vacant.
    pub fn is_vacant(
        &self,
        id: TokenId,
    ) -> bool {
        self.text(id).is_none()
    }

    /// Fill an id slot directly, without registering the text for lookup.
    ///
    /// Used for added tokens: they resolve by id during decode, but are
    /// matched as literals (not vocabulary spans) during encode.
    ///
    /// ## Arguments
    /// * `text` - The token text.
    /// * `id` - The token id; the slot must already be covered by the array.
    pub fn fill_slot(
        &mut self,
        text: &str,
        id: TokenId,
    ) -> BpResult<()> {
        let slot = self
            .texts
            .get_mut(id as usize)
            .ok_or(BytepairError::InvalidInput("id slot out of range"))?;
        *slot = Some(text.into());
        Ok(())
    }
}
