//! # Encode Pipeline
//!
//! `text -> special split -> pre-tokenize -> per-chunk byte expansion and
//! iterative BPE merging -> ids`.

use crate::errors::{BpResult, BytepairError};
use crate::segmentation::Segment;
use crate::tokenizer::Tokenizer;
use crate::types::{EXPECTED_BYTES_PER_TOKEN, TokenId};

impl Tokenizer {
    /// Encode UTF-8 text into token ids.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    ///
    /// ## Returns
    /// The token id sequence; empty input encodes to an empty sequence.
    pub fn encode(
        &self,
        text: &str,
    ) -> BpResult<Vec<TokenId>> {
        let capacity = (text.len() as f64 / EXPECTED_BYTES_PER_TOKEN) as usize;
        let mut tokens = Vec::with_capacity(capacity);
        self.encode_append(text, &mut tokens)?;
        Ok(tokens)
    }

    /// Encode text, appending the ids to an existing buffer.
    ///
    /// On error the buffer retains any ids appended before the failure.
    ///
    /// ## Arguments
    /// * `text` - The text to encode.
    /// * `tokens` - The target token buffer.
    pub fn encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<TokenId>,
    ) -> BpResult<()> {
        for segment in self.splitter.split(text) {
            match segment {
                Segment::Special(id) => tokens.push(id),
                Segment::Normal(chunk) => {
                    for piece in self.chain.apply(chunk)? {
                        self.encode_piece(&piece, tokens)?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Byte-expand one chunk and merge it down to its final ids.
    fn encode_piece(
        &self,
        piece: &str,
        tokens: &mut Vec<TokenId>,
    ) -> BpResult<()> {
        // Reuse the output buffer as working memory; the chunk's tokens
        // occupy `start..`.
        let start = tokens.len();

        // Byte expansion: one byte-singleton token per input byte.
        for &b in piece.as_bytes() {
            match self.byte_tokens[b as usize] {
                Some(token) => tokens.push(token),
                None => {
                    tokens.truncate(start);
                    return Err(BytepairError::TokenNotFound {
                        entry: format!("byte singleton {:?}", self.alphabet.byte_str(b)),
                    });
                }
            }
        }

        // Apply the single best merge until none remain. Smallest priority
        // wins; on a priority tie the leftmost pair is consumed.
        let stop = start + 2;
        while tokens.len() >= stop {
            if let Some((_priority, idx, new)) = tokens[start..]
                .windows(2)
                .enumerate()
                .filter_map(|(idx, w)| {
                    self.merges
                        .lookup(w[0], w[1])
                        .map(|(new, priority)| (priority, idx, new))
                })
                .min()
            {
                let idx = start + idx;

                // buf[idx..=idx+1] (a, b) -> buf[idx] new
                tokens[idx] = new;
                tokens.remove(idx + 1);
            } else {
                break;
            }
        }

        Ok(())
    }
}
