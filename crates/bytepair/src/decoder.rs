//! # Decode Pipeline
//!
//! `ids -> token texts -> invert the byte alphabet code-point by code-point`.

use crate::errors::{BpResult, BytepairError};
use crate::tokenizer::Tokenizer;
use crate::types::{EXPECTED_BYTES_PER_TOKEN, TokenId};

impl Tokenizer {
    /// Decode token ids into the exact byte stream they spell.
    ///
    /// Code points inside the byte alphabet emit their mapped byte; all
    /// other code points (special-token texts in particular) pass through
    /// as their literal UTF-8 bytes.
    ///
    /// ## Arguments
    /// * `tokens` - The token ids; must be non-empty.
    ///
    /// ## Returns
    /// The decoded bytes. The result can split multi-byte characters when
    /// the id sequence does.
    pub fn decode_to_bytes(
        &self,
        tokens: &[TokenId],
    ) -> BpResult<Vec<u8>> {
        if tokens.is_empty() {
            return Err(BytepairError::InvalidInput("token sequence is empty"));
        }

        let capacity = (tokens.len() as f64 * EXPECTED_BYTES_PER_TOKEN) as usize;
        let mut bytes = Vec::with_capacity(capacity);

        for &id in tokens {
            let text = self
                .vocab
                .text(id)
                .ok_or_else(|| BytepairError::TokenNotFound {
                    entry: format!("id {}", id),
                })?;

            for ch in text.chars() {
                match self.alphabet.byte_for(ch) {
                    Some(b) => bytes.push(b),
                    None => {
                        let mut buf = [0_u8; 4];
                        bytes.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
                    }
                }
            }
        }

        Ok(bytes)
    }

    /// Decode token ids into UTF-8 text.
    ///
    /// Byte sequences that are not valid UTF-8 (an id sequence cut inside a
    /// multi-byte character) render with replacement characters.
    ///
    /// ## Arguments
    /// * `tokens` - The token ids; must be non-empty.
    ///
    /// ## Returns
    /// The decoded text.
    pub fn decode(
        &self,
        tokens: &[TokenId],
    ) -> BpResult<String> {
        let bytes = self.decode_to_bytes(tokens)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_tokenizer() -> Tokenizer {
        let json = serde_json::json!({
            "model": {
                "vocab": {
                    "h": 0, "i": 1, "hi": 2,
                    "\u{120}": 4, "\u{120}hi": 5,
                },
                "merges": [],
            },
            "added_tokens": [{"content": "<|eot|>", "id": 3}],
        });
        Tokenizer::from_json(&json.to_string()).unwrap()
    }

    #[test]
    fn test_decode_empty_is_invalid() {
        let tokenizer = build_tokenizer();

        let err = tokenizer.decode(&[]).unwrap_err();
        assert!(matches!(err, BytepairError::InvalidInput(_)));
    }

    #[test]
    fn test_decode_inverts_alphabet() {
        let tokenizer = build_tokenizer();

        assert_eq!(tokenizer.decode(&[2]).unwrap(), "hi");
        assert_eq!(tokenizer.decode(&[0, 1]).unwrap(), "hi");
        // U+0120 is the alphabet spelling of a space.
        assert_eq!(tokenizer.decode(&[5]).unwrap(), " hi");
        assert_eq!(tokenizer.decode(&[4, 0]).unwrap(), " h");
    }

    #[test]
    fn test_special_text_passes_through() {
        let tokenizer = build_tokenizer();

        assert_eq!(tokenizer.decode(&[3]).unwrap(), "<|eot|>");
        assert_eq!(tokenizer.decode(&[0, 3, 1]).unwrap(), "h<|eot|>i");
    }

    #[test]
    fn test_unknown_id() {
        let tokenizer = build_tokenizer();

        let err = tokenizer.decode(&[0, 77]).unwrap_err();
        assert!(matches!(err, BytepairError::TokenNotFound { .. }));
    }
}
