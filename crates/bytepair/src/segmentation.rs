//! # Special-Token Segmentation
//!
//! Special tokens are matched as literal substrings before any
//! pre-tokenization, so their text never reaches the BPE merger.

use aho_corasick::{AhoCorasick, MatchKind};

use crate::errors::{BpResult, BytepairError};
use crate::types::TokenId;
use crate::vocab::SpecialVocab;

/// One segment of a text split around special tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A run of ordinary text, to be pre-tokenized and BPE-merged.
    Normal(&'a str),

    /// A matched special token.
    Special(TokenId),
}

/// Literal special-token scanner.
///
/// Longest match wins at each position, and earlier positions win over later
/// ones; among equal-length candidates the outcome is unspecified (specials
/// are distinct in practice). The scan is a leftmost-longest Aho-Corasick
/// automaton over the registered special texts.
#[derive(Debug)]
pub struct SpecialSplitter {
    /// The automaton; `None` when no specials are registered.
    automaton: Option<AhoCorasick>,

    /// Token ids by automaton pattern index.
    tokens: Vec<TokenId>,
}

impl SpecialSplitter {
    /// Build a splitter over the registered special tokens.
    ///
    /// ## Arguments
    /// * `specials` - The special-token vocabulary.
    ///
    /// ## Returns
    /// A new `SpecialSplitter` instance.
    pub fn from_specials(specials: &SpecialVocab) -> BpResult<Self> {
        if specials.is_empty() {
            return Ok(Self {
                automaton: None,
                tokens: Vec::new(),
            });
        }

        let mut patterns = Vec::with_capacity(specials.len());
        let mut tokens = Vec::with_capacity(specials.len());
        for (span, &token) in &specials.span_map {
            patterns.push(span.as_slice());
            tokens.push(token);
        }

        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|_| BytepairError::InvalidInput("special-token set too large to index"))?;

        Ok(Self {
            automaton: Some(automaton),
            tokens,
        })
    }

    /// The number of registered specials.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if no specials are registered.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Split text into alternating normal and special segments.
    ///
    /// The segments cover the input with no gaps and no overlaps; empty
    /// input yields no segments.
    ///
    /// ## Arguments
    /// * `text` - The text to split.
    ///
    /// ## Returns
    /// The ordered segment list.
    pub fn split<'a>(
        &self,
        text: &'a str,
    ) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();

        let Some(automaton) = &self.automaton else {
            if !text.is_empty() {
                segments.push(Segment::Normal(text));
            }
            return segments;
        };

        let mut last = 0;
        for m in automaton.find_iter(text) {
            if m.start() > last {
                segments.push(Segment::Normal(&text[last..m.start()]));
            }
            segments.push(Segment::Special(self.tokens[m.pattern().as_usize()]));
            last = m.end();
        }
        if last < text.len() {
            segments.push(Segment::Normal(&text[last..]));
        }

        segments
    }
}
