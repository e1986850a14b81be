//! # Pre-Tokenizer Chain
//!
//! Pre-tokenizers fragment a text segment into chunks *before* BPE merging;
//! merges never cross chunk boundaries.

use std::borrow::Cow;

use fancy_regex::Regex;

use crate::errors::BpResult;

/// A single pre-tokenizer.
#[derive(Debug)]
pub enum PreTokenizer {
    /// Byte-level prefix policy: one output chunk, optionally prefixed with
    /// a single space.
    ByteLevel {
        /// Whether to prepend `" "` to the input.
        add_prefix_space: bool,
    },

    /// Regex splitter: alternating between-match and matched chunks, both
    /// kept, in textual order.
    Split {
        /// The compiled split pattern.
        pattern: Regex,
    },
}

impl PreTokenizer {
    /// Apply this node to one chunk, appending its outputs.
    fn apply<'a>(
        &self,
        chunk: Cow<'a, str>,
        out: &mut Vec<Cow<'a, str>>,
    ) -> BpResult<()> {
        match self {
            Self::ByteLevel { add_prefix_space } => {
                if *add_prefix_space {
                    let mut prefixed = String::with_capacity(chunk.len() + 1);
                    prefixed.push(' ');
                    prefixed.push_str(&chunk);
                    out.push(Cow::Owned(prefixed));
                } else {
                    out.push(chunk);
                }
            }
            Self::Split { pattern } => match chunk {
                Cow::Borrowed(text) => {
                    split_keeping_matches(pattern, text, |piece| out.push(Cow::Borrowed(piece)))?;
                }
                Cow::Owned(text) => {
                    split_keeping_matches(pattern, &text, |piece| {
                        out.push(Cow::Owned(piece.to_string()))
                    })?;
                }
            },
        }
        Ok(())
    }
}

/// Ordered pre-tokenizer chain.
///
/// Each node is applied independently to every chunk of the previous stage;
/// the outputs concatenate in order. The initial state is the whole text as
/// one chunk.
#[derive(Default, Debug)]
pub struct PreTokenizerChain {
    nodes: Vec<PreTokenizer>,
}

impl PreTokenizerChain {
    /// Create a chain from an ordered node list.
    pub fn new(nodes: Vec<PreTokenizer>) -> Self {
        Self { nodes }
    }

    /// The number of nodes in the chain.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the chain has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Run the chain over a text segment.
    ///
    /// The byte-concatenation of the returned chunks always equals the input
    /// (plus the optional leading space); text is never lost.
    ///
    /// ## Arguments
    /// * `text` - The text segment to fragment.
    ///
    /// ## Returns
    /// The ordered chunk list.
    pub fn apply<'a>(
        &self,
        text: &'a str,
    ) -> BpResult<Vec<Cow<'a, str>>> {
        let mut chunks: Vec<Cow<'a, str>> = vec![Cow::Borrowed(text)];

        for node in &self.nodes {
            let mut next = Vec::with_capacity(chunks.len());
            for chunk in chunks {
                node.apply(chunk, &mut next)?;
            }
            chunks = next;
        }

        Ok(chunks)
    }
}

/// Split `text` by `pattern`, emitting both the between-match runs and the
/// matched substrings, in textual order.
///
/// Empty matches advance the scan by one code point so the walk terminates;
/// they emit nothing, and the bytes they cover flow into the surrounding
/// between-match runs. A never-matching pattern yields the input unchanged.
fn split_keeping_matches<'t, F>(
    pattern: &Regex,
    text: &'t str,
    mut emit: F,
) -> BpResult<()>
where
    F: FnMut(&'t str),
{
    let mut pos = 0;
    let mut last = 0;

    while pos < text.len() {
        let Some(m) = pattern.find_from_pos(text, pos)? else {
            break;
        };

        if m.end() > m.start() {
            if m.start() > last {
                emit(&text[last..m.start()]);
            }
            emit(m.as_str());
            last = m.end();
            pos = m.end();
        } else {
            pos = next_char_boundary(text, m.start());
        }
    }

    if last < text.len() {
        emit(&text[last..]);
    }

    Ok(())
}

/// The char boundary strictly after `idx`.
fn next_char_boundary(
    text: &str,
    idx: usize,
) -> usize {
    let mut next = idx + 1;
    while next < text.len() && !text.is_char_boundary(next) {
        next += 1;
    }
    next
}
