//! # Tokenizer Loader
//!
//! Parses a `tokenizer.json` document and populates every index of the
//! [`Tokenizer`] handle. Construction order matters: merges resolve against
//! the vocabulary, and added tokens grow the arrays the vocabulary sized.

use crate::alphabet::ByteAlphabet;
use crate::errors::{BpResult, BytepairError};
use crate::json::{PreTokenizerNode, TokenizerJson};
use crate::pretokenizer::{PreTokenizer, PreTokenizerChain};
use crate::segmentation::SpecialSplitter;
use crate::tokenizer::Tokenizer;
use crate::types::TokenId;
use crate::vocab::{MergeTable, SpecialVocab, TokenVocab};

/// Build a [`Tokenizer`] from JSON text.
pub(crate) fn load(json: &str) -> BpResult<Tokenizer> {
    let doc: TokenizerJson = serde_json::from_str(json)?;

    let alphabet = ByteAlphabet::default();

    // Vocabulary.
    let model = doc.model.ok_or(BytepairError::VocabMissing)?;
    let entries = model.vocab.ok_or(BytepairError::VocabMissing)?;

    let mut vocab = TokenVocab::default();
    for (text, &id) in &entries {
        vocab.insert(text, id);
    }

    // Merge rules. Rules naming unknown tokens are skipped, matching the
    // reference loader.
    let mut rules = Vec::with_capacity(model.merges.len());
    let mut skipped = 0_usize;
    let mut concat = String::new();
    for (priority, entry) in model.merges.iter().enumerate() {
        let Some((left, right)) = entry.parts() else {
            skipped += 1;
            continue;
        };

        concat.clear();
        concat.push_str(left);
        concat.push_str(right);

        match (
            vocab.lookup(left.as_bytes()),
            vocab.lookup(right.as_bytes()),
            vocab.lookup(concat.as_bytes()),
        ) {
            (Some(l), Some(r), Some(n)) => rules.push((l, r, n, priority as u32)),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        log::debug!("skipped {} merge rules naming unknown tokens", skipped);
    }
    let mut merges = MergeTable::from_rules(vocab.len(), rules);

    // Pre-tokenizer chain.
    let mut nodes = Vec::new();
    if let Some(node) = &doc.pre_tokenizer {
        flatten_node(node, &mut nodes)?;
    }
    let chain = PreTokenizerChain::new(nodes);

    // Added tokens. Ids past the vocabulary grow the id array and the merge
    // rows; occupied slots are left alone so vocabulary entries take
    // precedence.
    let mut specials = SpecialVocab::default();
    for added in &doc.added_tokens {
        let len = added.id as usize + 1;
        vocab.grow(len);
        merges.grow(len);

        if vocab.is_vacant(added.id) {
            specials.add_str_word(&added.content, added.id);
            vocab.fill_slot(&added.content, added.id)?;
        }
    }
    let splitter = SpecialSplitter::from_specials(&specials)?;

    // Byte-singleton cache for byte expansion.
    let mut byte_tokens: [Option<TokenId>; 256] = [None; 256];
    for b in 0..=255_u8 {
        byte_tokens[b as usize] = vocab.lookup(alphabet.byte_str(b).as_bytes());
    }

    log::debug!(
        "loaded tokenizer: {} vocab entries, {} merge rules, {} specials, {} pre-tokenizers",
        vocab.entry_count(),
        merges.rule_count(),
        specials.len(),
        chain.len(),
    );

    Ok(Tokenizer {
        alphabet,
        vocab,
        merges,
        specials,
        splitter,
        chain,
        byte_tokens,
    })
}

/// Flatten a pre-tokenizer node into the chain.
///
/// `Sequence` nodes recurse; leaf nodes append. Unknown types are fatal.
fn flatten_node(
    node: &PreTokenizerNode,
    out: &mut Vec<PreTokenizer>,
) -> BpResult<()> {
    match node.kind.as_str() {
        "Sequence" => {
            for child in &node.pretokenizers {
                flatten_node(child, out)?;
            }
        }
        "ByteLevel" => {
            out.push(PreTokenizer::ByteLevel {
                add_prefix_space: node.add_prefix_space,
            });
        }
        "Split" => {
            let Some(pattern) = node.pattern.as_ref().and_then(|p| p.regex.as_deref()) else {
                return Err(BytepairError::UnsupportedType {
                    kind: "Split without a Regex pattern".to_string(),
                });
            };
            out.push(PreTokenizer::Split {
                pattern: fancy_regex::Regex::new(pattern)?,
            });
        }
        other => {
            return Err(BytepairError::UnsupportedType {
                kind: other.to_string(),
            });
        }
    }
    Ok(())
}
