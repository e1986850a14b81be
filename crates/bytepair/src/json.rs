//! # Serialized `tokenizer.json` Subset
//!
//! Typed views of the fields the loader consumes; all other keys are
//! silently ignored for forward compatibility.

use std::collections::HashMap;

use serde::Deserialize;

use crate::types::TokenId;

/// Top-level `tokenizer.json` document.
#[derive(Deserialize)]
pub(crate) struct TokenizerJson {
    #[serde(default)]
    pub model: Option<ModelJson>,

    #[serde(default)]
    pub pre_tokenizer: Option<PreTokenizerNode>,

    #[serde(default)]
    pub added_tokens: Vec<AddedToken>,
}

/// The `model` object; only BPE fields are consumed.
#[derive(Deserialize)]
pub(crate) struct ModelJson {
    /// Map of token text to id.
    #[serde(default)]
    pub vocab: Option<HashMap<String, TokenId>>,

    /// Ordered merge rules; element index is the rule priority.
    #[serde(default)]
    pub merges: Vec<MergeEntry>,
}

/// One element of the `merges` list.
///
/// The format allows both the legacy space-separated string and the
/// two-element array form, per element.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum MergeEntry {
    /// `"<left> <right>"`.
    Legacy(String),

    /// `["<left>", "<right>"]`.
    Pair([String; 2]),
}

impl MergeEntry {
    /// The `(left, right)` parts of the rule, or `None` for a malformed
    /// legacy entry with no separating space.
    pub fn parts(&self) -> Option<(&str, &str)> {
        match self {
            Self::Legacy(entry) => entry.split_once(' '),
            Self::Pair([left, right]) => Some((left, right)),
        }
    }
}

/// One element of the `added_tokens` list.
#[derive(Deserialize)]
pub(crate) struct AddedToken {
    pub content: String,
    pub id: TokenId,
}

/// A `pre_tokenizer` node, decoded structurally.
///
/// The `type` is kept as a string (rather than a tagged enum) so that an
/// unrecognized pre-tokenizer maps to `UnsupportedType` instead of a JSON
/// parse error.
#[derive(Deserialize)]
pub(crate) struct PreTokenizerNode {
    #[serde(rename = "type")]
    pub kind: String,

    /// `ByteLevel` prefix-space policy.
    #[serde(default)]
    pub add_prefix_space: bool,

    /// `Split` pattern.
    #[serde(default)]
    pub pattern: Option<PatternJson>,

    /// `Sequence` children.
    #[serde(default)]
    pub pretokenizers: Vec<PreTokenizerNode>,
}

/// A `Split` pattern value; only the `Regex` form is consumed.
#[derive(Deserialize)]
pub(crate) struct PatternJson {
    /// The regex pattern string; absent for the literal `String` form,
    /// which the loader rejects.
    #[serde(rename = "Regex", default)]
    pub regex: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_subset() {
        let doc: TokenizerJson = serde_json::from_str(
            r#"{
                "version": "1.0",
                "model": {
                    "type": "BPE",
                    "vocab": {"a": 0, "b": 1, "ab": 2},
                    "merges": ["a b", ["a", "ab"]]
                },
                "pre_tokenizer": {
                    "type": "Sequence",
                    "pretokenizers": [
                        {"type": "Split", "pattern": {"Regex": "\\s+"}, "behavior": "Isolated"},
                        {"type": "ByteLevel", "add_prefix_space": true, "use_regex": false}
                    ]
                },
                "added_tokens": [{"content": "<|eot|>", "id": 3, "special": true}]
            }"#,
        )
        .unwrap();

        let model = doc.model.unwrap();
        assert_eq!(model.vocab.unwrap().len(), 3);

        assert_eq!(model.merges.len(), 2);
        assert_eq!(model.merges[0].parts(), Some(("a", "b")));
        assert_eq!(model.merges[1].parts(), Some(("a", "ab")));

        let pre = doc.pre_tokenizer.unwrap();
        assert_eq!(pre.kind, "Sequence");
        assert_eq!(pre.pretokenizers.len(), 2);
        assert_eq!(pre.pretokenizers[0].kind, "Split");
        assert_eq!(
            pre.pretokenizers[0]
                .pattern
                .as_ref()
                .unwrap()
                .regex
                .as_deref(),
            Some(r"\s+")
        );
        assert_eq!(pre.pretokenizers[1].kind, "ByteLevel");
        assert!(pre.pretokenizers[1].add_prefix_space);

        assert_eq!(doc.added_tokens.len(), 1);
        assert_eq!(doc.added_tokens[0].content, "<|eot|>");
        assert_eq!(doc.added_tokens[0].id, 3);
    }

    #[test]
    fn test_missing_sections() {
        let doc: TokenizerJson = serde_json::from_str("{}").unwrap();
        assert!(doc.model.is_none());
        assert!(doc.pre_tokenizer.is_none());
        assert!(doc.added_tokens.is_empty());

        let doc: TokenizerJson = serde_json::from_str(r#"{"model": {}}"#).unwrap();
        let model = doc.model.unwrap();
        assert!(model.vocab.is_none());
        assert!(model.merges.is_empty());
    }

    #[test]
    fn test_string_pattern_has_no_regex() {
        let node: PreTokenizerNode =
            serde_json::from_str(r#"{"type": "Split", "pattern": {"String": "x"}}"#).unwrap();
        assert!(node.pattern.unwrap().regex.is_none());
    }

    #[test]
    fn test_malformed_legacy_merge() {
        let entry: MergeEntry = serde_json::from_str(r#""nospace""#).unwrap();
        assert_eq!(entry.parts(), None);
    }
}
