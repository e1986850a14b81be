//! End-to-end validation of the encode/decode pipelines against a
//! constructed byte-level vocabulary.

use std::sync::Arc;

use bytepair::alphabet::ByteAlphabet;
use bytepair::{BytepairError, TokenId, Tokenizer};
use serde_json::json;

/// Build a `tokenizer.json` document with all 256 byte singletons at ids
/// `0..=255`, plus the given extras.
fn byte_level_json(
    extra_vocab: &[(&str, TokenId)],
    merges: &[serde_json::Value],
    added_tokens: &[(&str, TokenId)],
    pre_tokenizer: Option<serde_json::Value>,
) -> String {
    let alphabet = ByteAlphabet::default();

    let mut vocab = serde_json::Map::new();
    for b in 0..=255_u32 {
        vocab.insert(alphabet.byte_str(b as u8).to_string(), json!(b));
    }
    for &(text, id) in extra_vocab {
        vocab.insert(text.to_string(), json!(id));
    }

    let added_tokens: Vec<_> = added_tokens
        .iter()
        .map(|&(content, id)| json!({"content": content, "id": id}))
        .collect();

    let mut doc = json!({
        "model": {"vocab": vocab, "merges": merges},
        "added_tokens": added_tokens,
    });
    if let Some(pre) = pre_tokenizer {
        doc["pre_tokenizer"] = pre;
    }
    doc.to_string()
}

/// `he`/`ll`/`hell` merge ladder over the byte singletons.
fn hello_tokenizer() -> Tokenizer {
    let json = byte_level_json(
        &[("he", 256), ("ll", 257), ("hell", 258)],
        &[json!("h e"), json!("l l"), json!(["he", "ll"])],
        &[],
        None,
    );
    Tokenizer::from_json(&json).unwrap()
}

#[test]
fn test_empty_input() {
    let tokenizer = hello_tokenizer();

    assert_eq!(tokenizer.encode("").unwrap(), Vec::<u32>::new());

    let err = tokenizer.decode(&[]).unwrap_err();
    assert!(matches!(err, BytepairError::InvalidInput(_)));
}

#[test]
fn test_ascii_round_trip() {
    let tokenizer = hello_tokenizer();

    // h+e -> he, l+l -> ll, he+ll -> hell.
    assert_eq!(
        tokenizer.encode("hello").unwrap(),
        vec![258, u32::from(b'o')]
    );
    assert_eq!(
        tokenizer
            .decode(&tokenizer.encode("hello").unwrap())
            .unwrap(),
        "hello"
    );
}

#[test]
fn test_special_token_wins_over_bpe() {
    let json = byte_level_json(&[], &[], &[("<|endoftext|>", 400)], None);
    let tokenizer = Tokenizer::from_json(&json).unwrap();

    let tokens = tokenizer.encode("a<|endoftext|>b").unwrap();
    assert_eq!(
        tokens,
        vec![u32::from(b'a'), 400, u32::from(b'b')],
        "the special must encode as one id, the rest as plain bytes"
    );

    assert_eq!(tokenizer.decode(&tokens).unwrap(), "a<|endoftext|>b");
}

#[test]
fn test_longest_match_among_overlapping_specials() {
    let json = byte_level_json(&[], &[], &[("<|e|>", 401), ("<|endoftext|>", 400)], None);
    let tokenizer = Tokenizer::from_json(&json).unwrap();

    assert_eq!(tokenizer.encode("<|endoftext|>").unwrap(), vec![400]);
    assert_eq!(tokenizer.encode("<|e|>").unwrap(), vec![401]);
}

#[test]
fn test_special_token_preservation() {
    let specials = [("<|endoftext|>", 400_u32), ("<|im_start|>", 401)];
    let json = byte_level_json(&[], &[], &specials, None);
    let tokenizer = Tokenizer::from_json(&json).unwrap();

    for (text, id) in specials {
        let tokens = tokenizer.encode(text).unwrap();
        assert_eq!(tokens, vec![id]);
        assert_eq!(tokenizer.decode(&tokens).unwrap(), text);
    }
}

#[test]
fn test_all_bytes_round_trip() {
    let json = byte_level_json(&[], &[], &[], None);
    let tokenizer = Tokenizer::from_json(&json).unwrap();

    // Every byte singleton decodes to its own byte.
    for b in 0..=255_u8 {
        let bytes = tokenizer.decode_to_bytes(&[u32::from(b)]).unwrap();
        assert_eq!(bytes, vec![b]);
    }

    // A Latin-1 cover string (U+0000..=U+00FF) round-trips through both
    // pipelines.
    let text: String = (0..=255_u32).map(|cp| char::from_u32(cp).unwrap()).collect();
    let tokens = tokenizer.encode(&text).unwrap();
    // One token per UTF-8 byte: 128 ASCII chars + 128 two-byte chars.
    assert_eq!(tokens.len(), 384);
    assert_eq!(tokenizer.decode(&tokens).unwrap(), text);
}

#[test]
fn test_regex_split_preserves_content() {
    let json = byte_level_json(
        &[],
        &[],
        &[],
        Some(json!({"type": "Split", "pattern": {"Regex": "\\s+"}})),
    );
    let tokenizer = Tokenizer::from_json(&json).unwrap();

    for text in ["a b  c", "  lead", "trail ", "one\ntwo\t three"] {
        let tokens = tokenizer.encode(text).unwrap();
        assert_eq!(tokenizer.decode(&tokens).unwrap(), text);
    }
}

#[test]
fn test_split_bounds_merges() {
    // Merges never cross chunk boundaries: with every "l" isolated in its
    // own matched chunk, the "l l" rule can never fire.
    let json = byte_level_json(
        &[("ll", 257)],
        &[json!("l l")],
        &[],
        Some(json!({"type": "Split", "pattern": {"Regex": "l"}})),
    );
    let tokenizer = Tokenizer::from_json(&json).unwrap();
    assert_eq!(
        tokenizer.encode("ll").unwrap(),
        vec![u32::from(b'l'), u32::from(b'l')]
    );

    // The same text through a whitespace-only split merges freely.
    let json = byte_level_json(
        &[("ll", 257)],
        &[json!("l l")],
        &[],
        Some(json!({"type": "Split", "pattern": {"Regex": "\\s+"}})),
    );
    let tokenizer = Tokenizer::from_json(&json).unwrap();
    assert_eq!(tokenizer.encode("ll").unwrap(), vec![257]);
}

#[test]
fn test_add_prefix_space() {
    let json = byte_level_json(
        &[],
        &[],
        &[],
        Some(json!({"type": "ByteLevel", "add_prefix_space": true})),
    );
    let tokenizer = Tokenizer::from_json(&json).unwrap();

    let tokens = tokenizer.encode("hi").unwrap();
    assert_eq!(tokens[0], u32::from(b' '));
    assert_eq!(tokenizer.decode(&tokens).unwrap(), " hi");
}

#[test]
fn test_unknown_merge_silently_dropped() {
    let json = byte_level_json(
        &[("he", 256)],
        &[json!("zz qq"), json!("h e")],
        &[],
        None,
    );
    let tokenizer = Tokenizer::from_json(&json).unwrap();

    // The bad rule is gone; the good rule still fires with its own priority.
    assert_eq!(tokenizer.encode("he").unwrap(), vec![256]);
}

#[test]
fn test_gpt2_style_pipeline() {
    let pattern = r"'s|'t|'re|'ve|'m|'ll|'d| ?\p{L}+| ?\p{N}+| ?[^\s\p{L}\p{N}]+|\s+(?!\S)|\s+";
    let json = byte_level_json(
        &[("th", 256), ("the", 257), ("\u{120}the", 258)],
        &[json!("t h"), json!("th e"), json!(["\u{120}", "the"])],
        &[("<|endoftext|>", 50256)],
        Some(json!({
            "type": "Sequence",
            "pretokenizers": [
                {"type": "Split", "pattern": {"Regex": pattern}},
                {"type": "ByteLevel", "add_prefix_space": false}
            ]
        })),
    );
    let tokenizer = Tokenizer::from_json(&json).unwrap();

    // " the" merges to a single token through the space-spelling ladder.
    assert_eq!(tokenizer.encode("the the").unwrap(), vec![257, 258]);

    let text = "the theme, it's the thing.<|endoftext|>";
    let tokens = tokenizer.encode(text).unwrap();
    assert_eq!(tokens.last(), Some(&50256));
    assert_eq!(tokenizer.decode(&tokens).unwrap(), text);
}

#[test]
fn test_determinism() {
    let tokenizer = hello_tokenizer();

    let text = "hello hello llll";
    let first = tokenizer.encode(text).unwrap();
    for _ in 0..3 {
        assert_eq!(tokenizer.encode(text).unwrap(), first);
    }
    assert_eq!(
        tokenizer.decode(&first).unwrap(),
        tokenizer.decode(&first).unwrap()
    );
}

#[test]
fn test_concurrent_use() {
    let json = byte_level_json(
        &[("he", 256), ("ll", 257), ("hell", 258)],
        &[json!("h e"), json!("l l"), json!(["he", "ll"])],
        &[("<|endoftext|>", 400)],
        None,
    );
    let tokenizer = Arc::new(Tokenizer::from_json(&json).unwrap());

    let samples = ["hello", "hell<|endoftext|>o", "llhe", ""];
    let expected: Vec<Vec<TokenId>> = samples
        .iter()
        .map(|text| tokenizer.encode(text).unwrap())
        .collect();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tokenizer = tokenizer.clone();
            let expected = expected.clone();
            std::thread::spawn(move || {
                for _ in 0..100 {
                    for (text, want) in samples.iter().zip(&expected) {
                        assert_eq!(&tokenizer.encode(text).unwrap(), want);
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
