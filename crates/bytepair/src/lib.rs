//! # `bytepair` Byte-Level BPE Tokenizer
//!
//! A byte-level byte-pair-encoding (BBPE) tokenizer for the HuggingFace
//! `tokenizer.json` serialization: UTF-8 text in, token ids out, and back.
//! For the supported configuration subset (byte-level BPE models with
//! `ByteLevel`/`Split` pre-tokenizers and literal added tokens) the splits
//! reproduce the reference implementation exactly.
//!
//! ## Client Summary
//!
//! * [`Tokenizer`] - the handle; build one with [`Tokenizer::from_json`].
//! * [`Tokenizer::encode`] / [`Tokenizer::decode`] - the two pipelines.
//! * [`TokenId`] - the token id type (`u32`, the `tokenizer.json` id space).
//!
//! A [`Tokenizer`] is immutable after construction and `Send + Sync`:
//! share one behind an `Arc` and encode from as many threads as you like.
//!
//! ```rust
//! use bytepair::{BpResult, Tokenizer};
//!
//! fn example() -> BpResult<()> {
//!     let json = r#"{
//!         "model": {
//!             "vocab": {"h": 0, "i": 1, "hi": 2},
//!             "merges": ["h i"]
//!         }
//!     }"#;
//!
//!     let tokenizer = Tokenizer::from_json(json)?;
//!
//!     assert_eq!(tokenizer.encode("hi")?, vec![2]);
//!     assert_eq!(tokenizer.decode(&[2])?, "hi");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! ## Pipeline Shape
//!
//! Encoding is `text -> special-token split -> pre-tokenizer chain ->
//! per-chunk byte expansion -> iterative BPE merging`. Special tokens are
//! matched as literals before anything else; pre-tokenizer chunks bound the
//! merges; within a chunk the single highest-priority merge is applied
//! repeatedly, leftmost on ties. Decoding concatenates token texts and
//! inverts the fixed byte/code-point alphabet.

pub mod alphabet;
pub mod pretokenizer;
pub mod segmentation;
pub mod vocab;

mod decoder;
mod encoder;
mod errors;
mod json;
mod loader;
mod tokenizer;
mod types;

#[doc(inline)]
pub use errors::*;
#[doc(inline)]
pub use tokenizer::*;
#[doc(inline)]
pub use types::{CommonHashMap, SpanTokenMap, TokenId};
