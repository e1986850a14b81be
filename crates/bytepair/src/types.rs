//! # Common Types

/// Token identifier type.
///
/// The `tokenizer.json` format stores ids as non-negative integers; every
/// published byte-level BPE vocabulary fits in `u32`.
pub type TokenId = u32;

/// Type alias for hash maps in this crate.
pub type CommonHashMap<K, V> = ahash::AHashMap<K, V>;

/// `Vec<u8>` to [`TokenId`] map.
pub type SpanTokenMap = CommonHashMap<Vec<u8>, TokenId>;

/// Expected average bytes per emitted token; used for buffer capacity hints.
pub(crate) const EXPECTED_BYTES_PER_TOKEN: f64 = 4.0;

/// Check if a type is `Send`.
#[cfg(test)]
pub(crate) fn check_is_send<S: Send>(_: S) {}

/// Check if a type is `Sync`.
#[cfg(test)]
pub(crate) fn check_is_sync<S: Sync>(_: S) {}
