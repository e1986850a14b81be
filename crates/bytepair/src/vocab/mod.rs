//! # Vocabulary Indices

pub mod merge_table;
pub mod special_vocab;
pub mod token_vocab;

pub use merge_table::{MergeRule, MergeTable};
pub use special_vocab::SpecialVocab;
pub use token_vocab::TokenVocab;
