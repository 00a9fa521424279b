//! Core domain types
//!
//! Validated words and the order-preserving length buckets every pipeline
//! stage partitions into.

mod bucket;
mod word;

pub use bucket::{LengthBuckets, MAX_WORD_LEN, MIN_WORD_LEN};
pub use word::{Word, WordError, is_alphabetic_word};
