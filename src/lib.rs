//! Wordlist Curator
//!
//! Batch pipeline that curates a raw word-frequency list into
//! length-bucketed word lists and serialized answer/guess artifacts for a
//! word-guessing game. Deterministic and single-pass; stages compose only
//! through files on disk.
//!
//! # Quick Start
//!
//! ```rust
//! use wordlist_curator::commands::classify_lines;
//!
//! let raw = "apple 500\nApple 10\n12345 3\nbanana 200\n";
//! let classified = classify_lines(raw.lines(), 5..=8);
//!
//! assert_eq!(classified.buckets.get(5), &["apple 500"]);
//! assert_eq!(classified.buckets.get(6), &["banana 200"]);
//! ```

// Core domain types
pub mod core;

// Pipeline stages
pub mod commands;

// Serialized game artifacts
pub mod artifacts;

// Terminal output formatting
pub mod output;
