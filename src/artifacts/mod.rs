//! Serialized game artifacts
//!
//! The extraction stage persists two blobs for the downstream game: an
//! ordered answer list and a membership-only guess set.

pub mod store;

pub use store::{load_answers, load_guesses, save_answers, save_guesses};

/// File name of the serialized answer list
pub const ANSWERS_FILE: &str = "answers.bin";

/// File name of the serialized guess set
pub const GUESSES_FILE: &str = "guesses.bin";
