//! Fixed-size extraction command
//!
//! Takes a bounded prefix of a frequency-ordered word list and serializes
//! two artifacts for the game: the top `answer_count` words as an ordered
//! answer list, and the full deduplicated sample as a guess-validity set.

use crate::artifacts::{ANSWERS_FILE, GUESSES_FILE, save_answers, save_guesses};
use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Default number of lines sampled from the head of the list
pub const SAMPLE_SIZE: usize = 9000;

/// Default size of the ranked answer subset
pub const ANSWER_COUNT: usize = 2500;

/// Sizes for one extraction run
#[derive(Debug, Clone, Copy)]
pub struct ExtractConfig {
    pub sample_size: usize,
    pub answer_count: usize,
}

impl ExtractConfig {
    #[must_use]
    pub const fn new(sample_size: usize, answer_count: usize) -> Self {
        Self {
            sample_size,
            answer_count,
        }
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self::new(SAMPLE_SIZE, ANSWER_COUNT)
    }
}

/// Error type for extraction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// Fewer lines available than the fixed sample size requires
    ShortInput { expected: usize, found: usize },
    /// A sampled line carried no word at all
    MalformedLine { line_number: usize },
    /// Answer subset larger than the sample it is cut from
    AnswerCountExceedsSample { answers: usize, sample: usize },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShortInput { expected, found } => {
                write!(f, "Insufficient input: expected {expected} lines, found {found}")
            }
            Self::MalformedLine { line_number } => {
                write!(f, "Line {line_number} contains no word")
            }
            Self::AnswerCountExceedsSample { answers, sample } => {
                write!(f, "Answer count {answers} exceeds sample size {sample}")
            }
        }
    }
}

impl std::error::Error for ExtractError {}

/// Summary of an extraction run
#[derive(Debug)]
pub struct ExtractReport {
    pub sampled: usize,
    pub answers: usize,
    pub distinct_guesses: usize,
}

/// Take the first `sample_size` words off the head of the list
///
/// Each line contributes its first whitespace-delimited field; trailing
/// fields are ignored. The read is fixed-size by contract, so both a
/// short list and a wordless line inside the prefix are hard errors
/// rather than conditions to paper over.
///
/// # Errors
/// Returns [`ExtractError::ShortInput`] or [`ExtractError::MalformedLine`].
pub fn sample_words(content: &str, sample_size: usize) -> Result<Vec<String>, ExtractError> {
    let mut words = Vec::with_capacity(sample_size);

    for (i, line) in content.lines().take(sample_size).enumerate() {
        let word = line
            .split_whitespace()
            .next()
            .ok_or(ExtractError::MalformedLine { line_number: i + 1 })?;
        words.push(word.to_string());
    }

    if words.len() < sample_size {
        return Err(ExtractError::ShortInput {
            expected: sample_size,
            found: words.len(),
        });
    }

    Ok(words)
}

/// Run the extraction stage against a frequency-ordered word list
///
/// Writes `answers.bin` (ordered prefix) and `guesses.bin` (deduplicated
/// membership set) under `out_dir`, creating it as needed.
///
/// # Errors
/// Returns an error on unreadable input, a short or malformed sample, an
/// answer count exceeding the sample size, or a failed artifact write.
pub fn run_extract(source: &Path, out_dir: &Path, config: ExtractConfig) -> Result<ExtractReport> {
    if config.answer_count > config.sample_size {
        return Err(ExtractError::AnswerCountExceedsSample {
            answers: config.answer_count,
            sample: config.sample_size,
        }
        .into());
    }

    let content = fs::read_to_string(source)
        .with_context(|| format!("Failed to read word list {}", source.display()))?;

    let sample = sample_words(&content, config.sample_size)
        .with_context(|| format!("Failed to sample {}", source.display()))?;

    let answers: Vec<String> = sample[..config.answer_count].to_vec();
    let guesses: FxHashSet<String> = sample.iter().cloned().collect();

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let answers_path = out_dir.join(ANSWERS_FILE);
    save_answers(&answers_path, &answers)
        .with_context(|| format!("Failed to write {}", answers_path.display()))?;

    let guesses_path = out_dir.join(GUESSES_FILE);
    save_guesses(&guesses_path, &guesses)
        .with_context(|| format!("Failed to write {}", guesses_path.display()))?;

    Ok(ExtractReport {
        sampled: sample.len(),
        answers: answers.len(),
        distinct_guesses: guesses.len(),
    })
}
