//! Re-split command
//!
//! Re-buckets an already-curated word list (`wlist_match{id}.txt`) by
//! length into `match{id}/len5..len8`. Input is assumed normalized
//! upstream, so only an alphabetic check is applied; mixed case and
//! non-ASCII alphabetic words pass through untouched.

use crate::commands::classify::write_lines;
use crate::core::{LengthBuckets, is_alphabetic_word};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Per-bucket word counts from a re-split run
pub struct ResplitReport {
    pub counts: Vec<(usize, usize)>,
}

/// Partition curated words into the standard 5..=8 length buckets
///
/// Lines are trimmed before validation; non-alphabetic lines and lengths
/// outside the range are silently dropped. Length is counted in
/// characters, so non-ASCII alphabetic words bucket correctly.
pub fn resplit_words<'a, I>(lines: I) -> LengthBuckets<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut buckets = LengthBuckets::standard();
    for line in lines {
        let word = line.trim();
        if is_alphabetic_word(word) {
            buckets.insert(word.chars().count(), word.to_string());
        }
    }
    buckets
}

/// Run the re-split stage for list `id` under `words_dir`
///
/// Reads `words_dir/wlist_match{id}.txt` and writes one `len{n}` file per
/// bucket into `words_dir/match{id}/`, creating the subdirectory if
/// absent (pre-existing is fine).
///
/// # Errors
/// Returns an error if the list cannot be read or an output file cannot
/// be written.
pub fn run_resplit(words_dir: &Path, id: u32) -> Result<ResplitReport> {
    let source = words_dir.join(format!("wlist_match{id}.txt"));
    let content = fs::read_to_string(&source)
        .with_context(|| format!("Failed to read word list {}", source.display()))?;

    let buckets = resplit_words(content.lines());

    let target_dir = words_dir.join(format!("match{id}"));
    fs::create_dir_all(&target_dir)
        .with_context(|| format!("Failed to create {}", target_dir.display()))?;

    let mut counts = Vec::new();
    for length in buckets.lengths() {
        let path = target_dir.join(format!("len{length}"));
        write_lines(&path, buckets.get(length))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        counts.push((length, buckets.count(length)));
    }

    Ok(ResplitReport { counts })
}
