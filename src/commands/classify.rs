//! Ingest & classify command
//!
//! Filters a raw two-column frequency list (`token count`, descending
//! frequency) down to clean lowercase ASCII words and buckets the original
//! lines by token length. File order is rank order and is preserved.

use crate::core::{LengthBuckets, MAX_WORD_LEN, MIN_WORD_LEN, Word};
use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::ops::RangeInclusive;
use std::path::Path;

/// Result of classifying a raw frequency list in memory
pub struct Classified {
    /// Original lines, bucketed by token length
    pub buckets: LengthBuckets<String>,
    /// Lines rejected by validation (field count, alphabet, ASCII, case)
    pub skipped: usize,
    /// Valid words whose length fell outside the accepted range
    pub out_of_range: usize,
}

/// Summary of a classify run, one entry per bucket
pub struct ClassifyReport {
    pub counts: Vec<(usize, usize)>,
    pub skipped: usize,
    pub out_of_range: usize,
}

/// Bucket raw frequency lines by token length
///
/// A line is kept only if it has exactly two whitespace-separated fields
/// and its token validates as a [`Word`]. Kept lines are stored verbatim
/// so the frequency column survives into the bucket files.
pub fn classify_lines<'a, I>(lines: I, range: RangeInclusive<usize>) -> Classified
where
    I: IntoIterator<Item = &'a str>,
{
    let mut buckets = LengthBuckets::new(range);
    let mut skipped = 0;
    let mut out_of_range = 0;

    for line in lines {
        match accept_token(line) {
            Some(word) => {
                if !buckets.insert(word.len(), line.to_string()) {
                    out_of_range += 1;
                }
            }
            None => skipped += 1,
        }
    }

    Classified {
        buckets,
        skipped,
        out_of_range,
    }
}

/// Validate one raw line, returning its token on success
fn accept_token(line: &str) -> Option<Word> {
    let mut fields = line.split_whitespace();
    let token = fields.next()?;
    fields.next()?;
    if fields.next().is_some() {
        return None;
    }
    Word::new(token).ok()
}

/// Run the classify stage against a raw frequency file
///
/// Writes `words{n}/words.txt` under `out_dir` for each length in 5..=8,
/// creating the directories as needed.
///
/// # Errors
/// Returns an error if the source cannot be read or any bucket file
/// cannot be written.
pub fn run_classify(source: &Path, out_dir: &Path) -> Result<ClassifyReport> {
    let content = fs::read_to_string(source)
        .with_context(|| format!("Failed to read frequency list {}", source.display()))?;

    let classified = classify_lines(content.lines(), MIN_WORD_LEN..=MAX_WORD_LEN);

    let mut counts = Vec::new();
    for length in classified.buckets.lengths() {
        let bucket_dir = out_dir.join(format!("words{length}"));
        fs::create_dir_all(&bucket_dir)
            .with_context(|| format!("Failed to create {}", bucket_dir.display()))?;

        let path = bucket_dir.join("words.txt");
        write_lines(&path, classified.buckets.get(length))
            .with_context(|| format!("Failed to write {}", path.display()))?;

        counts.push((length, classified.buckets.count(length)));
    }

    Ok(ClassifyReport {
        counts,
        skipped: classified.skipped,
        out_of_range: classified.out_of_range,
    })
}

pub(crate) fn write_lines(path: &Path, lines: &[String]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const RANGE: RangeInclusive<usize> = MIN_WORD_LEN..=MAX_WORD_LEN;

    #[test]
    fn keeps_valid_lowercase_ascii_tokens() {
        let input = "apple 500\nApple 10\n12345 3\nbanana 200\n";
        let classified = classify_lines(input.lines(), RANGE);

        assert_eq!(classified.buckets.get(5), &["apple 500"]);
        assert_eq!(classified.buckets.get(6), &["banana 200"]);
        assert_eq!(classified.skipped, 2);
    }

    #[test]
    fn rejects_wrong_field_count() {
        let input = "apple\napple 500 extra\n\nbanana 200";
        let classified = classify_lines(input.lines(), RANGE);

        assert_eq!(classified.buckets.total(), 1);
        assert_eq!(classified.skipped, 3);
    }

    #[test]
    fn rejects_non_ascii_and_mixed_case() {
        let input = "naïve 40\nApple 10\napple 500";
        let classified = classify_lines(input.lines(), RANGE);

        assert_eq!(classified.buckets.get(5), &["apple 500"]);
        assert_eq!(classified.skipped, 2);
    }

    #[test]
    fn counts_valid_words_outside_range() {
        let input = "cat 900\nwolf 300\nelephant 100\nrhinoceros 5";
        let classified = classify_lines(input.lines(), RANGE);

        assert_eq!(classified.buckets.get(8), &["elephant 100"]);
        assert_eq!(classified.out_of_range, 3);
        assert_eq!(classified.skipped, 0);
    }

    #[test]
    fn preserves_frequency_order_within_bucket() {
        let input = "mango 900\napple 500\nzebra 100";
        let classified = classify_lines(input.lines(), RANGE);

        assert_eq!(
            classified.buckets.get(5),
            &["mango 900", "apple 500", "zebra 100"]
        );
    }

    #[test]
    fn run_writes_one_file_per_bucket() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("raw.txt");
        fs::write(&source, "apple 500\nbanana 200\ncucumber 90\nnotword7 x y\n").unwrap();

        let report = run_classify(&source, dir.path()).unwrap();

        let five = fs::read_to_string(dir.path().join("words5/words.txt")).unwrap();
        assert_eq!(five, "apple 500\n");
        let eight = fs::read_to_string(dir.path().join("words8/words.txt")).unwrap();
        assert_eq!(eight, "cucumber 90\n");
        // Empty buckets still produce (empty) files
        let seven = fs::read_to_string(dir.path().join("words7/words.txt")).unwrap();
        assert!(seven.is_empty());

        assert_eq!(report.counts, vec![(5, 1), (6, 1), (7, 0), (8, 1)]);
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn run_is_idempotent() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("raw.txt");
        fs::write(&source, "apple 500\nbanana 200\n").unwrap();

        run_classify(&source, dir.path()).unwrap();
        let first = fs::read(dir.path().join("words5/words.txt")).unwrap();
        run_classify(&source, dir.path()).unwrap();
        let second = fs::read(dir.path().join("words5/words.txt")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn run_missing_source_fails() {
        let dir = tempdir().unwrap();
        let result = run_classify(&dir.path().join("absent.txt"), dir.path());
        assert!(result.is_err());
    }
}
