//! Artifact persistence
//!
//! The answer list and guess set are bincode blobs understood only by the
//! consuming game. Writes go through a temp file in the target directory
//! followed by a rename, so an interrupted run never leaves a torn
//! artifact behind.

use rustc_hash::FxHashSet;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter, Error};
use std::path::Path;
use tempfile::NamedTempFile;

/// Serialize the ordered answer list
///
/// # Errors
/// Returns an I/O error if the temp file cannot be created, written, or
/// renamed into place.
pub fn save_answers(path: &Path, answers: &[String]) -> Result<(), Error> {
    save(path, answers)
}

/// Load an answer list previously written by [`save_answers`]
///
/// Round-trips to the exact sequence written, order included.
///
/// # Errors
/// Returns an I/O error if the file is missing or not a valid artifact.
pub fn load_answers(path: &Path) -> Result<Vec<String>, Error> {
    load(path)
}

/// Serialize the deduplicated guess set
///
/// # Errors
/// Returns an I/O error if the temp file cannot be created, written, or
/// renamed into place.
pub fn save_guesses(path: &Path, guesses: &FxHashSet<String>) -> Result<(), Error> {
    save(path, guesses)
}

/// Load a guess set previously written by [`save_guesses`]
///
/// Round-trips to a set with identical membership; iteration order is
/// unspecified.
///
/// # Errors
/// Returns an I/O error if the file is missing or not a valid artifact.
pub fn load_guesses(path: &Path) -> Result<FxHashSet<String>, Error> {
    load(path)
}

fn save<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), Error> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, value).map_err(Error::other)?;

    temp_file.persist(path)?;
    Ok(())
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T, Error> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    bincode::deserialize_from(reader).map_err(Error::other)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn answers_round_trip_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("answers.bin");

        let answers = strings(&["alpha", "bravo", "charlie"]);
        save_answers(&path, &answers).unwrap();

        let loaded = load_answers(&path).unwrap();
        assert_eq!(loaded, answers);
    }

    #[test]
    fn guesses_round_trip_membership() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("guesses.bin");

        let guesses: FxHashSet<String> =
            strings(&["alpha", "bravo", "charlie"]).into_iter().collect();
        save_guesses(&path, &guesses).unwrap();

        let loaded = load_guesses(&path).unwrap();
        assert_eq!(loaded, guesses);
        assert!(loaded.contains("bravo"));
        assert!(!loaded.contains("delta"));
    }

    #[test]
    fn save_overwrites_previous_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("answers.bin");

        save_answers(&path, &strings(&["old"])).unwrap();
        save_answers(&path, &strings(&["new", "words"])).unwrap();

        assert_eq!(load_answers(&path).unwrap(), strings(&["new", "words"]));
    }

    #[test]
    fn load_missing_artifact_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.bin");
        assert!(load_answers(&path).is_err());
    }

    #[test]
    fn empty_answer_list_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("answers.bin");

        save_answers(&path, &[]).unwrap();
        assert!(load_answers(&path).unwrap().is_empty());
    }
}
