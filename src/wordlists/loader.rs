//! Dictionary loading utilities
//!
//! Provides functions to load dictionaries from files or use the embedded
//! constant. Every word is lower-cased on the way in, since the engine
//! itself is case-sensitive.

use crate::core::Word;
use log::{debug, info};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// The file is split on whitespace and every token becomes one word.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use evil_hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words: Vec<Word> = content.split_whitespace().map(normalize).collect();

    info!("loaded {} words from {}", words.len(), path.display());
    debug!("word counts by length: {:?}", length_counts(&words));

    Ok(words)
}

/// Convert an embedded string slice to a Word vector
///
/// # Examples
/// ```
/// use evil_hangman::wordlists::loader::words_from_slice;
/// use evil_hangman::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().map(|&s| normalize(s)).collect()
}

/// Number of distinct words of each length
///
/// Duplicates count once, matching how the engine collapses them.
#[must_use]
pub fn length_counts(words: &[Word]) -> BTreeMap<usize, usize> {
    let mut unique: Vec<&Word> = words.iter().collect();
    unique.sort();
    unique.dedup();

    let mut counts = BTreeMap::new();
    for word in unique {
        *counts.entry(word.len()).or_insert(0) += 1;
    }
    counts
}

fn normalize(token: &str) -> Word {
    Word::new(token.trim().to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_lowercases() {
        let words = words_from_slice(&["Head", "COLD", "hear"]);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["head", "cold", "hear"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn length_counts_collapse_duplicates() {
        let words = words_from_slice(&["head", "hear", "head", "ox", "Ox"]);
        let counts = length_counts(&words);
        assert_eq!(counts.get(&4), Some(&2));
        assert_eq!(counts.get(&2), Some(&1));
        assert_eq!(counts.get(&3), None);
    }

    #[test]
    fn load_from_file_splits_on_whitespace() {
        let path = std::env::temp_dir().join(format!(
            "evil_hangman_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "Head hear\n\n  HEAT\thold\ncold\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["head", "hear", "heat", "hold", "cold"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let path = std::env::temp_dir().join("evil_hangman_no_such_dictionary.txt");
        assert!(load_from_file(path).is_err());
    }
}
