//! Dictionaries for hangman
//!
//! Provides the embedded default dictionary and a loader for custom ones.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn dictionary_words_are_lowercase() {
        for &word in DICTIONARY {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn dictionary_covers_common_lengths() {
        for length in 3..=6 {
            assert!(
                DICTIONARY.iter().any(|w| w.len() == length),
                "No {length}-letter words"
            );
        }
    }

    #[test]
    fn dictionary_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = DICTIONARY.iter().collect();
        assert_eq!(unique.len(), DICTIONARY.len());
    }
}
