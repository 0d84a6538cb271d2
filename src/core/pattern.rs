//! Hangman reveal pattern
//!
//! A pattern holds one slot per letter of the hidden word. Each slot is
//! either unrevealed or shows the letter guessed for that position.
//!
//! The canonical text form separates slots with a single space and draws
//! unrevealed slots as `-`, so a four-letter pattern with an `e` in second
//! position reads `- e - -`.

use super::Word;
use std::fmt;

/// Marker drawn for an unrevealed slot in the canonical text form
pub const UNREVEALED: char = '-';

/// A fixed-length sequence of revealed or unrevealed slots
///
/// Patterns are values: revealing a letter builds a new pattern and leaves
/// the old one untouched.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern {
    slots: Box<[Option<char>]>,
}

impl Pattern {
    /// Create a pattern of `length` unrevealed slots
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// assert_eq!(Pattern::hidden(4).to_string(), "- - - -");
    /// ```
    #[must_use]
    pub fn hidden(length: usize) -> Self {
        Self {
            slots: vec![None; length].into_boxed_slice(),
        }
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Build the pattern `word` would show if `guess` were guessed now
    ///
    /// Every position where `word` holds `guess` shows `guess`; every other
    /// position keeps whatever this pattern already shows there. Letters are
    /// never re-derived from `word`, so earlier reveals persist and hidden
    /// slots stay hidden unless matched by `guess`. Guessing the `-` marker
    /// itself leaves slots hidden, since the text form cannot tell them apart.
    ///
    /// `word` must have the same length as the pattern.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{Pattern, Word};
    ///
    /// let start = Pattern::hidden(4);
    /// let after_e = start.reveal(&Word::new("heat"), 'e');
    /// assert_eq!(after_e.to_string(), "- e - -");
    ///
    /// let after_a = after_e.reveal(&Word::new("hear"), 'a');
    /// assert_eq!(after_a.to_string(), "- e a -");
    /// ```
    #[must_use]
    pub fn reveal(&self, word: &Word, guess: char) -> Self {
        debug_assert_eq!(word.len(), self.len(), "word length must match pattern");

        let slots = self
            .slots
            .iter()
            .zip(word.letters())
            .map(|(&slot, &letter)| {
                if letter == guess && guess != UNREVEALED {
                    Some(guess)
                } else {
                    slot
                }
            })
            .collect();

        Self { slots }
    }

    /// Count occurrences of `letter` in the canonical text form
    ///
    /// Unrevealed markers and the separating spaces count like any other
    /// character.
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        let shown = self
            .slots
            .iter()
            .filter(|slot| slot.unwrap_or(UNREVEALED) == letter)
            .count();
        let separators = if letter == ' ' {
            self.len().saturating_sub(1)
        } else {
            0
        };
        shown + separators
    }

    /// Number of slots still unrevealed
    #[must_use]
    pub fn unrevealed(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// True once every slot has been revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Check that this pattern keeps every reveal made in `earlier`
    ///
    /// Holds when both patterns have the same length and every slot revealed
    /// in `earlier` shows the same letter here.
    #[must_use]
    pub fn extends(&self, earlier: &Self) -> bool {
        self.len() == earlier.len()
            && self
                .slots
                .iter()
                .zip(earlier.slots.iter())
                .all(|(now, before)| before.is_none() || now == before)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", slot.unwrap_or(UNREVEALED))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_pattern_text() {
        assert_eq!(Pattern::hidden(1).to_string(), "-");
        assert_eq!(Pattern::hidden(5).to_string(), "- - - - -");
        assert_eq!(Pattern::hidden(5).unrevealed(), 5);
    }

    #[test]
    fn reveal_marks_every_occurrence() {
        let pattern = Pattern::hidden(5).reveal(&Word::new("geese"), 'e');
        assert_eq!(pattern.to_string(), "- e e - e");
        assert_eq!(pattern.count('e'), 3);
        assert_eq!(pattern.unrevealed(), 2);
    }

    #[test]
    fn reveal_without_match_keeps_pattern() {
        let pattern = Pattern::hidden(4).reveal(&Word::new("head"), 'e');
        let next = pattern.reveal(&Word::new("head"), 'o');
        assert_eq!(next, pattern);
        assert_eq!(next.count('o'), 0);
    }

    #[test]
    fn reveal_keeps_earlier_letters() {
        let first = Pattern::hidden(4).reveal(&Word::new("heat"), 'e');
        // The earlier reveal comes from the pattern, not from the word
        let second = first.reveal(&Word::new("hold"), 'h');
        assert_eq!(second.to_string(), "h e - -");
        assert!(second.extends(&first));
    }

    #[test]
    fn count_reads_the_text_form() {
        let pattern = Pattern::hidden(3).reveal(&Word::new("a b"), ' ');
        assert_eq!(pattern.to_string(), "-   -");
        assert_eq!(pattern.count(UNREVEALED), 2);
        assert_eq!(pattern.count(' '), 3);
        assert_eq!(Pattern::hidden(3).count(UNREVEALED), 3);
    }

    #[test]
    fn marker_guess_stays_hidden() {
        let pattern = Pattern::hidden(2).reveal(&Word::new("x-"), UNREVEALED);
        assert_eq!(pattern, Pattern::hidden(2));
        assert_eq!(pattern.unrevealed(), 2);
    }

    #[test]
    fn complete_pattern() {
        let word = Word::new("ox");
        let pattern = Pattern::hidden(2).reveal(&word, 'o').reveal(&word, 'x');
        assert!(pattern.is_complete());
        assert_eq!(pattern.to_string(), "o x");
    }

    #[test]
    fn extends_rejects_changed_slot() {
        let earlier = Pattern::hidden(4).reveal(&Word::new("heat"), 'e');
        let other = Pattern::hidden(4).reveal(&Word::new("hold"), 'o');
        assert!(!other.extends(&earlier));
        assert!(!Pattern::hidden(3).extends(&earlier));
    }
}
