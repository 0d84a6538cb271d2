//! Dictionary word representation
//!
//! A Word is an immutable sequence of characters. Length is measured in
//! characters, not bytes, so multi-byte letters count once.

use std::fmt;

/// An immutable dictionary word
///
/// Words are case-sensitive: `"Head"` and `"head"` are different words.
/// Callers normalize case before handing words to the engine.
///
/// Ordering is lexicographic over the text, which gives candidate sets
/// their deterministic iteration order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
    letters: Box<[char]>,
}

impl Word {
    /// Create a new Word from any string
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Word;
    ///
    /// let word = Word::new("head");
    /// assert_eq!(word.text(), "head");
    /// assert_eq!(word.len(), 4);
    /// ```
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let letters = text.chars().collect();
        Self { text, letters }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's characters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of characters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Word {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
