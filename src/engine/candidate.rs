//! The adversarial candidate engine
//!
//! Instead of committing to a secret word, the engine keeps every dictionary
//! word that agrees with the guesses so far. Each guess partitions those
//! candidates by the pattern they would reveal, and the engine keeps the
//! largest partition. A guess only costs budget when the kept partition
//! reveals nothing.

use super::partition::{Partition, group_by_reveal, winning_index};
use crate::core::{EngineError, Pattern, Word};
use std::collections::BTreeSet;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Guesses remain and the pattern still has hidden slots
    InProgress,
    /// Every slot of the pattern is revealed
    Won,
    /// The budget is spent, or no candidate is left
    Lost,
}

/// Owns the candidate words, pattern, guessed letters and guess budget
///
/// # Examples
/// ```
/// use evil_hangman::engine::CandidateEngine;
///
/// let dictionary = ["head", "hear", "heat", "hold", "cold"];
/// let mut engine = CandidateEngine::new(dictionary, 4, 8).unwrap();
///
/// assert_eq!(engine.pattern().unwrap(), "- - - -");
/// assert_eq!(engine.record('e').unwrap(), 1);
/// assert_eq!(engine.pattern().unwrap(), "- e - -");
/// assert_eq!(engine.guesses_left(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct CandidateEngine {
    length: usize,
    words: BTreeSet<Word>,
    pattern: Pattern,
    guessed: BTreeSet<char>,
    guesses_left: u32,
}

impl CandidateEngine {
    /// Create an engine over the words of `dictionary` that are `length` long
    ///
    /// Words of any other length are dropped and duplicates collapse. The
    /// pattern starts fully hidden and the budget starts at `max`.
    ///
    /// # Errors
    /// - [`EngineError::ZeroLength`] if `length` is 0
    /// - [`EngineError::NegativeBudget`] if `max` is negative
    pub fn new<I, W>(dictionary: I, length: usize, max: i32) -> Result<Self, EngineError>
    where
        I: IntoIterator<Item = W>,
        W: Into<Word>,
    {
        if length < 1 {
            return Err(EngineError::ZeroLength);
        }
        let guesses_left = u32::try_from(max).map_err(|_| EngineError::NegativeBudget(max))?;

        let words = dictionary
            .into_iter()
            .map(Into::<Word>::into)
            .filter(|word| word.len() == length)
            .collect();

        Ok(Self {
            length,
            words,
            pattern: Pattern::hidden(length),
            guessed: BTreeSet::new(),
            guesses_left,
        })
    }

    /// Current candidate words, in lexicographic order
    #[must_use]
    pub const fn words(&self) -> &BTreeSet<Word> {
        &self.words
    }

    /// Remaining guess budget
    #[must_use]
    pub const fn guesses_left(&self) -> u32 {
        self.guesses_left
    }

    /// Letters guessed so far, in ascending order
    #[must_use]
    pub const fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// Length every candidate word has
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.length
    }

    /// Current pattern in canonical text form, e.g. `- e - -`
    ///
    /// # Errors
    /// [`EngineError::NoCandidates`] if no candidate word remains.
    pub fn pattern(&self) -> Result<String, EngineError> {
        self.pattern_value().map(Pattern::to_string)
    }

    /// Current pattern as slots
    ///
    /// # Errors
    /// [`EngineError::NoCandidates`] if no candidate word remains.
    pub fn pattern_value(&self) -> Result<&Pattern, EngineError> {
        if self.words.is_empty() {
            return Err(EngineError::NoCandidates);
        }
        Ok(&self.pattern)
    }

    /// Record a guess and return how many slots it revealed
    ///
    /// The candidates are replaced by the largest group sharing a reveal
    /// pattern; on a tie the group whose pattern text sorts first is kept.
    /// When the kept pattern shows no `guess`, one unit of budget is spent.
    ///
    /// # Errors
    /// State is checked before the letter, and nothing changes on failure:
    /// - [`EngineError::OutOfGuesses`] if the budget is spent
    /// - [`EngineError::NoCandidates`] if no candidate word remains
    /// - [`EngineError::AlreadyGuessed`] if `guess` was recorded before
    pub fn record(&mut self, guess: char) -> Result<usize, EngineError> {
        self.check_guess(guess)?;

        let mut partitions = group_by_reveal(&self.words, &self.pattern, guess);
        let winner = winning_index(&partitions).ok_or(EngineError::NoCandidates)?;
        let (pattern, words) = partitions.swap_remove(winner).into_parts();

        let hits = pattern.count(guess);
        self.guessed.insert(guess);
        self.pattern = pattern;
        self.words = words;
        if hits == 0 {
            self.guesses_left -= 1;
        }

        Ok(hits)
    }

    /// The partitions `record(guess)` would choose between, without recording
    ///
    /// Partitions come back in tie-break order, so
    /// [`choose_partition`](super::choose_partition) over the result picks
    /// what `record` would keep.
    ///
    /// # Errors
    /// Same as [`record`](Self::record).
    pub fn preview(&self, guess: char) -> Result<Vec<Partition>, EngineError> {
        self.check_guess(guess)?;
        Ok(group_by_reveal(&self.words, &self.pattern, guess))
    }

    /// Whether the game is won, lost, or still going
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.words.is_empty() {
            GameStatus::Lost
        } else if self.pattern.is_complete() {
            GameStatus::Won
        } else if self.guesses_left == 0 {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// The word to reveal once the game ends
    ///
    /// This is the first remaining candidate in lexicographic order.
    #[must_use]
    pub fn answer(&self) -> Option<&Word> {
        self.words.first()
    }

    fn check_guess(&self, guess: char) -> Result<(), EngineError> {
        if self.guesses_left < 1 {
            return Err(EngineError::OutOfGuesses);
        }
        if self.words.is_empty() {
            return Err(EngineError::NoCandidates);
        }
        if self.guessed.contains(&guess) {
            return Err(EngineError::AlreadyGuessed(guess));
        }
        Ok(())
    }
}
