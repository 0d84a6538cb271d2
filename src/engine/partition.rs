//! Partitioning candidates by reveal pattern
//!
//! Given a guess, every candidate word induces a reveal pattern. Words that
//! induce the same pattern form a partition, and the engine keeps the
//! largest one.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// A group of candidates that share one reveal pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pattern: Pattern,
    text: String,
    words: BTreeSet<Word>,
}

impl Partition {
    fn new(pattern: Pattern, words: BTreeSet<Word>) -> Self {
        Self {
            text: pattern.to_string(),
            pattern,
            words,
        }
    }

    /// The reveal pattern every word in this group produces
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Canonical text of the pattern, the tie-break key
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn words(&self) -> &BTreeSet<Word> {
        &self.words
    }

    /// Number of words in the group
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Pattern, BTreeSet<Word>) {
        (self.pattern, self.words)
    }
}

/// Group `candidates` by the pattern `guess` would reveal on top of `current`
///
/// Groups are keyed by canonical pattern text and come back sorted by it.
///
/// # Examples
/// ```
/// use evil_hangman::core::{Pattern, Word};
/// use evil_hangman::engine::group_by_reveal;
/// use std::collections::BTreeSet;
///
/// let candidates: BTreeSet<Word> = ["head", "hold", "cold"].into_iter().map(Word::from).collect();
/// let partitions = group_by_reveal(&candidates, &Pattern::hidden(4), 'e');
///
/// assert_eq!(partitions.len(), 2);
/// assert_eq!(partitions[0].text(), "- - - -");
/// assert_eq!(partitions[0].len(), 2);
/// assert_eq!(partitions[1].text(), "- e - -");
/// ```
#[must_use]
pub fn group_by_reveal(
    candidates: &BTreeSet<Word>,
    current: &Pattern,
    guess: char,
) -> Vec<Partition> {
    let mut groups: FxHashMap<String, Partition> = FxHashMap::default();

    for word in candidates {
        let pattern = current.reveal(word, guess);
        groups
            .entry(pattern.to_string())
            .or_insert_with(|| Partition::new(pattern, BTreeSet::new()))
            .words
            .insert(word.clone());
    }

    let mut partitions: Vec<Partition> = groups.into_values().collect();
    partitions.sort_by(|a, b| a.text.cmp(&b.text));
    partitions
}

/// Pick the group the engine keeps
///
/// Scans in the given order and only replaces the current best with a
/// strictly larger group, so the first group of maximal size wins.
/// Returns `None` when there are no groups.
#[must_use]
pub fn choose_partition(partitions: &[Partition]) -> Option<&Partition> {
    winning_index(partitions).map(|i| &partitions[i])
}

pub(crate) fn winning_index(partitions: &[Partition]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;

    for (i, partition) in partitions.iter().enumerate() {
        if best.is_none_or(|(_, size)| partition.len() > size) {
            best = Some((i, partition.len()));
        }
    }

    best.map(|(i, _)| i)
}
