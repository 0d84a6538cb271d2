//! Partition analysis command
//!
//! Shows, for every letter not yet guessed, how the engine would split the
//! candidate set and which group it would keep.

use super::GameConfig;
use super::script::replay;
use crate::core::Word;
use crate::engine::{CandidateEngine, Partition, choose_partition};
use anyhow::{Context, Result};
use rayon::prelude::*;

/// How one letter would split the candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterAnalysis {
    pub letter: char,
    /// Number of distinct reveal patterns
    pub groups: usize,
    pub kept_pattern: String,
    pub kept_size: usize,
    /// Slots the letter would reveal; 0 is a miss
    pub hits: usize,
}

/// Engine state plus the per-letter breakdown
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub pattern: String,
    pub candidates: usize,
    pub guesses_left: u32,
    pub letters: Vec<LetterAnalysis>,
}

/// Preview every unguessed letter from `a` to `z`
///
/// Letters the engine would reject are left out, so an engine with no
/// budget or no candidates yields an empty list.
#[must_use]
pub fn analyze_letters(engine: &CandidateEngine) -> Vec<LetterAnalysis> {
    let letters: Vec<char> = ('a'..='z').collect();

    letters
        .into_par_iter()
        .filter_map(|letter| {
            let partitions = engine.preview(letter).ok()?;
            summarize(letter, &partitions)
        })
        .collect()
}

fn summarize(letter: char, partitions: &[Partition]) -> Option<LetterAnalysis> {
    let kept = choose_partition(partitions)?;

    Some(LetterAnalysis {
        letter,
        groups: partitions.len(),
        kept_pattern: kept.text().to_string(),
        kept_size: kept.len(),
        hits: kept.pattern().count(letter),
    })
}

/// Replay `letters`, then analyze the resulting position
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the dictionary has no
/// word of the requested length, or a replayed guess is rejected.
pub fn run_analyze(config: GameConfig, dictionary: &[Word], letters: &str) -> Result<AnalysisReport> {
    let mut engine = config.engine(dictionary).context("invalid game settings")?;
    replay(&mut engine, letters).context("guess rejected")?;

    let pattern = engine
        .pattern()
        .with_context(|| format!("no {}-letter words in the dictionary", config.length))?;

    Ok(AnalysisReport {
        pattern,
        candidates: engine.words().len(),
        guesses_left: engine.guesses_left(),
        letters: analyze_letters(&engine),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn dictionary() -> Vec<Word> {
        words_from_slice(&["head", "hear", "heat", "hold", "cold"])
    }

    #[test]
    fn analysis_skips_guessed_letters() {
        let report = run_analyze(GameConfig::new(4, 8), &dictionary(), "e").unwrap();

        assert_eq!(report.pattern, "- e - -");
        assert_eq!(report.candidates, 3);
        assert_eq!(report.letters.len(), 25);
        assert!(report.letters.iter().all(|a| a.letter != 'e'));
    }

    #[test]
    fn analysis_in_letter_order() {
        let report = run_analyze(GameConfig::new(4, 8), &dictionary(), "").unwrap();
        let letters: Vec<char> = report.letters.iter().map(|a| a.letter).collect();
        let expected: Vec<char> = ('a'..='z').collect();
        assert_eq!(letters, expected);
    }

    #[test]
    fn analysis_agrees_with_record() {
        let config = GameConfig::new(4, 8);
        let report = run_analyze(config, &dictionary(), "e").unwrap();
        let a = report.letters.iter().find(|a| a.letter == 'a').unwrap();

        assert_eq!(a.groups, 2);
        assert_eq!(a.kept_pattern, "- e a -");
        assert_eq!(a.kept_size, 2);
        assert_eq!(a.hits, 1);

        let mut engine = config.engine(&dictionary()).unwrap();
        engine.record('e').unwrap();
        assert_eq!(engine.record('a').unwrap(), a.hits);
        assert_eq!(engine.pattern().unwrap(), a.kept_pattern);
    }

    #[test]
    fn letter_absent_from_all_candidates_is_a_miss() {
        let report = run_analyze(GameConfig::new(4, 8), &dictionary(), "").unwrap();
        let z = report.letters.iter().find(|a| a.letter == 'z').unwrap();
        assert_eq!(z.groups, 1);
        assert_eq!(z.kept_size, 5);
        assert_eq!(z.hits, 0);
    }

    #[test]
    fn no_budget_no_analysis() {
        let engine = GameConfig::new(4, 0).engine(&dictionary()).unwrap();
        assert!(analyze_letters(&engine).is_empty());
    }
}
