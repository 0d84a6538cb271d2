//! Simulation - scripted guesser against the engine
//!
//! Plays one game per word length with a guesser that tries letters in a
//! fixed order, and reports how each game ended.

use super::GameConfig;
use crate::core::{EngineError, Pattern, Word};
use crate::engine::{CandidateEngine, GameStatus};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// English letters, most frequent first
pub const FREQUENCY_ORDER: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// How one simulated game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub length: usize,
    pub status: GameStatus,
    /// Letters recorded, hits and misses alike
    pub letters_tried: usize,
    pub misses: usize,
    pub pattern: String,
    pub answer: Option<String>,
    pub remaining: usize,
}

/// Play `order` against a fresh engine until the game ends
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn simulate_length(
    config: GameConfig,
    dictionary: &[Word],
    order: &[char],
) -> Result<GameSummary, EngineError> {
    let mut engine = config.engine(dictionary)?;
    let (letters_tried, misses) = play_out(&mut engine, order)?;

    let summary = GameSummary {
        length: config.length,
        status: engine.status(),
        letters_tried,
        misses,
        pattern: engine
            .pattern()
            .unwrap_or_else(|_| Pattern::hidden(config.length).to_string()),
        answer: engine.answer().map(|w| w.text().to_string()),
        remaining: engine.words().len(),
    };

    debug!(
        "length {}: {:?} after {} letters",
        summary.length, summary.status, summary.letters_tried
    );
    Ok(summary)
}

fn play_out(engine: &mut CandidateEngine, order: &[char]) -> Result<(usize, usize), EngineError> {
    let mut tried = 0;
    let mut misses = 0;

    for &letter in order {
        if engine.status() != GameStatus::InProgress {
            break;
        }
        if engine.guessed_letters().contains(&letter) {
            continue;
        }

        tried += 1;
        if engine.record(letter)? == 0 {
            misses += 1;
        }
    }

    Ok((tried, misses))
}

/// Guess order for one game
///
/// Frequency order unless a seed is given, in which case the alphabet is
/// shuffled with a generator seeded from `seed` and the word length.
#[must_use]
pub fn letter_order(seed: Option<u64>, length: usize) -> Vec<char> {
    match seed {
        None => FREQUENCY_ORDER.chars().collect(),
        Some(seed) => {
            let mut letters: Vec<char> = ('a'..='z').collect();
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(length as u64));
            letters.shuffle(&mut rng);
            letters
        }
    }
}

/// Simulate one game per length in parallel
///
/// Results come back in the order of `lengths`, along with the wall time.
///
/// # Errors
///
/// Returns the first engine error hit by any game.
pub fn run_simulation(
    dictionary: &[Word],
    lengths: &[usize],
    guesses: i32,
    seed: Option<u64>,
) -> Result<(Vec<GameSummary>, Duration), EngineError> {
    println!("🎯 Simulating {} games...", lengths.len());

    let pb = ProgressBar::new(lengths.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();
    let results: Result<Vec<GameSummary>, EngineError> = lengths
        .par_iter()
        .map(|&length| {
            let order = letter_order(seed, length);
            let summary = simulate_length(GameConfig::new(length, guesses), dictionary, &order);
            pb.inc(1);
            summary
        })
        .collect();

    pb.finish_with_message("Complete!");
    let elapsed = start.elapsed();

    let results = results?;
    info!(
        "simulated {} games, {} won, in {:.2?}",
        results.len(),
        results.iter().filter(|r| r.status == GameStatus::Won).count(),
        elapsed
    );

    Ok((results, elapsed))
}
