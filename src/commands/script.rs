//! Scripted replay
//!
//! Feeds a fixed sequence of letters to a fresh engine and records the
//! pattern after each one.

use super::GameConfig;
use crate::core::{EngineError, Word};
use crate::engine::CandidateEngine;
use anyhow::{Context, Result};
use log::debug;

/// One recorded guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub guess: char,
    pub hits: usize,
    pub pattern: String,
    pub guesses_left: u32,
    pub candidates: usize,
}

/// Result of replaying a script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptResult {
    pub initial: String,
    pub steps: Vec<ScriptStep>,
}

/// Record every letter of `letters` in order
///
/// Whitespace and commas are skipped so `"e o a"` and `"e,o,a"` both work.
///
/// # Errors
///
/// Stops at the first guess the engine rejects and returns its error.
pub fn replay(engine: &mut CandidateEngine, letters: &str) -> Result<Vec<ScriptStep>, EngineError> {
    let mut steps = Vec::new();

    for guess in letters.chars().filter(|c| !c.is_whitespace() && *c != ',') {
        let hits = engine.record(guess)?;
        let pattern = engine.pattern()?;
        debug!(
            "recorded '{guess}': {hits} hits, pattern {pattern}, {} candidates",
            engine.words().len()
        );

        steps.push(ScriptStep {
            guess,
            hits,
            pattern,
            guesses_left: engine.guesses_left(),
            candidates: engine.words().len(),
        });
    }

    Ok(steps)
}

/// Build an engine and replay `letters` against it
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the dictionary has no
/// word of the requested length, or a guess is rejected.
pub fn run_script(config: GameConfig, dictionary: &[Word], letters: &str) -> Result<ScriptResult> {
    let mut engine = config.engine(dictionary).context("invalid game settings")?;
    let initial = engine
        .pattern()
        .with_context(|| format!("no {}-letter words in the dictionary", config.length))?;

    let steps = replay(&mut engine, letters).context("guess rejected")?;

    Ok(ScriptResult { initial, steps })
}
