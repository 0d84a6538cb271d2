//! Command implementations
//!
//! Drivers that sit on top of the engine. The engine never reads input or
//! files itself; these do.

pub mod analyze;
pub mod play;
pub mod script;
pub mod simulate;

pub use analyze::{AnalysisReport, LetterAnalysis, analyze_letters, run_analyze};
pub use play::{pick_length, play_session, run_play};
pub use script::{ScriptResult, ScriptStep, replay, run_script};
pub use simulate::{FREQUENCY_ORDER, GameSummary, run_simulation, simulate_length};

use crate::core::{EngineError, Word};
use crate::engine::CandidateEngine;

/// Per-game settings handed from the CLI to a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub length: usize,
    pub guesses: i32,
}

impl GameConfig {
    /// Guess budget used when none is given
    pub const DEFAULT_GUESSES: i32 = 8;

    #[must_use]
    pub const fn new(length: usize, guesses: i32) -> Self {
        Self { length, guesses }
    }

    /// Build a fresh engine for this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the length is zero or the budget is negative.
    pub fn engine(self, dictionary: &[Word]) -> Result<CandidateEngine, EngineError> {
        CandidateEngine::new(dictionary.iter().cloned(), self.length, self.guesses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn config_builds_engine() {
        let dictionary = words_from_slice(&["head", "ox", "cold"]);
        let engine = GameConfig::new(4, 3).engine(&dictionary).unwrap();
        assert_eq!(engine.words().len(), 2);
        assert_eq!(engine.guesses_left(), 3);
    }

    #[test]
    fn config_rejects_zero_length() {
        let dictionary = words_from_slice(&["head"]);
        assert_eq!(
            GameConfig::new(0, 3).engine(&dictionary).unwrap_err(),
            EngineError::ZeroLength
        );
    }
}
