//! Interactive console game
//!
//! The player guesses one letter per turn against the engine until the
//! pattern is fully revealed or the budget runs out.

use super::GameConfig;
use crate::core::{EngineError, Word};
use crate::engine::{CandidateEngine, GameStatus};
use crate::output::{write_game_over, write_guess_result, write_turn};
use crate::wordlists::loader::length_counts;
use anyhow::{Context, Result, bail};
use log::{debug, info};
use rand::seq::IteratorRandom;
use std::io::{self, BufRead, Write};

/// Pick a word length present in the dictionary at random
///
/// Returns `None` for an empty dictionary.
#[must_use]
pub fn pick_length(dictionary: &[Word]) -> Option<usize> {
    length_counts(dictionary)
        .into_keys()
        .choose(&mut rand::rng())
}

/// Run the interactive game on stdin/stdout
///
/// # Errors
///
/// Returns an error if the settings are invalid, the dictionary has no word
/// of the requested length, or reading input fails.
pub fn run_play(config: GameConfig, dictionary: &[Word], debug: bool) -> Result<()> {
    let mut engine = config.engine(dictionary).context("invalid game settings")?;
    let max_guesses = engine.guesses_left();

    println!("Welcome to hangman. I'm thinking of a {}-letter word.", config.length);

    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(
        &mut engine,
        max_guesses,
        &mut stdin.lock(),
        &mut stdout.lock(),
        debug,
    )?;

    Ok(())
}

/// Play one game, reading guesses from `input` and writing to `out`
///
/// Only the first character of each line counts, lower-cased. Repeated
/// letters are reported and do not end the game. End of input stops the
/// game early and returns the status reached so far.
///
/// # Errors
///
/// Returns an error if the engine has no candidates to start with, or if
/// reading or writing fails.
pub fn play_session<R: BufRead, W: Write>(
    engine: &mut CandidateEngine,
    max_guesses: u32,
    input: &mut R,
    out: &mut W,
    debug: bool,
) -> Result<GameStatus> {
    if engine.words().is_empty() {
        bail!("no {}-letter words in the dictionary", engine.word_length());
    }

    let mut line = String::new();
    while engine.status() == GameStatus::InProgress {
        write_turn(out, engine, max_guesses, debug)?;
        write!(out, "Your guess? ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(engine.status());
        }

        let Some(guess) = line.trim().to_lowercase().chars().next() else {
            continue;
        };

        match engine.record(guess) {
            Ok(hits) => {
                debug!(
                    "recorded '{guess}': {hits} hits, {} candidates left",
                    engine.words().len()
                );
                write_guess_result(out, guess, hits)?;
            }
            Err(EngineError::AlreadyGuessed(_)) => {
                writeln!(out, "You already guessed that")?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    write_game_over(out, engine)?;
    info!(
        "game over: {:?}, answer {}",
        engine.status(),
        engine.answer().map_or("-", Word::text)
    );

    Ok(engine.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;
    use std::io::Cursor;

    fn play(engine: &mut CandidateEngine, input: &str) -> (GameStatus, String) {
        colored::control::set_override(false);
        let max = engine.guesses_left();
        let mut out = Vec::new();
        let status = play_session(engine, max, &mut Cursor::new(input), &mut out, false).unwrap();
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn winning_game() {
        let mut engine = CandidateEngine::new(["ox"], 2, 3).unwrap();
        let (status, text) = play(&mut engine, "X\nx\n\no\n");

        assert_eq!(status, GameStatus::Won);
        assert!(text.contains("Yes, there is one x"));
        assert!(text.contains("You already guessed that"));
        assert!(text.contains("answer = ox"));
        assert!(text.contains("You beat me"));
    }

    #[test]
    fn losing_game() {
        let mut engine = CandidateEngine::new(["ox"], 2, 1).unwrap();
        let (status, text) = play(&mut engine, "q\n");

        assert_eq!(status, GameStatus::Lost);
        assert!(text.contains("Sorry, there are no q's"));
        assert!(text.contains("Sorry, you lose"));
    }

    #[test]
    fn end_of_input_stops_early() {
        let dictionary = words_from_slice(&["head", "hear", "heat", "hold", "cold"]);
        let mut engine = CandidateEngine::new(dictionary, 4, 8).unwrap();
        let (status, text) = play(&mut engine, "e\n");

        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(engine.pattern().unwrap(), "- e - -");
        assert!(!text.contains("answer ="));
    }

    #[test]
    fn empty_engine_is_an_error() {
        let mut engine = CandidateEngine::new(["ox"], 3, 8).unwrap();
        let mut out = Vec::new();
        let result = play_session(&mut engine, 8, &mut Cursor::new("a\n"), &mut out, false);
        assert!(result.is_err());
    }

    #[test]
    fn pick_length_from_dictionary() {
        let dictionary = words_from_slice(&["ox", "head", "cold"]);
        let length = pick_length(&dictionary).unwrap();
        assert!(length == 2 || length == 4);
        assert!(pick_length(&[]).is_none());
    }
}
