//! Evil Hangman
//!
//! An adversarial hangman engine. It never commits to a secret word: it keeps
//! every dictionary word consistent with the guesses so far, and answers each
//! guess with whichever reveal keeps the most words alive.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::engine::CandidateEngine;
//!
//! let dictionary = ["head", "hear", "heat", "hold", "cold"];
//! let mut engine = CandidateEngine::new(dictionary, 4, 8).unwrap();
//!
//! // Three words have an 'e' in second place, only two have none
//! assert_eq!(engine.record('e').unwrap(), 1);
//! assert_eq!(engine.pattern().unwrap(), "- e - -");
//!
//! // No candidate has an 'o', so this one costs a guess
//! assert_eq!(engine.record('o').unwrap(), 0);
//! assert_eq!(engine.guesses_left(), 7);
//! ```

// Core domain types
pub mod core;

// Candidate engine
pub mod engine;

// Dictionaries
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
