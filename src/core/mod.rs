//! Core domain types for hangman
//!
//! This module contains the value types the engine is built from.
//! Everything here is pure and free of I/O.

mod error;
mod pattern;
mod word;

pub use error::{EngineError, ErrorKind};
pub use pattern::{Pattern, UNREVEALED};
pub use word::Word;
