//! Adversarial hangman engine
//!
//! `CandidateEngine` holds the game state; `partition` holds the grouping
//! and selection step it runs on every guess.

mod candidate;
mod partition;

pub use candidate::{CandidateEngine, GameStatus};
pub use partition::{Partition, choose_partition, group_by_reveal};
