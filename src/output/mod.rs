//! Terminal output formatting
//!
//! Display utilities for game state, command results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_analysis_report, print_script_result, print_simulation, write_game_over,
    write_guess_result, write_turn,
};
