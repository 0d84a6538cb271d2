//! Display functions for game state and command results

use super::formatters::{budget_bar, format_letters, hit_message};
use crate::commands::{AnalysisReport, GameSummary, ScriptResult};
use crate::core::Word;
use crate::engine::{CandidateEngine, GameStatus};
use colored::Colorize;
use std::io::{self, Write};
use std::time::Duration;

/// Most candidate words listed in debug mode
const DEBUG_WORD_LIMIT: usize = 20;

/// Write the state shown before each guess
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_turn<W: Write>(
    out: &mut W,
    engine: &CandidateEngine,
    max_guesses: u32,
    debug: bool,
) -> io::Result<()> {
    let (pattern, hidden) = match engine.pattern_value() {
        Ok(pattern) => (pattern.to_string(), pattern.unrevealed()),
        Err(e) => (e.to_string(), 0),
    };

    writeln!(out)?;
    if debug {
        let words: Vec<&str> = engine
            .words()
            .iter()
            .take(DEBUG_WORD_LIMIT)
            .map(Word::text)
            .collect();
        let more = engine.words().len().saturating_sub(DEBUG_WORD_LIMIT);
        write!(
            out,
            "{} {} words: {}",
            "debug:".bright_black(),
            engine.words().len(),
            words.join(", ")
        )?;
        if more > 0 {
            write!(out, " (+{more} more)")?;
        }
        writeln!(out)?;
    }
    writeln!(
        out,
        "guesses : {} {}",
        engine.guesses_left(),
        budget_bar(engine.guesses_left(), max_guesses, 10).cyan()
    )?;
    writeln!(out, "guessed : {}", format_letters(engine.guessed_letters()))?;
    writeln!(
        out,
        "current : {}  {}",
        pattern.bright_white().bold(),
        format!("({hidden} hidden)").bright_black()
    )
}

/// Write the outcome of one guess
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_guess_result<W: Write>(out: &mut W, guess: char, hits: usize) -> io::Result<()> {
    let message = hit_message(guess, hits);
    if hits == 0 {
        writeln!(out, "{}", message.red())
    } else {
        writeln!(out, "{}", message.green())
    }
}

/// Write the end-of-game banner
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn write_game_over<W: Write>(out: &mut W, engine: &CandidateEngine) -> io::Result<()> {
    writeln!(out)?;
    if let Some(answer) = engine.answer() {
        writeln!(out, "answer = {}", answer.text().bright_yellow().bold())?;
    }

    match engine.status() {
        GameStatus::Won => writeln!(out, "{}", "You beat me".green().bold()),
        GameStatus::Lost | GameStatus::InProgress => {
            writeln!(out, "{}", "Sorry, you lose".red().bold())
        }
    }
}

/// Print a scripted replay, one quoted pattern per line
pub fn print_script_result(result: &ScriptResult) {
    println!("'{}'", result.initial);
    for step in &result.steps {
        println!(
            "'{}'  {} {}",
            step.pattern,
            format!("{}:", step.guess).bright_black(),
            hit_message(step.guess, step.hits).bright_black()
        );
    }
}

/// Print the per-letter partition analysis
pub fn print_analysis_report(report: &AnalysisReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        report.pattern.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!(
        "\n{} candidates, {} guesses left\n",
        report.candidates, report.guesses_left
    );

    if report.letters.is_empty() {
        println!("No letter can be guessed from here.");
        return;
    }

    println!("  {:<6} {:>6} {:>6}  {}", "Letter", "Groups", "Kept", "Pattern");
    println!("  {}", "─".repeat(40).bright_black());
    for letter in &report.letters {
        let outcome = if letter.hits == 0 {
            "miss".red()
        } else {
            format!("+{}", letter.hits).green()
        };
        println!(
            "  {:<6} {:>6} {:>6}  {}  {}",
            letter.letter, letter.groups, letter.kept_size, letter.kept_pattern, outcome
        );
    }
}

/// Print simulation results
pub fn print_simulation(results: &[GameSummary], elapsed: Duration) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for result in results {
        let status = match result.status {
            GameStatus::Won => "won ".green().bold(),
            GameStatus::Lost => "lost".red().bold(),
            GameStatus::InProgress => "open".yellow().bold(),
        };
        println!(
            "  {:>2} letters: {}  {:>2} tried, {:>2} missed  {}  ({})",
            result.length,
            status,
            result.letters_tried,
            result.misses,
            result.pattern,
            result.answer.as_deref().unwrap_or("-")
        );
    }

    let won = results
        .iter()
        .filter(|r| r.status == GameStatus::Won)
        .count();
    println!(
        "\n📊 Guesser won {} of {} games in {:.2}s",
        format!("{won}").bright_yellow().bold(),
        results.len(),
        elapsed.as_secs_f64()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn engine() -> CandidateEngine {
        let dictionary = words_from_slice(&["head", "hear", "heat", "hold", "cold"]);
        CandidateEngine::new(dictionary, 4, 8).unwrap()
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn turn_shows_state() {
        let mut engine = engine();
        engine.record('e').unwrap();
        let text = render(|out| write_turn(out, &engine, 8, false));

        assert!(text.contains("guesses : 8"));
        assert!(text.contains("guessed : [e]"));
        assert!(text.contains("current : - e - -  (3 hidden)"));
        assert!(!text.contains("debug:"));
    }

    #[test]
    fn debug_turn_lists_words() {
        let engine = engine();
        let text = render(|out| write_turn(out, &engine, 8, true));
        assert!(text.contains("5 words: cold, head, hear, heat, hold"));
    }

    #[test]
    fn game_over_reveals_answer() {
        let mut engine = CandidateEngine::new(["ox"], 2, 1).unwrap();
        engine.record('q').unwrap();
        let text = render(|out| write_game_over(out, &engine));
        assert!(text.contains("answer = ox"));
        assert!(text.contains("Sorry, you lose"));
    }
}
