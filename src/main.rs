//! Evil Hangman - CLI
//!
//! Console driver for the adversarial hangman engine.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{GameConfig, pick_length, run_analyze, run_play, run_script, run_simulation},
    core::Word,
    output::{print_analysis_report, print_script_result, print_simulation},
    wordlists::{
        DICTIONARY,
        loader::{length_counts, load_from_file, words_from_slice},
    },
};
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman against an opponent that never commits to a word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file (whitespace-separated words); defaults to the built-in list
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play {
        /// Word length; picked at random from the dictionary if omitted
        #[arg(short, long)]
        length: Option<usize>,

        /// Number of wrong guesses allowed
        #[arg(short, long, default_value_t = GameConfig::DEFAULT_GUESSES, allow_negative_numbers = true)]
        guesses: i32,

        /// Show the remaining candidate words each turn
        #[arg(long)]
        debug: bool,
    },

    /// Replay a fixed sequence of guesses and print the pattern after each
    Script {
        /// Letters to guess, in order
        letters: String,

        #[arg(short, long, default_value = "4")]
        length: usize,

        #[arg(short, long, default_value_t = GameConfig::DEFAULT_GUESSES, allow_negative_numbers = true)]
        guesses: i32,
    },

    /// Show how every unguessed letter would split the candidates
    Analyze {
        /// Letters to guess first
        #[arg(default_value = "")]
        letters: String,

        #[arg(short, long, default_value = "4")]
        length: usize,

        #[arg(short, long, default_value_t = GameConfig::DEFAULT_GUESSES, allow_negative_numbers = true)]
        guesses: i32,
    },

    /// Play a scripted guesser against the engine for several word lengths
    Simulate {
        /// Word lengths to play (default: every length in the dictionary)
        #[arg(short, long, num_args = 1..)]
        lengths: Vec<usize>,

        #[arg(short, long, default_value_t = GameConfig::DEFAULT_GUESSES, allow_negative_numbers = true)]
        guesses: i32,

        /// Shuffle the guess order with this seed instead of using letter frequency
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary based on the -d flag
fn load_dictionary(path: Option<&Path>) -> Result<Vec<Word>> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("failed to read dictionary {}", path.display())),
        None => {
            info!("using built-in dictionary");
            Ok(words_from_slice(DICTIONARY))
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let dictionary = load_dictionary(cli.dictionary.as_deref())?;

    let command = cli.command.unwrap_or(Commands::Play {
        length: None,
        guesses: GameConfig::DEFAULT_GUESSES,
        debug: false,
    });

    match command {
        Commands::Play {
            length,
            guesses,
            debug,
        } => {
            let length = match length {
                Some(length) => length,
                None => pick_length(&dictionary).context("the dictionary is empty")?,
            };
            run_play(GameConfig::new(length, guesses), &dictionary, debug)
        }
        Commands::Script {
            letters,
            length,
            guesses,
        } => {
            let result = run_script(GameConfig::new(length, guesses), &dictionary, &letters)?;
            print_script_result(&result);
            Ok(())
        }
        Commands::Analyze {
            letters,
            length,
            guesses,
        } => {
            let report = run_analyze(GameConfig::new(length, guesses), &dictionary, &letters)?;
            print_analysis_report(&report);
            Ok(())
        }
        Commands::Simulate {
            lengths,
            guesses,
            seed,
        } => run_simulate_command(&dictionary, lengths, guesses, seed),
    }
}

fn run_simulate_command(
    dictionary: &[Word],
    lengths: Vec<usize>,
    guesses: i32,
    seed: Option<u64>,
) -> Result<()> {
    let lengths = if lengths.is_empty() {
        length_counts(dictionary).into_keys().collect()
    } else {
        lengths
    };
    if lengths.is_empty() {
        bail!("the dictionary is empty");
    }

    let (results, elapsed) =
        run_simulation(dictionary, &lengths, guesses, seed).context("simulation failed")?;
    print_simulation(&results, elapsed);
    Ok(())
}
