//! Versele - CLI
//!
//! Daily Bible-trivia guess games: a hidden 5-letter word and a hidden
//! book chapter:verse reference, one completed session of each per day.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use versele::books::CANON;
use versele::commands::{GameConfig, run_reference_game, run_word_game};
use versele::session::DEFAULT_CAPACITY;

#[derive(Parser)]
#[command(
    name = "versele",
    about = "Daily Bible-trivia guess games with duplicate-aware scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Where to keep session snapshots and daily locks
    #[arg(long, global = true, default_value = "versele_state.json")]
    store: PathBuf,

    /// Attempts per session
    #[arg(short, long, global = true, default_value_t = DEFAULT_CAPACITY)]
    attempts: usize,

    /// Custom word pool file, one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Daily word game (default)
    Play,

    /// Daily reference game: guess the book chapter:verse
    Reference,

    /// Print the 66 books in canonical order
    Books,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = GameConfig {
        store_path: cli.store,
        attempts: cli.attempts,
        wordlist: cli.wordlist,
    };

    // Default to the word game if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_word_game(&config).map_err(|e| anyhow::anyhow!(e)),
        Commands::Reference => run_reference_game(&config).map_err(|e| anyhow::anyhow!(e)),
        Commands::Books => {
            for (i, book) in CANON.iter().enumerate() {
                println!("{:>2}. {book}", i + 1);
            }
            Ok(())
        }
    }
}
