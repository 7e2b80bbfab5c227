//! Command implementations

mod play;
mod reference;

pub use play::run_word_game;
pub use reference::{parse_reference, run_reference_game};

use std::io::{self, Write};
use std::path::PathBuf;

/// Options shared by the game commands.
pub struct GameConfig {
    /// Where session snapshots and daily locks live.
    pub store_path: PathBuf,
    /// Attempts per session.
    pub attempts: usize,
    /// Optional custom word pool, one word per line.
    pub wordlist: Option<PathBuf>,
}

/// Get user input with a prompt.
pub(crate) fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
