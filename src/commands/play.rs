//! Daily word game
//!
//! Interactive loop over stdin: one hidden 5-letter word, capacity attempts,
//! colored rows and keyboard hints after every guess.

use super::{GameConfig, get_user_input};
use crate::core::Sequence;
use crate::game::{Game, GameError, SubmitOutcome};
use crate::output::{render_keyboard, render_row};
use crate::session::{Guess, GuessEvaluation, Session, SessionError, Status, SystemClock, Target};
use crate::store::FileStore;
use crate::targets::{draw_word, load_words};
use colored::Colorize;

/// Run the daily word game.
///
/// # Errors
/// Returns an error for store failures or I/O errors reading input.
pub fn run_word_game(config: &GameConfig) -> Result<(), String> {
    let store = FileStore::open(&config.store_path).map_err(|e| e.to_string())?;
    let mut game = Game::new(store, SystemClock, "word");

    let resumed = matches!(
        game.resume().map_err(|e| e.to_string())?,
        Some(session) if session.status() == Status::InProgress
    );

    if resumed {
        println!("\nResuming today's word...\n");
    } else {
        if !game.can_start().map_err(|e| e.to_string())? {
            println!("\nToday's word is done. Come back after midnight!\n");
            return Ok(());
        }

        let pool = match &config.wordlist {
            Some(path) => load_words(path).map_err(|e| e.to_string())?,
            None => Vec::new(),
        };
        let target = draw_word(&mut rand::rng(), &pool);
        start_session(&mut game, Target::Word(target), config.attempts)?;
        println!("\nA hidden word awaits. {} attempts.\n", config.attempts);
    }

    print_board(&game);

    loop {
        let input = get_user_input("Guess (or 'quit')")?;
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\nYour progress is saved. See you tomorrow!\n");
                return Ok(());
            }
            _ => {}
        }

        let guess = match Sequence::letters(&input) {
            Ok(seq) => seq,
            Err(e) => {
                println!("{}", format!("✗ {e}").red());
                continue;
            }
        };

        match game.submit(Guess::Word(guess)) {
            Ok(outcome) => {
                print_board(&game);
                if finish_if_over(&game, &outcome) {
                    return Ok(());
                }
            }
            Err(GameError::Session(SessionError::InvalidLength { expected, .. })) => {
                println!("{}", format!("✗ Fill in every box: {expected} letters").red());
            }
            Err(GameError::Persistence(e)) => {
                // The attempt stands; only the snapshot write failed.
                println!("{}", format!("⚠ Progress may not be saved: {e}").yellow());
                print_board(&game);
                if let Some(session) = game.session()
                    && session.status().is_terminal()
                {
                    print_ending(session);
                    return Ok(());
                }
            }
            Err(e) => return Err(e.to_string()),
        }
    }
}

fn start_session<S, C>(game: &mut Game<S, C>, target: Target, attempts: usize) -> Result<(), String>
where
    S: crate::store::KvStore,
    C: crate::session::Clock,
{
    match game.start_with_capacity(target, attempts) {
        Ok(_) => Ok(()),
        Err(GameError::Persistence(e)) => {
            println!("{}", format!("⚠ Progress may not be saved: {e}").yellow());
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}

fn print_board<S, C>(game: &Game<S, C>)
where
    S: crate::store::KvStore,
    C: crate::session::Clock,
{
    let Some(session) = game.session() else {
        return;
    };

    println!();
    for attempt in session.attempts() {
        if let (Guess::Word(word), GuessEvaluation::Word(evaluation)) =
            (attempt.guess(), attempt.evaluation())
        {
            println!("  {}", render_row(word, evaluation));
        }
    }
    println!("\n{}\n", render_keyboard(&game.key_states()));
}

fn finish_if_over<S, C>(game: &Game<S, C>, outcome: &SubmitOutcome) -> bool
where
    S: crate::store::KvStore,
    C: crate::session::Clock,
{
    if !outcome.status.is_terminal() {
        return false;
    }
    if let Some(session) = game.session() {
        print_ending(session);
    }
    true
}

fn print_ending(session: &Session) {
    match session.status() {
        Status::Won => {
            let attempts = session.attempts().len();
            println!(
                "{}",
                format!(
                    "🎉 Got it in {attempts} {}!",
                    if attempts == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        }
        Status::Lost => {
            if let Target::Word(word) = session.target() {
                println!(
                    "{}",
                    format!("✗ Out of attempts. The word was {word}.")
                        .red()
                        .bold()
                );
            }
        }
        Status::InProgress => {}
    }
    println!();
}
