//! Daily reference game
//!
//! Guess the hidden book chapter:verse reference. The book is scored by how
//! near it sits in the canon; chapter and verse digits are graded like word
//! letters, each field against its own digits.

use super::{GameConfig, get_user_input};
use crate::books::Book;
use crate::game::{Game, GameError};
use crate::output::{render_digit_strip, render_reference_row};
use crate::reference::Reference;
use crate::session::{Guess, GuessEvaluation, Session, SessionError, Status, SystemClock, Target};
use crate::store::FileStore;
use crate::targets::draw_reference;
use colored::Colorize;

/// Parse a reference like `John 3:16` or `1 Corinthians 13:4`.
///
/// The last whitespace-separated token is the `chapter:verse` pair;
/// everything before it is the book name.
///
/// # Errors
/// Returns a player-facing message for unknown books and malformed
/// chapter/verse pairs.
pub fn parse_reference(input: &str) -> Result<Reference, String> {
    let trimmed = input.trim();
    let (book_name, numbers) = trimmed
        .rsplit_once(' ')
        .ok_or_else(|| "Enter a reference like 'John 3:16'".to_string())?;

    let book = Book::from_name(book_name).map_err(|e| e.to_string())?;

    let (chapter, verse) = numbers
        .split_once(':')
        .ok_or_else(|| "Chapter and verse must be separated by ':'".to_string())?;

    let chapter: u32 = chapter
        .parse()
        .map_err(|_| format!("Invalid chapter: {chapter}"))?;
    let verse: u32 = verse
        .parse()
        .map_err(|_| format!("Invalid verse: {verse}"))?;

    Ok(Reference::new(book, chapter, verse))
}

/// Run the daily reference game.
///
/// # Errors
/// Returns an error for store failures or I/O errors reading input.
pub fn run_reference_game(config: &GameConfig) -> Result<(), String> {
    let store = FileStore::open(&config.store_path).map_err(|e| e.to_string())?;
    let mut game = Game::new(store, SystemClock, "reference");

    let resumed = matches!(
        game.resume().map_err(|e| e.to_string())?,
        Some(session) if session.status() == Status::InProgress
    );

    if resumed {
        println!("\nResuming today's reference...\n");
    } else {
        if !game.can_start().map_err(|e| e.to_string())? {
            println!("\nToday's reference is done. Come back after midnight!\n");
            return Ok(());
        }

        let target = draw_reference(&mut rand::rng());
        match game.start_with_capacity(Target::Reference(target), config.attempts) {
            Ok(_) => {}
            Err(GameError::Persistence(e)) => {
                println!("{}", format!("⚠ Progress may not be saved: {e}").yellow());
            }
            Err(e) => return Err(e.to_string()),
        }
        println!(
            "\nA hidden reference awaits. {} attempts. Near-miss books within 5 of the target show yellow.\n",
            config.attempts
        );
    }

    print_board(&game);

    loop {
        let input = get_user_input("Reference (e.g. 'John 3:16', or 'quit')")?;
        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\nYour progress is saved. See you tomorrow!\n");
                return Ok(());
            }
            _ => {}
        }

        let guess = match parse_reference(&input) {
            Ok(reference) => reference,
            Err(message) => {
                println!("{}", format!("✗ {message}").red());
                continue;
            }
        };

        match game.submit(Guess::Reference(guess)) {
            Ok(outcome) => {
                print_board(&game);
                if outcome.status.is_terminal() {
                    if let Some(session) = game.session() {
                        print_ending(session);
                    }
                    return Ok(());
                }
            }
            Err(GameError::Session(SessionError::InvalidLength { .. })) => {
                println!(
                    "{}",
                    "✗ Chapter and verse widths must match the target".red()
                );
            }
            Err(GameError::Persistence(e)) => {
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
        if let (Guess::Reference(reference), GuessEvaluation::Reference(evaluation)) =
            (attempt.guess(), attempt.evaluation())
        {
            println!("  {}", render_reference_row(reference, evaluation));
        }
    }
    println!("\n  {}\n", render_digit_strip(&game.key_states()));
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
            if let Target::Reference(reference) = session.target() {
                println!(
                    "{}",
                    format!("✗ Out of attempts. The reference was {reference}.")
                        .red()
                        .bold()
                );
            }
        }
        Status::InProgress => {}
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_reference() {
        let reference = parse_reference("John 3:16").unwrap();
        assert_eq!(reference.book().name(), "John");
        assert_eq!(reference.chapter().text(), "03");
        assert_eq!(reference.verse().text(), "16");
    }

    #[test]
    fn parses_numbered_book_names() {
        let reference = parse_reference("1 Corinthians 13:4").unwrap();
        assert_eq!(reference.book().name(), "1 Corinthians");

        let reference = parse_reference("2 timothy 1:7").unwrap();
        assert_eq!(reference.book().name(), "2 Timothy");
    }

    #[test]
    fn rejects_unknown_book() {
        let err = parse_reference("Hezekiah 1:1").unwrap_err();
        assert!(err.contains("Hezekiah"));
    }

    #[test]
    fn rejects_missing_colon() {
        assert!(parse_reference("John 316").is_err());
        assert!(parse_reference("John").is_err());
    }

    #[test]
    fn rejects_non_numeric_fields() {
        assert!(parse_reference("John a:16").is_err());
        assert!(parse_reference("John 3:b").is_err());
    }
}
