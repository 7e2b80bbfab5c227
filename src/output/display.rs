//! Colored rendering of evaluations and key hints
//!
//! Pure formatting over the engine's result types: green for correct,
//! yellow for present, dim for absent, plain for unused. Nothing here
//! computes state; reveal timing is entirely the caller's business.

use crate::core::{Evaluation, Sequence, SymbolState};
use crate::keyboard::KeyStates;
use crate::reference::{Reference, ReferenceEvaluation};
use colored::Colorize;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

fn paint(text: &str, state: SymbolState) -> String {
    match state {
        SymbolState::Correct => text.black().on_green().bold().to_string(),
        SymbolState::Present => text.black().on_yellow().bold().to_string(),
        SymbolState::Absent => text.white().on_bright_black().to_string(),
        SymbolState::Unused => text.normal().to_string(),
    }
}

/// Render one evaluated guess row as colored cells.
#[must_use]
pub fn render_row(guess: &Sequence, evaluation: &Evaluation) -> String {
    guess
        .symbols()
        .iter()
        .zip(evaluation.states())
        .map(|(&symbol, &state)| paint(&format!(" {} ", symbol as char), state))
        .collect::<Vec<_>>()
        .join("")
}

/// Render one evaluated reference row: book cell, then chapter:verse cells.
#[must_use]
pub fn render_reference_row(guess: &Reference, evaluation: &ReferenceEvaluation) -> String {
    let book = paint(&format!(" {} ", guess.book().name()), evaluation.book);
    let chapter = render_row(guess.chapter(), &evaluation.chapter);
    let verse = render_row(guess.verse(), &evaluation.verse);
    format!("{book} {chapter}:{verse}")
}

/// Render the QWERTY keyboard with best-state-so-far coloring.
#[must_use]
pub fn render_keyboard(keys: &KeyStates) -> String {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let cells: String = row
                .bytes()
                .map(|b| paint(&format!("{} ", b as char), keys.state_of(b)))
                .collect();
            format!("{}{cells}", " ".repeat(i))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the digit strip 0-9 with best-state-so-far coloring.
#[must_use]
pub fn render_digit_strip(keys: &KeyStates) -> String {
    (b'0'..=b'9')
        .map(|b| paint(&format!("{} ", b as char), keys.state_of(b)))
        .collect()
}
