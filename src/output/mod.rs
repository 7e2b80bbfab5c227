//! Terminal output formatting

mod display;

pub use display::{render_digit_strip, render_keyboard, render_reference_row, render_row};
