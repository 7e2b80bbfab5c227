//! Versele
//!
//! Bible-trivia guess games built on one engine: duplicate-aware evaluation
//! of a guess against a hidden target, best-state-per-symbol key hinting,
//! and a bounded-attempts session gated to one completed game per calendar
//! day.
//!
//! # Quick Start
//!
//! ```rust
//! use versele::core::{Sequence, SymbolState, evaluate};
//!
//! let guess = Sequence::letters("GLORY").unwrap();
//! let target = Sequence::letters("GRACE").unwrap();
//!
//! let result = evaluate(&guess, &target).unwrap();
//! assert_eq!(result.states()[0], SymbolState::Correct); // G in place
//! assert_eq!(result.states()[2], SymbolState::Absent);  // no O in GRACE
//! ```

// Core evaluation types
pub mod core;

// The 66-book canon and book scoring
pub mod books;

// Book / chapter / verse compound guesses
pub mod reference;

// Key-state aggregation for input hinting
pub mod keyboard;

// Session state machine and daily play lock
pub mod session;

// Key/value persistence
pub mod store;

// Orchestrating game surface
pub mod game;

// Target providers
pub mod targets;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
