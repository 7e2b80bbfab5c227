//! Core domain types for guess evaluation
//!
//! This module contains the fundamental domain types with no game-specific
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod evaluate;
mod sequence;
mod symbol;

pub use evaluate::{Evaluation, MatchError, evaluate};
pub use sequence::{Sequence, SequenceError, SequenceKind};
pub use symbol::SymbolState;
