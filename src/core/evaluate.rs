//! Duplicate-aware guess evaluation
//!
//! Implements the standard two-pass multiset grading rule:
//! 1. Exact pass: mark every position where guess and target agree as
//!    `Correct`, consuming that symbol from a frequency pool built from the
//!    target.
//! 2. Presence pass: walk the remaining positions left to right; a symbol
//!    still available in the pool is `Present` (and consumed), otherwise
//!    `Absent`.
//!
//! The left-to-right presence pass is what makes repeated symbols behave:
//! a guess with more copies of a symbol than the target holds gets `Present`
//! only on its leftmost unmatched copies.

use super::{Sequence, SymbolState};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-position verdicts for one evaluated guess.
///
/// Immutable; produced fresh by every [`evaluate`] call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation(Vec<SymbolState>);

impl Evaluation {
    /// The verdicts, one per position.
    #[inline]
    #[must_use]
    pub fn states(&self) -> &[SymbolState] {
        &self.0
    }

    /// Whether every position is `Correct` (a full match).
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.0.iter().all(|s| s.is_correct())
    }

    /// Number of positions.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the evaluation covers zero positions.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Error type for evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchError {
    /// Guess and target lengths disagree. Always a caller bug.
    LengthMismatch { guess: usize, target: usize },
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, target } => {
                write!(
                    f,
                    "Guess length {guess} does not match target length {target}"
                )
            }
        }
    }
}

impl std::error::Error for MatchError {}

/// Evaluate `guess` against `target` with the two-pass multiset rule.
///
/// Pure and deterministic; evaluating the same pair twice yields identical
/// results.
///
/// # Errors
/// Returns [`MatchError::LengthMismatch`] if the sequences differ in length.
///
/// # Examples
/// ```
/// use versele::core::{Sequence, SymbolState, evaluate};
///
/// let guess = Sequence::letters("MOSES").unwrap();
/// let target = Sequence::letters("MANNA").unwrap();
/// let result = evaluate(&guess, &target).unwrap();
///
/// // M matches in place; no other guess symbol occurs in MANNA.
/// assert_eq!(result.states()[0], SymbolState::Correct);
/// assert!(!result.is_exact());
/// ```
pub fn evaluate(guess: &Sequence, target: &Sequence) -> Result<Evaluation, MatchError> {
    if guess.len() != target.len() {
        return Err(MatchError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let guess_symbols = guess.symbols();
    let target_symbols = target.symbols();
    let mut states = vec![SymbolState::Absent; guess.len()];
    let mut available = target.symbol_counts();

    // First pass: exact matches, consuming from the pool
    for (i, (&g, &t)) in guess_symbols.iter().zip(target_symbols).enumerate() {
        if g == t {
            states[i] = SymbolState::Correct;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: left-to-right presence against the remaining pool
    for (i, &g) in guess_symbols.iter().enumerate() {
        if states[i] == SymbolState::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&g)
            && *count > 0
        {
            states[i] = SymbolState::Present;
            *count -= 1;
        }
    }

    Ok(Evaluation(states))
}
