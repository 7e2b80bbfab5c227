//! Per-symbol verdict states
//!
//! Every evaluated position gets one of three verdicts: `Correct` (right
//! symbol, right position), `Present` (right symbol, wrong position), or
//! `Absent` (symbol not available in the target). A fourth state, `Unused`,
//! exists only for the aggregate key map and means "never guessed".

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict for a single symbol position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolState {
    /// Right symbol in the right position.
    Correct,
    /// Symbol occurs in the target but at another position.
    Present,
    /// Symbol does not occur (or all its occurrences are spoken for).
    Absent,
    /// Never guessed; only produced by key-state aggregation.
    Unused,
}

impl SymbolState {
    /// Precedence for key-state aggregation: `Correct > Present > Absent > Unused`.
    #[inline]
    #[must_use]
    const fn rank(self) -> u8 {
        match self {
            Self::Correct => 3,
            Self::Present => 2,
            Self::Absent => 1,
            Self::Unused => 0,
        }
    }

    /// Merge two observations of the same symbol, keeping the better one.
    ///
    /// This is the upgrade-only rule used for keyboard hinting: a symbol that
    /// was `Absent` in one attempt and `Present` in a later one reads as
    /// `Present`, and nothing ever downgrades from `Correct`.
    ///
    /// # Examples
    /// ```
    /// use versele::core::SymbolState;
    ///
    /// assert_eq!(SymbolState::Absent.best(SymbolState::Present), SymbolState::Present);
    /// assert_eq!(SymbolState::Correct.best(SymbolState::Absent), SymbolState::Correct);
    /// ```
    #[inline]
    #[must_use]
    pub const fn best(self, other: Self) -> Self {
        if other.rank() > self.rank() { other } else { self }
    }

    /// Whether this state is `Correct`.
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

impl fmt::Display for SymbolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Unused => "unused",
        };
        write!(f, "{name}")
    }
}
