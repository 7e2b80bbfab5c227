//! Key-state aggregation for input hinting
//!
//! Folds every attempt in a session into one best-state-per-symbol map, the
//! shape keyboard coloring consumes. Aggregation only ever upgrades: a
//! symbol marked `Absent` early and `Present` later reads `Present`, and a
//! `Correct` symbol stays `Correct` for good. Symbols never guessed report
//! `Unused`.

use crate::core::SymbolState;
use crate::session::Attempt;
use rustc_hash::FxHashMap;

/// Best-state-so-far map from symbol to verdict.
///
/// Derived state: never mutated directly, always recomputed from a session's
/// full attempt history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStates(FxHashMap<u8, SymbolState>);

impl KeyStates {
    /// Fold all attempts, oldest first, into a best-state map.
    #[must_use]
    pub fn aggregate(attempts: &[Attempt]) -> Self {
        let mut map: FxHashMap<u8, SymbolState> = FxHashMap::default();
        for attempt in attempts {
            for (symbol, state) in attempt.symbol_states() {
                let entry = map.entry(symbol).or_insert(SymbolState::Unused);
                *entry = entry.best(state);
            }
        }
        Self(map)
    }

    /// The best state observed for a symbol, `Unused` if never guessed.
    #[inline]
    #[must_use]
    pub fn state_of(&self, symbol: u8) -> SymbolState {
        self.0
            .get(&symbol)
            .copied()
            .unwrap_or(SymbolState::Unused)
    }

    /// Number of distinct symbols observed.
    #[inline]
    #[must_use]
    pub fn observed(&self) -> usize {
        self.0.len()
    }

    /// Whether no symbol has been observed yet.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
