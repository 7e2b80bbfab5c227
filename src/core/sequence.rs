//! Guess/target sequences
//!
//! A `Sequence` is a validated, non-empty run of ASCII symbols of one kind:
//! uppercase letters (word games) or decimal digits (chapter/verse fields).
//! Symbols are stored as bytes; comparison is by equality only.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of symbols a sequence holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceKind {
    /// Uppercase ASCII letters, `A`-`Z`.
    Letters,
    /// Decimal digits, `0`-`9`.
    Digits,
}

/// A fixed-length ordered run of symbols of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sequence {
    text: String,
    kind: SequenceKind,
}

/// Error type for invalid sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    Empty,
    NonAscii,
    InvalidCharacters(SequenceKind),
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Sequence must not be empty"),
            Self::NonAscii => write!(f, "Sequence must contain only ASCII symbols"),
            Self::InvalidCharacters(SequenceKind::Letters) => {
                write!(f, "Sequence must contain only letters")
            }
            Self::InvalidCharacters(SequenceKind::Digits) => {
                write!(f, "Sequence must contain only digits")
            }
        }
    }
}

impl std::error::Error for SequenceError {}

impl Sequence {
    /// Create a letter sequence from a word, normalizing to uppercase.
    ///
    /// # Errors
    /// Returns `SequenceError` if the input is empty, non-ASCII, or contains
    /// anything other than letters.
    ///
    /// # Examples
    /// ```
    /// use versele::core::Sequence;
    ///
    /// let word = Sequence::letters("grace").unwrap();
    /// assert_eq!(word.text(), "GRACE");
    ///
    /// assert!(Sequence::letters("").is_err());
    /// assert!(Sequence::letters("ps4lm").is_err());
    /// ```
    pub fn letters(text: impl Into<String>) -> Result<Self, SequenceError> {
        let text: String = text.into().to_uppercase();
        Self::validate(text, SequenceKind::Letters)
    }

    /// Create a digit sequence from a string of decimal digits.
    pub fn digits(text: impl Into<String>) -> Result<Self, SequenceError> {
        Self::validate(text.into(), SequenceKind::Digits)
    }

    /// Create a digit sequence from a number, zero-padded to `min_width`.
    ///
    /// Numbers wider than `min_width` keep all their digits, so chapter 119
    /// with `min_width` 2 renders as `"119"`.
    ///
    /// # Examples
    /// ```
    /// use versele::core::Sequence;
    ///
    /// assert_eq!(Sequence::from_number(3, 2).text(), "03");
    /// assert_eq!(Sequence::from_number(16, 2).text(), "16");
    /// assert_eq!(Sequence::from_number(119, 2).text(), "119");
    /// ```
    #[must_use]
    pub fn from_number(value: u32, min_width: usize) -> Self {
        Self {
            text: format!("{value:0min_width$}"),
            kind: SequenceKind::Digits,
        }
    }

    fn validate(text: String, kind: SequenceKind) -> Result<Self, SequenceError> {
        if text.is_empty() {
            return Err(SequenceError::Empty);
        }
        if !text.is_ascii() {
            return Err(SequenceError::NonAscii);
        }
        let valid = match kind {
            SequenceKind::Letters => text.bytes().all(|b| b.is_ascii_uppercase()),
            SequenceKind::Digits => text.bytes().all(|b| b.is_ascii_digit()),
        };
        if !valid {
            return Err(SequenceError::InvalidCharacters(kind));
        }
        Ok(Self { text, kind })
    }

    /// Get the sequence as a string slice.
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the symbol kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> SequenceKind {
        self.kind
    }

    /// Get the symbols as bytes.
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of symbols.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; sequences reject empty input at construction.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each symbol in the sequence.
    ///
    /// Used as the frequency pool for duplicate-aware evaluation.
    #[inline]
    pub(crate) fn symbol_counts(&self) -> FxHashMap<u8, usize> {
        let mut counts = FxHashMap::default();
        for b in self.text.bytes() {
            *counts.entry(b).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_normalized_to_uppercase() {
        let seq = Sequence::letters("grace").unwrap();
        assert_eq!(seq.text(), "GRACE");
        assert_eq!(seq.symbols(), b"GRACE");
        assert_eq!(seq.kind(), SequenceKind::Letters);

        let mixed = Sequence::letters("GrAcE").unwrap();
        assert_eq!(mixed, seq);
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(Sequence::letters(""), Err(SequenceError::Empty));
        assert_eq!(Sequence::digits(""), Err(SequenceError::Empty));
    }

    #[test]
    fn wrong_symbol_kind_rejected() {
        assert_eq!(
            Sequence::letters("ps4lm"),
            Err(SequenceError::InvalidCharacters(SequenceKind::Letters))
        );
        assert_eq!(
            Sequence::letters("a b"),
            Err(SequenceError::InvalidCharacters(SequenceKind::Letters))
        );
        assert_eq!(
            Sequence::digits("3:16"),
            Err(SequenceError::InvalidCharacters(SequenceKind::Digits))
        );
    }

    #[test]
    fn non_ascii_rejected() {
        assert_eq!(Sequence::letters("grâce"), Err(SequenceError::NonAscii));
    }

    #[test]
    fn from_number_zero_pads() {
        assert_eq!(Sequence::from_number(3, 2).text(), "03");
        assert_eq!(Sequence::from_number(16, 2).text(), "16");
        assert_eq!(Sequence::from_number(0, 2).text(), "00");
    }

    #[test]
    fn from_number_wide_values_keep_digits() {
        assert_eq!(Sequence::from_number(119, 2).text(), "119");
        assert_eq!(Sequence::from_number(119, 2).len(), 3);
    }

    #[test]
    fn symbol_counts_tracks_duplicates() {
        let seq = Sequence::letters("SPEED").unwrap();
        let counts = seq.symbol_counts();
        assert_eq!(counts.get(&b'S'), Some(&1));
        assert_eq!(counts.get(&b'P'), Some(&1));
        assert_eq!(counts.get(&b'E'), Some(&2));
        assert_eq!(counts.get(&b'D'), Some(&1));
        assert_eq!(counts.get(&b'Z'), None);
    }

    #[test]
    fn symbol_counts_handles_long_runs() {
        // Sequences carry no length cap; counts must not wrap at 255.
        let seq = Sequence::letters("A".repeat(300)).unwrap();
        assert_eq!(seq.symbol_counts().get(&b'A'), Some(&300));
    }

    #[test]
    fn display_matches_text() {
        let seq = Sequence::from_number(7, 2);
        assert_eq!(format!("{seq}"), "07");
    }

    #[test]
    fn serde_round_trip() {
        let seq = Sequence::letters("MERCY").unwrap();
        let json = serde_json::to_string(&seq).unwrap();
        let back: Sequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, seq);
    }
}
