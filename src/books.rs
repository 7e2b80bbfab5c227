//! The 66-book canon and book scoring
//!
//! Books are categorical symbols: a guessed book is never multiset-matched,
//! it is scored by rank distance in the canonical ordering. Equal books are
//! `Correct`; books within [`BOOK_NEARNESS`] positions are `Present`;
//! everything further is `Absent`.

use crate::core::SymbolState;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// The 66 books in canonical order.
pub const CANON: [&str; 66] = [
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms",
    "Proverbs",
    "Ecclesiastes",
    "Song of Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
];

/// Maximum canon-index distance still scored `Present`.
pub const BOOK_NEARNESS: usize = 5;

/// One book of the canon, identified by its canonical index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Book(usize);

/// Error type for unknown book names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBook(pub String);

impl fmt::Display for UnknownBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown book: {}", self.0)
    }
}

impl std::error::Error for UnknownBook {}

impl Book {
    /// Resolve a book by name, case-insensitively.
    ///
    /// # Errors
    /// Returns [`UnknownBook`] if the name is not in the canon.
    ///
    /// # Examples
    /// ```
    /// use versele::books::Book;
    ///
    /// let john = Book::from_name("john").unwrap();
    /// assert_eq!(john.name(), "John");
    /// assert!(Book::from_name("Hezekiah").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, UnknownBook> {
        let trimmed = name.trim();
        CANON
            .iter()
            .position(|b| b.eq_ignore_ascii_case(trimmed))
            .map(Self)
            .ok_or_else(|| UnknownBook(trimmed.to_string()))
    }

    /// Build a book from its canonical index (0 = Genesis).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CANON.len() {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Canonical index, 0-based.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Canonical display name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        CANON[self.0]
    }

    /// Rank distance to another book in the canonical ordering.
    #[inline]
    #[must_use]
    pub const fn distance(self, other: Self) -> usize {
        self.0.abs_diff(other.0)
    }

    /// Score a guessed book against the target book.
    ///
    /// `Correct` on equality, `Present` within [`BOOK_NEARNESS`] positions,
    /// `Absent` beyond.
    #[must_use]
    pub const fn score(self, target: Self) -> SymbolState {
        if self.0 == target.0 {
            SymbolState::Correct
        } else if self.distance(target) <= BOOK_NEARNESS {
            SymbolState::Present
        } else {
            SymbolState::Absent
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Book {
    type Err = UnknownBook;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

// A Book round-trips through serde as its canon name.
impl Serialize for Book {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Book {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BookVisitor;

        impl Visitor<'_> for BookVisitor {
            type Value = Book;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a canonical book name")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Book, E> {
                Book::from_name(value).map_err(|e| E::custom(e.to_string()))
            }
        }

        deserializer.deserialize_str(BookVisitor)
    }
}
