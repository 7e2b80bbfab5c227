//! Reference guesses: book / chapter / verse
//!
//! A reference is evaluated field by field with different rules per field.
//! The book is a single categorical symbol scored by canon distance
//! (see [`crate::books`]); chapter and verse are digit sequences graded with
//! the two-pass multiset rule, each against its own frequency pool. Chapter
//! digits never borrow from the verse pool or vice versa.

use crate::books::Book;
use crate::core::{Evaluation, MatchError, Sequence, SymbolState, evaluate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum digit width for chapter and verse fields ("3" renders as "03").
pub const FIELD_WIDTH: usize = 2;

/// A book / chapter / verse triple, usable as guess or target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    book: Book,
    chapter: Sequence,
    verse: Sequence,
}

impl Reference {
    /// Build a reference from numeric chapter and verse.
    ///
    /// # Examples
    /// ```
    /// use versele::books::Book;
    /// use versele::reference::Reference;
    ///
    /// let john316 = Reference::new(Book::from_name("John").unwrap(), 3, 16);
    /// assert_eq!(john316.chapter().text(), "03");
    /// assert_eq!(john316.verse().text(), "16");
    /// ```
    #[must_use]
    pub fn new(book: Book, chapter: u32, verse: u32) -> Self {
        Self {
            book,
            chapter: Sequence::from_number(chapter, FIELD_WIDTH),
            verse: Sequence::from_number(verse, FIELD_WIDTH),
        }
    }

    /// The guessed or targeted book.
    #[inline]
    #[must_use]
    pub const fn book(&self) -> Book {
        self.book
    }

    /// Chapter digits.
    #[inline]
    #[must_use]
    pub const fn chapter(&self) -> &Sequence {
        &self.chapter
    }

    /// Verse digits.
    #[inline]
    #[must_use]
    pub const fn verse(&self) -> &Sequence {
        &self.verse
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// Field-by-field verdicts for one reference guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceEvaluation {
    pub book: SymbolState,
    pub chapter: Evaluation,
    pub verse: Evaluation,
}

impl ReferenceEvaluation {
    /// Full match: book equal, chapter fully correct, verse fully correct.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.book.is_correct() && self.chapter.is_exact() && self.verse.is_exact()
    }
}

/// Evaluate a reference guess against a reference target.
///
/// The chapter and verse fields are two independent [`evaluate`] calls, each
/// drawing only on its own target digits.
///
/// # Errors
/// Returns [`MatchError::LengthMismatch`] if a digit field differs in width
/// from its target counterpart.
pub fn evaluate_reference(
    guess: &Reference,
    target: &Reference,
) -> Result<ReferenceEvaluation, MatchError> {
    Ok(ReferenceEvaluation {
        book: guess.book.score(target.book),
        chapter: evaluate(&guess.chapter, &target.chapter)?,
        verse: evaluate(&guess.verse, &target.verse)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use SymbolState::{Absent, Correct, Present};

    fn book(name: &str) -> Book {
        Book::from_name(name).unwrap()
    }

    #[test]
    fn exact_reference_is_full_match() {
        let target = Reference::new(book("John"), 3, 16);
        let result = evaluate_reference(&target.clone(), &target).unwrap();
        assert_eq!(result.book, Correct);
        assert!(result.chapter.is_exact());
        assert!(result.verse.is_exact());
        assert!(result.is_exact());
    }

    #[test]
    fn near_book_is_present() {
        // Acts (43) is within 5 of Romans (44).
        let guess = Reference::new(book("Acts"), 1, 1);
        let target = Reference::new(book("Romans"), 1, 1);
        let result = evaluate_reference(&guess, &target).unwrap();
        assert_eq!(result.book, Present);
        assert!(!result.is_exact());
    }

    #[test]
    fn far_book_is_absent() {
        let guess = Reference::new(book("Genesis"), 1, 1);
        let target = Reference::new(book("Revelation"), 1, 1);
        let result = evaluate_reference(&guess, &target).unwrap();
        assert_eq!(result.book, Absent);
    }

    #[test]
    fn chapter_and_verse_graded_against_own_pools_for_13_and_06() {
        // Target John 3:16 ("03", "16"); guess chapter "13", verse "06".
        // Chapter: the 3 matches in place and drains the pool; 1 is absent.
        // Verse: the 6 matches in place; 0 is absent (verse pool is {1,6},
        // and the chapter's 0 never leaks in).
        let target = Reference::new(book("John"), 3, 16);
        let guess = Reference::new(book("John"), 13, 6);
        let result = evaluate_reference(&guess, &target).unwrap();

        assert_eq!(result.chapter.states(), &[Absent, Correct]);
        assert_eq!(result.verse.states(), &[Absent, Correct]);
    }

    #[test]
    fn chapter_pool_never_borrows_from_verse() {
        // Target chapter "03", verse "16". Guess chapter "16": its digits
        // exactly name the verse, but the chapter pool is only {0, 3}, so
        // both positions come back absent.
        let target = Reference::new(book("John"), 3, 16);
        let guess = Reference::new(book("John"), 16, 3);
        let result = evaluate_reference(&guess, &target).unwrap();

        assert_eq!(result.chapter.states(), &[Absent, Absent]);
        // Verse guess "03" against verse target "16": nothing matches either.
        assert_eq!(result.verse.states(), &[Absent, Absent]);
    }

    #[test]
    fn full_match_requires_every_field() {
        let target = Reference::new(book("Psalms"), 23, 1);
        let wrong_verse = Reference::new(book("Psalms"), 23, 2);
        let result = evaluate_reference(&wrong_verse, &target).unwrap();
        assert_eq!(result.book, Correct);
        assert!(result.chapter.is_exact());
        assert!(!result.is_exact());
    }

    #[test]
    fn wide_chapter_mismatch_is_length_error() {
        let target = Reference::new(book("Psalms"), 119, 105);
        let guess = Reference::new(book("Psalms"), 23, 1);
        let err = evaluate_reference(&guess, &target).unwrap_err();
        assert!(matches!(err, MatchError::LengthMismatch { .. }));
    }

    #[test]
    fn display_renders_colon_form() {
        let r = Reference::new(book("John"), 3, 16);
        assert_eq!(format!("{r}"), "John 03:16");
    }

    #[test]
    fn serde_round_trip() {
        let r = Reference::new(book("Romans"), 8, 28);
        let json = serde_json::to_string(&r).unwrap();
        let back: Reference = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
