//! Target providers
//!
//! Supplies the hidden sequence or reference a session is played against,
//! either drawn from the embedded pools or loaded from a custom word file.

mod embedded;

pub use embedded::{REFERENCES, WORDS};

use crate::books::Book;
use crate::core::Sequence;
use crate::reference::Reference;
use rand::Rng;
use std::fs;
use std::io;
use std::path::Path;

/// Draw a random word target from a pool.
///
/// Falls back to the embedded pool when `pool` is empty.
pub fn draw_word<R: Rng>(rng: &mut R, pool: &[Sequence]) -> Sequence {
    if pool.is_empty() {
        let text = WORDS[rng.random_range(0..WORDS.len())];
        Sequence::letters(text).expect("embedded words are valid")
    } else {
        pool[rng.random_range(0..pool.len())].clone()
    }
}

/// Draw a random reference target from the embedded pool.
pub fn draw_reference<R: Rng>(rng: &mut R) -> Reference {
    let (book, chapter, verse) = REFERENCES[rng.random_range(0..REFERENCES.len())];
    let book = Book::from_name(book).expect("embedded references use canon names");
    Reference::new(book, chapter, verse)
}

/// Load a custom word pool from a file, one word per line.
///
/// Invalid entries are skipped rather than failing the whole load.
///
/// # Errors
/// Returns an I/O error if the file cannot be read.
pub fn load_words<P: AsRef<Path>>(path: P) -> io::Result<Vec<Sequence>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Sequence::letters(trimmed).ok()
            }
        })
        .collect();

    Ok(words)
}

/// Convert a slice of static strings to a word pool.
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Sequence> {
    slice
        .iter()
        .filter_map(|&s| Sequence::letters(s).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn embedded_words_are_all_valid() {
        let pool = words_from_slice(&WORDS);
        assert_eq!(pool.len(), WORDS.len());
        assert!(pool.iter().all(|w| w.len() == 5));
    }

    #[test]
    fn embedded_references_resolve() {
        for (book, chapter, verse) in REFERENCES {
            let book = Book::from_name(book).unwrap();
            let reference = Reference::new(book, chapter, verse);
            assert_eq!(reference.chapter().len(), 2);
            assert_eq!(reference.verse().len(), 2);
        }
    }

    #[test]
    fn draw_word_uses_given_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = words_from_slice(&["GRACE"]);
        assert_eq!(draw_word(&mut rng, &pool).text(), "GRACE");
    }

    #[test]
    fn draw_word_falls_back_to_embedded() {
        let mut rng = StdRng::seed_from_u64(7);
        let word = draw_word(&mut rng, &[]);
        assert!(WORDS.contains(&word.text()));
    }

    #[test]
    fn draw_reference_stays_in_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let reference = draw_reference(&mut rng);
        assert!(
            REFERENCES
                .iter()
                .any(|(book, _, _)| *book == reference.book().name())
        );
    }

    #[test]
    fn load_words_skips_invalid_lines() {
        let mut path = std::env::temp_dir();
        path.push(format!("versele-words-{}.txt", std::process::id()));
        fs::write(&path, "grace\n\nps4lm\nmercy\n").unwrap();

        let words = load_words(&path).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "GRACE");
        assert_eq!(words[1].text(), "MERCY");

        let _ = fs::remove_file(&path);
    }
}
