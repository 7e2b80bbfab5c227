//! Guess session state machine
//!
//! A [`Session`] owns one hidden target, the ordered list of submitted
//! attempts, and a status that moves `InProgress -> Won` or
//! `InProgress -> Lost` and never anywhere else. [`Session::submit`] is the
//! only mutator; once the status is terminal, further submissions are
//! rejected rather than silently ignored.
//!
//! Sessions serialize losslessly (target, attempts, status, capacity) and
//! are the snapshot shape the persistence layer stores.

mod lock;

pub use lock::{Clock, PlayLock, SystemClock};

use crate::core::{Evaluation, MatchError, Sequence, SymbolState, evaluate};
use crate::keyboard::KeyStates;
use crate::reference::{Reference, ReferenceEvaluation, evaluate_reference};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Default number of attempts per session.
pub const DEFAULT_CAPACITY: usize = 5;

/// The hidden sequence or reference a session is played against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Target {
    Word(Sequence),
    Reference(Reference),
}

/// One submitted guess, matching the target's kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Guess {
    Word(Sequence),
    Reference(Reference),
}

/// The evaluation produced for one guess.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum GuessEvaluation {
    Word(Evaluation),
    Reference(ReferenceEvaluation),
}

impl GuessEvaluation {
    /// Whether this evaluation is a full match.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        match self {
            Self::Word(eval) => eval.is_exact(),
            Self::Reference(eval) => eval.is_exact(),
        }
    }
}

/// One guess plus its evaluation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    guess: Guess,
    evaluation: GuessEvaluation,
}

impl Attempt {
    /// The submitted guess.
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Guess {
        &self.guess
    }

    /// The guess's evaluation.
    #[inline]
    #[must_use]
    pub const fn evaluation(&self) -> &GuessEvaluation {
        &self.evaluation
    }

    /// Every typeable symbol this attempt observed, with its verdict.
    ///
    /// Word attempts yield letter/state pairs; reference attempts yield the
    /// chapter digits then the verse digits. Book names are not typeable
    /// symbols and do not appear here.
    #[must_use]
    pub fn symbol_states(&self) -> Vec<(u8, SymbolState)> {
        match (&self.guess, &self.evaluation) {
            (Guess::Word(seq), GuessEvaluation::Word(eval)) => zip_states(seq, eval).collect(),
            (Guess::Reference(guess), GuessEvaluation::Reference(eval)) => {
                zip_states(guess.chapter(), &eval.chapter)
                    .chain(zip_states(guess.verse(), &eval.verse))
                    .collect()
            }
            // Guess and evaluation kinds always agree; submit builds them together.
            _ => Vec::new(),
        }
    }
}

fn zip_states<'a>(
    seq: &'a Sequence,
    eval: &'a Evaluation,
) -> impl Iterator<Item = (u8, SymbolState)> + 'a {
    seq.symbols()
        .iter()
        .copied()
        .zip(eval.states().iter().copied())
}

/// Session lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

impl Status {
    /// Whether the session has finished.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        write!(f, "{name}")
    }
}

/// Error type for session mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Guess width disagrees with the target. Surfaced to the player as
    /// "fill in every box".
    InvalidLength { expected: usize, actual: usize },
    /// Word guess against a reference target or vice versa.
    WrongGuessKind,
    /// Submission after the session already ended.
    Terminal(Status),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Guess must be {expected} symbols, got {actual}")
            }
            Self::WrongGuessKind => write!(f, "Guess kind does not match the target"),
            Self::Terminal(status) => write!(f, "Session is already {status}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<MatchError> for SessionError {
    fn from(err: MatchError) -> Self {
        let MatchError::LengthMismatch { guess, target } = err;
        Self::InvalidLength {
            expected: target,
            actual: guess,
        }
    }
}

/// One bounded-attempts guessing game instance for one target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    target: Target,
    attempts: Vec<Attempt>,
    capacity: usize,
    status: Status,
}

impl Session {
    /// Create a fresh session with the default attempt capacity.
    #[must_use]
    pub fn new(target: Target) -> Self {
        Self::with_capacity(target, DEFAULT_CAPACITY)
    }

    /// Create a fresh session with an explicit attempt capacity.
    #[must_use]
    pub fn with_capacity(target: Target, capacity: usize) -> Self {
        Self {
            target,
            attempts: Vec::with_capacity(capacity),
            capacity,
            status: Status::InProgress,
        }
    }

    /// The hidden target.
    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Target {
        &self.target
    }

    /// All attempts so far, oldest first.
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        &self.attempts
    }

    /// Current lifecycle status.
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Maximum number of attempts.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Attempts still available.
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.capacity.saturating_sub(self.attempts.len())
    }

    /// Submit a guess.
    ///
    /// Evaluates the guess, appends an [`Attempt`], and transitions to `Won`
    /// on a full match or `Lost` when the last attempt misses. Returns the
    /// appended attempt.
    ///
    /// # Errors
    /// - [`SessionError::Terminal`] after the session has ended.
    /// - [`SessionError::WrongGuessKind`] for a guess of the wrong shape.
    /// - [`SessionError::InvalidLength`] when a guess (or one of its digit
    ///   fields) differs in width from the target.
    pub fn submit(&mut self, guess: Guess) -> Result<&Attempt, SessionError> {
        if self.status.is_terminal() {
            return Err(SessionError::Terminal(self.status));
        }

        let evaluation = match (&self.target, &guess) {
            (Target::Word(target), Guess::Word(word)) => {
                GuessEvaluation::Word(evaluate(word, target)?)
            }
            (Target::Reference(target), Guess::Reference(reference)) => {
                GuessEvaluation::Reference(evaluate_reference(reference, target)?)
            }
            _ => return Err(SessionError::WrongGuessKind),
        };

        let exact = evaluation.is_exact();
        self.attempts.push(Attempt { guess, evaluation });

        if exact {
            self.status = Status::Won;
            info!(attempts = self.attempts.len(), "Session won");
        } else if self.attempts.len() >= self.capacity {
            self.status = Status::Lost;
            info!(attempts = self.attempts.len(), "Session lost");
        } else {
            debug!(
                attempts = self.attempts.len(),
                remaining = self.attempts_remaining(),
                "Attempt recorded"
            );
        }

        Ok(self
            .attempts
            .last()
            .expect("attempt was just appended"))
    }

    /// Best-state-so-far map over every symbol guessed in this session.
    ///
    /// Recomputed from the full attempt history on each call.
    #[must_use]
    pub fn key_states(&self) -> KeyStates {
        KeyStates::aggregate(&self.attempts)
    }
}
