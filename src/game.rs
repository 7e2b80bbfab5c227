//! Orchestrating game surface
//!
//! [`Game`] wires the pure pieces together: it gates `start` behind the
//! daily play lock, routes guesses through the session state machine,
//! snapshots the session after every accepted attempt, and records the
//! day's completion when a session ends.
//!
//! Persistence is fire-and-forget from the engine's point of view: a failed
//! write is logged and surfaced to the caller, but the in-memory transition
//! it followed is never rolled back, and nothing is retried automatically.

use crate::keyboard::KeyStates;
use crate::session::{Clock, Guess, GuessEvaluation, PlayLock, Session, SessionError, Status, Target};
use crate::store::{KvStore, StoreError};
use std::fmt;
use tracing::{info, warn};

/// Error type for game operations.
#[derive(Debug)]
pub enum GameError {
    /// Today's session was already completed.
    LockedToday,
    /// No session has been started or resumed.
    NoSession,
    /// The session rejected the mutation.
    Session(SessionError),
    /// A snapshot or lock write failed. The in-memory state stands.
    Persistence(StoreError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LockedToday => write!(f, "Today's game is already complete"),
            Self::NoSession => write!(f, "No session in progress"),
            Self::Session(e) => write!(f, "{e}"),
            Self::Persistence(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Session(e) => Some(e),
            Self::Persistence(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SessionError> for GameError {
    fn from(e: SessionError) -> Self {
        Self::Session(e)
    }
}

impl From<StoreError> for GameError {
    fn from(e: StoreError) -> Self {
        Self::Persistence(e)
    }
}

/// What a successful submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub evaluation: GuessEvaluation,
    pub status: Status,
    pub attempts_used: usize,
}

/// A daily guessing game bound to a store, a clock, and a key namespace.
///
/// `submit` takes `&mut self`, so the borrow checker enforces the one-
/// mutator-at-a-time rule a session requires.
pub struct Game<S: KvStore, C: Clock> {
    store: S,
    clock: C,
    namespace: String,
    session: Option<Session>,
}

impl<S: KvStore, C: Clock> Game<S, C> {
    /// Bind a game to a store and clock under a key namespace
    /// (for example `"word"` or `"reference"`; each game kind keeps its own
    /// session snapshot and daily lock).
    #[must_use]
    pub fn new(store: S, clock: C, namespace: impl Into<String>) -> Self {
        Self {
            store,
            clock,
            namespace: namespace.into(),
            session: None,
        }
    }

    fn session_key(&self) -> String {
        format!("{}.session", self.namespace)
    }

    fn lock_key(&self) -> String {
        format!("{}.lock", self.namespace)
    }

    /// Whether a new session may start today.
    pub fn can_start(&self) -> Result<bool, GameError> {
        let record = self.load_lock()?;
        Ok(PlayLock::can_start(record.as_ref(), self.clock.now()))
    }

    /// Start a new session for `target`.
    ///
    /// # Errors
    /// [`GameError::LockedToday`] if a session already completed today;
    /// [`GameError::Persistence`] if the fresh snapshot cannot be written
    /// (the session still starts).
    pub fn start(&mut self, target: Target) -> Result<&Session, GameError> {
        if !self.can_start()? {
            return Err(GameError::LockedToday);
        }

        self.session = Some(Session::new(target));
        info!(namespace = %self.namespace, "Session started");
        self.persist_session()?;
        Ok(self.session.as_ref().expect("session was just created"))
    }

    /// Start a new session with an explicit attempt capacity.
    pub fn start_with_capacity(
        &mut self,
        target: Target,
        capacity: usize,
    ) -> Result<&Session, GameError> {
        if !self.can_start()? {
            return Err(GameError::LockedToday);
        }

        self.session = Some(Session::with_capacity(target, capacity));
        info!(namespace = %self.namespace, capacity, "Session started");
        self.persist_session()?;
        Ok(self.session.as_ref().expect("session was just created"))
    }

    /// Reload the persisted session snapshot, if one exists.
    pub fn resume(&mut self) -> Result<Option<&Session>, GameError> {
        match self.store.get(&self.session_key())? {
            Some(value) => {
                let session: Session =
                    serde_json::from_value(value).map_err(StoreError::from)?;
                info!(
                    namespace = %self.namespace,
                    attempts = session.attempts().len(),
                    status = %session.status(),
                    "Session resumed"
                );
                self.session = Some(session);
                Ok(self.session.as_ref())
            }
            None => Ok(None),
        }
    }

    /// Submit a guess to the current session.
    ///
    /// On success the attempt is committed in memory first; the snapshot
    /// write (and, on a terminal status, the lock write) follows. A failed
    /// write surfaces as [`GameError::Persistence`] with the attempt
    /// already standing.
    pub fn submit(&mut self, guess: Guess) -> Result<SubmitOutcome, GameError> {
        let session = self.session.as_mut().ok_or(GameError::NoSession)?;
        let attempt = session.submit(guess)?;

        let outcome = SubmitOutcome {
            evaluation: attempt.evaluation().clone(),
            status: session.status(),
            attempts_used: session.attempts().len(),
        };

        // A terminal status always gets its lock write, even when the
        // snapshot write has already failed; the first failure is surfaced.
        let snapshot = self.persist_session();
        let lock = if outcome.status.is_terminal() {
            self.record_completion()
        } else {
            Ok(())
        };
        snapshot.and(lock)?;
        Ok(outcome)
    }

    /// Best-state-so-far map for the current session; empty with no session.
    #[must_use]
    pub fn key_states(&self) -> KeyStates {
        self.session
            .as_ref()
            .map(Session::key_states)
            .unwrap_or_default()
    }

    /// The current session, if any.
    #[inline]
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Drop the current session and its persisted snapshot.
    ///
    /// The daily lock is untouched: abandoning a finished game does not
    /// grant another one.
    pub fn clear_session(&mut self) -> Result<(), GameError> {
        self.session = None;
        self.store.remove(&self.session_key())?;
        Ok(())
    }

    /// Record a completion at the clock's current instant, locking further
    /// starts until the next calendar day.
    pub fn record_completion(&mut self) -> Result<(), GameError> {
        let lock = PlayLock::record_completion(self.clock.now());
        let value = serde_json::to_value(&lock).map_err(StoreError::from)?;
        let key = self.lock_key();
        if let Err(e) = self.store.set(&key, value) {
            warn!(namespace = %self.namespace, error = %e, "Play lock write failed");
            return Err(e.into());
        }
        info!(namespace = %self.namespace, "Daily play lock recorded");
        Ok(())
    }

    fn load_lock(&self) -> Result<Option<PlayLock>, GameError> {
        match self.store.get(&self.lock_key())? {
            Some(value) => {
                let lock = serde_json::from_value(value).map_err(StoreError::from)?;
                Ok(Some(lock))
            }
            None => Ok(None),
        }
    }

    fn persist_session(&mut self) -> Result<(), GameError> {
        let Some(session) = self.session.as_ref() else {
            return Ok(());
        };
        let value = serde_json::to_value(session).map_err(StoreError::from)?;
        let key = self.session_key();
        if let Err(e) = self.store.set(&key, value) {
            warn!(namespace = %self.namespace, error = %e, "Session snapshot write failed");
            return Err(e.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Sequence, SymbolState};
    use crate::store::MemoryStore;
    use chrono::{DateTime, Local, TimeZone};
    use serde_json::Value;

    struct FixedClock(DateTime<Local>);

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            self.0
        }
    }

    /// Store whose writes always fail, for the no-rollback contract.
    struct BrokenStore;

    impl KvStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<Value>, StoreError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: Value) -> Result<(), StoreError> {
            Err(StoreError::Io(std::io::Error::other("disk on fire")))
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Ok(())
        }
    }

    /// Store that rejects session snapshot writes but accepts lock writes.
    struct SnapshotFailingStore(MemoryStore);

    impl KvStore for SnapshotFailingStore {
        fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
            self.0.get(key)
        }

        fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
            if key.ends_with(".session") {
                return Err(StoreError::Io(std::io::Error::other("snapshot refused")));
            }
            self.0.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), StoreError> {
            self.0.remove(key)
        }
    }

    fn noon(d: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, d, 12, 0, 0).unwrap()
    }

    fn word_target(text: &str) -> Target {
        Target::Word(Sequence::letters(text).unwrap())
    }

    fn word_guess(text: &str) -> Guess {
        Guess::Word(Sequence::letters(text).unwrap())
    }

    fn game_at(day: u32) -> Game<MemoryStore, FixedClock> {
        Game::new(MemoryStore::new(), FixedClock(noon(day)), "word")
    }

    #[test]
    fn start_submit_win_flow() {
        let mut game = game_at(1);
        assert!(game.can_start().unwrap());

        game.start(word_target("GRACE")).unwrap();
        let outcome = game.submit(word_guess("GLORY")).unwrap();
        assert_eq!(outcome.status, Status::InProgress);
        assert_eq!(outcome.attempts_used, 1);

        let outcome = game.submit(word_guess("GRACE")).unwrap();
        assert_eq!(outcome.status, Status::Won);
        assert!(outcome.evaluation.is_exact());
    }

    #[test]
    fn completion_locks_the_day() {
        let mut game = game_at(1);
        game.start(word_target("GRACE")).unwrap();
        game.submit(word_guess("GRACE")).unwrap();

        assert!(!game.can_start().unwrap());
        assert!(matches!(
            game.start(word_target("MERCY")),
            Err(GameError::LockedToday)
        ));
    }

    #[test]
    fn lock_expires_with_the_calendar_day() {
        let mut store = MemoryStore::new();
        {
            let mut game = Game::new(&mut store, FixedClock(noon(1)), "word");
            game.start(word_target("GRACE")).unwrap();
            game.submit(word_guess("GRACE")).unwrap();
            assert!(!game.can_start().unwrap());
        }

        let mut next_day = Game::new(&mut store, FixedClock(noon(2)), "word");
        assert!(next_day.can_start().unwrap());
        next_day.start(word_target("MERCY")).unwrap();
    }

    #[test]
    fn namespaces_keep_separate_locks() {
        let mut store = MemoryStore::new();
        {
            let mut word = Game::new(&mut store, FixedClock(noon(1)), "word");
            word.start(word_target("GRACE")).unwrap();
            word.submit(word_guess("GRACE")).unwrap();
        }

        let reference = Game::new(&mut store, FixedClock(noon(1)), "reference");
        assert!(reference.can_start().unwrap());
    }

    #[test]
    fn submit_without_session_fails() {
        let mut game = game_at(1);
        assert!(matches!(
            game.submit(word_guess("GRACE")),
            Err(GameError::NoSession)
        ));
    }

    #[test]
    fn sessions_resume_from_snapshots() {
        let mut store = MemoryStore::new();
        {
            let mut game = Game::new(&mut store, FixedClock(noon(1)), "word");
            game.start(word_target("GRACE")).unwrap();
            game.submit(word_guess("GLORY")).unwrap();
        }

        let mut game = Game::new(&mut store, FixedClock(noon(1)), "word");
        let session = game.resume().unwrap().expect("snapshot should exist");
        assert_eq!(session.attempts().len(), 1);
        assert_eq!(session.status(), Status::InProgress);

        // Play continues from where the snapshot left off.
        let outcome = game.submit(word_guess("GRACE")).unwrap();
        assert_eq!(outcome.status, Status::Won);
    }

    #[test]
    fn resume_with_no_snapshot_is_none() {
        let mut game = game_at(1);
        assert!(game.resume().unwrap().is_none());
    }

    #[test]
    fn persistence_failure_keeps_memory_state() {
        let mut game = Game::new(BrokenStore, FixedClock(noon(1)), "word");
        game.start(word_target("GRACE")).unwrap_err(); // snapshot write fails
        // The session exists regardless.
        assert!(game.session().is_some());

        let err = game.submit(word_guess("GLORY")).unwrap_err();
        assert!(matches!(err, GameError::Persistence(_)));
        // The attempt was committed before the write was tried.
        assert_eq!(game.session().unwrap().attempts().len(), 1);
    }

    #[test]
    fn lock_recorded_even_when_snapshot_write_fails() {
        let store = SnapshotFailingStore(MemoryStore::new());
        let mut game = Game::new(store, FixedClock(noon(1)), "word");

        // The fresh snapshot write fails; the session starts regardless.
        assert!(matches!(
            game.start(word_target("GRACE")),
            Err(GameError::Persistence(_))
        ));

        let err = game.submit(word_guess("GRACE")).unwrap_err();
        assert!(matches!(err, GameError::Persistence(_)));
        assert_eq!(game.session().unwrap().status(), Status::Won);

        // The completion still reached the lock, so the day is spent.
        assert!(!game.can_start().unwrap());
    }

    #[test]
    fn clear_session_keeps_the_lock() {
        let mut store = MemoryStore::new();
        {
            let mut game = Game::new(&mut store, FixedClock(noon(1)), "word");
            game.start(word_target("GRACE")).unwrap();
            game.submit(word_guess("GRACE")).unwrap();
            game.clear_session().unwrap();
            assert!(game.session().is_none());
        }

        let mut game = Game::new(&mut store, FixedClock(noon(1)), "word");
        assert!(game.resume().unwrap().is_none());
        assert!(!game.can_start().unwrap());
    }

    #[test]
    fn key_states_follow_the_session() {
        let mut game = game_at(1);
        assert!(game.key_states().is_empty());

        game.start(word_target("GRACE")).unwrap();
        game.submit(word_guess("GLORY")).unwrap();
        assert_eq!(game.key_states().state_of(b'G'), SymbolState::Correct);
        assert_eq!(game.key_states().state_of(b'Y'), SymbolState::Absent);
    }
}
