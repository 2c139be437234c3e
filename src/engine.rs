//! Thread-safe wrapper around a [`Session`].
//!
//! [`GameEngine`] is the exclusive-access boundary: `join`, `submit_word`
//! and `tick` each take the session lock, apply their change, capture a
//! snapshot and release the lock before publishing.

use crate::broadcast::Broadcaster;
use cyber_burst_rules::{Event, Session, SessionFault, Snapshot, Transition};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, error, info, instrument};

/// Serializes every operation on one game session.
pub struct GameEngine {
    session: Mutex<Session>,
    broadcaster: Arc<dyn Broadcaster>,
}

impl std::fmt::Debug for GameEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine").finish_non_exhaustive()
    }
}

impl GameEngine {
    /// Wraps a session and the broadcaster its snapshots go to.
    #[instrument(skip_all, fields(ruleset = session.ruleset().name()))]
    pub fn new(session: Session, broadcaster: Arc<dyn Broadcaster>) -> Self {
        info!("Creating game engine");
        Self {
            session: Mutex::new(session),
            broadcaster,
        }
    }

    /// Seats a player. Rejoins and full-table joins are absorbed silently.
    #[instrument(skip(self))]
    pub fn join(&self, player_id: &str, player_name: &str) -> Snapshot {
        self.apply(|session| session.join(player_id, player_name))
    }

    /// Plays a word. Invalid or out-of-turn words are absorbed silently.
    #[instrument(skip(self))]
    pub fn submit_word(&self, player_id: &str, word: &str) -> Snapshot {
        self.apply(|session| session.submit_word(player_id, word))
    }

    /// Advances the current player's clock by one second.
    ///
    /// Called by the periodic driver. Every tick that runs the clock is
    /// published so displays stay in sync.
    #[instrument(skip(self), level = "trace")]
    pub fn tick(&self) -> Snapshot {
        self.apply(Session::tick)
    }

    /// Current state. Only publishes when this call recovered a poisoned lock.
    pub fn snapshot(&self) -> Snapshot {
        let (session, recovered) = self.lock();
        let snapshot = session.snapshot();
        drop(session);
        if recovered {
            self.broadcaster.publish(&snapshot);
        }
        snapshot
    }

    /// Runs `op` under the lock and publishes the result if anything changed.
    fn apply<F>(&self, op: F) -> Snapshot
    where
        F: FnOnce(&mut Session) -> Result<Transition, SessionFault>,
    {
        let (snapshot, changed) = {
            let (mut session, recovered) = self.lock();
            match op(&mut *session) {
                Ok(Transition::Applied(event)) => {
                    log_event(&event);
                    (session.snapshot(), true)
                }
                Ok(Transition::Ignored(reason)) => {
                    debug!(%reason, phase = %session.phase(), "Action ignored");
                    (session.snapshot(), recovered)
                }
                Err(fault) => {
                    error!(%fault, "Aborting session");
                    session.abort(&fault);
                    (session.snapshot(), true)
                }
            }
        };

        if changed {
            self.broadcaster.publish(&snapshot);
        }
        snapshot
    }

    /// Takes the session lock.
    ///
    /// A poisoned lock means an operation panicked part-way through, so the
    /// session is aborted before anyone else reads it. The flag is set when
    /// that abort happened here and still needs publishing.
    fn lock(&self) -> (MutexGuard<'_, Session>, bool) {
        match self.session.lock() {
            Ok(session) => (session, false),
            Err(poisoned) => {
                error!("Session lock poisoned, aborting session");
                self.session.clear_poison();
                let mut session = poisoned.into_inner();
                let recovered = !session.is_aborted();
                session.abort(&SessionFault::new("an operation panicked mid-update"));
                (session, recovered)
            }
        }
    }
}

fn log_event(event: &Event) {
    match event {
        Event::Ticked { .. } => debug!(%event, "Clock ticked"),
        Event::Eliminated { .. } => info!(%event, "🏁 Game over"),
        _ => info!(%event, "Session updated"),
    }
}
