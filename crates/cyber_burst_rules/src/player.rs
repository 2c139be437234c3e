//! Players taking part in a session.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Stable player identifier assigned by the transport layer.
pub type PlayerId = String;

/// A player in a word-chain session.
///
/// Score only grows and `alive` only ever flips from true to false; the
/// mutators are crate-private so the session is the sole writer.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Player's unique ID.
    id: PlayerId,
    /// Display name.
    name: String,
    /// Accumulated points.
    score: u32,
    /// Seconds left in the player's time bank.
    time_remaining: u32,
    /// False once the player has been eliminated.
    alive: bool,
}

impl Player {
    /// Creates a fresh player with a full time bank.
    #[instrument(skip(id, name), fields(player_id = %id))]
    pub fn new(id: PlayerId, name: String, time_bank_secs: u32) -> Self {
        Self {
            id,
            name,
            score: 0,
            time_remaining: time_bank_secs,
            alive: true,
        }
    }

    pub(crate) fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Decrements the time bank, never below zero.
    pub(crate) fn decrease_time(&mut self) {
        self.time_remaining = self.time_remaining.saturating_sub(1);
    }

    pub(crate) fn eliminate(&mut self) {
        self.alive = false;
    }
}
