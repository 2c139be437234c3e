//! Immutable, broadcastable view of a session.

use crate::player::{Player, PlayerId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Full session state at one instant.
///
/// `revision` grows by one with every applied change. Snapshots may be
/// delivered out of order once they leave the session lock, so receivers
/// should drop any revision they have already seen.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Change counter.
    revision: u64,
    /// Players in join order.
    players: Vec<Player>,
    /// Player allowed to act next.
    current_turn_player_id: Option<PlayerId>,
    /// Last accepted word.
    previous_word: String,
    /// Character the next word must start with.
    target_char: char,
    /// Human-readable status line.
    message: String,
    /// True once the game has ended.
    game_over: bool,
}

impl Snapshot {
    pub(crate) fn new(
        revision: u64,
        players: Vec<Player>,
        current_turn_player_id: Option<PlayerId>,
        previous_word: String,
        target_char: char,
        message: String,
        game_over: bool,
    ) -> Self {
        Self {
            revision,
            players,
            current_turn_player_id,
            previous_word,
            target_char,
            message,
            game_over,
        }
    }

    /// Looks up a player by ID.
    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id() == player_id)
    }

    /// Returns the player whose turn it is, if any.
    pub fn current_player(&self) -> Option<&Player> {
        self.current_turn_player_id
            .as_deref()
            .and_then(|id| self.player(id))
    }
}
