//! Messages exchanged with clients.

use serde::{Deserialize, Serialize};

/// Request to take a seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    /// Client-chosen stable ID.
    pub player_id: String,
    /// Display name.
    pub player_name: String,
}

/// Request to play a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    /// Acting player.
    pub player_id: String,
    /// The word as typed.
    pub word: String,
}

/// A frame sent by a WebSocket client.
///
/// Encoded as JSON with a `type` tag, e.g.
/// `{"type":"move","playerId":"p1","word":"test"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientMessage {
    /// Take a seat.
    Join(JoinRequest),
    /// Play a word.
    Move(MoveRequest),
}
