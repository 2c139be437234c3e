//! Results of applying an action to a session.

use crate::player::PlayerId;
use derive_more::{Display, Error};
use tracing::instrument;

/// Why a player was knocked out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Elimination {
    /// Submitted a word ending on a forbidden terminal.
    TerminalChar,
    /// Score went past the bust limit.
    Burst,
    /// Time bank ran out.
    Timeout,
}

/// A state change the session applied.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Event {
    /// A player took a seat.
    #[display("{player_id} joined (game started: {started})")]
    Joined {
        /// The new player.
        player_id: PlayerId,
        /// Whether this join filled the table.
        started: bool,
    },
    /// A word was scored and the turn passed on.
    #[display("{player_id} scored {points}, next target '{target_char}'")]
    WordAccepted {
        /// Who played the word.
        player_id: PlayerId,
        /// Points awarded.
        points: u32,
        /// The new target character.
        target_char: char,
    },
    /// A player lost and the game ended.
    #[display("{player_id} eliminated by {reason}")]
    Eliminated {
        /// The losing player.
        player_id: PlayerId,
        /// How they lost.
        reason: Elimination,
    },
    /// The current player's clock advanced by one second.
    #[display("{player_id} has {time_remaining}s left")]
    Ticked {
        /// Player whose clock ran.
        player_id: PlayerId,
        /// Seconds left after the tick.
        time_remaining: u32,
    },
}

/// Why an action was absorbed without changing anything.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Rejection {
    /// The ID already has a seat.
    #[display("player {_0} already joined")]
    AlreadyJoined(PlayerId),
    /// Every seat is taken.
    #[display("lobby is full ({_0} players)")]
    LobbyFull(usize),
    /// The session has ended.
    #[display("game is over")]
    GameOver,
    /// Fewer than two players are seated.
    #[display("waiting for players")]
    WaitingForPlayers,
    /// The actor does not hold the turn.
    #[display("not {_0}'s turn")]
    NotYourTurn(PlayerId),
    /// Nothing left after trimming.
    #[display("word is empty")]
    EmptyWord,
    /// The word does not start with the target character.
    #[display("{word:?} does not start with '{expected}'")]
    BrokenChain {
        /// The normalized word.
        word: String,
        /// The required first character.
        expected: char,
    },
    /// The word yields no character to chain from.
    #[display("{_0:?} leaves no target character")]
    NoTargetChar(String),
}

/// Outcome of a session operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// State changed and should be broadcast.
    Applied(Event),
    /// Nothing changed.
    Ignored(Rejection),
}

impl Transition {
    /// Returns true if the session changed.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Internal consistency fault. The session cannot continue after one.
#[derive(Debug, Clone, Display, Error)]
#[display("Session fault: {} at {}:{}", message, file, line)]
pub struct SessionFault {
    /// What went wrong.
    pub message: String,
    /// Line number where the fault was detected.
    pub line: u32,
    /// Source file where the fault was detected.
    pub file: &'static str,
}

impl SessionFault {
    /// Creates a new fault with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
