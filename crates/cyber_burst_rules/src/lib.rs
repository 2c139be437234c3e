//! Pure game logic for CyberBurst, a two-player word-chain elimination game.
//!
//! Players alternate words that must start with the current target
//! character. Each accepted word scores its length; passing the bust limit,
//! ending on a forbidden terminal character, or running out of time loses.
//!
//! # Architecture
//!
//! - **Ruleset**: script-specific normalization, terminal and scoring rules
//! - **Session**: the authoritative state machine (join, submit, tick)
//! - **Snapshot**: immutable, serializable view of a session
//!
//! This crate has no I/O and no notion of wall-clock time. Locking,
//! broadcasting and the periodic driver live in the server crate.
//!
//! # Example
//!
//! ```
//! use cyber_burst_rules::{RulesetKind, Session, SessionSettings};
//!
//! let mut session = Session::new(RulesetKind::Latin.build(), SessionSettings::default())?;
//! session.join("p1", "Alice")?;
//! session.join("p2", "Bob")?;
//! session.submit_word("p1", "test")?;
//! assert_eq!(session.snapshot().current_turn_player_id().as_deref(), Some("p2"));
//! # Ok::<(), cyber_burst_rules::SessionFault>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod kana;
mod latin;
mod outcome;
mod player;
mod ruleset;
mod session;
mod snapshot;

pub use kana::KanaRuleset;
pub use latin::LatinRuleset;
pub use outcome::{Elimination, Event, Rejection, SessionFault, Transition};
pub use player::{Player, PlayerId};
pub use ruleset::{Judgement, Ruleset, RulesetKind, judge};
pub use session::{Phase, Session, SessionSettings};
pub use snapshot::Snapshot;
