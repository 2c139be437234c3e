//! CyberBurst - real-time word-chain elimination game server
//!
//! Two players alternate words that start with the previous word's last
//! character. Words score their length; going past 21, ending on a forbidden
//! terminal, or running out of time loses.
//!
//! # Architecture
//!
//! - **Rules**: pure state machine and rulesets ([`cyber_burst_rules`])
//! - **Engine**: the exclusive-access boundary around one session
//! - **Broadcast**: snapshot fan-out to observers
//! - **Ticker**: the one-second game clock
//! - **Server**: HTTP and WebSocket transport
//!
//! # Example
//!
//! ```
//! use cyber_burst::{ChannelBroadcaster, GameEngine};
//! use cyber_burst_rules::{RulesetKind, Session, SessionSettings};
//! use std::sync::Arc;
//!
//! # fn example() -> anyhow::Result<()> {
//! let updates = ChannelBroadcaster::new(16);
//! let session = Session::new(RulesetKind::Latin.build(), SessionSettings::default())?;
//! let engine = GameEngine::new(session, Arc::new(updates.clone()));
//!
//! engine.join("p1", "Alice");
//! let snapshot = engine.join("p2", "Bob");
//! assert_eq!(snapshot.message(), "Game Start! Alice's turn.");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod broadcast;
mod config;
mod engine;
mod protocol;
mod server;
mod ticker;

// Crate-level exports - Engine
pub use engine::GameEngine;

// Crate-level exports - Broadcasting
pub use broadcast::{Broadcaster, ChannelBroadcaster};

// Crate-level exports - Game clock
pub use ticker::spawn_ticker;

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Transport
pub use protocol::{ClientMessage, JoinRequest, MoveRequest};
pub use server::{AppState, dispatch, router};
