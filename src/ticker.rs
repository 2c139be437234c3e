//! Periodic driver for [`GameEngine::tick`].

use crate::engine::GameEngine;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{info, instrument};

/// Spawns a task that ticks `engine` every `period` until the game ends.
///
/// The first tick fires one full period after spawning. If the runtime
/// stalls, missed ticks are delayed rather than bunched together.
#[instrument(skip(engine))]
pub fn spawn_ticker(engine: Arc<GameEngine>, period: Duration) -> JoinHandle<()> {
    info!("Starting game clock");
    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let snapshot = engine.tick();
            if *snapshot.game_over() {
                info!(message = %snapshot.message(), "Game over, stopping clock");
                break;
            }
        }
    })
}
