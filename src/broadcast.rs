//! Fan-out of session snapshots to observers.

use cyber_burst_rules::Snapshot;
use tokio::sync::broadcast;
use tracing::{instrument, trace};

/// Delivers snapshots to everyone watching the session.
///
/// The engine calls [`publish`](Broadcaster::publish) outside its lock, so
/// implementations may be invoked concurrently and must not block.
pub trait Broadcaster: Send + Sync {
    /// Hands a snapshot to all observers.
    fn publish(&self, snapshot: &Snapshot);
}

impl<F> Broadcaster for F
where
    F: Fn(&Snapshot) + Send + Sync,
{
    fn publish(&self, snapshot: &Snapshot) {
        self(snapshot)
    }
}

/// Broadcaster backed by a tokio broadcast channel.
///
/// Each WebSocket connection holds its own receiver. Slow receivers lag and
/// skip ahead rather than holding up the engine.
#[derive(Debug, Clone)]
pub struct ChannelBroadcaster {
    sender: broadcast::Sender<Snapshot>,
}

impl ChannelBroadcaster {
    /// Creates a channel that buffers up to `capacity` snapshots per receiver.
    #[instrument]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Opens a new receiver that sees every snapshot published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Snapshot> {
        self.sender.subscribe()
    }

    /// Number of live receivers.
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Broadcaster for ChannelBroadcaster {
    fn publish(&self, snapshot: &Snapshot) {
        match self.sender.send(snapshot.clone()) {
            Ok(receivers) => trace!(revision = snapshot.revision(), receivers, "Snapshot published"),
            Err(_) => trace!(revision = snapshot.revision(), "No subscribers for snapshot"),
        }
    }
}
