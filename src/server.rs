//! HTTP and WebSocket surface for a game engine.
//!
//! - `GET /ws`: WebSocket. Clients send [`ClientMessage`] frames and receive
//!   every published snapshot as JSON.
//! - `POST /api/join`, `POST /api/move`: apply an action, return the snapshot.
//! - `GET /api/state`: the current snapshot.

use crate::broadcast::ChannelBroadcaster;
use crate::engine::GameEngine;
use crate::protocol::{ClientMessage, JoinRequest, MoveRequest};
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use cyber_burst_rules::Snapshot;
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, instrument, warn};

/// Shared state handed to every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    engine: Arc<GameEngine>,
    updates: ChannelBroadcaster,
}

impl AppState {
    /// Bundles the engine with the channel its snapshots are published on.
    pub fn new(engine: Arc<GameEngine>, updates: ChannelBroadcaster) -> Self {
        Self { engine, updates }
    }

    /// The game engine.
    pub fn engine(&self) -> &Arc<GameEngine> {
        &self.engine
    }
}

/// Builds the application router.
#[instrument(skip(state))]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ws", get(ws_upgrade))
        .route("/api/join", post(join))
        .route("/api/move", post(submit_move))
        .route("/api/state", get(current_state))
        .with_state(state)
}

/// Applies a client message to the engine.
#[instrument(skip(engine))]
pub fn dispatch(engine: &GameEngine, message: ClientMessage) -> Snapshot {
    match message {
        ClientMessage::Join(req) => engine.join(&req.player_id, &req.player_name),
        ClientMessage::Move(req) => engine.submit_word(&req.player_id, &req.word),
    }
}

async fn join(State(state): State<AppState>, Json(req): Json<JoinRequest>) -> Json<Snapshot> {
    Json(dispatch(&state.engine, ClientMessage::Join(req)))
}

async fn submit_move(State(state): State<AppState>, Json(req): Json<MoveRequest>) -> Json<Snapshot> {
    Json(dispatch(&state.engine, ClientMessage::Move(req)))
}

async fn current_state(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.engine.snapshot())
}

async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Pumps snapshots out and client messages in until either side closes.
#[instrument(skip_all)]
async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sink, mut stream) = socket.split();

    // Subscribe before reading the current state so nothing falls between.
    let mut updates = state.updates.subscribe();
    let initial = state.engine.snapshot();
    let mut last_revision = *initial.revision();
    info!(subscribers = state.updates.receiver_count(), "Client connected");

    if let Err(e) = send_snapshot(&mut sink, &initial).await {
        debug!(error = %e, "Client went away before the first snapshot");
        return;
    }

    let mut send_task = tokio::spawn(async move {
        loop {
            match updates.recv().await {
                Ok(snapshot) => {
                    if *snapshot.revision() <= last_revision {
                        continue;
                    }
                    last_revision = *snapshot.revision();
                    if send_snapshot(&mut sink, &snapshot).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Client lagged behind, skipping snapshots");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    let engine = Arc::clone(&state.engine);
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(message)) = stream.next().await {
            match message {
                Message::Text(text) => match serde_json::from_str::<ClientMessage>(text.as_str()) {
                    Ok(message) => {
                        dispatch(&engine, message);
                    }
                    Err(e) => debug!(error = %e, "Ignoring malformed frame"),
                },
                Message::Close(_) => break,
                _ => {}
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }
    info!("Client disconnected");
}

async fn send_snapshot<S>(sink: &mut S, snapshot: &Snapshot) -> anyhow::Result<()>
where
    S: futures::Sink<Message, Error = axum::Error> + Unpin,
{
    let json = serde_json::to_string(snapshot)?;
    sink.send(Message::Text(json.into())).await?;
    Ok(())
}
