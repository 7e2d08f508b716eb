use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use super::SymbolFilter;
use crate::types::{ClientMessage, ServerMessage};
use crate::AppState;

/// WebSocket upgrade handler.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();
    let client_id = Uuid::new_v4();
    info!("WebSocket client connected: {}", client_id);

    // Create a channel for sending messages to this client
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();

    // Spawn a task to forward messages from the channel to the WebSocket
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    });

    let filter = Arc::new(SymbolFilter::new());

    // Spawn a task to forward simulator batches, filtered to this client
    let mut tickers_rx = state.subscribe_tickers();
    let broadcast_filter = filter.clone();
    let broadcast_tx = tx.clone();
    let broadcast_task = tokio::spawn(async move {
        loop {
            let tickers = match tickers_rx.recv().await {
                Ok(tickers) => tickers,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!("WebSocket client {} lagged by {} batches", client_id, skipped);
                    continue;
                }
                Err(broadcast::error::RecvError::Closed) => break,
            };

            let data = broadcast_filter.apply(tickers);
            if data.is_empty() {
                continue;
            }
            if let Ok(json) = serde_json::to_string(&ServerMessage::Tickers { data }) {
                if broadcast_tx.send(json).is_err() {
                    break;
                }
            }
        }
    });

    // Handle incoming messages
    while let Some(result) = receiver.next().await {
        match result {
            Ok(Message::Text(text)) => {
                debug!("Received message from {}: {}", client_id, text);
                handle_message(&state, &filter, &tx, &text);
            }
            Ok(Message::Close(_)) => {
                info!("WebSocket client disconnecting: {}", client_id);
                break;
            }
            Ok(Message::Ping(_)) => {
                // Pong is handled automatically by axum
                debug!("Received ping from {}", client_id);
            }
            Err(e) => {
                error!("WebSocket error for {}: {}", client_id, e);
                break;
            }
            _ => {}
        }
    }

    // Clean up
    send_task.abort();
    broadcast_task.abort();
    info!("WebSocket client disconnected: {}", client_id);
}

fn handle_message(
    state: &AppState,
    filter: &SymbolFilter,
    tx: &mpsc::UnboundedSender<String>,
    text: &str,
) {
    let response = match serde_json::from_str::<ClientMessage>(text) {
        Ok(msg) => respond(state, filter, msg),
        Err(e) => ServerMessage::Error {
            error: format!("Invalid message: {}", e),
        },
    };

    if let Ok(json) = serde_json::to_string(&response) {
        let _ = tx.send(json);
    }
}

/// Apply a client message to its filter and build the reply.
fn respond(state: &AppState, filter: &SymbolFilter, msg: ClientMessage) -> ServerMessage {
    let catalog = state.simulator.catalog();
    match msg {
        ClientMessage::Subscribe { symbols } => {
            let subscribed = filter.subscribe(catalog, &symbols);
            debug!("Subscribed to: {:?}", subscribed);
            ServerMessage::Subscribed { symbols: subscribed }
        }
        ClientMessage::Unsubscribe { symbols } => {
            let unsubscribed = filter.unsubscribe(catalog, &symbols);
            debug!("Unsubscribed from: {:?}", unsubscribed);
            ServerMessage::Unsubscribed {
                symbols: unsubscribed,
            }
        }
    }
}
