use super::Ticker;
use serde::{Deserialize, Serialize};

/// Incoming WebSocket message from client.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Restrict the stream to these symbols.
    Subscribe { symbols: Vec<String> },
    /// Drop symbols from the stream.
    Unsubscribe { symbols: Vec<String> },
}

/// Outgoing WebSocket message to client.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    Tickers { data: Vec<Ticker> },
    Subscribed { symbols: Vec<String> },
    Unsubscribed { symbols: Vec<String> },
    Error { error: String },
}
