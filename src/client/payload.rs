use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::client::player::Player;

/// The JSON dictionary sent over the websocket connection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    pub websocket_id: String,
    pub message: u8,
    pub data: Option<Player>,
}

impl Payload {
    pub fn new(websocket_id: Uuid, message: u8, data: Option<Player>) -> Self {
        Self {
            websocket_id: websocket_id.to_string(),
            message,
            data,
        }
    }

    /// JSON-encode for transmission.
    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Throwaway message value (1..=5) used to exercise the server.
pub fn random_message() -> u8 {
    rand::rng().random_range(1..=5)
}
