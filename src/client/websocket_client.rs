/// Experimental websocket client - ships the player state on a fixed cadence.
use std::time::Duration;

use anyhow::Result;
use futures_util::{SinkExt, StreamExt};
use tokio_tungstenite::{
    connect_async,
    tungstenite::{self, protocol::Message},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::client::payload::{random_message, Payload};
use crate::client::player::Player;
use crate::config;

/// Repeatedly sends a payload to the server and logs the response.
pub struct WebSocketClient {
    url: String,
    delay: Duration,
    player: Option<Player>,
    ping_limit: Option<u64>,
}

impl WebSocketClient {
    pub fn new(url: impl Into<String>, delay: Duration) -> Self {
        Self {
            url: url.into(),
            delay,
            player: None,
            ping_limit: None,
        }
    }

    /// Player state to include in the payload's `data` field.
    pub fn with_player(mut self, player: Player) -> Self {
        self.player = Some(player);
        self
    }

    /// Stop after this many send/receive rounds instead of running forever.
    pub fn with_ping_limit(mut self, limit: u64) -> Self {
        self.ping_limit = Some(limit);
        self
    }

    /// Connect and run the send/sleep/receive loop.
    ///
    /// The connection closing from the server side ends the run cleanly;
    /// connect failures and other errors propagate.
    pub async fn establish_connection(&self) -> Result<()> {
        let (ws_stream, _) = connect_async(&self.url).await?;
        let websocket_id = Uuid::new_v4();
        info!(client = %websocket_id, url = %self.url, "client connected");

        let (mut sender, mut receiver) = ws_stream.split();
        let mut rounds = 0u64;

        loop {
            let payload = Payload::new(websocket_id, random_message(), self.player.clone());
            match sender.send(Message::Text(payload.encode()?.into())).await {
                Ok(()) => {}
                Err(e) if is_connection_closed(&e) => {
                    warn!(error = %e, "connection closed");
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            }

            tokio::time::sleep(self.delay).await;

            match receiver.next().await {
                Some(Ok(Message::Text(text))) => info!(response = %text, "server response"),
                Some(Ok(Message::Close(_))) | None => {
                    warn!("connection closed");
                    return Ok(());
                }
                Some(Ok(_)) => {}
                Some(Err(e)) if is_connection_closed(&e) => {
                    warn!(error = %e, "connection closed");
                    return Ok(());
                }
                Some(Err(e)) => return Err(e.into()),
            }

            rounds += 1;
            if self.ping_limit.is_some_and(|limit| rounds >= limit) {
                info!(rounds, "ping limit reached");
                return Ok(());
            }
        }
    }
}

impl Default for WebSocketClient {
    fn default() -> Self {
        Self::new(
            config::DEFAULT_SERVER_URL,
            Duration::from_millis(config::DEFAULT_PING_DELAY_MS),
        )
    }
}

/// True for the errors tungstenite raises when the peer goes away
/// mid-stream, with or without a proper close handshake. Other I/O
/// failures are not closes and propagate to the caller.
fn is_connection_closed(err: &tungstenite::Error) -> bool {
    use std::io::ErrorKind;
    use tungstenite::error::ProtocolError;
    match err {
        tungstenite::Error::ConnectionClosed
        | tungstenite::Error::AlreadyClosed
        | tungstenite::Error::Protocol(ProtocolError::ResetWithoutClosingHandshake) => true,
        tungstenite::Error::Io(io) => matches!(
            io.kind(),
            ErrorKind::ConnectionReset
                | ErrorKind::ConnectionAborted
                | ErrorKind::BrokenPipe
                | ErrorKind::UnexpectedEof
        ),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_errors_are_recognized() {
        assert!(is_connection_closed(&tungstenite::Error::ConnectionClosed));
        assert!(is_connection_closed(&tungstenite::Error::AlreadyClosed));
        for kind in [
            std::io::ErrorKind::ConnectionReset,
            std::io::ErrorKind::ConnectionAborted,
            std::io::ErrorKind::BrokenPipe,
            std::io::ErrorKind::UnexpectedEof,
        ] {
            assert!(is_connection_closed(&tungstenite::Error::Io(
                std::io::Error::from(kind)
            )));
        }
    }

    #[test]
    fn protocol_violations_are_not_treated_as_closes() {
        use tungstenite::error::ProtocolError;
        assert!(!is_connection_closed(&tungstenite::Error::Protocol(
            ProtocolError::ReceivedAfterClosing
        )));
    }

    #[test]
    fn unrelated_io_errors_are_not_treated_as_closes() {
        for kind in [
            std::io::ErrorKind::PermissionDenied,
            std::io::ErrorKind::WouldBlock,
            std::io::ErrorKind::OutOfMemory,
        ] {
            assert!(!is_connection_closed(&tungstenite::Error::Io(
                std::io::Error::from(kind)
            )));
        }
    }
}
