pub mod payload;
pub mod player;
pub mod websocket_client;

pub use payload::Payload;
pub use player::Player;
pub use websocket_client::WebSocketClient;
