/// Client-wide defaults.

/// Fallback drawable size, in cells, used before the first frame reports the
/// real terminal area.
pub const WINDOW_WIDTH: u16 = 80;
pub const WINDOW_HEIGHT: u16 = 24;

/// Where the experimental websocket client connects by default.
pub const DEFAULT_SERVER_URL: &str = "ws://127.0.0.1:8765";

/// Pause between pings, in milliseconds.
pub const DEFAULT_PING_DELAY_MS: u64 = 1000;
