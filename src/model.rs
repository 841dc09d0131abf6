// client/src/model.rs

use serde::{Deserialize, Serialize};

// --- Wire Types ---

/// A ticker message as submitted to `/api/send-message`.
///
/// Field names follow the server's JSON contract, which mixes snake and
/// camel case (`bgColor`, `blinkMode`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingMessage {
    pub text: String,
    pub priority: i64,
    pub color: String,
    #[serde(rename = "bgColor")]
    pub bg_color: String,
    #[serde(rename = "blinkMode")]
    pub blink_mode: i64,
    pub speed: f64,
}

/// One record of `/api/message-history`, newest first.
///
/// The server includes extra fields (`bg_color`) we don't render; they are
/// ignored on deserialization. `color` may be absent on entries that came in
/// over the raw socket path.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub timestamp: String,
    pub message: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default = "default_priority")]
    pub priority: i64,
}

fn default_priority() -> i64 {
    1
}

/// Blink modes understood by the marquee renderer.
pub const BLINK_MODES: [(i64, &str); 4] = [
    (0, "None"),
    (1, "Text"),
    (2, "Emoji"),
    (3, "All"),
];
