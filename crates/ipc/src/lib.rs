//! IPC message protocol for Inkshare
//!
//! Defines the drawing messages exchanged between participants. Transport is
//! someone else's job; this crate only fixes the JSON shape.

mod error;
mod messages;
mod types;

pub use error::IpcError;
pub use messages::DrawMessage;
pub use types::{PenSettings, StrokeMessage};

/// Decode a single JSON message
pub fn decode(json: &str) -> Result<DrawMessage, IpcError> {
    let trimmed = json.trim();
    if trimmed.is_empty() {
        return Err(IpcError::InvalidFormat("empty message".to_string()));
    }
    serde_json::from_str(trimmed).map_err(IpcError::Decode)
}

/// Encode a message as a single line of JSON
pub fn encode(message: &DrawMessage) -> Result<String, IpcError> {
    serde_json::to_string(message).map_err(IpcError::Serialize)
}
