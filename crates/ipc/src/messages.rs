//! Drawing messages delivered by the transport collaborator.

use serde::{Deserialize, Serialize};

use crate::types::StrokeMessage;

/// Messages that mutate a participant's surfaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DrawMessage {
    /// Replay a finished stroke onto a named surface
    Stroke(StrokeMessage),

    /// Erase a named surface
    Clear { canvas: String },

    /// Fill a named surface with a solid color (results page backdrop)
    Background { canvas: String, color: String },
}

impl DrawMessage {
    /// Name of the surface this message targets
    pub fn canvas(&self) -> &str {
        match self {
            Self::Stroke(stroke) => &stroke.canvas,
            Self::Clear { canvas } | Self::Background { canvas, .. } => canvas,
        }
    }
}
