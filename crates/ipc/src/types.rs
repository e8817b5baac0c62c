//! Type definitions for IPC messages.

use serde::{Deserialize, Serialize};

/// Pen settings as chosen by the author of a stroke.
///
/// `color` is an opaque CSS-style token (`"#000000"`, `"rgba(10, 10, 10, 1)"`,
/// `"red"`); only the renderer interprets it. `size` is the stroke width in
/// pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenSettings {
    pub color: String,
    pub size: f32,
}

impl PenSettings {
    pub fn new(color: impl Into<String>, size: f32) -> Self {
        Self {
            color: color.into(),
            size,
        }
    }
}

/// A complete stroke replicated from another participant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeMessage {
    /// Name of the surface the stroke is replayed onto
    pub canvas: String,
    pub pen: PenSettings,
    /// Points in drawing order, `[x, y]` in surface pixels
    pub points: Vec<[f32; 2]>,
}
