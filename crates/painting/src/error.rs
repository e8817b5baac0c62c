//! Error types for painting operations.

use crate::validation::ValidationError;

/// Errors raised by the renderers and the surface registry.
#[derive(Debug, thiserror::Error)]
pub enum PaintError {
    #[error("Unknown surface: {0}")]
    UnknownSurface(String),

    #[error("Surface already exists: {0}")]
    DuplicateSurface(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Cursor encode failed: {0}")]
    Encode(String),
}
