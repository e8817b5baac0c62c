//! Path renderer
//!
//! Turns pointer samples into connected straight segments on a named
//! surface. The renderer owns one [`PathState`] per surface name:
//! - the current point (None between strokes)
//! - the pen applied to that surface
//!
//! Live drawing (`draw_point` per sample) and batched replay
//! (`draw_stroke`) share the same per-segment primitive, so a stroke looks
//! the same on the author's surface and on every replica.

mod stroke;
mod surface_ops;

use std::collections::HashMap;

use tracing::debug;

use crate::error::PaintError;
use crate::registry::SurfaceRegistry;
use crate::types::{Pen, PenSettings, Point};
use crate::validation::{parse_color, validate_size};

/// Per-surface path tracking
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PathState {
    /// Last point of the open path (None if no path is open)
    pub current: Option<Point>,
    /// Pen used for subsequent segments
    pub pen: Pen,
}

/// Draws pen motion onto named surfaces
#[derive(Debug, Default)]
pub struct PathRenderer {
    pub(crate) paths: HashMap<String, PathState>,
}

impl PathRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn state_mut(&mut self, name: &str) -> &mut PathState {
        self.paths.entry(name.to_string()).or_default()
    }

    /// Path state for a surface (default state if nothing was drawn yet)
    pub fn state(&self, name: &str) -> PathState {
        self.paths.get(name).copied().unwrap_or_default()
    }

    /// Current point of the open path on `name`
    pub fn current_point(&self, name: &str) -> Option<Point> {
        self.state(name).current
    }

    /// Pen applied to `name`
    pub fn pen(&self, name: &str) -> Pen {
        self.state(name).pen
    }

    /// Set the pen color for subsequent segments on `name`
    ///
    /// The token is validated here so a bad color never reaches an
    /// in-progress stroke.
    pub fn set_color(
        &mut self,
        surfaces: &SurfaceRegistry,
        name: &str,
        color: &str,
    ) -> Result<(), PaintError> {
        surfaces.ensure(name)?;
        let color = parse_color(color)?;
        self.state_mut(name).pen.color = color;
        Ok(())
    }

    /// Set the pen width for subsequent segments on `name`
    pub fn set_size(
        &mut self,
        surfaces: &SurfaceRegistry,
        name: &str,
        size: f32,
    ) -> Result<(), PaintError> {
        surfaces.ensure(name)?;
        let size = validate_size(size)?;
        self.state_mut(name).pen.width = size;
        Ok(())
    }

    /// Apply both color and size; nothing changes unless both are valid
    pub fn set_pen(
        &mut self,
        surfaces: &SurfaceRegistry,
        name: &str,
        settings: &PenSettings,
    ) -> Result<(), PaintError> {
        surfaces.ensure(name)?;
        let pen = Pen::from_settings(settings)?;
        debug!("PathRenderer::set_pen({:?}, {:?})", name, pen);
        self.state_mut(name).pen = pen;
        Ok(())
    }

    /// Drop the state of a surface that no longer exists
    pub fn forget(&mut self, name: &str) {
        self.paths.remove(name);
    }
}
