//! Whole-surface operations for the path renderer

use tracing::debug;

use crate::error::PaintError;
use crate::registry::SurfaceRegistry;
use crate::validation::parse_color;

use super::PathRenderer;

impl PathRenderer {
    /// Erase `name` to transparent. The open path, if any, is kept.
    pub fn clear(&self, surfaces: &mut SurfaceRegistry, name: &str) -> Result<(), PaintError> {
        debug!("PathRenderer::clear({:?})", name);
        surfaces.get_mut(name)?.clear();
        Ok(())
    }

    /// Fill `name` with a solid color, as the results page does before
    /// showing a finished drawing
    pub fn fill(
        &self,
        surfaces: &mut SurfaceRegistry,
        name: &str,
        color: &str,
    ) -> Result<(), PaintError> {
        let color = parse_color(color)?;
        debug!("PathRenderer::fill({:?}, {:?})", name, color);
        surfaces.get_mut(name)?.fill(color);
        Ok(())
    }
}
