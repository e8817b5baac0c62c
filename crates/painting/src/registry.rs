//! Named surface registry
//!
//! Every drawing target (the player's own canvas, one canvas per remote
//! participant, the tooltip overlay, the cursor preview) is addressed by
//! name. A draw call against a name that was never created is a setup bug
//! and surfaces as [`PaintError::UnknownSurface`].

use std::collections::HashMap;

use tracing::debug;

use crate::error::PaintError;
use crate::surface::CpuSurface;
use crate::validation::validate_dimensions;

/// The local player's drawing surface
pub const OWN_SURFACE: &str = "canvas";

/// Overlay holding the boundary guides
pub const TOOLTIP_SURFACE: &str = "tooltip-canvas";

/// Optional surface that mirrors the current cursor bitmap
pub const CURSOR_PREVIEW_SURFACE: &str = "cursor-preview";

#[derive(Debug, Default)]
pub struct SurfaceRegistry {
    surfaces: HashMap<String, CpuSurface>,
}

impl SurfaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transparent surface under `name`
    pub fn create(
        &mut self,
        name: impl Into<String>,
        width: u32,
        height: u32,
    ) -> Result<&mut CpuSurface, PaintError> {
        let name = name.into();
        validate_dimensions(width, height)?;
        if self.surfaces.contains_key(&name) {
            return Err(PaintError::DuplicateSurface(name));
        }

        debug!("SurfaceRegistry::create({:?}, {}x{})", name, width, height);
        Ok(self
            .surfaces
            .entry(name)
            .or_insert_with(|| CpuSurface::new(width, height)))
    }

    pub fn get(&self, name: &str) -> Result<&CpuSurface, PaintError> {
        self.surfaces
            .get(name)
            .ok_or_else(|| PaintError::UnknownSurface(name.to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut CpuSurface, PaintError> {
        self.surfaces
            .get_mut(name)
            .ok_or_else(|| PaintError::UnknownSurface(name.to_string()))
    }

    /// Fail with `UnknownSurface` unless `name` exists
    pub fn ensure(&self, name: &str) -> Result<(), PaintError> {
        self.get(name).map(|_| ())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.surfaces.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<CpuSurface> {
        self.surfaces.remove(name)
    }

    /// Surface names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.surfaces.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}
