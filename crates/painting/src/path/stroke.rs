//! Stroke handling for the path renderer

use tracing::{debug, info};

use crate::error::PaintError;
use crate::raster::{stroke_segment, LineCap};
use crate::registry::SurfaceRegistry;
use crate::surface::CpuSurface;
use crate::types::{Pen, PenSettings, Point};

use super::{PathRenderer, PathState};

/// The single per-segment primitive shared by live drawing and replay.
///
/// Strokes the segment from the current point (if any) to `point`, then
/// makes `point` the new current point. Returns true if a segment was drawn.
fn advance(state: &mut PathState, surface: &mut CpuSurface, point: Point) -> bool {
    let drawn = match state.current {
        Some(from) => {
            stroke_segment(
                surface,
                from,
                point,
                state.pen.width,
                state.pen.color,
                LineCap::Round,
            );
            true
        }
        None => false,
    };
    state.current = Some(point);
    drawn
}

impl PathRenderer {
    /// Forget the current point on `name`; nothing is drawn
    pub fn begin_path(&mut self, surfaces: &SurfaceRegistry, name: &str) -> Result<(), PaintError> {
        surfaces.ensure(name)?;
        self.state_mut(name).current = None;
        Ok(())
    }

    /// Extend the open path on `name` to `point`
    ///
    /// Each segment is stroked immediately, so a partial stroke is visible
    /// even if the remaining points never arrive. The first point of a path
    /// only becomes the current point.
    pub fn draw_point(
        &mut self,
        surfaces: &mut SurfaceRegistry,
        name: &str,
        point: Point,
    ) -> Result<bool, PaintError> {
        let surface = surfaces.get_mut(name)?;
        let state = self.state_mut(name);
        Ok(advance(state, surface, point))
    }

    /// Replay a whole stroke onto `name` with the given pen settings
    ///
    /// The pen is validated before anything is touched, then applied to the
    /// surface, a fresh path is begun and every point goes through the same
    /// primitive as [`PathRenderer::draw_point`]. Returns the number of
    /// segments drawn; zero or one point draws nothing.
    pub fn draw_stroke(
        &mut self,
        surfaces: &mut SurfaceRegistry,
        name: &str,
        settings: &PenSettings,
        points: &[Point],
    ) -> Result<usize, PaintError> {
        let pen = Pen::from_settings(settings)?;
        let surface = surfaces.get_mut(name)?;

        let state = self.state_mut(name);
        state.pen = pen;
        state.current = None;

        let mut segments = 0;
        for point in points {
            if advance(state, surface, *point) {
                segments += 1;
            }
        }

        info!(
            "PathRenderer::draw_stroke({:?}) {} points, {} segments, width={:.1}",
            name,
            points.len(),
            segments,
            pen.width
        );
        Ok(segments)
    }

    /// Signal stroke completion on `name`; same as [`PathRenderer::begin_path`]
    pub fn end_path(&mut self, surfaces: &SurfaceRegistry, name: &str) -> Result<(), PaintError> {
        debug!("PathRenderer::end_path({:?})", name);
        self.begin_path(surfaces, name)
    }
}
