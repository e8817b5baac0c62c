//! Anti-aliased line rasterization for paths, guides and cursor rings
//!
//! Every primitive works the same way: compute a clamped bounding box,
//! sample each pixel center, derive a coverage value from the distance to
//! the ideal shape and blend the pen color with that coverage.

use glam::Vec2;
use tracing::debug;

use crate::surface::CpuSurface;
use crate::types::{Point, Rgba};

/// How the ends of a segment are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    /// Half-disc past each endpoint. Consecutive round-capped segments meet
    /// in round joins.
    #[default]
    Round,
    /// Flush with the endpoints
    Butt,
}

/// Affected pixel region (x, y, width, height)
pub type Region = (u32, u32, u32, u32);

/// Coverage of a pixel center at `distance` from the center line of a
/// stroke with the given half width, with a one pixel linear ramp.
#[inline]
fn edge_coverage(half_width: f32, distance: f32) -> f32 {
    (half_width + 0.5 - distance).clamp(0.0, 1.0)
}

/// Clamp a float bounding box to the surface.
/// Returns None if the box misses the surface entirely.
fn clamp_bounds(surface: &CpuSurface, min: Vec2, max: Vec2) -> Option<(u32, u32, u32, u32)> {
    let x_min = (min.x.floor().max(0.0) as u32).min(surface.width);
    let y_min = (min.y.floor().max(0.0) as u32).min(surface.height);
    let x_max = (max.x.ceil().max(0.0) as u32).min(surface.width);
    let y_max = (max.y.ceil().max(0.0) as u32).min(surface.height);

    if x_min >= x_max || y_min >= y_max {
        return None;
    }
    Some((x_min, y_min, x_max, y_max))
}

/// Run `coverage` over every pixel in the bounding box and blend.
fn paint_region(
    surface: &mut CpuSurface,
    min: Vec2,
    max: Vec2,
    color: Rgba,
    coverage: impl Fn(Vec2) -> f32,
) -> Option<Region> {
    let (x_min, y_min, x_max, y_max) = clamp_bounds(surface, min, max)?;

    let mut touched = false;
    for py in y_min..y_max {
        for px in x_min..x_max {
            let center = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
            let amount = coverage(center);
            if amount > 0.0 {
                surface.blend_pixel(px, py, color, amount);
                touched = true;
            }
        }
    }

    touched.then_some((x_min, y_min, x_max - x_min, y_max - y_min))
}

/// Stroke one straight segment from `from` to `to`.
///
/// Returns the bounding box of the affected region, or None if no pixel was
/// touched (zero width, transparent color, off-surface, or a zero-length
/// butt-capped segment).
pub fn stroke_segment(
    surface: &mut CpuSurface,
    from: Point,
    to: Point,
    width: f32,
    color: Rgba,
    cap: LineCap,
) -> Option<Region> {
    let half_width = width / 2.0;
    if !(half_width > 0.0) || color[3] <= 0.0 {
        return None;
    }

    let a = Vec2::from(from);
    let b = Vec2::from(to);
    let axis = b - a;
    let length_sq = axis.length_squared();
    let reach = Vec2::splat(half_width + 1.0);

    let region = match cap {
        LineCap::Round => paint_region(surface, a.min(b) - reach, a.max(b) + reach, color, |p| {
            let t = if length_sq > f32::EPSILON {
                ((p - a).dot(axis) / length_sq).clamp(0.0, 1.0)
            } else {
                0.0
            };
            edge_coverage(half_width, p.distance(a + axis * t))
        }),
        LineCap::Butt => {
            if length_sq <= f32::EPSILON {
                return None;
            }
            let length = length_sq.sqrt();
            let dir = axis / length;
            paint_region(surface, a.min(b) - reach, a.max(b) + reach, color, |p| {
                let offset = p - a;
                let along = offset.dot(dir);
                let end_coverage = (along.min(length - along) + 0.5).clamp(0.0, 1.0);
                edge_coverage(half_width, offset.perp_dot(dir).abs()) * end_coverage
            })
        }
    };

    debug!(
        "stroke_segment: ({:.1}, {:.1}) -> ({:.1}, {:.1}), width={:.1}, cap={:?}, region={:?}",
        from.x, from.y, to.x, to.y, width, cap, region
    );
    region
}

/// Stroke a circle outline of the given radius.
pub fn stroke_ring(
    surface: &mut CpuSurface,
    center: Point,
    radius: f32,
    width: f32,
    color: Rgba,
) -> Option<Region> {
    let half_width = width / 2.0;
    if !(half_width > 0.0) || radius < 0.0 || color[3] <= 0.0 {
        return None;
    }

    let c = Vec2::from(center);
    let reach = Vec2::splat(radius + half_width + 1.0);
    paint_region(surface, c - reach, c + reach, color, |p| {
        edge_coverage(half_width, (p.distance(c) - radius).abs())
    })
}

/// Parameter range `[t0, t1]` along `from + dir * t`, `t` in `[0, length]`,
/// that lies within the surface grown by `margin` on every side.
fn visible_span(
    surface: &CpuSurface,
    from: (f64, f64),
    dir: (f64, f64),
    length: f64,
    margin: f64,
) -> Option<(f64, f64)> {
    let mut t0 = 0.0_f64;
    let mut t1 = length;
    for (origin, step, extent) in [
        (from.0, dir.0, f64::from(surface.width)),
        (from.1, dir.1, f64::from(surface.height)),
    ] {
        let (lo, hi) = (-margin, extent + margin);
        if step.abs() <= f64::EPSILON {
            if origin < lo || origin > hi {
                return None;
            }
            continue;
        }
        let (enter, leave) = {
            let a = (lo - origin) / step;
            let b = (hi - origin) / step;
            (a.min(b), a.max(b))
        };
        t0 = t0.max(enter);
        t1 = t1.min(leave);
    }
    (t0 <= t1).then_some((t0, t1))
}

/// Stroke a dashed segment using a `[dash, gap]` pattern starting at `from`.
///
/// Each dash is butt-capped. Only dashes that can reach the surface are
/// walked; the pattern phase is still anchored at `from`. Returns the number
/// of dashes drawn. A pattern with no gap or no dash length degrades to a
/// single solid segment.
pub fn dashed_segment(
    surface: &mut CpuSurface,
    from: Point,
    to: Point,
    width: f32,
    color: Rgba,
    pattern: [f32; 2],
) -> usize {
    let [dash, gap] = pattern;
    let origin = (f64::from(from.x), f64::from(from.y));
    let axis = (f64::from(to.x) - origin.0, f64::from(to.y) - origin.1);
    let length = axis.0.hypot(axis.1);
    if !(length > f64::from(f32::EPSILON)) || !length.is_finite() {
        return 0;
    }

    if !(dash > 0.0 && gap > 0.0) {
        return usize::from(stroke_segment(surface, from, to, width, color, LineCap::Butt).is_some());
    }

    let dir = (axis.0 / length, axis.1 / length);
    let margin = f64::from(width) / 2.0 + 1.0;
    let Some((visible_start, visible_end)) = visible_span(surface, origin, dir, length, margin)
    else {
        return 0;
    };

    let dash = f64::from(dash);
    let period = dash + f64::from(gap);
    let point_at = |t: f64| Point::new((origin.0 + dir.0 * t) as f32, (origin.1 + dir.1 * t) as f32);

    let mut dashes = 0;
    let mut index = ((visible_start - dash) / period).ceil().max(0.0) as u64;
    loop {
        let start = index as f64 * period;
        if start >= length || start > visible_end {
            break;
        }
        let end = (start + dash).min(length);
        stroke_segment(
            surface,
            point_at(start),
            point_at(end),
            width,
            color,
            LineCap::Butt,
        );
        dashes += 1;
        index += 1;
    }
    dashes
}
