//! Cursor bitmap rendering and encoding

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};

use crate::constants::CURSOR_LINE_WIDTH;
use crate::raster::stroke_ring;
use crate::surface::CpuSurface;
use crate::types::{Point, Rgba};
use crate::validation::{validate_cursor_extent, ValidationError};

/// Whole-pixel extent of a float size, never zero
fn pixel_extent(size: f32) -> u32 {
    (size.round() as u32).max(1)
}

/// Render the pen outline as a `size x size` cursor image.
///
/// The ring is drawn on a scratch surface at `size * scale` physical
/// pixels so the outline is crisp on dense displays, then resampled to the
/// logical size. The radius leaves half the outline width as padding so the
/// ring is never clipped. A physical extent past the surface size limit is
/// rejected.
pub fn render_cursor_bitmap(
    size: f32,
    color: Rgba,
    scale: f32,
) -> Result<RgbaImage, ValidationError> {
    validate_cursor_extent(size, scale)?;
    let physical = pixel_extent(size * scale);
    let logical = pixel_extent(size);

    let mut scratch = CpuSurface::new(physical, physical);
    let padding = CURSOR_LINE_WIDTH / 2.0;
    let center = size / 2.0;
    stroke_ring(
        &mut scratch,
        Point::new(center * scale, center * scale),
        (center - padding).max(0.0) * scale,
        CURSOR_LINE_WIDTH * scale,
        color,
    );

    let scratch = scratch.to_rgba_image();
    if physical == logical {
        return Ok(scratch);
    }
    Ok(imageops::resize(&scratch, logical, logical, FilterType::Triangle))
}

/// Encode a cursor bitmap as PNG bytes
pub fn encode_png(bitmap: &RgbaImage) -> Result<Vec<u8>, image::ImageError> {
    let mut bytes = Vec::new();
    bitmap.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
