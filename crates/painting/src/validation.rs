use thiserror::Error;

use crate::constants::MAX_SURFACE_SIZE;
use crate::types::Rgba;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid pen size: {0}")]
    InvalidSize(f32),
    #[error("Invalid color token: {0:?}")]
    InvalidColor(String),
    #[error("Invalid device pixel scale: {0}")]
    InvalidScale(f32),
    #[error("Invalid surface size: {width}x{height} (max {})", MAX_SURFACE_SIZE)]
    InvalidDimensions { width: u32, height: u32 },
    #[error("Cursor of size {size} at scale {scale} exceeds {} physical pixels", MAX_SURFACE_SIZE)]
    CursorTooLarge { size: f32, scale: f32 },
    #[error("Invalid guide {field}: {value} (expected 0..={})", MAX_SURFACE_SIZE)]
    InvalidGuide { field: &'static str, value: f32 },
}

/// Pen sizes must be finite and strictly positive
pub fn validate_size(size: f32) -> Result<f32, ValidationError> {
    if size.is_finite() && size > 0.0 {
        Ok(size)
    } else {
        Err(ValidationError::InvalidSize(size))
    }
}

/// Device pixel scales must be finite and strictly positive
pub fn validate_scale(scale: f32) -> Result<f32, ValidationError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(scale)
    } else {
        Err(ValidationError::InvalidScale(scale))
    }
}

/// The cursor scratch surface is `size * scale` pixels square and obeys the
/// same side limit as registry surfaces
pub fn validate_cursor_extent(size: f32, scale: f32) -> Result<(), ValidationError> {
    let physical = size * scale;
    if physical.is_finite() && physical.round() <= MAX_SURFACE_SIZE as f32 {
        Ok(())
    } else {
        Err(ValidationError::CursorTooLarge { size, scale })
    }
}

/// Guide lengths and insets must be finite, non-negative and no larger
/// than a surface side
pub fn validate_guide_length(field: &'static str, value: f32) -> Result<f32, ValidationError> {
    if value.is_finite() && (0.0..=MAX_SURFACE_SIZE as f32).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::InvalidGuide { field, value })
    }
}

/// Check surface dimensions against the registry limits
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), ValidationError> {
    if width == 0 || height == 0 || width > MAX_SURFACE_SIZE || height > MAX_SURFACE_SIZE {
        return Err(ValidationError::InvalidDimensions { width, height });
    }
    Ok(())
}

/// Parse a CSS color token (`#rrggbb`, `rgba(...)`, named colors)
pub fn parse_color(token: &str) -> Result<Rgba, ValidationError> {
    let color = csscolorparser::parse(token.trim())
        .map_err(|_| ValidationError::InvalidColor(token.to_string()))?;
    let [r, g, b, a] = color.to_rgba8();
    Ok([
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ])
}
