use crate::types::Rgba;

/// Largest surface side accepted by the registry.
pub const MAX_SURFACE_SIZE: u32 = 4096;

/// Width a path uses before a pen has been applied to its surface.
pub const DEFAULT_LINE_WIDTH: f32 = 1.0;

/// Outline thickness of the cursor ring, in logical pixels.
pub const CURSOR_LINE_WIDTH: f32 = 1.5;

/// Boundary guide dash pattern: [dash, gap] in pixels.
pub const GUIDE_DASH_PATTERN: [f32; 2] = [3.0, 8.0];

/// Boundary guide stroke width in pixels.
pub const GUIDE_LINE_WIDTH: f32 = 1.0;

/// Boundary guide color, `rgba(10, 10, 10, 1)`.
pub const GUIDE_COLOR: Rgba = [10.0 / 255.0, 10.0 / 255.0, 10.0 / 255.0, 1.0];

/// Scheme prefix of exported image handles.
pub const EXPORT_URL_PREFIX: &str = "blob:inkshare/";
