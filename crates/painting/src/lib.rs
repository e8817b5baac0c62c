//! Inkshare painting core - stroke rendering and replication
//!
//! This crate provides:
//! - [`types`] - Points, strokes and validated pens
//! - [`surface`] - CPU RGBA surface
//! - [`registry`] - Named surfaces (own canvas, remote canvases, overlay)
//! - [`raster`] - Anti-aliased segments, rings and dashes
//! - [`path`] - Path renderer shared by live drawing and stroke replay
//! - [`guides`] - Dashed boundary guides on the tooltip overlay
//! - [`cursor`] - Pen cursor bitmaps with scoped export handles
//! - [`board`] - One participant's surfaces wired together

pub mod board;
pub mod constants;
pub mod cursor;
pub mod error;
pub mod guides;
pub mod path;
pub mod raster;
pub mod registry;
pub mod surface;
pub mod types;
pub mod validation;

pub use board::*;
pub use constants::*;
pub use cursor::*;
pub use error::*;
pub use guides::*;
pub use path::*;
pub use raster::*;
pub use registry::*;
pub use surface::*;
pub use types::*;
pub use validation::*;
