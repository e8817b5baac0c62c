//! Pen cursor generation
//!
//! The cursor is a ring the size and color of the current pen. Rendering is
//! synchronous; PNG encoding runs on tokio's blocking pool and completes
//! later. Every request carries a token, and only the completion of the
//! latest request may install a cursor:
//! - an older completion arriving late is discarded ([`CursorUpdate::Stale`])
//! - a failed encode keeps the previous cursor ([`CursorUpdate::Failed`])
//! - an install replaces the exported handle and releases the old one

mod bitmap;
mod export;

use std::fmt;

use image::RgbaImage;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::error::PaintError;
use crate::validation::{parse_color, validate_scale, validate_size};

pub use bitmap::{encode_png, render_cursor_bitmap};
pub use export::{ExportRegistry, ExportedImage};

/// Pointer style of the interactive surface
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CursorStyle {
    /// Platform default pointer
    #[default]
    Default,
    /// Custom image with its hotspot in logical pixels
    Image { url: String, hotspot: (f32, f32) },
}

impl fmt::Display for CursorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "auto"),
            Self::Image { url, hotspot } => {
                write!(f, "url({}) {} {}, auto", url, hotspot.0, hotspot.1)
            }
        }
    }
}

/// Outcome of handing an encoded cursor to [`CursorResource::replace_cursor_image`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorUpdate {
    Installed,
    Stale,
    Failed,
}

/// A finished encode, successful or not
#[derive(Debug)]
pub struct EncodedCursor {
    pub token: u64,
    pub hotspot: (f32, f32),
    pub png: Result<Vec<u8>, PaintError>,
}

/// An issued cursor request whose encode may still be running
#[derive(Debug)]
pub struct CursorRequest {
    token: u64,
    hotspot: (f32, f32),
    task: JoinHandle<Result<Vec<u8>, image::ImageError>>,
}

impl CursorRequest {
    pub fn token(&self) -> u64 {
        self.token
    }

    /// Wait for the encode to finish
    pub async fn finish(self) -> EncodedCursor {
        let png = match self.task.await {
            Ok(Ok(bytes)) => Ok(bytes),
            Ok(Err(err)) => Err(PaintError::Encode(err.to_string())),
            Err(err) => Err(PaintError::Encode(err.to_string())),
        };
        EncodedCursor {
            token: self.token,
            hotspot: self.hotspot,
            png,
        }
    }
}

/// The cursor bitmap and its exported handle, created once at setup
#[derive(Debug)]
pub struct CursorResource {
    exports: ExportRegistry,
    current: Option<ExportedImage>,
    style: CursorStyle,
    bitmap: Option<RgbaImage>,
    latest_token: u64,
}

impl CursorResource {
    pub fn new(exports: ExportRegistry) -> Self {
        Self {
            exports,
            current: None,
            style: CursorStyle::Default,
            bitmap: None,
            latest_token: 0,
        }
    }

    /// Render a cursor for the given pen and start encoding it.
    ///
    /// Must be called from within a tokio runtime. Issuing a new request
    /// makes every earlier one stale; a rejected request issues no token.
    pub fn request(
        &mut self,
        size: f32,
        color: &str,
        scale: f32,
    ) -> Result<CursorRequest, PaintError> {
        let size = validate_size(size)?;
        let color = parse_color(color)?;
        let scale = validate_scale(scale)?;

        let bitmap = render_cursor_bitmap(size, color, scale)?;
        let encode_input = bitmap.clone();
        self.bitmap = Some(bitmap);

        self.latest_token += 1;
        let token = self.latest_token;
        let task = tokio::task::spawn_blocking(move || encode_png(&encode_input));

        Ok(CursorRequest {
            token,
            hotspot: (size / 2.0, size / 2.0),
            task,
        })
    }

    /// Install an encoded cursor if it belongs to the latest request.
    ///
    /// The new export replaces the old one in a single step; dropping the
    /// previous [`ExportedImage`] releases it.
    pub fn replace_cursor_image(&mut self, encoded: EncodedCursor) -> CursorUpdate {
        if encoded.token != self.latest_token {
            warn!(
                "Discarding stale cursor encode {} (latest is {})",
                encoded.token, self.latest_token
            );
            return CursorUpdate::Stale;
        }

        let bytes = match encoded.png {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("Cursor encode {} failed, keeping current cursor: {}", encoded.token, err);
                return CursorUpdate::Failed;
            }
        };

        let exported = self.exports.export(bytes);
        self.style = CursorStyle::Image {
            url: exported.url().to_string(),
            hotspot: encoded.hotspot,
        };
        self.current = Some(exported);

        info!("Installed cursor {}: {}", encoded.token, self.style);
        CursorUpdate::Installed
    }

    /// Request, await and install in one call
    pub async fn set_cursor(
        &mut self,
        size: f32,
        color: &str,
        scale: f32,
    ) -> Result<CursorUpdate, PaintError> {
        let request = self.request(size, color, scale)?;
        let encoded = request.finish().await;
        Ok(self.replace_cursor_image(encoded))
    }

    /// CSS-style pointer for the interactive surface
    pub fn style(&self) -> &CursorStyle {
        &self.style
    }

    /// URL of the installed cursor image, if any
    pub fn current_url(&self) -> Option<&str> {
        self.current.as_ref().map(ExportedImage::url)
    }

    /// Most recently rendered bitmap
    pub fn bitmap(&self) -> Option<&RgbaImage> {
        self.bitmap.as_ref()
    }

    pub fn exports(&self) -> &ExportRegistry {
        &self.exports
    }
}
