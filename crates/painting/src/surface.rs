//! CPU drawing surface with straight-alpha float storage

use image::{Rgba as ImageRgba, RgbaImage};

use crate::types::{Rgba, TRANSPARENT};

/// A fixed-size RGBA CPU surface
/// Stores pixels as [f32; 4], straight alpha, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct CpuSurface {
    /// Surface dimensions
    pub width: u32,
    pub height: u32,
    pixels: Vec<Rgba>,
}

impl CpuSurface {
    /// Create a new surface with the given dimensions, initialized to transparent
    pub fn new(width: u32, height: u32) -> Self {
        let pixel_count = (width as usize) * (height as usize);
        Self {
            width,
            height,
            pixels: vec![TRANSPARENT; pixel_count],
        }
    }

    /// Erase the whole surface to transparent
    pub fn clear(&mut self) {
        self.pixels.fill(TRANSPARENT);
    }

    /// Replace every pixel with a solid color
    pub fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get a pixel at the given coordinates
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.index(x, y).map(|index| self.pixels[index])
    }

    /// Set a pixel at the given coordinates
    /// Does nothing if coordinates are out of bounds
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(index) = self.index(x, y) {
            self.pixels[index] = color;
        }
    }

    /// Composite a color over an existing pixel (source-over)
    ///
    /// `coverage` scales the source alpha, so partially covered edge pixels
    /// blend proportionally.
    #[inline]
    pub fn blend_pixel(&mut self, x: u32, y: u32, color: Rgba, coverage: f32) {
        let Some(index) = self.index(x, y) else {
            return;
        };
        let dst = self.pixels[index];

        let src_alpha = color[3] * coverage.clamp(0.0, 1.0);
        if src_alpha <= 0.0 {
            return;
        }
        let dst_weight = dst[3] * (1.0 - src_alpha);
        let out_alpha = src_alpha + dst_weight;

        let channel = |i: usize| (color[i] * src_alpha + dst[i] * dst_weight) / out_alpha;
        self.pixels[index] = [channel(0), channel(1), channel(2), out_alpha];
    }

    /// Composite an 8-bit image onto the surface with its top-left at (x, y)
    pub fn draw_image(&mut self, image: &RgbaImage, x: u32, y: u32) {
        for (ix, iy, pixel) in image.enumerate_pixels() {
            let [r, g, b, a] = pixel.0;
            if a == 0 {
                continue;
            }
            let color = [
                r as f32 / 255.0,
                g as f32 / 255.0,
                b as f32 / 255.0,
                1.0,
            ];
            self.blend_pixel(x + ix, y + iy, color, a as f32 / 255.0);
        }
    }

    /// True when every pixel is fully transparent
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|pixel| pixel[3] == 0.0)
    }

    /// Number of pixels with any alpha
    pub fn painted_pixels(&self) -> usize {
        self.pixels.iter().filter(|pixel| pixel[3] > 0.0).count()
    }

    /// Convert to an 8-bit RGBA image
    pub fn to_rgba_image(&self) -> RgbaImage {
        let to_byte = |value: f32| (value.clamp(0.0, 1.0) * 255.0).round() as u8;
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let pixel = self.pixels[(y as usize) * (self.width as usize) + (x as usize)];
            ImageRgba([
                to_byte(pixel[0]),
                to_byte(pixel[1]),
                to_byte(pixel[2]),
                to_byte(pixel[3]),
            ])
        })
    }

    /// Get the total number of pixels
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Get direct access to pixel data
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }
}
