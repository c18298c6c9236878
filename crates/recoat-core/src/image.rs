//! Bitmap representation for the tint pipeline.
//!
//! Pixels are always stored as RGBA f32 in [0, 1], row-major with a
//! **top-left** origin. The origin does not affect the color math but is
//! preserved end to end: the apply pass writes output pixels in the same
//! order it reads source pixels.

use crate::error::TintError;

/// An in-memory RGBA bitmap. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<[f32; 4]>,
}

impl Bitmap {
    /// Construct a bitmap from RGBA f32 pixels in [0, 1].
    ///
    /// Fails if the bitmap has zero area or the buffer length does not
    /// match `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<[f32; 4]>) -> Result<Self, TintError> {
        if width == 0 || height == 0 {
            return Err(TintError::EmptySource { width, height });
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(TintError::PixelCountMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Construct a bitmap from an 8-bit RGBA buffer (4 bytes per pixel).
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> Result<Self, TintError> {
        if width == 0 || height == 0 {
            return Err(TintError::EmptySource { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected * 4 {
            return Err(TintError::PixelCountMismatch {
                width,
                height,
                expected,
                actual: data.len() / 4,
            });
        }
        let pixels = data
            .chunks_exact(4)
            .map(|px| {
                [
                    px[0] as f32 / 255.0,
                    px[1] as f32 / 255.0,
                    px[2] as f32 / 255.0,
                    px[3] as f32 / 255.0,
                ]
            })
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Convert to an 8-bit RGBA buffer, clamping each component to [0, 1].
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            for c in px {
                out.push((c.clamp(0.0, 1.0) * 255.0).round() as u8);
            }
        }
        out
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel data, row-major from the top-left corner.
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }
}
