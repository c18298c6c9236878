//! 3D lookup-cube bake and apply.

use crate::error::TintError;
use crate::image::Bitmap;
use crate::transform::evaluate::evaluate_tint;
use crate::transform::params::{TintConfig, TintParams};

/// A 3D lookup table mapping input RGB to tinted output RGB.
///
/// Cell `(x, y, z)` holds the transformed color for input RGB
/// `(x/size, y/size, z/size)`; intermediate inputs are reconstructed by
/// trilinear interpolation over the 8 neighboring cells. Entries are RGBA
/// with alpha fixed at 1.0, laid out red-fastest (`x + y*size + z*size²`),
/// the layout a GPU color-cube filter consumes directly.
///
/// Rebuilt from scratch on every parameter change; read-only once baked.
#[derive(Debug, Clone)]
pub struct ColorCube {
    /// Grid size per axis.
    size: u32,
    /// Cube entries. Length = size³.
    data: Vec<[f32; 4]>,
}

impl ColorCube {
    /// Bake the tint transform into a cube of the given size.
    ///
    /// Deterministic: identical inputs always produce an identical cube.
    /// Cost is O(size³) with a single upfront allocation; size 64 is
    /// 262,144 evaluations and dominates a render pass.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0; that is a programming error, not a runtime
    /// condition.
    pub fn bake(size: u32, params: &TintParams, config: &TintConfig) -> Self {
        assert!(size > 0, "cube size must be positive");

        let start = std::time::Instant::now();
        let n = size as usize;
        let step = 1.0 / size as f32;
        let mut data = Vec::with_capacity(n * n * n);

        for z in 0..size {
            let b = z as f32 * step;
            for y in 0..size {
                let g = y as f32 * step;
                for x in 0..size {
                    let r = x as f32 * step;
                    let [or, og, ob] = evaluate_tint([r, g, b], params, config);
                    data.push([or, og, ob, 1.0]);
                }
            }
        }

        tracing::debug!(
            "baked {size}³ cube in {:.2}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );
        Self { size, data }
    }

    /// Grid size per axis.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Raw cube entries as packed native-endian f32 RGBA bytes, suitable
    /// for handing to an external color-cube filter.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Look up an RGB color via trilinear interpolation.
    ///
    /// Inputs at or beyond the lattice boundary clamp to the nearest valid
    /// cell, so (0,0,0) and (1,1,1) map to the corner cells.
    pub fn sample(&self, rgb: [f32; 3]) -> [f32; 3] {
        let max_index = self.size - 1;

        let mut idx0 = [0usize; 3];
        let mut idx1 = [0usize; 3];
        let mut frac = [0.0f32; 3];
        for c in 0..3 {
            let scaled = (rgb[c] * self.size as f32).clamp(0.0, max_index as f32);
            let lo = scaled.floor();
            idx0[c] = lo as usize;
            idx1[c] = (idx0[c] + 1).min(max_index as usize);
            frac[c] = scaled - lo;
        }

        let cell = |x: usize, y: usize, z: usize| -> [f32; 4] {
            let n = self.size as usize;
            self.data[x + y * n + z * n * n]
        };

        let mut out = [0.0f32; 3];
        for c in 0..3 {
            // Interpolate along red, then green, then blue.
            let c000 = cell(idx0[0], idx0[1], idx0[2])[c];
            let c100 = cell(idx1[0], idx0[1], idx0[2])[c];
            let c010 = cell(idx0[0], idx1[1], idx0[2])[c];
            let c110 = cell(idx1[0], idx1[1], idx0[2])[c];
            let c001 = cell(idx0[0], idx0[1], idx1[2])[c];
            let c101 = cell(idx1[0], idx0[1], idx1[2])[c];
            let c011 = cell(idx0[0], idx1[1], idx1[2])[c];
            let c111 = cell(idx1[0], idx1[1], idx1[2])[c];

            let c00 = c000 + (c100 - c000) * frac[0];
            let c10 = c010 + (c110 - c010) * frac[0];
            let c01 = c001 + (c101 - c001) * frac[0];
            let c11 = c011 + (c111 - c011) * frac[0];

            let c0 = c00 + (c10 - c00) * frac[1];
            let c1 = c01 + (c11 - c01) * frac[1];

            out[c] = c0 + (c1 - c0) * frac[2];
        }
        out
    }

    /// Apply this cube to every pixel of a bitmap.
    ///
    /// RGB is remapped through [`Self::sample`]; alpha passes through
    /// unchanged. The output has the source's dimensions and pixel order.
    pub fn apply(&self, source: &Bitmap) -> Result<Bitmap, TintError> {
        let expected = self.size as usize * self.size as usize * self.size as usize;
        if self.data.len() != expected {
            return Err(TintError::MalformedCube {
                size: self.size,
                len: self.data.len(),
            });
        }
        if source.pixels().is_empty() {
            return Err(TintError::EmptySource {
                width: source.width(),
                height: source.height(),
            });
        }

        let mut pixels = Vec::with_capacity(source.pixels().len());
        for px in source.pixels() {
            let [r, g, b] = self.sample([px[0], px[1], px[2]]);
            pixels.push([r, g, b, px[3]]);
        }
        Bitmap::new(source.width(), source.height(), pixels)
    }
}
