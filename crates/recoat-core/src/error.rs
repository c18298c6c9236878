//! Error type for the tint engine.
//!
//! Color conversions and the cube bake are total functions and never fail.
//! Only bitmap construction and the cube apply pass return `Result`.

use thiserror::Error;

/// Errors produced by bitmap construction and the apply pass.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TintError {
    /// The source bitmap has zero pixels.
    #[error("source bitmap has zero area ({width}x{height})")]
    EmptySource {
        /// Claimed width in pixels.
        width: u32,
        /// Claimed height in pixels.
        height: u32,
    },

    /// The pixel buffer does not match the claimed dimensions.
    #[error("pixel buffer holds {actual} pixels, expected {width}x{height} = {expected}")]
    PixelCountMismatch {
        /// Claimed width in pixels.
        width: u32,
        /// Claimed height in pixels.
        height: u32,
        /// Expected pixel count (`width * height`).
        expected: usize,
        /// Actual pixel count supplied.
        actual: usize,
    },

    /// The color cube's entry count does not match its declared size.
    #[error("color cube is malformed: size {size} with {len} entries")]
    MalformedCube {
        /// Declared grid size per axis.
        size: u32,
        /// Actual entry count.
        len: usize,
    },
}
