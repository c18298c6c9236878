//! Recoat Core — domain layer for icon tinting.
//!
//! This crate contains the color math, the 3D lookup-cube bake and apply
//! operations, and the bitmap representation. No threading or framework
//! dependencies; the debounced render loop lives in `recoat-pipeline`.

pub mod color;
pub mod error;
pub mod image;
pub mod transform;

// Re-exports for convenience.
pub use error::TintError;
pub use image::Bitmap;
pub use transform::evaluate::evaluate_tint;
pub use transform::lut::ColorCube;
pub use transform::params::{TintConfig, TintParams};
