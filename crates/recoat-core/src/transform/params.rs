//! Central parameter structs that define the tint transform.
//!
//! `TintParams` holds the three user-tunable sliders; `TintConfig` holds
//! the product-tuned constants (reference hue, monochrome thresholds,
//! cube size). Every setter writes `TintParams`; the cube bake reads both.

use serde::{Deserialize, Serialize};

/// User-tunable tint parameters. All three are independent and freely
/// settable; any combination is legal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TintParams {
    /// Brightness delta, roughly [-1, 1]. Applied multiplicatively, so it
    /// scales with existing brightness instead of uniformly lifting shadows.
    pub brightness: f32,
    /// Saturation delta, roughly [-1, 1]. Applied additively.
    pub saturation: f32,
    /// Desired hue (in turns, [0, 1)) for content currently sitting at the
    /// reference hue.
    pub target_hue: f32,
}

impl TintParams {
    /// Parameters that leave every color unchanged under the given config.
    pub fn identity(config: &TintConfig) -> Self {
        Self {
            brightness: 0.0,
            saturation: 0.0,
            target_hue: config.reference_hue,
        }
    }
}

impl Default for TintParams {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            saturation: 0.0,
            target_hue: 0.57,
        }
    }
}

/// Tuning constants for the tint transform.
///
/// The thresholds and reference hue are product-tuned values with no
/// derivation; they stay configurable, with the tuned values as defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TintConfig {
    /// Hue (in turns) that `target_hue` is measured against. Content at
    /// this hue lands exactly on `target_hue` after the transform.
    pub reference_hue: f32,
    /// Colors with saturation below this are treated as monochrome and
    /// never hue-shifted.
    pub mono_saturation_threshold: f32,
    /// Colors with value below this are treated as monochrome and never
    /// hue-shifted.
    pub mono_value_threshold: f32,
    /// Lattice dimension of the lookup cube per axis.
    pub cube_size: u32,
}

impl Default for TintConfig {
    fn default() -> Self {
        Self {
            reference_hue: 205.0 / 360.0,
            mono_saturation_threshold: 0.2,
            mono_value_threshold: 0.2,
            cube_size: 64,
        }
    }
}
