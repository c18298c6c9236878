//! Core transform evaluation — applies the tint to a single RGB color.

use crate::color::{hsv_to_rgb, rgb_to_hsv};
use crate::transform::params::{TintConfig, TintParams};

/// The core function. The cube bake evaluates this at every lattice point.
///
/// Rotates the color's hue so that content at `config.reference_hue` lands
/// on `params.target_hue`, then applies the saturation and brightness
/// deltas. Near-gray and near-dark colors (below the monochrome thresholds)
/// are protected: hue is numerically unstable there and rotating it
/// produces visibly jarring results on logo glyphs and shadows, so they
/// keep their hue and brightness, and only desaturate further when the
/// saturation delta is negative.
///
/// Pure and total: every finite input yields a legal RGB triple.
pub fn evaluate_tint(rgb: [f32; 3], params: &TintParams, config: &TintConfig) -> [f32; 3] {
    let mut hsv = rgb_to_hsv(rgb);
    let hue_shift = config.reference_hue - params.target_hue;

    let is_monochrome = hsv.saturation < config.mono_saturation_threshold
        || hsv.value < config.mono_value_threshold;

    if is_monochrome {
        if params.saturation < 0.0 {
            hsv.saturation += params.saturation;
        }
    } else {
        hsv.saturation += params.saturation;
        hsv.value += params.brightness * hsv.value;
        hsv.hue -= hue_shift;
    }

    // hsv_to_rgb wraps hue and clamps the adjusted saturation/value.
    hsv_to_rgb(hsv)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    fn config_with_reference(reference_hue: f32) -> TintConfig {
        TintConfig {
            reference_hue,
            ..TintConfig::default()
        }
    }

    fn assert_rgb_eq(a: [f32; 3], b: [f32; 3], tol: f32) {
        for c in 0..3 {
            assert!(
                (a[c] - b[c]).abs() < tol,
                "channel {c}: {:.6} vs {:.6}",
                a[c],
                b[c]
            );
        }
    }

    #[test]
    fn test_identity_params_leave_color_unchanged() {
        let config = TintConfig::default();
        let params = TintParams::identity(&config);
        for rgb in [
            [1.0, 0.0, 0.0],
            [0.2, 0.7, 0.4],
            [0.5, 0.5, 0.5],
            [0.0, 0.0, 0.0],
            [0.05, 0.1, 0.15],
        ] {
            assert_rgb_eq(evaluate_tint(rgb, &params, &config), rgb, EPSILON);
        }
    }

    #[test]
    fn test_hue_rotation_moves_red_to_target() {
        let config = config_with_reference(0.0);
        let params = TintParams {
            brightness: 0.0,
            saturation: 0.0,
            target_hue: 1.0 / 3.0,
        };
        let out = evaluate_tint([1.0, 0.0, 0.0], &params, &config);
        let hsv = rgb_to_hsv(out);
        assert!((hsv.hue - 1.0 / 3.0).abs() < EPSILON, "hue {:.4}", hsv.hue);
        assert!((hsv.saturation - 1.0).abs() < EPSILON);
        assert!((hsv.value - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_all_chromatic_hues_shift_by_same_offset() {
        let config = config_with_reference(0.0);
        let params = TintParams {
            brightness: 0.0,
            saturation: 0.0,
            target_hue: 0.33,
        };
        for hue in [0.0, 0.25, 2.0 / 3.0, 0.9] {
            let rgb = hsv_to_rgb(crate::color::Hsv {
                hue,
                saturation: 0.8,
                value: 0.9,
            });
            let out_hue = rgb_to_hsv(evaluate_tint(rgb, &params, &config)).hue;
            let expected = (hue + 0.33).rem_euclid(1.0);
            let diff = (out_hue - expected).rem_euclid(1.0);
            let circular = diff.min(1.0 - diff);
            assert!(circular < 1e-3, "hue {hue}: got {out_hue}, want {expected}");
        }
    }

    #[test]
    fn test_monochrome_is_protected_from_hue_rotation() {
        let config = TintConfig::default();
        for target_hue in [0.0, 0.33, 0.57, 0.95] {
            let params = TintParams {
                brightness: 0.5,
                saturation: 0.0,
                target_hue,
            };
            // Below the saturation threshold.
            let gray = [0.5, 0.5, 0.5];
            assert_rgb_eq(evaluate_tint(gray, &params, &config), gray, EPSILON);
            // Below the value threshold, even though saturated.
            let dark = hsv_to_rgb(crate::color::Hsv {
                hue: 0.1,
                saturation: 0.9,
                value: 0.1,
            });
            assert_rgb_eq(evaluate_tint(dark, &params, &config), dark, EPSILON);
        }
    }

    #[test]
    fn test_monochrome_desaturates_only_on_negative_delta() {
        let config = TintConfig::default();
        let near_gray = hsv_to_rgb(crate::color::Hsv {
            hue: 0.6,
            saturation: 0.15,
            value: 0.8,
        });

        // Positive delta is ignored for monochrome content.
        let boost = TintParams {
            brightness: 0.0,
            saturation: 0.5,
            target_hue: 0.0,
        };
        assert_rgb_eq(evaluate_tint(near_gray, &boost, &config), near_gray, EPSILON);

        // Negative delta desaturates without touching hue or value.
        let cut = TintParams {
            brightness: 0.0,
            saturation: -0.1,
            target_hue: 0.0,
        };
        let out = rgb_to_hsv(evaluate_tint(near_gray, &cut, &config));
        assert!((out.saturation - 0.05).abs() < 1e-3);
        assert!((out.value - 0.8).abs() < 1e-3);
        assert!((out.hue - 0.6).abs() < 1e-3);
    }

    #[test]
    fn test_brightness_scales_with_value() {
        let config = config_with_reference(0.0);
        let params = TintParams {
            brightness: 0.5,
            saturation: 0.0,
            target_hue: 0.0,
        };
        let bright = hsv_to_rgb(crate::color::Hsv {
            hue: 0.0,
            saturation: 1.0,
            value: 0.6,
        });
        let out = rgb_to_hsv(evaluate_tint(bright, &params, &config));
        // 0.6 + 0.5 * 0.6 = 0.9
        assert!((out.value - 0.9).abs() < 1e-3, "value {:.4}", out.value);
    }

    #[test]
    fn test_extreme_deltas_clamp_instead_of_failing() {
        let config = config_with_reference(0.0);
        let params = TintParams {
            brightness: 1.0,
            saturation: 1.0,
            target_hue: 0.5,
        };
        let out = evaluate_tint([0.9, 0.3, 0.3], &params, &config);
        for c in out {
            assert!((0.0..=1.0).contains(&c), "component out of range: {c}");
        }
    }
}
