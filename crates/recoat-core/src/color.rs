//! RGB ↔ HSV conversion.
//!
//! Hue is stored as a fraction of a full turn in [0, 1), not degrees.
//! Both conversions are total: every finite input produces a valid color.

/// A color in hue/saturation/value form.
///
/// `hue` is circular; arithmetic on it wraps modulo 1. `saturation` and
/// `value` are nominally in [0, 1] but may drift out of range during
/// adjustment; [`hsv_to_rgb`] clamps them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    /// Hue in turns, [0, 1).
    pub hue: f32,
    /// Saturation, nominally [0, 1].
    pub saturation: f32,
    /// Value (brightness), nominally [0, 1].
    pub value: f32,
}

/// Convert an RGB triple in [0, 1] to HSV.
///
/// Achromatic input (r = g = b) has no defined hue; this returns hue 0
/// rather than NaN. When the maximum component is 0, saturation is 0.
pub fn rgb_to_hsv(rgb: [f32; 3]) -> Hsv {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let value = max;
    let saturation = if max <= 0.0 { 0.0 } else { delta / max };

    let hue = if delta <= 0.0 {
        0.0
    } else {
        let h = if max == r {
            (g - b) / delta
        } else if max == g {
            2.0 + (b - r) / delta
        } else {
            4.0 + (r - g) / delta
        };
        (h / 6.0).rem_euclid(1.0)
    };

    Hsv {
        hue,
        saturation,
        value,
    }
}

/// Convert an HSV color to RGB using the 6-sector piecewise formula.
///
/// Hue is reduced modulo 1 first, so negative or >1 hues produced by
/// upstream arithmetic wrap to the equivalent color. Saturation and value
/// are clamped to [0, 1], so the result is always a legal RGB triple.
pub fn hsv_to_rgb(hsv: Hsv) -> [f32; 3] {
    let h = hsv.hue.rem_euclid(1.0);
    let s = hsv.saturation.clamp(0.0, 1.0);
    let v = hsv.value.clamp(0.0, 1.0);

    let chroma = s * v;
    let hs = h * 6.0;
    let x = chroma * (1.0 - (hs.rem_euclid(2.0) - 1.0).abs());

    // hs < 6 after the wrap, but guard the exact-boundary float case.
    let sector = (hs as u32).min(5);
    let (r, g, b) = match sector {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = v - chroma;
    [r + m, g + m, b + m]
}
