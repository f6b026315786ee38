//! sRGB / CIE conversions on `f32` sensor channels.
//!
//! All functions are pure. Constants follow the IEC 61966-2-1 sRGB transfer
//! curve and the CIE 1976 L*a*b* definition with a D65 reference white.

use crate::sensor_pipeline::color::types::{Hsv, Lab, NormalizedRgb, Xyz};

/// Breakpoint between the linear toe and the power segment of the sRGB curve.
const SRGB_BREAKPOINT: f32 = 0.04045;
const SRGB_TOE_SLOPE: f32 = 12.92;
const SRGB_OFFSET: f32 = 0.055;
const SRGB_GAMMA: f32 = 2.4;

/// Linear sRGB -> XYZ (D65), row-major.
const SRGB_TO_XYZ: [[f32; 3]; 3] = [
    [0.4124, 0.3576, 0.1805],
    [0.2126, 0.7152, 0.0722],
    [0.0193, 0.1192, 0.9505],
];

/// D65 reference white.
const REFERENCE_X: f32 = 0.95047;
const REFERENCE_Y: f32 = 1.0;
const REFERENCE_Z: f32 = 1.08883;

/// CIE epsilon (216/24389).
const EPSILON: f32 = 216.0 / 24389.0;
/// CIE kappa (24389/27).
const KAPPA: f32 = 24389.0 / 27.0;

/// Scales the first three raw channels by `max_range`.
///
/// Missing channels read as 0 and negative channels are floored at 0. When
/// `max_range <= 0` the sensor is treated as uncalibrated and the floored raw
/// values are returned undivided; otherwise each channel is clamped to `[0, 1]`.
pub fn normalize(values: &[f32], max_range: f32) -> NormalizedRgb {
    let channel = |i: usize| values.get(i).copied().unwrap_or(0.0).max(0.0);
    let (r, g, b) = (channel(0), channel(1), channel(2));

    if max_range <= 0.0 {
        return NormalizedRgb::new(r, g, b);
    }

    NormalizedRgb::new(
        (r / max_range).clamp(0.0, 1.0),
        (g / max_range).clamp(0.0, 1.0),
        (b / max_range).clamp(0.0, 1.0),
    )
}

/// Inverse sRGB transfer function (gamma expansion) for one channel.
pub fn linearize(channel: f32) -> f32 {
    if channel <= SRGB_BREAKPOINT {
        channel / SRGB_TOE_SLOPE
    } else {
        ((channel + SRGB_OFFSET) / (1.0 + SRGB_OFFSET)).powf(SRGB_GAMMA)
    }
}

pub fn rgb_to_xyz(r: f32, g: f32, b: f32) -> Xyz {
    let lin = [linearize(r), linearize(g), linearize(b)];
    let row = |m: &[f32; 3]| m[0] * lin[0] + m[1] * lin[1] + m[2] * lin[2];

    Xyz {
        x: row(&SRGB_TO_XYZ[0]),
        y: row(&SRGB_TO_XYZ[1]),
        z: row(&SRGB_TO_XYZ[2]),
    }
}

pub fn xyz_to_lab(x: f32, y: f32, z: f32) -> Lab {
    let fx = lab_f(x / REFERENCE_X);
    let fy = lab_f(y / REFERENCE_Y);
    let fz = lab_f(z / REFERENCE_Z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Cube root above epsilon, linear segment near black.
fn lab_f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// Six-sector RGB -> HSV.
///
/// The max-channel branch uses exact float equality, so ties resolve in
/// R, G, B order.
pub fn rgb_to_hsv(r: f32, g: f32, b: f32) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let sector = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        ((b - r) / delta) + 2.0
    } else {
        ((r - g) / delta) + 4.0
    };
    let h = sector * 60.0;

    let s = if max == 0.0 { 0.0 } else { delta / max };

    Hsv {
        h: if h < 0.0 { h + 360.0 } else { h },
        s,
        v: max,
    }
}
