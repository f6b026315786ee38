//! Color value types produced by the color math stage

use serde::Serialize;

/// RGB triple scaled by the sensor's declared maximum range.
///
/// Each channel is in `[0, 1]` when the sensor is calibrated (`max_range > 0`),
/// otherwise it carries the floored raw magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NormalizedRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// CIE 1931 tristimulus values, D65-referenced
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// CIE L*a*b* coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Lab {
    /// Lightness, roughly 0-100
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

/// Hue in degrees `[0, 360)`, saturation and value in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl NormalizedRgb {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn to_hsv(self) -> Hsv {
        super::math::rgb_to_hsv(self.r, self.g, self.b)
    }

    pub fn to_xyz(self) -> Xyz {
        super::math::rgb_to_xyz(self.r, self.g, self.b)
    }
}

impl Xyz {
    pub fn to_lab(self) -> Lab {
        super::math::xyz_to_lab(self.x, self.y, self.z)
    }
}
