//! Color math module
//!
//! Pure conversions from raw tristimulus sensor channels to normalized RGB,
//! HSV, CIE XYZ and CIE L*a*b*.

pub mod math;
pub mod types;

pub use math::{linearize, normalize, rgb_to_hsv, rgb_to_xyz, xyz_to_lab};
pub use types::{Hsv, Lab, NormalizedRgb, Xyz};
