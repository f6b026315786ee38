//! Sensor profile and conversion output types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::sensor_pipeline::common::error::PipelineError;

/// Classified sensor category
///
/// Variant order is the display order used when listing sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    /// Tristimulus color sensor reporting R, G, B and optionally Clear
    Color,
    /// Ambient light sensor reporting illuminance in lux
    Light,
    Unknown,
}

impl SensorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensorKind::Color => "color",
            SensorKind::Light => "light",
            SensorKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SensorKind {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "color" => Ok(SensorKind::Color),
            "light" => Ok(SensorKind::Light),
            "unknown" => Ok(SensorKind::Unknown),
            _ => Err(PipelineError::UnknownSensorKind(s.to_string())),
        }
    }
}

/// Static sensor metadata
///
/// Only `kind` and `max_range` feed the conversions; the remaining fields
/// describe the hardware for display and ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorProfile {
    pub kind: SensorKind,
    /// Declared maximum reportable value. `<= 0` disables normalization.
    pub max_range: f32,
    pub name: String,
    pub vendor: String,
    pub version: i32,
    /// Platform type string, e.g. `android.sensor.light`
    pub string_type: String,
    pub resolution: f32,
    /// Power draw in mA
    pub power: f32,
}

impl SensorProfile {
    pub fn new(kind: SensorKind, max_range: f32) -> Self {
        Self {
            kind,
            max_range,
            name: String::new(),
            vendor: String::new(),
            version: 0,
            string_type: String::new(),
            resolution: 0.0,
            power: 0.0,
        }
    }

    pub fn with_identity(mut self, name: impl Into<String>, vendor: impl Into<String>) -> Self {
        self.name = name.into();
        self.vendor = vendor.into();
        self
    }

    pub fn with_string_type(mut self, string_type: impl Into<String>) -> Self {
        self.string_type = string_type.into();
        self
    }

    pub fn is_calibrated(&self) -> bool {
        self.max_range > 0.0
    }
}

/// Presentation tag for a converted value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionCategory {
    Raw,
    Linear,
    NonLinear,
    ColorSpace,
}

/// One displayable conversion result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertedValue {
    pub name: String,
    /// Fixed-width text, possibly multi-line
    pub text: String,
    pub category: ConversionCategory,
}

impl ConvertedValue {
    pub fn new(name: impl Into<String>, text: impl Into<String>, category: ConversionCategory) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            category,
        }
    }
}

/// Ordered conversions for one sample, `Raw` first
pub type ConversionResult = Vec<ConvertedValue>;

/// A sample together with everything derived from it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading {
    pub profile: SensorProfile,
    /// Sample timestamp in nanoseconds
    pub timestamp: i64,
    pub accuracy: i32,
    pub raw_values: Vec<f32>,
    pub converted_values: ConversionResult,
}
