use std::f32::consts::PI;

use tracing::{debug, trace};

use crate::sensor_pipeline::color::{Hsv, Lab, NormalizedRgb, Xyz, normalize};
use crate::sensor_pipeline::reading::config::FormatConfig;
use crate::sensor_pipeline::reading::format::{fixed, glyph_with_unit, with_unit};
use crate::sensor_pipeline::reading::types::{
    ConversionCategory, ConversionResult, ConvertedValue, SensorKind, SensorProfile, SensorReading,
};

/// Lux in one foot-candle.
const LUX_PER_FOOT_CANDLE: f32 = 10.764;

const RAW_PLACEHOLDER: &str = "-";
const NEGATIVE_INFINITY_GLYPH: &str = "-∞";
const EV_UNIT: &str = "EV@ISO100";

/// Minimum column width of the `[index]` label in multi-channel raw output.
const MIN_INDEX_WIDTH: usize = 2;

/// Qualitative lighting condition derived from illuminance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Night,
    Twilight,
    Indoor,
    Office,
    Cloudy,
    Sunny,
    DirectSun,
}

impl Scene {
    /// Classifies by fixed upper lux bounds, each exclusive.
    pub fn from_lux(lux: f32) -> Self {
        if lux < 10.0 {
            Scene::Night
        } else if lux < 50.0 {
            Scene::Twilight
        } else if lux < 200.0 {
            Scene::Indoor
        } else if lux < 500.0 {
            Scene::Office
        } else if lux < 1000.0 {
            Scene::Cloudy
        } else if lux < 25000.0 {
            Scene::Sunny
        } else {
            Scene::DirectSun
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scene::Night => "Night",
            Scene::Twilight => "Twilight",
            Scene::Indoor => "Indoor",
            Scene::Office => "Office",
            Scene::Cloudy => "Cloudy",
            Scene::Sunny => "Sunny",
            Scene::DirectSun => "Direct Sun",
        }
    }
}

/// Builds display conversions for raw sensor samples.
///
/// Stateless apart from its immutable config; one formatter can be shared
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct ReadingFormatter {
    config: FormatConfig,
}

impl ReadingFormatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// Renders raw channel values as `[index] value` pairs, or a single
    /// right-justified value for one-channel sensors.
    pub fn format_raw(&self, values: &[f32]) -> String {
        match values {
            [] => RAW_PLACEHOLDER.to_string(),
            [single] => fixed(*single, 10, 4),
            _ => {
                let index_width = (values.len() - 1).to_string().len().max(MIN_INDEX_WIDTH);
                let entries: Vec<String> = values
                    .iter()
                    .enumerate()
                    .map(|(index, value)| format!("[{:0index_width$}] {}", index, fixed(*value, 10, 4)))
                    .collect();

                entries
                    .chunks(self.config.raw_entries_per_line.max(1))
                    .map(|line| line.join(&self.config.raw_separator))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
    }

    /// Normalized RGB, HSV, XYZ and LAB entries, plus Clear when a fourth
    /// channel is present. Fewer than three channels yields nothing.
    pub fn build_color_conversions(&self, profile: &SensorProfile, raw: &[f32]) -> ConversionResult {
        if raw.len() < 3 {
            debug!(channels = raw.len(), "Color sample too short, skipping conversions");
            return Vec::new();
        }
        if !profile.is_calibrated() {
            debug!(max_range = profile.max_range, "Uncalibrated color sensor, skipping normalization");
        }

        let rgb = normalize(raw, profile.max_range);
        let hsv = rgb.to_hsv();
        let xyz = rgb.to_xyz();
        let lab = xyz.to_lab();

        let mut conversions = vec![
            ConvertedValue::new("Normalized RGB", render_rgb(&rgb), ConversionCategory::Linear),
            ConvertedValue::new("HSV", render_hsv(&hsv), ConversionCategory::ColorSpace),
            ConvertedValue::new("XYZ", render_xyz(&xyz), ConversionCategory::ColorSpace),
            ConvertedValue::new("LAB", render_lab(&lab), ConversionCategory::ColorSpace),
        ];

        if let Some(clear) = raw.get(3) {
            conversions.push(ConvertedValue::new(
                "Clear Channel",
                fixed(*clear, 10, 4),
                ConversionCategory::Linear,
            ));
        }

        conversions
    }

    /// Photometric entries for an illuminance sample in lux.
    pub fn build_light_conversions(&self, raw: &[f32]) -> ConversionResult {
        let Some(&lux) = raw.first() else {
            debug!("Empty light sample, skipping conversions");
            return Vec::new();
        };

        let foot_candles = lux / LUX_PER_FOOT_CANDLE;
        let nits = lux / PI;
        let ev = self.exposure_value(lux);

        let ev_text = if ev.is_finite() {
            with_unit(ev, EV_UNIT, 10, 8, 2)
        } else {
            glyph_with_unit(NEGATIVE_INFINITY_GLYPH, EV_UNIT, 10, 8)
        };

        vec![
            ConvertedValue::new("Illuminance", with_unit(lux, "lux", 6, 10, 2), ConversionCategory::Linear),
            ConvertedValue::new("Foot-candle", with_unit(foot_candles, "fc", 6, 10, 2), ConversionCategory::Linear),
            ConvertedValue::new("Luminance", with_unit(nits, "nits", 6, 10, 2), ConversionCategory::Linear),
            ConvertedValue::new("Exposure Value", ev_text, ConversionCategory::NonLinear),
            ConvertedValue::new("Scene", Scene::from_lux(lux).label(), ConversionCategory::NonLinear),
        ]
    }

    /// `log2(lux * K)`, or negative infinity when there is no light.
    pub fn exposure_value(&self, lux: f32) -> f32 {
        if lux > 0.0 {
            f64::from(lux * self.config.exposure_calibration).log2() as f32
        } else {
            f32::NEG_INFINITY
        }
    }

    /// Raw entry followed by the conversions for the profile's sensor kind.
    pub fn assemble(&self, profile: &SensorProfile, raw: &[f32]) -> ConversionResult {
        let mut converted = vec![ConvertedValue::new(
            "Raw",
            self.format_raw(raw),
            ConversionCategory::Raw,
        )];

        match profile.kind {
            SensorKind::Color => converted.extend(self.build_color_conversions(profile, raw)),
            SensorKind::Light => converted.extend(self.build_light_conversions(raw)),
            SensorKind::Unknown => {}
        }

        trace!(kind = %profile.kind, entries = converted.len(), "Assembled reading");
        converted
    }

    pub fn read(&self, profile: &SensorProfile, timestamp: i64, accuracy: i32, raw: &[f32]) -> SensorReading {
        SensorReading {
            profile: profile.clone(),
            timestamp,
            accuracy,
            raw_values: raw.to_vec(),
            converted_values: self.assemble(profile, raw),
        }
    }
}

fn render_rgb(rgb: &NormalizedRgb) -> String {
    format!(
        "R {}\nG {}\nB {}",
        fixed(rgb.r, 8, 4),
        fixed(rgb.g, 8, 4),
        fixed(rgb.b, 8, 4)
    )
}

fn render_hsv(hsv: &Hsv) -> String {
    format!(
        "H {}°\nS {}\nV {}",
        fixed(hsv.h, 7, 1),
        fixed(hsv.s, 8, 3),
        fixed(hsv.v, 8, 3)
    )
}

fn render_xyz(xyz: &Xyz) -> String {
    format!(
        "X {}\nY {}\nZ {}",
        fixed(xyz.x, 9, 4),
        fixed(xyz.y, 9, 4),
        fixed(xyz.z, 9, 4)
    )
}

fn render_lab(lab: &Lab) -> String {
    format!(
        "L {}\na {}\nb {}",
        fixed(lab.l, 8, 2),
        fixed(lab.a, 8, 2),
        fixed(lab.b, 8, 2)
    )
}

/// Formats raw values with the default layout.
pub fn format_raw(values: &[f32]) -> String {
    ReadingFormatter::default().format_raw(values)
}

pub fn build_color_conversions(profile: &SensorProfile, raw: &[f32]) -> ConversionResult {
    ReadingFormatter::default().build_color_conversions(profile, raw)
}

pub fn build_light_conversions(raw: &[f32]) -> ConversionResult {
    ReadingFormatter::default().build_light_conversions(raw)
}

/// Single entry point for one incoming sample, using the default layout.
pub fn assemble_reading(profile: &SensorProfile, raw: &[f32]) -> ConversionResult {
    ReadingFormatter::default().assemble(profile, raw)
}
