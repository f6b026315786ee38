//! Reading formatter configuration types

use std::path::Path;

use serde::Deserialize;

use crate::sensor_pipeline::common::error::{PipelineError, Result};

/// Configuration for turning samples into display text
///
/// The defaults reproduce the reference layout exactly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// How many `[index] value` entries share one line of the Raw entry
    pub raw_entries_per_line: usize,
    /// Separator between entries on one Raw line
    pub raw_separator: String,
    /// Calibration constant in `EV = log2(lux * K)`; 8 gives EV at ISO 100
    pub exposure_calibration: f32,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            raw_entries_per_line: 2,
            raw_separator: "    ".to_string(),
            exposure_calibration: 8.0,
        }
    }
}

impl FormatConfig {
    pub fn builder() -> FormatConfigBuilder {
        FormatConfigBuilder::default()
    }

    /// Loads a config from JSON. Missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::InputReadError(format!("{}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: FormatConfig = serde_json::from_str(content)
            .map_err(|e| PipelineError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.exposure_calibration.is_finite() || self.exposure_calibration <= 0.0 {
            return Err(PipelineError::ConfigError(format!(
                "exposure_calibration must be positive, got {}",
                self.exposure_calibration
            )));
        }
        Ok(())
    }
}

/// Builder for FormatConfig
#[derive(Default)]
pub struct FormatConfigBuilder {
    raw_entries_per_line: Option<usize>,
    raw_separator: Option<String>,
    exposure_calibration: Option<f32>,
}

impl FormatConfigBuilder {
    pub fn raw_entries_per_line(mut self, entries: usize) -> Self {
        self.raw_entries_per_line = Some(entries);
        self
    }

    pub fn raw_separator(mut self, separator: impl Into<String>) -> Self {
        self.raw_separator = Some(separator.into());
        self
    }

    pub fn exposure_calibration(mut self, calibration: f32) -> Self {
        self.exposure_calibration = Some(calibration);
        self
    }

    pub fn build(self) -> Result<FormatConfig> {
        let default = FormatConfig::default();
        let config = FormatConfig {
            raw_entries_per_line: self.raw_entries_per_line.unwrap_or(default.raw_entries_per_line),
            raw_separator: self.raw_separator.unwrap_or(default.raw_separator),
            exposure_calibration: self.exposure_calibration.unwrap_or(default.exposure_calibration),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_builder() {
        let config = FormatConfig::builder()
            .raw_entries_per_line(4)
            .raw_separator(" | ")
            .exposure_calibration(12.5)
            .build()
            .unwrap();

        assert_eq!(config.raw_entries_per_line, 4);
        assert_eq!(config.raw_separator, " | ");
        assert_eq!(config.exposure_calibration, 12.5);
    }

    #[test]
    fn test_builder_falls_back_to_defaults() {
        let config = FormatConfig::builder().raw_entries_per_line(3).build().unwrap();
        assert_eq!(config.raw_entries_per_line, 3);
        assert_eq!(config.raw_separator, FormatConfig::default().raw_separator);
        assert_eq!(config.exposure_calibration, 8.0);
    }

    #[test]
    fn test_builder_rejects_invalid_calibration() {
        for calibration in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let result = FormatConfig::builder().exposure_calibration(calibration).build();
            assert!(
                matches!(result, Err(PipelineError::ConfigError(_))),
                "calibration {} accepted",
                calibration
            );
        }
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = FormatConfig::from_json_str(r#"{ "raw_entries_per_line": 1 }"#).unwrap();
        assert_eq!(config.raw_entries_per_line, 1);
        assert_eq!(config.raw_separator, "    ");
        assert_eq!(config.exposure_calibration, 8.0);
    }

    #[test]
    fn test_invalid_calibration_rejected() {
        let result = FormatConfig::from_json_str(r#"{ "exposure_calibration": 0.0 }"#);
        assert!(matches!(result, Err(PipelineError::ConfigError(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = FormatConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(PipelineError::ConfigError(_))));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "raw_separator": "  ", "exposure_calibration": 12.5 }}"#).unwrap();

        let config = FormatConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.raw_separator, "  ");
        assert_eq!(config.exposure_calibration, 12.5);
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let result = FormatConfig::from_json_file("/nonexistent/sensecolor.json");
        assert!(matches!(result, Err(PipelineError::InputReadError(_))));
    }
}
