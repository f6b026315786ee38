//! Line-oriented text sample log reader.
//!
//! Each non-blank line that does not start with `#` holds one sample:
//!
//! ```text
//! <kind> <max_range> <timestamp> <v0> [v1 ...]
//! ```
//!
//! `kind` is `color`, `light` or `unknown` (any case). Fields are separated
//! by whitespace. Channel values must be finite.

use tracing::debug;

use crate::sensor_pipeline::common::error::{PipelineError, Result};
use crate::sensor_pipeline::reading::types::{SensorKind, SensorProfile};
use crate::sensor_pipeline::samples::reader::SampleReader;
use crate::sensor_pipeline::samples::types::Sample;

const COMMENT_PREFIX: char = '#';

pub struct TextSampleReader;

fn parse_error(line: usize, message: impl Into<String>) -> PipelineError {
    PipelineError::ParseError {
        line,
        message: message.into(),
    }
}

impl TextSampleReader {
    fn parse_line(line_number: usize, line: &str) -> Result<Sample> {
        let mut fields = line.split_whitespace();

        let kind: SensorKind = fields
            .next()
            .ok_or_else(|| parse_error(line_number, "missing sensor kind"))?
            .parse()
            .map_err(|e: PipelineError| parse_error(line_number, e.to_string()))?;

        let max_range = fields
            .next()
            .ok_or_else(|| parse_error(line_number, "missing max range"))?;
        let max_range: f32 = max_range
            .parse()
            .map_err(|_| parse_error(line_number, format!("invalid max range '{}'", max_range)))?;

        let timestamp = fields
            .next()
            .ok_or_else(|| parse_error(line_number, "missing timestamp"))?;
        let timestamp: i64 = timestamp
            .parse()
            .map_err(|_| parse_error(line_number, format!("invalid timestamp '{}'", timestamp)))?;

        let values = fields
            .map(|field| match field.parse::<f32>() {
                Ok(value) if value.is_finite() => Ok(value),
                _ => Err(parse_error(line_number, format!("invalid channel value '{}'", field))),
            })
            .collect::<Result<Vec<f32>>>()?;

        if values.is_empty() {
            return Err(parse_error(line_number, "expected at least one channel value"));
        }

        Ok(Sample {
            profile: SensorProfile::new(kind, max_range),
            timestamp,
            accuracy: 0,
            values,
        })
    }
}

impl SampleReader for TextSampleReader {
    fn read_samples(&self, data: &[u8]) -> Result<Vec<Sample>> {
        debug!("Parsing sample log, {} bytes", data.len());

        let text = std::str::from_utf8(data)
            .map_err(|e| PipelineError::InputReadError(format!("sample log is not UTF-8: {}", e)))?;

        let samples = text
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with(COMMENT_PREFIX))
            .map(|(line_number, line)| Self::parse_line(line_number, line))
            .collect::<Result<Vec<Sample>>>()?;

        debug!("Parsed {} samples", samples.len());
        Ok(samples)
    }
}
