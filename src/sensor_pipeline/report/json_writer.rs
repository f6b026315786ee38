use std::io::Write;
use tracing::debug;
use crate::sensor_pipeline::common::error::{PipelineError, Result};
use crate::sensor_pipeline::reading::types::SensorReading;
use crate::sensor_pipeline::report::writer::ReadingWriter;

/// Pretty-printed JSON array of readings.
///
/// Non-finite raw values are written as `null`; the text sample reader never
/// produces them.
pub struct JsonWriter;

impl ReadingWriter for JsonWriter {
    fn write_readings(&self, readings: &[SensorReading], output: &mut dyn Write) -> Result<()> {
        debug!("Encoding {} readings as JSON", readings.len());

        serde_json::to_writer_pretty(&mut *output, readings)
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?;
        writeln!(output)?;

        output.flush()?;
        Ok(())
    }
}
