use std::io::Write;
use crate::sensor_pipeline::common::error::Result;
use crate::sensor_pipeline::reading::types::SensorReading;

pub trait ReadingWriter {
    fn write_readings(&self, readings: &[SensorReading], output: &mut dyn Write) -> Result<()>;
}
