use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::sensor_pipeline::{
    common::error::{PipelineError, Result},
    reading::{FormatConfig, ReadingFormatter, SensorReading},
    report::{JsonWriter, ReadingWriter, TableWriter},
    samples::{Sample, SampleReader, TextSampleReader},
};

pub struct SampleReportPipeline<R: SampleReader, W: ReadingWriter> {
    reader: R,
    writer: W,
    formatter: ReadingFormatter,
}

impl SampleReportPipeline<TextSampleReader, TableWriter> {
    pub fn new(config: FormatConfig) -> Self {
        Self {
            reader: TextSampleReader,
            writer: TableWriter,
            formatter: ReadingFormatter::new(config),
        }
    }
}

impl SampleReportPipeline<TextSampleReader, JsonWriter> {
    pub fn new_json(config: FormatConfig) -> Self {
        Self {
            reader: TextSampleReader,
            writer: JsonWriter,
            formatter: ReadingFormatter::new(config),
        }
    }
}

impl<R: SampleReader, W: ReadingWriter> SampleReportPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: FormatConfig) -> Self {
        Self {
            reader,
            writer,
            formatter: ReadingFormatter::new(config),
        }
    }

    /// Assembles one reading per sample, in input order.
    pub fn process(&self, samples: &[Sample]) -> Vec<SensorReading> {
        samples
            .iter()
            .map(|sample| {
                self.formatter
                    .read(&sample.profile, sample.timestamp, sample.accuracy, &sample.values)
            })
            .collect()
    }

    /// Parses a sample log and writes the report. Returns the number of
    /// readings written.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<usize> {
        info!("Starting sample report conversion");

        let samples = {
            let _span = tracing::info_span!("read_samples").entered();
            self.reader.read_samples(input_data)?
        };

        let readings = {
            let _span = tracing::info_span!("assemble_readings", samples = samples.len()).entered();
            self.process(&samples)
        };

        {
            let _span = tracing::info_span!("write_report").entered();
            self.writer.write_readings(&readings, output)?;
        }

        info!(readings = readings.len(), "Conversion complete");
        Ok(readings.len())
    }

    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<usize> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                PipelineError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                PipelineError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?
        };

        self.convert(&input_data, &mut output_file)
    }

    pub fn config(&self) -> &FormatConfig {
        self.formatter.config()
    }

    pub fn set_config(&mut self, config: FormatConfig) {
        self.formatter = ReadingFormatter::new(config);
    }
}
