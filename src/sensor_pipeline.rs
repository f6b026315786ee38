//! Sensor reading pipeline module
//!
//! Converts raw ambient-light and color sensor samples into human-readable
//! photometric and colorimetric values, with separate modules for the color
//! math, reading assembly, sample input and report output.

pub mod color;
pub mod common;
pub mod conversions;
pub mod reading;
pub mod report;
pub mod samples;
pub mod sensor;

pub use common::{
    PipelineError,
    Result,
};

pub use color::{
    Hsv,
    Lab,
    NormalizedRgb,
    Xyz,
};

pub use reading::{
    ConversionCategory,
    ConversionResult,
    ConvertedValue,
    FormatConfig,
    FormatConfigBuilder,
    ReadingFormatter,
    Scene,
    SensorKind,
    SensorProfile,
    SensorReading,
    assemble_reading,
};

pub use samples::{
    Sample,
    SampleReader,
    TextSampleReader,
};

pub use report::{
    JsonWriter,
    ReadingWriter,
    TableWriter,
};

pub use conversions::{
    SampleReportPipeline,
};
