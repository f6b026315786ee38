//! Reading formatting module
//!
//! Turns one raw sensor sample plus its sensor profile into an ordered list
//! of named, fixed-width conversion results ready for tabular display.

pub mod config;
pub mod format;
mod formatter;
pub mod types;

pub use config::{FormatConfig, FormatConfigBuilder};
pub use format::{fixed, with_unit};
pub use formatter::{
    ReadingFormatter, Scene, assemble_reading, build_color_conversions, build_light_conversions,
    format_raw,
};
pub use types::{
    ConversionCategory, ConversionResult, ConvertedValue, SensorKind, SensorProfile, SensorReading,
};
