//! Sample input module
//!
//! Reads captured sensor samples into [`Sample`]s for the reading pipeline.

mod reader;
mod text_reader;
pub mod types;

pub use reader::SampleReader;
pub use text_reader::TextSampleReader;
pub use types::Sample;
