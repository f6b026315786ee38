//! Pipeline conversions module
//!
//! This module contains the orchestration from captured samples to a
//! rendered report.

mod sample_report;


pub use sample_report::SampleReportPipeline;
