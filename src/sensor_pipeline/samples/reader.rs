use crate::sensor_pipeline::common::error::Result;
use crate::sensor_pipeline::samples::types::Sample;

pub trait SampleReader {
    fn read_samples(&self, data: &[u8]) -> Result<Vec<Sample>>;
}
