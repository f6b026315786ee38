//! Sample data types

use crate::sensor_pipeline::reading::types::SensorProfile;

/// One captured sensor event
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub profile: SensorProfile,
    /// Event timestamp in nanoseconds
    pub timestamp: i64,
    /// Platform accuracy status, 0 when not recorded
    pub accuracy: i32,
    /// Raw channel values as delivered by the sensor
    pub values: Vec<f32>,
}
