//! Sensor metadata module
//!
//! Classifies platform sensor descriptors into [`SensorKind`]s and orders
//! them for display.
//!
//! [`SensorKind`]: crate::sensor_pipeline::reading::SensorKind

mod classify;

pub use classify::{SensorDescriptor, TYPE_LIGHT, classify, discoverable};
