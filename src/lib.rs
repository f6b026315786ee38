//! # sensecolor
//!
//! Live conversions for ambient-light and color sensor samples: normalized
//! RGB, HSV, CIE XYZ and L*a*b* for tristimulus sensors, and foot-candles,
//! luminance, exposure value and a scene label for illuminance sensors.
//!
//! ```
//! use sensecolor::sensor_pipeline::{SensorKind, SensorProfile, assemble_reading};
//!
//! let profile = SensorProfile::new(SensorKind::Light, 40000.0);
//! let reading = assemble_reading(&profile, &[5.0]);
//! assert_eq!(reading.last().unwrap().text, "Night");
//! ```

pub mod logger;
pub mod sensor_pipeline;
