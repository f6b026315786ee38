use tracing::debug;

use crate::sensor_pipeline::reading::types::{SensorKind, SensorProfile};

/// Platform type code of the ambient light sensor.
pub const TYPE_LIGHT: i32 = 5;

/// What the platform reports about one hardware sensor
#[derive(Debug, Clone, Copy)]
pub struct SensorDescriptor<'a> {
    pub type_code: i32,
    pub string_type: &'a str,
    pub name: &'a str,
    /// Type code of the dedicated color sensor, when the platform defines one
    pub color_type_code: Option<i32>,
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Infers the sensor kind from its type code and naming.
///
/// Light matches are checked before color matches.
pub fn classify(descriptor: &SensorDescriptor<'_>) -> SensorKind {
    if descriptor.type_code == TYPE_LIGHT || contains_ignore_case(descriptor.string_type, "light") {
        return SensorKind::Light;
    }

    if descriptor.color_type_code == Some(descriptor.type_code) {
        return SensorKind::Color;
    }

    let named_color = ["color", "rgb"].iter().any(|needle| {
        contains_ignore_case(descriptor.string_type, needle) || contains_ignore_case(descriptor.name, needle)
    });

    if named_color {
        SensorKind::Color
    } else {
        SensorKind::Unknown
    }
}

/// Drops unclassified profiles and sorts the rest by kind, then
/// case-insensitive name and vendor.
pub fn discoverable(profiles: impl IntoIterator<Item = SensorProfile>) -> Vec<SensorProfile> {
    let mut found: Vec<SensorProfile> = profiles
        .into_iter()
        .filter(|profile| profile.kind != SensorKind::Unknown)
        .collect();

    if found.is_empty() {
        debug!("No light or color sensors among the supplied profiles");
    }

    found.sort_by_cached_key(|profile| {
        (profile.kind, profile.name.to_lowercase(), profile.vendor.to_lowercase())
    });
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor<'a>(type_code: i32, string_type: &'a str, name: &'a str) -> SensorDescriptor<'a> {
        SensorDescriptor {
            type_code,
            string_type,
            name,
            color_type_code: None,
        }
    }

    #[test]
    fn test_light_by_type_code() {
        assert_eq!(classify(&descriptor(TYPE_LIGHT, "", "ALS")), SensorKind::Light);
    }

    #[test]
    fn test_light_by_string_type() {
        let d = descriptor(65601, "vendor.sensor.Ambient_Light", "TCS3701");
        assert_eq!(classify(&d), SensorKind::Light);
    }

    #[test]
    fn test_light_wins_over_color() {
        let d = descriptor(65578, "com.vendor.light", "RGB light sensor");
        assert_eq!(classify(&d), SensorKind::Light);
    }

    #[test]
    fn test_color_by_platform_code() {
        let d = SensorDescriptor {
            color_type_code: Some(65578),
            ..descriptor(65578, "", "")
        };
        assert_eq!(classify(&d), SensorKind::Color);
    }

    #[test]
    fn test_color_by_name() {
        assert_eq!(classify(&descriptor(65579, "", "TCS3408 RGB")), SensorKind::Color);
        assert_eq!(classify(&descriptor(65580, "vendor.COLOR", "x")), SensorKind::Color);
    }

    #[test]
    fn test_unknown_otherwise() {
        assert_eq!(classify(&descriptor(8, "android.sensor.proximity", "Prox")), SensorKind::Unknown);
    }

    #[test]
    fn test_discoverable_sorts_and_filters() {
        let profiles = vec![
            SensorProfile::new(SensorKind::Light, 1.0).with_identity("beta", "b"),
            SensorProfile::new(SensorKind::Unknown, 1.0).with_identity("prox", "a"),
            SensorProfile::new(SensorKind::Light, 1.0).with_identity("Alpha", "z"),
            SensorProfile::new(SensorKind::Color, 1.0).with_identity("zeta", "a"),
            SensorProfile::new(SensorKind::Light, 1.0).with_identity("alpha", "A"),
        ];

        let ordered: Vec<(SensorKind, String, String)> = discoverable(profiles)
            .into_iter()
            .map(|p| (p.kind, p.name, p.vendor))
            .collect();

        assert_eq!(
            ordered,
            vec![
                (SensorKind::Color, "zeta".to_string(), "a".to_string()),
                (SensorKind::Light, "alpha".to_string(), "A".to_string()),
                (SensorKind::Light, "Alpha".to_string(), "z".to_string()),
                (SensorKind::Light, "beta".to_string(), "b".to_string()),
            ]
        );
    }

    #[test]
    fn test_discoverable_empty() {
        assert!(discoverable(Vec::new()).is_empty());
    }
}
