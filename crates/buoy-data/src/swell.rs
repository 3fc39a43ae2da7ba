//! Swell components and compass directions.

use serde::{Deserialize, Serialize};

use crate::units::{convert_height, UnitSystem};

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// A single wave train: height, period and direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Swell {
    pub wave_height: f64,

    /// Period in seconds.
    pub period: f64,

    /// Direction the waves come from, degrees true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<f64>,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub compass_direction: String,

    pub units: UnitSystem,
}

impl Swell {
    /// Create a swell with a direction in degrees.
    pub fn new(wave_height: f64, period: f64, direction: Option<f64>, units: UnitSystem) -> Self {
        let compass_direction = direction.map(degrees_to_compass).unwrap_or_default().to_string();
        Self {
            wave_height,
            period,
            direction,
            compass_direction,
            units,
        }
    }

    /// Create a swell from a compass point such as `SSE`.
    pub fn from_compass(wave_height: f64, period: f64, compass: &str, units: UnitSystem) -> Self {
        Self {
            wave_height,
            period,
            direction: compass_to_degrees(compass),
            compass_direction: compass.to_string(),
            units,
        }
    }

    /// Convert the wave height into another unit system.
    pub fn change_units(&mut self, units: UnitSystem) {
        self.wave_height = convert_height(self.wave_height, self.units, units);
        self.units = units;
    }
}

/// Map a bearing in degrees onto a 16-point compass name.
pub fn degrees_to_compass(degrees: f64) -> &'static str {
    let normalized = degrees.rem_euclid(360.0);
    let index = ((normalized + 11.25) / 22.5) as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[index]
}

/// Map a 16-point compass name onto the bearing at its centre.
pub fn compass_to_degrees(compass: &str) -> Option<f64> {
    let upper = compass.trim().to_uppercase();
    COMPASS_POINTS
        .iter()
        .position(|p| *p == upper)
        .map(|i| i as f64 * 22.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_to_compass() {
        assert_eq!(degrees_to_compass(0.0), "N");
        assert_eq!(degrees_to_compass(359.0), "N");
        assert_eq!(degrees_to_compass(160.0), "SSE");
        assert_eq!(degrees_to_compass(225.0), "SW");
        assert_eq!(degrees_to_compass(-90.0), "W");
    }

    #[test]
    fn test_compass_to_degrees() {
        assert_eq!(compass_to_degrees("SSE"), Some(157.5));
        assert_eq!(compass_to_degrees("nw"), Some(315.0));
        assert_eq!(compass_to_degrees("N/A"), None);
    }

    #[test]
    fn test_change_units_round_trip_height() {
        let mut swell = Swell::new(1.0, 10.0, Some(180.0), UnitSystem::Metric);
        swell.change_units(UnitSystem::English);
        assert!((swell.wave_height - 3.28084).abs() < 1e-6);
        assert_eq!(swell.units, UnitSystem::English);

        // Changing to the current system is a no-op
        swell.change_units(UnitSystem::English);
        assert!((swell.wave_height - 3.28084).abs() < 1e-6);
    }
}
