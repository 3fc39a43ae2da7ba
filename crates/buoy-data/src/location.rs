//! Geographic positions and great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean earth radius used for distance calculations.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the earth's surface.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Location {
    /// Latitude in decimal degrees, north positive.
    pub latitude: f64,

    /// Longitude in decimal degrees, east positive.
    pub longitude: f64,

    /// Elevation above sea level in metres.
    #[serde(default)]
    pub elevation: f64,

    /// Optional human-readable name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location_name: String,
}

impl Location {
    /// Create a location from latitude and longitude.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ..Default::default()
        }
    }

    /// Set the location name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.location_name = name.into();
        self
    }

    /// Set the elevation.
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// Great-circle (haversine) distance to another location in kilometres.
    pub fn distance_to(&self, other: &Location) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let dlat = lat2 - lat1;
        let dlon = (other.longitude - self.longitude).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Check that latitude and longitude are within their valid ranges.
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Parse a degrees-minutes-seconds string such as `40°58'1"` into decimal degrees.
///
/// Plain decimal values (`40.967`) are accepted as well.
pub fn parse_dms(value: &str) -> Option<f64> {
    let value = value.trim();
    if let Ok(decimal) = value.parse::<f64>() {
        return Some(decimal);
    }

    let mut parts = value
        .split(|c| c == '°' || c == '\'' || c == '"')
        .map(str::trim)
        .filter(|s| !s.is_empty());

    let degrees: f64 = parts.next()?.parse().ok()?;
    let minutes: f64 = parts.next().map(str::parse::<f64>).transpose().ok()?.unwrap_or(0.0);
    let seconds: f64 = parts.next().map(str::parse::<f64>).transpose().ok()?.unwrap_or(0.0);

    Some(degrees + minutes / 60.0 + seconds / 3600.0)
}

/// Parse a coordinate line like `40°58'1" N 71°7'36" W`.
pub fn parse_coordinate_line(line: &str) -> Option<Location> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 4 {
        return None;
    }

    let lat = parse_dms(tokens[0])?;
    let lon = parse_dms(tokens[2])?;

    let lat = match tokens[1] {
        "N" => lat,
        "S" => -lat,
        _ => return None,
    };
    let lon = match tokens[3] {
        "E" => lon,
        "W" => -lon,
        _ => return None,
    };

    Some(Location::new(lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_same_point() {
        let a = Location::new(40.0, -71.0);
        assert!(a.distance_to(&a).abs() < 1e-9);
    }

    #[test]
    fn test_distance_one_degree_latitude() {
        let a = Location::new(40.0, -71.0);
        let b = Location::new(41.0, -71.0);
        let d = a.distance_to(&b);
        // One degree of latitude is ~111.2 km
        assert!((d - 111.19).abs() < 0.5, "distance was {}", d);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Location::new(34.724, -72.317);
        let b = Location::new(42.346, -70.651);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-9);
    }

    #[test]
    fn test_parse_dms() {
        let v = parse_dms("40°58'1\"").unwrap();
        assert!((v - 40.9669).abs() < 1e-3);
        assert_eq!(parse_dms("12.5"), Some(12.5));
        assert_eq!(parse_dms("north"), None);
    }

    #[test]
    fn test_parse_coordinate_line() {
        let loc = parse_coordinate_line("40°58'1\" N 71°7'36\" W").unwrap();
        assert!((loc.latitude - 40.967).abs() < 1e-3);
        assert!((loc.longitude + 71.127).abs() < 1e-3);

        assert!(parse_coordinate_line("Station 44097").is_none());
    }

    #[test]
    fn test_validity() {
        assert!(Location::new(45.0, -120.0).is_valid());
        assert!(!Location::new(95.0, 0.0).is_valid());
        assert!(!Location::new(0.0, 200.0).is_valid());
    }
}
