//! Active station directory (`activestations.xml`).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::buoy::Buoy;
use crate::error::{BuoyDataError, BuoyDataResult};
use crate::location::Location;

/// One `<station>` entry from the directory.
///
/// XML attributes are read by their NDBC names and written back out with
/// descriptive JSON names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    #[serde(rename(deserialize = "@id", serialize = "StationID"))]
    pub station_id: String,

    #[serde(rename(deserialize = "@lat", serialize = "Latitude"))]
    pub latitude: f64,

    #[serde(rename(deserialize = "@lon", serialize = "Longitude"))]
    pub longitude: f64,

    #[serde(
        rename(deserialize = "@elev", serialize = "Elevation"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub elevation: Option<f64>,

    #[serde(rename(deserialize = "@name", serialize = "Name"), default)]
    pub name: String,

    #[serde(rename(deserialize = "@owner", serialize = "Owner"), default)]
    pub owner: String,

    #[serde(rename(deserialize = "@pgm", serialize = "Program"), default)]
    pub program: String,

    #[serde(rename(deserialize = "@type", serialize = "BuoyType"), default)]
    pub station_type: String,

    #[serde(rename(deserialize = "@met", serialize = "Meteorological"), default)]
    pub met: String,

    #[serde(rename(deserialize = "@currents", serialize = "Currents"), default)]
    pub currents: String,

    #[serde(rename(deserialize = "@waterquality", serialize = "WaterQuality"), default)]
    pub water_quality: String,

    #[serde(rename(deserialize = "@dart", serialize = "Dart"), default)]
    pub dart: String,
}

impl Station {
    /// Position of the station.
    pub fn location(&self) -> Location {
        Location::new(self.latitude, self.longitude)
            .with_elevation(self.elevation.unwrap_or(0.0))
            .with_name(self.name.clone())
    }

    /// Moored buoys are the platforms that publish wave spectra.
    pub fn is_wave_buoy(&self) -> bool {
        self.station_type.eq_ignore_ascii_case("buoy")
    }

    /// Build a buoy handle for fetching this station's readings.
    pub fn to_buoy(&self) -> Buoy {
        Buoy::new(self.station_id.clone()).with_location(self.location())
    }
}

/// The full station directory.
///
/// Every entry in `activestations.xml` is an active station; the directory
/// carries no separate activity flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationList {
    #[serde(
        rename(deserialize = "@count", serialize = "StationCount"),
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub count: Option<usize>,

    #[serde(rename(deserialize = "station", serialize = "Stations"), default)]
    pub stations: Vec<Station>,
}

impl StationList {
    /// Decode the directory XML.
    pub fn from_xml(xml: &str) -> BuoyDataResult<Self> {
        let mut list: StationList = quick_xml::de::from_str(xml)
            .map_err(|e| BuoyDataError::InvalidStationList(e.to_string()))?;

        list.count = Some(list.stations.len());
        debug!(stations = list.stations.len(), "Decoded station directory");
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Find a station by ID (case-insensitive).
    pub fn find_station(&self, station_id: &str) -> Option<&Station> {
        self.stations
            .iter()
            .find(|s| s.station_id.eq_ignore_ascii_case(station_id))
    }

    /// The wave buoy nearest to a location.
    ///
    /// Ties go to the station listed first.
    pub fn closest_active_wave_station(&self, location: &Location) -> Option<&Station> {
        self.stations
            .iter()
            .filter(|s| s.is_wave_buoy())
            .map(|s| (s, s.location().distance_to(location)))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(s, _)| s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<stations created="2016-05-23T10:50:01UTC" count="3">
  <station id="44097" lat="40.967" lon="-71.126" elev="0" name="Block Island, RI" owner="CDIP" pgm="IOOS Partners" type="buoy" met="n" currents="n" waterquality="n" dart="n"/>
  <station id="BZBM3" lat="41.524" lon="-70.671" name="Woods Hole, MA" owner="NOS" pgm="NOS/CO-OPS" type="fixed" met="y" currents="n" waterquality="n" dart="n"/>
  <station id="44013" lat="42.346" lon="-70.651" elev="0" name="Boston 16 NM East of Boston, MA" owner="NDBC" pgm="NDBC Meteorological/Ocean" type="buoy" met="y" currents="n" waterquality="n" dart="n"/>
</stations>"#;

    #[test]
    fn test_from_xml() {
        let list = StationList::from_xml(XML).unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list.count, Some(3));

        let first = &list.stations[0];
        assert_eq!(first.station_id, "44097");
        assert!((first.latitude - 40.967).abs() < 1e-9);
        assert_eq!(first.elevation, Some(0.0));
        assert!(first.is_wave_buoy());
        assert_eq!(first.met, "n");

        // Missing elev attribute
        assert_eq!(list.stations[1].elevation, None);
    }

    #[test]
    fn test_find_station_case_insensitive() {
        let list = StationList::from_xml(XML).unwrap();
        assert_eq!(list.find_station("bzbm3").unwrap().name, "Woods Hole, MA");
        assert!(list.find_station("99999").is_none());
    }

    #[test]
    fn test_closest_skips_fixed_platforms() {
        let list = StationList::from_xml(XML).unwrap();
        // Right on top of the fixed station BZBM3
        let near_woods_hole = Location::new(41.52, -70.67);
        let closest = list.closest_active_wave_station(&near_woods_hole).unwrap();
        assert_ne!(closest.station_id, "BZBM3");
    }

    #[test]
    fn test_closest_none_without_buoys() {
        let list = StationList::default();
        assert!(list.closest_active_wave_station(&Location::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_invalid_xml() {
        let err = StationList::from_xml("<stations><station id=").unwrap_err();
        assert!(matches!(err, BuoyDataError::InvalidStationList(_)));
    }

    #[test]
    fn test_json_names() {
        let list = StationList::from_xml(XML).unwrap();
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["StationCount"], 3);
        assert_eq!(json["Stations"][0]["StationID"], "44097");
        assert_eq!(json["Stations"][0]["BuoyType"], "buoy");
    }
}
