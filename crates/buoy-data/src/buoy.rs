//! A station's handle for fetching and holding parsed readings.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::BuoyDataResult;
use crate::formats::{detailed, latest, spectral, standard};
use crate::location::Location;
use crate::reading::BuoyDataItem;
use crate::units::UnitSystem;

/// The per-station documents NDBC publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReadingKind {
    /// `latest_obs/{id}.txt`
    Latest,
    /// `realtime2/{ID}.txt`
    StandardMet,
    /// `realtime2/{ID}.spec`
    DetailedWave,
    /// `realtime2/{ID}.swdir`
    DirectionalSpectra,
    /// `realtime2/{ID}.data_spec`
    EnergySpectra,
}

impl ReadingKind {
    /// Short name used in logs and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingKind::Latest => "latest",
            ReadingKind::StandardMet => "standard",
            ReadingKind::DetailedWave => "detailed_wave",
            ReadingKind::DirectionalSpectra => "directional_spectra",
            ReadingKind::EnergySpectra => "energy_spectra",
        }
    }

    /// Document URL for a station under a data base URL.
    pub fn url(&self, base_url: &str, station_id: &str) -> String {
        let base = base_url.trim_end_matches('/');
        match self {
            ReadingKind::Latest => {
                format!("{}/latest_obs/{}.txt", base, station_id.to_lowercase())
            }
            _ => format!(
                "{}/realtime2/{}.{}",
                base,
                station_id.to_uppercase(),
                self.extension()
            ),
        }
    }

    fn extension(&self) -> &'static str {
        match self {
            ReadingKind::Latest | ReadingKind::StandardMet => "txt",
            ReadingKind::DetailedWave => "spec",
            ReadingKind::DirectionalSpectra => "swdir",
            ReadingKind::EnergySpectra => "data_spec",
        }
    }
}

impl std::fmt::Display for ReadingKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A station plus whatever readings have been parsed for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Buoy {
    #[serde(rename = "StationID")]
    pub station_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Parsed records, newest first.
    #[serde(default)]
    pub data: Vec<BuoyDataItem>,
}

impl Buoy {
    pub fn new(station_id: impl Into<String>) -> Self {
        Self {
            station_id: station_id.into(),
            location: None,
            data: Vec::new(),
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn latest_reading_url(&self, base_url: &str) -> String {
        ReadingKind::Latest.url(base_url, &self.station_id)
    }

    pub fn standard_data_url(&self, base_url: &str) -> String {
        ReadingKind::StandardMet.url(base_url, &self.station_id)
    }

    pub fn detailed_wave_data_url(&self, base_url: &str) -> String {
        ReadingKind::DetailedWave.url(base_url, &self.station_id)
    }

    pub fn directional_spectra_url(&self, base_url: &str) -> String {
        ReadingKind::DirectionalSpectra.url(base_url, &self.station_id)
    }

    pub fn energy_spectra_url(&self, base_url: &str) -> String {
        ReadingKind::EnergySpectra.url(base_url, &self.station_id)
    }

    /// Replace the data with the single latest observation.
    ///
    /// The record is in English units. The observation's coordinates fill
    /// in the location when the buoy has none yet.
    pub fn parse_latest_reading(&mut self, text: &str) -> BuoyDataResult<()> {
        let observation = latest::parse(text)?;
        if self.location.is_none() {
            self.location = observation.location;
        }
        self.data = vec![observation.item];
        Ok(())
    }

    /// Replace the data with up to `count` standard meteorological records.
    pub fn parse_standard_data(&mut self, text: &str, count: usize) -> BuoyDataResult<()> {
        self.data = standard::parse(text, count)?;
        debug!(station = %self.station_id, records = self.data.len(), "Parsed standard data");
        Ok(())
    }

    /// Replace the data with up to `count` detailed wave records.
    pub fn parse_detailed_wave_data(&mut self, text: &str, count: usize) -> BuoyDataResult<()> {
        self.data = detailed::parse(text, count)?;
        debug!(station = %self.station_id, records = self.data.len(), "Parsed detailed wave data");
        Ok(())
    }

    /// Replace the data with up to `count` spectral wave records.
    ///
    /// `alpha` is the mean direction (`.swdir`) text and `energy` the energy
    /// density (`.data_spec`) text.
    pub fn parse_wave_spectra_data(
        &mut self,
        alpha: &str,
        energy: &str,
        count: usize,
    ) -> BuoyDataResult<()> {
        let energy_rows = spectral::parse_energy_rows(energy, count)?;
        let direction_rows = spectral::parse_direction_rows(alpha, count)?;
        self.data = spectral::combine(&energy_rows, &direction_rows);
        debug!(station = %self.station_id, records = self.data.len(), "Parsed wave spectra");
        Ok(())
    }

    /// The record nearest in time to `date`, with the absolute difference.
    ///
    /// Ties go to the newer record.
    pub fn find_conditions_for_date(&self, date: DateTime<Utc>) -> Option<(BuoyDataItem, Duration)> {
        self.data
            .iter()
            .map(|item| {
                let diff = item.date - date;
                let diff = if diff < Duration::zero() { -diff } else { diff };
                (item, diff)
            })
            .min_by_key(|(_, diff)| *diff)
            .map(|(item, diff)| (item.clone(), diff))
    }

    /// Convert every record to another unit system.
    pub fn change_units(&mut self, units: UnitSystem) {
        for item in &mut self.data {
            item.change_units(units);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_urls() {
        let buoy = Buoy::new("bzbm3");
        let base = "https://www.ndbc.noaa.gov/data/";
        assert_eq!(
            buoy.latest_reading_url(base),
            "https://www.ndbc.noaa.gov/data/latest_obs/bzbm3.txt"
        );
        assert_eq!(
            buoy.standard_data_url(base),
            "https://www.ndbc.noaa.gov/data/realtime2/BZBM3.txt"
        );
        assert_eq!(
            buoy.detailed_wave_data_url(base),
            "https://www.ndbc.noaa.gov/data/realtime2/BZBM3.spec"
        );
        assert_eq!(
            buoy.directional_spectra_url(base),
            "https://www.ndbc.noaa.gov/data/realtime2/BZBM3.swdir"
        );
        assert_eq!(
            buoy.energy_spectra_url(base),
            "https://www.ndbc.noaa.gov/data/realtime2/BZBM3.data_spec"
        );
    }

    #[test]
    fn test_find_conditions_for_date() {
        let mut buoy = Buoy::new("44097");
        for hour in [12, 11, 10] {
            buoy.data.push(BuoyDataItem::new(
                Utc.with_ymd_and_hms(2016, 5, 23, hour, 0, 0).unwrap(),
                UnitSystem::Metric,
            ));
        }

        let target = Utc.with_ymd_and_hms(2016, 5, 23, 10, 20, 0).unwrap();
        let (item, diff) = buoy.find_conditions_for_date(target).unwrap();
        assert_eq!(item.date, Utc.with_ymd_and_hms(2016, 5, 23, 10, 0, 0).unwrap());
        assert_eq!(diff, Duration::minutes(20));

        // Exactly between two records picks the newer one
        let midway = Utc.with_ymd_and_hms(2016, 5, 23, 11, 30, 0).unwrap();
        let (item, diff) = buoy.find_conditions_for_date(midway).unwrap();
        assert_eq!(item.date, Utc.with_ymd_and_hms(2016, 5, 23, 12, 0, 0).unwrap());
        assert_eq!(diff, Duration::minutes(30));
    }

    #[test]
    fn test_find_conditions_empty() {
        let buoy = Buoy::new("44097");
        assert!(buoy.find_conditions_for_date(Utc::now()).is_none());
    }

    #[test]
    fn test_failed_parse_keeps_previous_data() {
        let mut buoy = Buoy::new("44097");
        buoy.data.push(BuoyDataItem::new(Utc::now(), UnitSystem::Metric));
        assert!(buoy.parse_standard_data("not a data file", 1).is_err());
        assert_eq!(buoy.data.len(), 1);
    }

    #[test]
    fn test_reading_kind_display() {
        assert_eq!(ReadingKind::EnergySpectra.to_string(), "energy_spectra");
    }
}
