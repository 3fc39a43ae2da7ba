//! A single timestamped buoy observation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::spectra::WaveSpectra;
use crate::swell::Swell;
use crate::units::{convert_pressure, convert_speed, convert_temperature, UnitSystem};

/// Meteorological and wave conditions reported at one time.
///
/// Every measurement is optional: buoys report different subsets of
/// variables and routinely publish missing-value markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BuoyDataItem {
    pub date: DateTime<Utc>,

    pub units: UnitSystem,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_direction: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_compass_direction: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_speed: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind_gust: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wave_summary: Option<Swell>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub swell_components: Vec<Swell>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steepness: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_period: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mean_wave_direction: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<f64>,

    /// Three hour pressure change, in the record's pressure unit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_tendency: Option<f64>,

    /// Textual trend such as `falling`, from the latest observation feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_trend: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_temperature: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_temperature: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dewpoint_temperature: Option<f64>,

    /// Visibility in nautical miles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f64>,

    /// Water level in feet above MLLW.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tide: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wave_spectra: Option<WaveSpectra>,
}

impl BuoyDataItem {
    /// Create an empty record for a timestamp.
    pub fn new(date: DateTime<Utc>, units: UnitSystem) -> Self {
        Self {
            date,
            units,
            wind_direction: None,
            wind_compass_direction: None,
            wind_speed: None,
            wind_gust: None,
            wave_summary: None,
            swell_components: Vec::new(),
            steepness: None,
            average_period: None,
            mean_wave_direction: None,
            pressure: None,
            pressure_tendency: None,
            pressure_trend: None,
            air_temperature: None,
            water_temperature: None,
            dewpoint_temperature: None,
            visibility: None,
            tide: None,
            wave_spectra: None,
        }
    }

    /// Convert every unit-bearing value into another unit system.
    ///
    /// Spectral energies stay in m²/Hz.
    pub fn change_units(&mut self, units: UnitSystem) {
        let from = self.units;
        if from == units {
            return;
        }

        let speed = |v: Option<f64>| v.map(|v| convert_speed(v, from, units));
        let temperature = |v: Option<f64>| v.map(|v| convert_temperature(v, from, units));

        self.wind_speed = speed(self.wind_speed);
        self.wind_gust = speed(self.wind_gust);
        self.air_temperature = temperature(self.air_temperature);
        self.water_temperature = temperature(self.water_temperature);
        self.dewpoint_temperature = temperature(self.dewpoint_temperature);
        self.pressure = self.pressure.map(|v| convert_pressure(v, from, units));
        self.pressure_tendency = self
            .pressure_tendency
            .map(|v| convert_pressure(v, from, units));

        if let Some(summary) = self.wave_summary.as_mut() {
            summary.change_units(units);
        }
        for swell in &mut self.swell_components {
            swell.change_units(units);
        }

        self.units = units;
    }

    /// Whether the record carries any wave information.
    pub fn has_wave_data(&self) -> bool {
        self.wave_summary.is_some() || !self.swell_components.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> BuoyDataItem {
        let mut item = BuoyDataItem::new(
            Utc.with_ymd_and_hms(2016, 5, 23, 10, 26, 0).unwrap(),
            UnitSystem::English,
        );
        item.wind_speed = Some(10.0);
        item.water_temperature = Some(54.5);
        item.pressure = Some(30.05);
        item.wave_summary = Some(Swell::from_compass(3.0, 9.0, "SSE", UnitSystem::English));
        item.swell_components
            .push(Swell::from_compass(2.6, 9.1, "SSE", UnitSystem::English));
        item
    }

    #[test]
    fn test_change_units_to_metric() {
        let mut item = sample();
        item.change_units(UnitSystem::Metric);

        assert_eq!(item.units, UnitSystem::Metric);
        assert!((item.water_temperature.unwrap() - 12.5).abs() < 0.01);
        assert!((item.wind_speed.unwrap() - 5.144).abs() < 0.01);
        assert!((item.pressure.unwrap() - 1017.6).abs() < 0.1);
        assert!((item.wave_summary.as_ref().unwrap().wave_height - 0.914).abs() < 0.001);
        assert_eq!(item.swell_components[0].units, UnitSystem::Metric);
    }

    #[test]
    fn test_change_units_noop() {
        let mut item = sample();
        let before = item.clone();
        item.change_units(UnitSystem::English);
        assert_eq!(item, before);
    }

    #[test]
    fn test_missing_values_are_omitted_from_json() {
        let item = BuoyDataItem::new(
            Utc.with_ymd_and_hms(2016, 5, 23, 10, 0, 0).unwrap(),
            UnitSystem::Metric,
        );
        let json = serde_json::to_value(&item).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("Date"));
        assert!(obj.contains_key("Units"));
        assert!(!obj.contains_key("WindSpeed"));
        assert!(!obj.contains_key("SwellComponents"));
    }
}
