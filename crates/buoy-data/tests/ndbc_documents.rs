//! Parse captured NDBC documents end to end.

use buoy_data::{Buoy, Location, StationList, UnitSystem};
use chrono::{Duration, TimeZone, Utc};
use test_utils::{assert_approx_eq, fixtures};

fn stations() -> StationList {
    StationList::from_xml(fixtures::ACTIVE_STATIONS_XML).unwrap()
}

#[test]
fn test_closest_station_to_fixture_points() {
    let list = stations();

    let (lat, lon) = fixtures::BLOCK_ISLAND;
    let closest = list
        .closest_active_wave_station(&Location::new(lat, lon))
        .unwrap();
    assert_eq!(closest.station_id, "44097");

    // BZBM3 is nearer to Boston than 44097 but is not a buoy
    let (lat, lon) = fixtures::BOSTON_HARBOR;
    let closest = list
        .closest_active_wave_station(&Location::new(lat, lon))
        .unwrap();
    assert_eq!(closest.station_id, "44013");
}

#[test]
fn test_station_to_buoy_carries_location() {
    let list = stations();
    let buoy = list.find_station("44013").unwrap().to_buoy();
    assert_eq!(buoy.station_id, "44013");
    let location = buoy.location.unwrap();
    assert_approx_eq!(location.latitude, 42.346, 1e-9);
    assert_eq!(location.location_name, "Boston 16 NM East of Boston, MA");
}

#[test]
fn test_latest_reading_fills_location() {
    let mut buoy = Buoy::new("44097");
    buoy.parse_latest_reading(fixtures::LATEST_OBS_44097).unwrap();

    let location = buoy.location.as_ref().unwrap();
    assert_approx_eq!(location.latitude, 40.967, 0.001);
    assert_approx_eq!(location.longitude, -71.126, 0.001);

    let item = &buoy.data[0];
    assert_eq!(item.units, UnitSystem::English);
    assert_eq!(item.mean_wave_direction, Some(165.0));
    let summary = item.wave_summary.as_ref().unwrap();
    assert_eq!(summary.compass_direction, "SSE");
    assert_eq!(summary.period, 10.0);
}

#[test]
fn test_latest_reading_to_metric() {
    let mut buoy = Buoy::new("44013");
    buoy.parse_latest_reading(fixtures::LATEST_OBS_44013).unwrap();
    buoy.change_units(UnitSystem::Metric);

    let item = &buoy.data[0];
    assert_eq!(item.units, UnitSystem::Metric);
    assert_approx_eq!(item.wave_summary.as_ref().unwrap().wave_height, 0.6096, 1e-3);
    assert_approx_eq!(item.air_temperature.unwrap(), 8.777, 1e-2);
    assert_eq!(item.swell_components[0].units, UnitSystem::Metric);
}

#[test]
fn test_standard_data_nearest_record() {
    let mut buoy = Buoy::new("44013");
    buoy.parse_standard_data(fixtures::STANDARD_MET_44013, 10).unwrap();
    assert_eq!(buoy.data.len(), 4);

    let requested = Utc.with_ymd_and_hms(2016, 5, 23, 10, 33, 0).unwrap();
    let (item, diff) = buoy.find_conditions_for_date(requested).unwrap();
    assert_eq!(item.date, Utc.with_ymd_and_hms(2016, 5, 23, 10, 30, 0).unwrap());
    assert_eq!(diff, Duration::minutes(3));
}

#[test]
fn test_wave_spectra_swell_components() {
    let mut buoy = Buoy::new("44097");
    buoy.parse_wave_spectra_data(
        fixtures::DIRECTIONAL_SPECTRA_44097,
        fixtures::ENERGY_SPECTRA_44097,
        1,
    )
    .unwrap();
    assert_eq!(buoy.data.len(), 1);

    let item = &buoy.data[0];
    assert_eq!(item.date.timestamp(), fixtures::SPECTRA_44097_NEWEST_EPOCH);

    let components = &item.swell_components;
    assert_eq!(components.len(), 2);
    assert_approx_eq!(components[0].period, 10.0, 1e-9);
    assert_eq!(components[0].compass_direction, "SSE");
    assert_approx_eq!(components[1].period, 5.0, 1e-9);
    assert_approx_eq!(components[1].wave_height, 0.8, 1e-9);

    let spectra = item.wave_spectra.as_ref().unwrap();
    assert_eq!(spectra.separation_frequency, Some(0.15));
    assert_eq!(spectra.len(), 10);
}

#[test]
fn test_detailed_wave_fallback_shape() {
    let mut buoy = Buoy::new("44097");
    buoy.parse_detailed_wave_data(fixtures::DETAILED_WAVE_44097, 2)
        .unwrap();
    assert_eq!(buoy.data.len(), 2);
    assert!(buoy.data.iter().all(|item| item.has_wave_data()));
    assert_eq!(buoy.data[0].swell_components[0].compass_direction, "SSE");
}
