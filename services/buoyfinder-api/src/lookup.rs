//! Request sequencing: resolve a station, fetch its readings, pick the
//! record nearest the requested time and decorate it with charts.

use buoy_data::{Buoy, BuoyDataItem, Location, ReadingKind, StationList, UnitSystem};
use chart_export::{directional_spectra_options, render_base64, spectra_distribution_options};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::metrics::record_chart_render;
use crate::state::AppState;
use crate::upstream::UpstreamError;

/// Records per elapsed hour requested by coordinate date routes.
pub const CLOSEST_RECORDS_PER_HOUR: f64 = 1.0;

/// Records per elapsed hour requested by station date routes and the buoy page.
pub const STATION_RECORDS_PER_HOUR: f64 = 2.0;

/// Response container for every buoy lookup.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClosestBuoy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_location: Option<Location>,

    pub requested_date: DateTime<Utc>,

    /// Distance in time between the request and the record, in nanoseconds.
    pub time_diff_found: i64,

    #[serde(rename = "BuoyStationID")]
    pub buoy_station_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub buoy_location: Option<Location>,

    pub buoy_data: BuoyDataItem,

    /// Base64 PNG; empty when the render failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directional_spectra_plot: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub spectra_distribution_plot: Option<String>,
}

/// How the station is chosen.
#[derive(Debug, Clone, PartialEq)]
pub enum StationTarget {
    /// The wave buoy nearest to a location.
    Closest(Location),
    /// A station by ID.
    Station(String),
}

/// Which readings are fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    /// `latest_obs` text, always a single record.
    Latest,
    /// Spectral wave data, falling back to the detailed wave summary.
    Wave,
    /// Standard meteorological data.
    Weather,
}

/// Everything needed to answer one lookup.
#[derive(Debug, Clone)]
pub struct LookupRequest {
    pub target: StationTarget,
    pub kind: DataKind,
    pub requested_date: DateTime<Utc>,
    pub count: usize,
    pub units: Option<UnitSystem>,
    pub charts: bool,
}

/// Number of records to request so that `requested` is covered.
///
/// NDBC files are newest first, so reaching back `h` hours needs roughly
/// `h * records_per_hour` rows. Never less than one.
pub fn record_count(requested: DateTime<Utc>, now: DateTime<Utc>, records_per_hour: f64) -> usize {
    elapsed_records(requested, now, records_per_hour).max(1)
}

/// Record count for the buoy page: one past the elapsed rows.
pub fn page_record_count(requested: DateTime<Utc>, now: DateTime<Utc>) -> usize {
    elapsed_records(requested, now, STATION_RECORDS_PER_HOUR) + 1
}

fn elapsed_records(requested: DateTime<Utc>, now: DateTime<Utc>, records_per_hour: f64) -> usize {
    let hours = (now - requested).num_seconds() as f64 / 3600.0;
    let count = (hours * records_per_hour).floor();
    if count.is_finite() && count > 0.0 {
        count as usize
    } else {
        0
    }
}

/// Fetch and decode the active station directory.
pub async fn load_station_list(state: &AppState) -> Result<StationList, ApiError> {
    let xml = state.source.fetch_station_directory().await?;
    Ok(StationList::from_xml(&xml)?)
}

/// Run a lookup end to end.
pub async fn find_buoy(state: &AppState, request: LookupRequest) -> Result<ClosestBuoy, ApiError> {
    let (mut buoy, requested_location) = match &request.target {
        StationTarget::Closest(location) => {
            let stations = load_station_list(state).await?;
            let station = stations
                .closest_active_wave_station(location)
                .ok_or(ApiError::NoClosestBuoy)?;
            debug!(station = %station.station_id, "Resolved closest wave buoy");
            (station.to_buoy(), Some(location.clone()))
        }
        StationTarget::Station(station_id) => (Buoy::new(station_id.clone()), None),
    };

    fetch_readings(state, &mut buoy, request.kind, request.count).await?;

    let (mut item, diff) = buoy
        .find_conditions_for_date(request.requested_date)
        .ok_or_else(|| ApiError::NoData(format!("no readings for station {}", buoy.station_id)))?;

    if let Some(units) = request.units {
        item.change_units(units);
    }

    let (directional_spectra_plot, spectra_distribution_plot) = if request.charts {
        let (directional, distribution) = render_charts(state, &buoy.station_id, &item).await;
        (Some(directional), Some(distribution))
    } else {
        (None, None)
    };

    // Only coordinate lookups report where the buoy is
    let buoy_location = requested_location.as_ref().and(buoy.location.clone());

    Ok(ClosestBuoy {
        requested_location,
        requested_date: request.requested_date,
        time_diff_found: diff.num_nanoseconds().unwrap_or(i64::MAX),
        buoy_station_id: buoy.station_id,
        buoy_location,
        buoy_data: item,
        directional_spectra_plot,
        spectra_distribution_plot,
    })
}

/// Fetch and parse the readings for a kind of lookup into `buoy.data`.
pub async fn fetch_readings(
    state: &AppState,
    buoy: &mut Buoy,
    kind: DataKind,
    count: usize,
) -> Result<(), ApiError> {
    let source = state.source.as_ref();
    let station_id = buoy.station_id.clone();

    match kind {
        DataKind::Latest => {
            let text = source.fetch_reading(&station_id, ReadingKind::Latest).await?;
            buoy.parse_latest_reading(&text)?;
        }
        DataKind::Weather => {
            let text = source
                .fetch_reading(&station_id, ReadingKind::StandardMet)
                .await?;
            buoy.parse_standard_data(&text, count)?;
        }
        DataKind::Wave => {
            let spectra = async {
                let alpha = source
                    .fetch_reading(&station_id, ReadingKind::DirectionalSpectra)
                    .await?;
                let energy = source
                    .fetch_reading(&station_id, ReadingKind::EnergySpectra)
                    .await?;
                Ok::<_, UpstreamError>((alpha, energy))
            }
            .await;

            match spectra {
                Ok((alpha, energy)) => buoy.parse_wave_spectra_data(&alpha, &energy, count)?,
                Err(e) if e.is_not_found() => {
                    info!(station = %station_id, "No spectral data, using detailed wave summary");
                    let text = source
                        .fetch_reading(&station_id, ReadingKind::DetailedWave)
                        .await?;
                    buoy.parse_detailed_wave_data(&text, count)?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

/// Render both spectra charts. Failures yield empty strings.
pub async fn render_charts(state: &AppState, station_id: &str, item: &BuoyDataItem) -> (String, String) {
    let Some(renderer) = state.charts.as_deref() else {
        return (String::new(), String::new());
    };

    let directional = render_base64(renderer, &directional_spectra_options(station_id, item)).await;
    record_chart_render("directional", !directional.is_empty());

    let distribution = render_base64(renderer, &spectra_distribution_options(station_id, item)).await;
    record_chart_render("distribution", !distribution.is_empty());

    (directional, distribution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2016, 5, 23, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_record_count() {
        let requested = now() - Duration::hours(6);
        assert_eq!(record_count(requested, now(), CLOSEST_RECORDS_PER_HOUR), 6);
        assert_eq!(record_count(requested, now(), STATION_RECORDS_PER_HOUR), 12);
    }

    #[test]
    fn test_record_count_partial_hours_round_down() {
        let requested = now() - Duration::minutes(150);
        assert_eq!(record_count(requested, now(), CLOSEST_RECORDS_PER_HOUR), 2);
        assert_eq!(record_count(requested, now(), STATION_RECORDS_PER_HOUR), 5);
    }

    #[test]
    fn test_record_count_never_zero() {
        assert_eq!(record_count(now(), now(), STATION_RECORDS_PER_HOUR), 1);
        // Requests in the future still get the newest record
        let future = now() + Duration::hours(3);
        assert_eq!(record_count(future, now(), CLOSEST_RECORDS_PER_HOUR), 1);
    }

    #[test]
    fn test_page_record_count() {
        assert_eq!(page_record_count(now(), now()), 1);
        let requested = now() - Duration::minutes(90);
        assert_eq!(page_record_count(requested, now()), 4);
    }

    #[test]
    fn test_closest_buoy_wire_names() {
        let item = BuoyDataItem::new(now(), UnitSystem::Metric);
        let container = ClosestBuoy {
            requested_location: None,
            requested_date: now(),
            time_diff_found: 1_000_000_000,
            buoy_station_id: "44097".to_string(),
            buoy_location: None,
            buoy_data: item,
            directional_spectra_plot: Some(String::new()),
            spectra_distribution_plot: None,
        };

        let json = serde_json::to_value(&container).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj["BuoyStationID"], "44097");
        assert_eq!(obj["TimeDiffFound"], 1_000_000_000);
        assert_eq!(obj["RequestedDate"], "2016-05-23T12:00:00Z");
        assert_eq!(obj["DirectionalSpectraPlot"], "");
        assert!(!obj.contains_key("RequestedLocation"));
        assert!(!obj.contains_key("SpectraDistributionPlot"));
    }
}
