//! Conditions-at-a-time handlers.
//!
//! The record count grows with the age of the requested time so the
//! reading nearest to it is inside the fetched window.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::Response,
};
use chrono::Utc;

use crate::error::ApiError;
use crate::handlers::common::{json_response, parse_epoch, parse_location};
use crate::lookup::{
    find_buoy, record_count, DataKind, LookupRequest, StationTarget, CLOSEST_RECORDS_PER_HOUR,
    STATION_RECORDS_PER_HOUR,
};
use crate::metrics::record_request;
use crate::state::AppState;

async fn at_date(
    state: &AppState,
    target: StationTarget,
    kind: DataKind,
    epoch: &str,
    charts: bool,
) -> Result<Response, ApiError> {
    let requested_date = parse_epoch(epoch)?;
    let records_per_hour = match target {
        StationTarget::Closest(_) => CLOSEST_RECORDS_PER_HOUR,
        StationTarget::Station(_) => STATION_RECORDS_PER_HOUR,
    };

    let request = LookupRequest {
        target,
        kind,
        requested_date,
        count: record_count(requested_date, Utc::now(), records_per_hour),
        units: None,
        charts,
    };
    json_response(&find_buoy(state, request).await?)
}

/// GET /api/date/wave/:lat/:lon/:epoch
pub async fn closest_wave_date_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((lat, lon, epoch)): Path<(String, String, String)>,
) -> Result<Response, ApiError> {
    record_request("wave_date");
    let location = parse_location(&lat, &lon)?;
    at_date(&state, StationTarget::Closest(location), DataKind::Wave, &epoch, false).await
}

/// GET /api/date/wave/:station/:epoch
pub async fn wave_date_station_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((station_id, epoch)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    record_request("wave_date");
    at_date(&state, StationTarget::Station(station_id), DataKind::Wave, &epoch, false).await
}

/// GET /api/date/wave/charts/:lat/:lon/:epoch
pub async fn closest_wave_charts_date_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((lat, lon, epoch)): Path<(String, String, String)>,
) -> Result<Response, ApiError> {
    record_request("wave_charts_date");
    let location = parse_location(&lat, &lon)?;
    at_date(&state, StationTarget::Closest(location), DataKind::Wave, &epoch, true).await
}

/// GET /api/date/wave/charts/:station/:epoch
pub async fn wave_charts_date_station_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((station_id, epoch)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    record_request("wave_charts_date");
    at_date(&state, StationTarget::Station(station_id), DataKind::Wave, &epoch, true).await
}

/// GET /api/date/weather/:lat/:lon/:epoch
pub async fn closest_weather_date_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((lat, lon, epoch)): Path<(String, String, String)>,
) -> Result<Response, ApiError> {
    record_request("weather_date");
    let location = parse_location(&lat, &lon)?;
    at_date(&state, StationTarget::Closest(location), DataKind::Weather, &epoch, false).await
}

/// GET /api/date/weather/:station/:epoch
pub async fn weather_date_station_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((station_id, epoch)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    record_request("weather_date");
    at_date(&state, StationTarget::Station(station_id), DataKind::Weather, &epoch, false).await
}
