//! Latest conditions handlers.
//!
//! Every route has a coordinate form (`{lat}/{lon}`, closest wave buoy) and a
//! station form (`{station}`).

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::Response,
};
use buoy_data::UnitSystem;
use chrono::Utc;

use crate::error::ApiError;
use crate::handlers::common::{json_response, parse_location};
use crate::lookup::{find_buoy, DataKind, LookupRequest, StationTarget};
use crate::metrics::record_request;
use crate::state::AppState;

async fn latest(
    state: &AppState,
    target: StationTarget,
    kind: DataKind,
    charts: bool,
) -> Result<Response, ApiError> {
    let units = match kind {
        DataKind::Latest => Some(UnitSystem::Metric),
        DataKind::Wave | DataKind::Weather => None,
    };

    let request = LookupRequest {
        target,
        kind,
        requested_date: Utc::now(),
        count: 1,
        units,
        charts,
    };
    json_response(&find_buoy(state, request).await?)
}

/// GET /api/latest/:lat/:lon
pub async fn closest_latest_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((lat, lon)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    record_request("latest");
    let location = parse_location(&lat, &lon)?;
    latest(&state, StationTarget::Closest(location), DataKind::Latest, false).await
}

/// GET /api/latest/:station
pub async fn latest_station_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(station_id): Path<String>,
) -> Result<Response, ApiError> {
    record_request("latest");
    latest(&state, StationTarget::Station(station_id), DataKind::Latest, false).await
}

/// GET /api/latest/wave/:lat/:lon
pub async fn closest_latest_wave_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((lat, lon)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    record_request("wave");
    let location = parse_location(&lat, &lon)?;
    latest(&state, StationTarget::Closest(location), DataKind::Wave, false).await
}

/// GET /api/latest/wave/:station
pub async fn latest_wave_station_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(station_id): Path<String>,
) -> Result<Response, ApiError> {
    record_request("wave");
    latest(&state, StationTarget::Station(station_id), DataKind::Wave, false).await
}

/// GET /api/latest/wave/charts/:lat/:lon
pub async fn closest_latest_wave_charts_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((lat, lon)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    record_request("wave_charts");
    let location = parse_location(&lat, &lon)?;
    latest(&state, StationTarget::Closest(location), DataKind::Wave, true).await
}

/// GET /api/latest/wave/charts/:station
pub async fn latest_wave_charts_station_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(station_id): Path<String>,
) -> Result<Response, ApiError> {
    record_request("wave_charts");
    latest(&state, StationTarget::Station(station_id), DataKind::Wave, true).await
}

/// GET /api/latest/weather/:lat/:lon
pub async fn closest_latest_weather_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((lat, lon)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    record_request("weather");
    let location = parse_location(&lat, &lon)?;
    latest(&state, StationTarget::Closest(location), DataKind::Weather, false).await
}

/// GET /api/latest/weather/:station
pub async fn latest_weather_station_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(station_id): Path<String>,
) -> Result<Response, ApiError> {
    record_request("weather");
    latest(&state, StationTarget::Station(station_id), DataKind::Weather, false).await
}
