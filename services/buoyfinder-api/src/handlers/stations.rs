//! Station directory handlers.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::Response,
};

use crate::error::ApiError;
use crate::handlers::common::json_response;
use crate::lookup::load_station_list;
use crate::metrics::record_request;
use crate::state::AppState;

/// GET /api/stations
pub async fn stations_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Response, ApiError> {
    record_request("stations");
    let stations = load_station_list(&state).await?;
    json_response(&stations)
}

/// GET /api/stationinfo/:station
pub async fn station_info_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(station_id): Path<String>,
) -> Result<Response, ApiError> {
    record_request("stationinfo");
    let stations = load_station_list(&state).await?;
    let station = stations
        .find_station(&station_id)
        .ok_or(ApiError::StationNotFound(station_id))?;
    json_response(station)
}
