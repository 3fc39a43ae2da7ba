//! HTML pages.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::Html,
};
use buoy_data::UnitSystem;
use chrono::Utc;
use minijinja::context;

use crate::error::ApiError;
use crate::lookup::{find_buoy, page_record_count, DataKind, LookupRequest, StationTarget};
use crate::metrics::record_request;
use crate::state::AppState;
use crate::templates;

/// GET /
pub async fn index_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Html<String>, ApiError> {
    record_request("index");
    Ok(Html(templates::render(&state.templates, templates::INDEX, context! {})?))
}

/// GET /api
pub async fn api_doc_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Html<String>, ApiError> {
    record_request("apidoc");
    Ok(Html(templates::render(&state.templates, templates::API_DOC, context! {})?))
}

/// GET /buoy/:station
pub async fn buoy_page_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(station_id): Path<String>,
) -> Result<Html<String>, ApiError> {
    record_request("buoy_page");

    let now = Utc::now();
    let request = LookupRequest {
        target: StationTarget::Station(station_id),
        kind: DataKind::Wave,
        requested_date: now,
        count: page_record_count(now, now),
        units: Some(UnitSystem::English),
        charts: true,
    };

    let buoy = find_buoy(&state, request).await?;
    Ok(Html(templates::render(&state.templates, templates::BUOY, &buoy)?))
}
