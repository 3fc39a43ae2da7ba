//! Route table and middleware.
//!
//! Coordinate and station forms of a route share a prefix, so their path
//! parameters share names (`station_or_lat`, ...). Handlers extract by
//! position.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{date, health, latest, pages, stations};
use crate::state::AppState;

/// Build the application router around shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Pages
        .route("/", get(pages::index_handler))
        .route("/api", get(pages::api_doc_handler))
        .route("/buoy/:station", get(pages::buoy_page_handler))
        // Station directory
        .route("/api/stations", get(stations::stations_handler))
        .route("/api/stationinfo/:station", get(stations::station_info_handler))
        // Latest readings
        .route(
            "/api/latest/:station_or_lat",
            get(latest::latest_station_handler),
        )
        .route(
            "/api/latest/:station_or_lat/:lon",
            get(latest::closest_latest_handler),
        )
        .route(
            "/api/latest/wave/:station_or_lat",
            get(latest::latest_wave_station_handler),
        )
        .route(
            "/api/latest/wave/:station_or_lat/:lon",
            get(latest::closest_latest_wave_handler),
        )
        .route(
            "/api/latest/wave/charts/:station_or_lat",
            get(latest::latest_wave_charts_station_handler),
        )
        .route(
            "/api/latest/wave/charts/:station_or_lat/:lon",
            get(latest::closest_latest_wave_charts_handler),
        )
        .route(
            "/api/latest/weather/:station_or_lat",
            get(latest::latest_weather_station_handler),
        )
        .route(
            "/api/latest/weather/:station_or_lat/:lon",
            get(latest::closest_latest_weather_handler),
        )
        // Readings nearest a time
        .route(
            "/api/date/wave/:station_or_lat/:lon_or_epoch",
            get(date::wave_date_station_handler),
        )
        .route(
            "/api/date/wave/:station_or_lat/:lon_or_epoch/:epoch",
            get(date::closest_wave_date_handler),
        )
        .route(
            "/api/date/wave/charts/:station_or_lat/:lon_or_epoch",
            get(date::wave_charts_date_station_handler),
        )
        .route(
            "/api/date/wave/charts/:station_or_lat/:lon_or_epoch/:epoch",
            get(date::closest_wave_charts_date_handler),
        )
        .route(
            "/api/date/weather/:station_or_lat/:lon_or_epoch",
            get(date::weather_date_station_handler),
        )
        .route(
            "/api/date/weather/:station_or_lat/:lon_or_epoch/:epoch",
            get(date::closest_weather_date_handler),
        )
        // Health and metrics
        .route("/health", get(health::health_handler))
        .route("/metrics", get(health::metrics_handler))
        // Middleware
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
