//! Path coercion and JSON response helpers shared by the handlers.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use buoy_data::Location;
use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use crate::error::ApiError;

/// Parse a `{lat}/{lon}` pair.
pub fn parse_location(lat: &str, lon: &str) -> Result<Location, ApiError> {
    let latitude: f64 = lat
        .parse()
        .map_err(|_| ApiError::InvalidParameter(format!("latitude '{}'", lat)))?;
    let longitude: f64 = lon
        .parse()
        .map_err(|_| ApiError::InvalidParameter(format!("longitude '{}'", lon)))?;

    let location = Location::new(latitude, longitude);
    if !location.is_valid() {
        return Err(ApiError::InvalidParameter(format!(
            "location {},{} is out of range",
            lat, lon
        )));
    }
    Ok(location)
}

/// Parse a Unix epoch in seconds.
pub fn parse_epoch(epoch: &str) -> Result<DateTime<Utc>, ApiError> {
    epoch
        .parse::<i64>()
        .ok()
        .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
        .ok_or_else(|| ApiError::InvalidParameter(format!("epoch '{}'", epoch)))
}

/// Serialize with four-space indentation and open CORS.
pub fn json_response<T: Serialize>(value: &T) -> Result<Response, ApiError> {
    let mut body = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut body, formatter);
    value.serialize(&mut serializer)?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
        ],
        body,
    )
        .into_response())
}
