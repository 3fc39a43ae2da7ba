//! API error type and its HTTP mapping.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use buoy_data::BuoyDataError;
use thiserror::Error;
use tracing::{error, warn};

use crate::metrics::record_error_response;
use crate::upstream::UpstreamError;

/// Errors that can occur while answering a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A path value could not be parsed.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The station is not in the active directory.
    #[error("Could not find the requested buoy: {0}")]
    StationNotFound(String),

    /// No wave buoy exists to match the location.
    #[error("Could not find the closest buoy")]
    NoClosestBuoy,

    /// The NDBC request failed.
    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// The NDBC document could not be decoded.
    #[error("Could not parse buoy data: {0}")]
    Parse(#[from] BuoyDataError),

    /// The documents decoded but held no usable record.
    #[error("No data available: {0}")]
    NoData(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::StationNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::NoClosestBuoy => StatusCode::NOT_FOUND,
            ApiError::Upstream(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ApiError::Parse(_) => StatusCode::BAD_GATEWAY,
            ApiError::NoData(_) => StatusCode::BAD_GATEWAY,
            ApiError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %message, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %message, "Request rejected");
        }
        record_error_response(status.as_u16());

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response()
    }
}
