//! Error types for chart rendering.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("export request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("export server returned status {status}")]
    Status { status: u16 },

    #[error("export server returned an empty image")]
    EmptyImage,

    #[error("invalid chart options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
