//! Error types for buoy data parsing.

use thiserror::Error;

/// Result type alias using BuoyDataError.
pub type BuoyDataResult<T> = Result<T, BuoyDataError>;

/// Errors that can occur while decoding NDBC documents.
#[derive(Debug, Error)]
pub enum BuoyDataError {
    /// The station directory XML could not be decoded.
    #[error("invalid station list: {0}")]
    InvalidStationList(String),

    /// A columnar file did not start with the expected header.
    #[error("missing header in {format} data")]
    MissingHeader { format: &'static str },

    /// A data row could not be decoded.
    #[error("malformed {format} row {line}: {message}")]
    MalformedRow {
        format: &'static str,
        line: usize,
        message: String,
    },

    /// The document parsed but held no records.
    #[error("no {0} records found")]
    NoData(&'static str),

    /// A timestamp was out of range or badly formatted.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),
}

impl BuoyDataError {
    pub(crate) fn malformed(format: &'static str, line: usize, message: impl Into<String>) -> Self {
        Self::MalformedRow {
            format,
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BuoyDataError::malformed("standard", 4, "expected 19 columns");
        let display = err.to_string();
        assert!(display.contains("standard"));
        assert!(display.contains("row 4"));
        assert!(display.contains("expected 19 columns"));
    }

    #[test]
    fn test_no_data_display() {
        let err = BuoyDataError::NoData("spectra");
        assert_eq!(err.to_string(), "no spectra records found");
    }
}
