//! NDBC document fetching.

use async_trait::async_trait;
use buoy_data::ReadingKind;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::UpstreamConfig;
use crate::metrics::{record_upstream_failure, record_upstream_fetch};

/// Failures talking to the NDBC servers.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },
}

impl UpstreamError {
    /// Whether the upstream reported that the document does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, UpstreamError::Status { status, .. } if *status == StatusCode::NOT_FOUND.as_u16())
    }
}

/// Source of raw NDBC documents.
#[async_trait]
pub trait NdbcSource: Send + Sync {
    /// The active station directory XML.
    async fn fetch_station_directory(&self) -> Result<String, UpstreamError>;

    /// One reading document for a station.
    async fn fetch_reading(&self, station_id: &str, kind: ReadingKind)
        -> Result<String, UpstreamError>;
}

/// Fetches documents from NDBC over HTTP.
#[derive(Debug, Clone)]
pub struct NdbcClient {
    client: reqwest::Client,
    stations_url: String,
    data_base_url: String,
}

impl NdbcClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            client,
            stations_url: config.stations_url.clone(),
            data_base_url: config.data_base_url.clone(),
        })
    }

    async fn get_text(&self, url: &str, document: &'static str) -> Result<String, UpstreamError> {
        record_upstream_fetch(document);

        let result = self.send(url).await;
        if let Err(e) = &result {
            record_upstream_failure(document, e);
        }
        result
    }

    async fn send(&self, url: &str) -> Result<String, UpstreamError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| UpstreamError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| UpstreamError::Request {
            url: url.to_string(),
            source,
        })?;

        debug!(url, bytes = body.len(), "Fetched upstream document");
        Ok(body)
    }
}

#[async_trait]
impl NdbcSource for NdbcClient {
    #[instrument(skip(self), fields(url = %self.stations_url))]
    async fn fetch_station_directory(&self) -> Result<String, UpstreamError> {
        self.get_text(&self.stations_url, "stations").await
    }

    #[instrument(skip(self, kind), fields(kind = %kind))]
    async fn fetch_reading(
        &self,
        station_id: &str,
        kind: ReadingKind,
    ) -> Result<String, UpstreamError> {
        let url = kind.url(&self.data_base_url, station_id);
        self.get_text(&url, kind.as_str()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_not_found() {
        let missing = UpstreamError::Status {
            url: "https://www.ndbc.noaa.gov/data/realtime2/X.swdir".to_string(),
            status: 404,
        };
        assert!(missing.is_not_found());

        let unavailable = UpstreamError::Status {
            url: "https://www.ndbc.noaa.gov/activestations.xml".to_string(),
            status: 503,
        };
        assert!(!unavailable.is_not_found());
        assert!(unavailable.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_unreachable_upstream() {
        let config = UpstreamConfig {
            stations_url: "http://127.0.0.1:9/activestations.xml".to_string(),
            data_base_url: "http://127.0.0.1:9/data".to_string(),
            timeout_secs: 1,
            ..Default::default()
        };
        let client = NdbcClient::new(&config).unwrap();
        let err = client.fetch_station_directory().await.unwrap_err();
        assert!(matches!(err, UpstreamError::Request { .. }));
        assert!(!err.is_not_found());
    }
}
