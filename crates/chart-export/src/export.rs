//! Highcharts export server client.

use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::{ChartError, ChartResult};

/// Something that turns chart options into a PNG image.
#[async_trait]
pub trait ChartRenderer: Send + Sync {
    async fn render_png(&self, options: &Value) -> ChartResult<Vec<u8>>;
}

/// Renders charts by posting their options to a Highcharts export server.
#[derive(Debug, Clone)]
pub struct HighchartsExporter {
    client: reqwest::Client,
    export_url: String,
    scale: u32,
}

impl HighchartsExporter {
    pub fn new(export_url: impl Into<String>, scale: u32, timeout: Duration) -> ChartResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, export_url, scale))
    }

    /// Use an existing HTTP client.
    pub fn with_client(client: reqwest::Client, export_url: impl Into<String>, scale: u32) -> Self {
        Self {
            client,
            export_url: export_url.into(),
            scale,
        }
    }

    pub fn export_url(&self) -> &str {
        &self.export_url
    }
}

#[async_trait]
impl ChartRenderer for HighchartsExporter {
    #[instrument(skip(self, options), fields(url = %self.export_url))]
    async fn render_png(&self, options: &Value) -> ChartResult<Vec<u8>> {
        let options = serde_json::to_string(options)?;
        let scale = self.scale.to_string();
        let form = [
            ("content", "options"),
            ("options", options.as_str()),
            ("scale", scale.as_str()),
            ("type", "image/png"),
            ("constr", "Chart"),
        ];

        let response = self.client.post(&self.export_url).form(&form).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChartError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(ChartError::EmptyImage);
        }

        debug!(bytes = bytes.len(), "Rendered chart");
        Ok(bytes.to_vec())
    }
}

/// Render a chart to base64 PNG, or an empty string if rendering fails.
pub async fn render_base64(renderer: &dyn ChartRenderer, options: &Value) -> String {
    match renderer.render_png(options).await {
        Ok(png) => base64::engine::general_purpose::STANDARD.encode(png),
        Err(e) => {
            warn!(error = %e, "Chart render failed");
            String::new()
        }
    }
}
