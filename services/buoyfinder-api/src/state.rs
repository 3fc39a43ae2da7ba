//! Application state for the buoyfinder API.

use anyhow::{Context, Result};
use chart_export::{ChartRenderer, HighchartsExporter};
use metrics_exporter_prometheus::PrometheusHandle;
use minijinja::Environment;
use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::templates;
use crate::upstream::{NdbcClient, NdbcSource};

/// Shared application state.
pub struct AppState {
    /// Service configuration.
    pub config: ServiceConfig,

    /// Where NDBC documents come from.
    pub source: Arc<dyn NdbcSource>,

    /// Chart renderer; `None` when charts are disabled.
    pub charts: Option<Arc<dyn ChartRenderer>>,

    /// Compiled HTML templates.
    pub templates: Environment<'static>,

    /// Prometheus handle for the `/metrics` endpoint.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Create state that talks to NDBC and the configured chart exporter.
    pub fn new(config: ServiceConfig, prometheus: Option<PrometheusHandle>) -> Result<Self> {
        let source: Arc<dyn NdbcSource> =
            Arc::new(NdbcClient::new(&config.upstream).context("Failed to build NDBC client")?);

        let charts: Option<Arc<dyn ChartRenderer>> = if config.charts.enabled {
            let exporter = HighchartsExporter::new(
                config.charts.export_url.clone(),
                config.charts.scale,
                config.charts.timeout(),
            )
            .context("Failed to build chart exporter")?;
            Some(Arc::new(exporter))
        } else {
            tracing::info!("Chart rendering disabled");
            None
        };

        let mut state = Self::with_sources(config, source, charts)?;
        state.prometheus = prometheus;
        Ok(state)
    }

    /// Create state around explicit collaborators.
    pub fn with_sources(
        config: ServiceConfig,
        source: Arc<dyn NdbcSource>,
        charts: Option<Arc<dyn ChartRenderer>>,
    ) -> Result<Self> {
        let templates = templates::environment().context("Failed to load templates")?;

        Ok(Self {
            config,
            source,
            charts,
            templates,
            prometheus: None,
        })
    }
}
