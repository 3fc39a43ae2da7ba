//! Service configuration loading and types.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Configuration loaded from a YAML file. Every field has a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// NDBC endpoints and HTTP client settings.
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Chart export settings.
    #[serde(default)]
    pub charts: ChartsConfig,
}

impl ServiceConfig {
    /// Load configuration from a YAML file.
    ///
    /// A missing file is not an error: the defaults are used instead.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::warn!("Config file {:?} does not exist, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read: {:?}", path))?;

        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config: {:?}", path))?;

        tracing::info!("Loaded service config from {:?}", path);
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}

/// NDBC upstream settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Active station directory XML.
    #[serde(default = "default_stations_url")]
    pub stations_url: String,

    /// Root of the per-station reading files.
    #[serde(default = "default_data_base_url")]
    pub data_base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            stations_url: default_stations_url(),
            data_base_url: default_data_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Chart export settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartsConfig {
    /// When false, chart fields are returned empty without calling the exporter.
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_export_url")]
    pub export_url: String,

    /// Resolution multiplier passed to the exporter.
    #[serde(default = "default_scale")]
    pub scale: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            export_url: default_export_url(),
            scale: default_scale(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ChartsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_stations_url() -> String {
    buoy_data::endpoints::ACTIVE_STATIONS_URL.to_string()
}

fn default_data_base_url() -> String {
    buoy_data::endpoints::DATA_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    20
}

fn default_user_agent() -> String {
    format!("buoyfinder/{}", env!("CARGO_PKG_VERSION"))
}

fn default_true() -> bool {
    true
}

fn default_export_url() -> String {
    chart_export::DEFAULT_EXPORT_URL.to_string()
}

fn default_scale() -> u32 {
    3
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::default();
        assert_eq!(
            config.upstream.stations_url,
            "https://www.ndbc.noaa.gov/activestations.xml"
        );
        assert_eq!(config.upstream.timeout(), Duration::from_secs(20));
        assert!(config.charts.enabled);
        assert_eq!(config.charts.scale, 3);
        assert!(config.upstream.user_agent.starts_with("buoyfinder/"));
    }

    #[test]
    fn test_parse_partial_yaml() {
        let yaml = r#"
upstream:
  data_base_url: "http://localhost:9000/data"
  timeout_secs: 5
charts:
  enabled: false
"#;
        let config = ServiceConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.upstream.data_base_url, "http://localhost:9000/data");
        assert_eq!(config.upstream.timeout_secs, 5);
        // Unspecified fields keep their defaults
        assert_eq!(
            config.upstream.stations_url,
            "https://www.ndbc.noaa.gov/activestations.xml"
        );
        assert!(!config.charts.enabled);
        assert_eq!(config.charts.export_url, "https://export.highcharts.com/");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(ServiceConfig::from_yaml("").unwrap(), ServiceConfig::default());
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(ServiceConfig::from_yaml("upstream: [not, a, map]").is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = ServiceConfig::load("/nonexistent/buoyfinder.yaml").unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let file = test_utils::temp_file_with("charts:\n  scale: 2\n");
        let config = ServiceConfig::load(file.path()).unwrap();
        assert_eq!(config.charts.scale, 2);
    }
}
