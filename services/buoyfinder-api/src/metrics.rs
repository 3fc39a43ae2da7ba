//! Prometheus counters for requests, upstream fetches and chart renders.

use metrics::counter;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::upstream::UpstreamError;

/// Install the global Prometheus recorder.
pub fn install_recorder() -> anyhow::Result<PrometheusHandle> {
    Ok(PrometheusBuilder::new().install_recorder()?)
}

/// Count a request by route family (`latest`, `wave`, `weather`, ...).
pub fn record_request(route: &'static str) {
    counter!("buoyfinder_requests_total", "route" => route).increment(1);
}

/// Count a request answered with an error status.
pub fn record_error_response(status: u16) {
    counter!("buoyfinder_error_responses_total", "status" => status.to_string()).increment(1);
}

pub fn record_upstream_fetch(document: &'static str) {
    counter!("buoyfinder_upstream_fetches_total", "document" => document).increment(1);
}

pub fn record_upstream_failure(document: &'static str, error: &UpstreamError) {
    let reason = match error {
        UpstreamError::Request { .. } => "transport",
        UpstreamError::Status { .. } => "status",
    };
    counter!(
        "buoyfinder_upstream_failures_total",
        "document" => document,
        "reason" => reason
    )
    .increment(1);
}

/// Count a chart render attempt and whether it produced an image.
pub fn record_chart_render(chart: &'static str, ok: bool) {
    let outcome = if ok { "ok" } else { "failed" };
    counter!("buoyfinder_chart_renders_total", "chart" => chart, "outcome" => outcome)
        .increment(1);
}
