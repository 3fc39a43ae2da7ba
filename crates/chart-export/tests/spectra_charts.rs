//! Chart options built from captured spectra.

use std::sync::Mutex;

use async_trait::async_trait;
use buoy_data::Buoy;
use chart_export::{
    directional_spectra_options, render_base64, spectra_distribution_options, ChartRenderer,
    ChartResult, PeriodGradient,
};
use serde_json::Value;
use test_utils::fixtures;

#[derive(Default)]
struct RecordingRenderer {
    seen: Mutex<Vec<Value>>,
}

#[async_trait]
impl ChartRenderer for RecordingRenderer {
    async fn render_png(&self, options: &Value) -> ChartResult<Vec<u8>> {
        self.seen.lock().unwrap().push(options.clone());
        Ok(fixtures::PNG_BYTES.to_vec())
    }
}

fn buoy() -> Buoy {
    let mut buoy = Buoy::new("44097");
    buoy.parse_wave_spectra_data(
        fixtures::DIRECTIONAL_SPECTRA_44097,
        fixtures::ENERGY_SPECTRA_44097,
        1,
    )
    .unwrap();
    buoy
}

#[test]
fn test_fixture_chart_series() {
    let buoy = buoy();
    let item = &buoy.data[0];

    // First and last bins have no direction
    let directional = directional_spectra_options("44097", item);
    assert_eq!(directional["series"][0]["data"].as_array().unwrap().len(), 8);

    let distribution = spectra_distribution_options("44097", item);
    let data = distribution["series"][0]["data"].as_array().unwrap();
    assert_eq!(data.len(), 10);
    assert_eq!(data[0][0], 20.0);
    assert_eq!(data[2][1], 2.5);
}

#[tokio::test]
async fn test_render_both_charts() {
    let buoy = buoy();
    let item = &buoy.data[0];
    let renderer = RecordingRenderer::default();

    let directional = render_base64(&renderer, &directional_spectra_options("44097", item)).await;
    let distribution = render_base64(&renderer, &spectra_distribution_options("44097", item)).await;

    assert_eq!(directional, "iVBORw0KGgo=");
    assert_eq!(directional, distribution);
    assert_eq!(renderer.seen.lock().unwrap().len(), 2);
}

#[test]
fn test_component_colours() {
    let buoy = buoy();
    let gradient = PeriodGradient::default();
    let colours: Vec<String> = buoy.data[0]
        .swell_components
        .iter()
        .map(|s| gradient.color_for(s.period).to_hex())
        .collect();
    // 10 s and 5 s components land exactly on keypoints
    assert_eq!(colours, vec!["#fdae61", "#66c2a5"]);
}
