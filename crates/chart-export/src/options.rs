//! Highcharts option documents for wave spectra.

use buoy_data::BuoyDataItem;
use serde_json::{json, Value};

use crate::numbers::to_fixed_point;

/// Longest period shown on the distribution chart, in seconds.
const MAX_PERIOD_S: f64 = 20.0;

fn valid_subtitle(item: &BuoyDataItem) -> String {
    format!("Valid {}", item.date.format("%m/%d/%Y %H:%M UTC"))
}

fn axis_labels() -> Value {
    json!({ "style": { "fontWeight": "bold", "fontSize": "13px" } })
}

fn energy_axis() -> Value {
    json!({
        "labels": axis_labels(),
        "gridLineWidth": 1,
        "min": 0,
        "endOnTick": true,
        "showLastLabel": true,
        "title": { "useHTML": true, "text": "Energy (m<sup>2</sup>/Hz)" },
        "reversedStacks": false
    })
}

fn title(text: String) -> Value {
    json!({ "text": text, "style": { "font": "10px Helvetica, sans-serif" } })
}

fn subtitle(text: String) -> Value {
    json!({ "text": text, "style": { "font": "8px Helvetica, sans-serif" } })
}

/// `[direction, energy]` points for bins that report a direction.
pub fn directional_points(item: &BuoyDataItem) -> Vec<[f64; 2]> {
    let Some(spectra) = item.wave_spectra.as_ref() else {
        return Vec::new();
    };
    (0..spectra.len())
        .filter_map(|i| {
            let angle = spectra.angle(i)?;
            Some([to_fixed_point(angle, 2), to_fixed_point(spectra.energies[i], 2)])
        })
        .collect()
}

/// `[period, energy]` points, skipping zero frequencies.
pub fn distribution_points(item: &BuoyDataItem) -> Vec<[f64; 2]> {
    let Some(spectra) = item.wave_spectra.as_ref() else {
        return Vec::new();
    };
    (0..spectra.len())
        .filter(|&i| spectra.frequencies[i] > 0.0)
        .map(|i| {
            [
                to_fixed_point(1.0 / spectra.frequencies[i], 2),
                to_fixed_point(spectra.energies[i], 2),
            ]
        })
        .collect()
}

/// Polar column chart of energy by direction.
pub fn directional_spectra_options(station_id: &str, item: &BuoyDataItem) -> Value {
    json!({
        "chart": {
            "polar": true,
            "type": "column",
            "spacing": [0, 0, 0, 0],
            "margin": [20, 0, 0, 0],
            "width": 600,
            "height": 600
        },
        "title": title(format!("Station {}: Directional Wave Spectra", station_id)),
        "subtitle": subtitle(valid_subtitle(item)),
        "legend": { "enabled": false },
        "credits": { "enabled": false },
        "pane": { "startAngle": 0, "endAngle": 360 },
        "xAxis": {
            "labels": axis_labels(),
            "gridLineWidth": 1,
            "tickmarkPlacement": "on",
            "tickInterval": 45,
            "min": 0,
            "max": 360,
            "minPadding": 0,
            "maxPadding": 0
        },
        "yAxis": energy_axis(),
        "plotOptions": {
            "series": {
                "stacking": null,
                "shadow": false,
                "groupPadding": 0,
                "pointPlacement": "on",
                "pointWidth": 0.6
            }
        },
        "series": [{
            "type": "column",
            "name": "Energy",
            "data": directional_points(item),
            "pointPlacement": "on",
            "colorByPoint": true
        }]
    })
}

/// Line chart of energy by wave period.
pub fn spectra_distribution_options(station_id: &str, item: &BuoyDataItem) -> Value {
    json!({
        "chart": { "type": "line" },
        "title": title(format!("Station {}: Wave Spectra", station_id)),
        "subtitle": subtitle(valid_subtitle(item)),
        "legend": { "enabled": false },
        "credits": { "enabled": false },
        "xAxis": {
            "labels": axis_labels(),
            "min": 0,
            "max": MAX_PERIOD_S,
            "title": { "text": "Period (s)" },
            "gridLineWidth": 1,
            "tickmarkPlacement": "on",
            "minPadding": 0,
            "maxPadding": 0
        },
        "yAxis": energy_axis(),
        "plotOptions": {
            "series": { "stacking": null, "shadow": false, "groupPadding": 0 }
        },
        "series": [{
            "type": "line",
            "name": "Energy",
            "data": distribution_points(item)
        }]
    })
}
