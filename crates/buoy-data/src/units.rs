//! Unit systems and conversions.
//!
//! NDBC columnar files are metric (metres, m/s, hPa, degC). The latest
//! observation text is English (feet, knots, inHg, degF).

use serde::{Deserialize, Serialize};

/// Unit system a record's values are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    English,
}

impl UnitSystem {
    /// Abbreviation used for wave heights.
    pub fn height_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "m",
            UnitSystem::English => "ft",
        }
    }
}

const FEET_PER_METER: f64 = 3.28084;
const KNOTS_PER_MPS: f64 = 1.943_844;
const INHG_PER_HPA: f64 = 0.029_529_98;

pub fn meters_to_feet(value: f64) -> f64 {
    value * FEET_PER_METER
}

pub fn feet_to_meters(value: f64) -> f64 {
    value / FEET_PER_METER
}

pub fn celsius_to_fahrenheit(value: f64) -> f64 {
    value * 9.0 / 5.0 + 32.0
}

pub fn fahrenheit_to_celsius(value: f64) -> f64 {
    (value - 32.0) * 5.0 / 9.0
}

pub fn mps_to_knots(value: f64) -> f64 {
    value * KNOTS_PER_MPS
}

pub fn knots_to_mps(value: f64) -> f64 {
    value / KNOTS_PER_MPS
}

pub fn hpa_to_inhg(value: f64) -> f64 {
    value * INHG_PER_HPA
}

pub fn inhg_to_hpa(value: f64) -> f64 {
    value / INHG_PER_HPA
}

/// Convert a length between unit systems.
pub fn convert_height(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    match (from, to) {
        (UnitSystem::Metric, UnitSystem::English) => meters_to_feet(value),
        (UnitSystem::English, UnitSystem::Metric) => feet_to_meters(value),
        _ => value,
    }
}

/// Convert a speed between unit systems.
pub fn convert_speed(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    match (from, to) {
        (UnitSystem::Metric, UnitSystem::English) => mps_to_knots(value),
        (UnitSystem::English, UnitSystem::Metric) => knots_to_mps(value),
        _ => value,
    }
}

/// Convert a temperature between unit systems.
pub fn convert_temperature(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    match (from, to) {
        (UnitSystem::Metric, UnitSystem::English) => celsius_to_fahrenheit(value),
        (UnitSystem::English, UnitSystem::Metric) => fahrenheit_to_celsius(value),
        _ => value,
    }
}

/// Convert a pressure between unit systems.
pub fn convert_pressure(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    match (from, to) {
        (UnitSystem::Metric, UnitSystem::English) => hpa_to_inhg(value),
        (UnitSystem::English, UnitSystem::Metric) => inhg_to_hpa(value),
        _ => value,
    }
}
