//! Latest observation text (`latest_obs/{id}.txt`).
//!
//! The file is a human readable summary in English units:
//!
//! ```text
//! Station 44013
//! 42°20'46" N 70°39'4" W
//!
//! 6:50 am EDT
//! 1050 GMT 05/23/16
//! Wind: NE (50°), 9.9 kt
//! Seas: 2.0 ft
//! Peak Period: 4 sec
//!
//! Wave Summary
//! 6:50 am EDT
//! 1050 GMT 05/23/16
//! Swell: 1.0 ft
//! Period: 7.7 sec
//! Direction: ESE
//! ```

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::error::{BuoyDataError, BuoyDataResult};
use crate::location::{parse_coordinate_line, Location};
use crate::reading::BuoyDataItem;
use crate::swell::{compass_to_degrees, Swell};
use crate::units::UnitSystem;

const FORMAT: &str = "latest";

/// Decoded latest observation.
#[derive(Debug, Clone, PartialEq)]
pub struct LatestObservation {
    pub station_id: Option<String>,
    pub location: Option<Location>,
    pub item: BuoyDataItem,
}

#[derive(Default)]
struct PendingSwell {
    height: Option<f64>,
    period: Option<f64>,
    compass: Option<String>,
}

impl PendingSwell {
    fn finish(self) -> Option<Swell> {
        let height = self.height?;
        let period = self.period.unwrap_or(0.0);
        Some(match self.compass {
            Some(compass) => Swell::from_compass(height, period, &compass, UnitSystem::English),
            None => Swell::new(height, period, None, UnitSystem::English),
        })
    }
}

/// Parse a latest observation document.
pub fn parse(text: &str) -> BuoyDataResult<LatestObservation> {
    let mut station_id = None;
    let mut location = None;
    let mut date = None;
    let mut fields: Vec<(String, String)> = Vec::new();
    let mut wave_section: Vec<(String, String)> = Vec::new();
    let mut in_wave_section = false;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(id) = line.strip_prefix("Station ") {
            station_id = Some(id.trim().to_string());
            continue;
        }
        if line.eq_ignore_ascii_case("Wave Summary") {
            in_wave_section = true;
            continue;
        }
        if location.is_none() {
            if let Some(loc) = parse_coordinate_line(line) {
                location = Some(loc);
                continue;
            }
        }
        if let Some(ts) = parse_gmt_line(line) {
            date.get_or_insert(ts);
            continue;
        }
        if let Some((key, value)) = line.split_once(':') {
            let entry = (key.trim().to_string(), value.trim().to_string());
            if in_wave_section {
                wave_section.push(entry);
            } else {
                fields.push(entry);
            }
        }
    }

    let date = date.ok_or(BuoyDataError::MissingHeader { format: FORMAT })?;
    let mut item = BuoyDataItem::new(date, UnitSystem::English);

    let mut seas = None;
    let mut peak_period = None;
    let mut mean_direction = None;

    for (key, value) in &fields {
        let values = numbers(value);
        match key.as_str() {
            "Wind" => {
                item.wind_compass_direction = first_word(value);
                item.wind_direction = bracketed_number(value);
                item.wind_speed = values.last().copied();
            }
            "Gust" => item.wind_gust = values.first().copied(),
            "Seas" => seas = values.first().copied(),
            "Peak Period" => peak_period = values.first().copied(),
            "Mean Wave Dir" => {
                mean_direction = bracketed_number(value)
                    .or_else(|| first_word(value).and_then(|c| compass_to_degrees(&c)));
            }
            "Pres" => {
                item.pressure = values.first().copied();
                item.pressure_trend = value
                    .split_whitespace()
                    .last()
                    .filter(|w| w.chars().all(|c| c.is_ascii_alphabetic()) && *w != "in")
                    .map(str::to_string);
            }
            "Pres Tend" | "3hr Pres Tend" | "Pressure Tendency" => {
                item.pressure_tendency = values.first().copied()
            }
            "Air Temp" => item.air_temperature = values.first().copied(),
            "Water Temp" => item.water_temperature = values.first().copied(),
            "Dew Point" => item.dewpoint_temperature = values.first().copied(),
            "Visibility" | "Vis" => item.visibility = values.first().copied(),
            "Tide" => item.tide = values.first().copied(),
            _ => {}
        }
    }

    if let Some(height) = seas {
        item.wave_summary = Some(Swell::new(
            height,
            peak_period.unwrap_or(0.0),
            mean_direction,
            UnitSystem::English,
        ));
    }
    item.mean_wave_direction = mean_direction;

    let mut pending = PendingSwell::default();
    for (key, value) in &wave_section {
        match key.as_str() {
            "Swell" | "Wind Wave" => {
                if let Some(swell) = std::mem::take(&mut pending).finish() {
                    item.swell_components.push(swell);
                }
                pending.height = numbers(value).first().copied();
            }
            "Period" => pending.period = numbers(value).first().copied(),
            "Direction" => pending.compass = first_word(value),
            "Steepness" => item.steepness = Some(value.clone()),
            "Ave. Period" | "Average Period" => item.average_period = numbers(value).first().copied(),
            _ => {}
        }
    }
    if let Some(swell) = pending.finish() {
        item.swell_components.push(swell);
    }

    Ok(LatestObservation {
        station_id,
        location,
        item,
    })
}

/// Parse `1050 GMT 05/23/16`.
fn parse_gmt_line(line: &str) -> Option<DateTime<Utc>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != 3 || tokens[1] != "GMT" {
        return None;
    }

    let hhmm: u32 = tokens[0].parse().ok()?;
    let mut date = tokens[2].split('/').map(str::parse::<u32>);
    let month = date.next()?.ok()?;
    let day = date.next()?.ok()?;
    let year = date.next()?.ok()? as i32;
    let year = if year < 100 { year + 2000 } else { year };

    let naive = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hhmm / 100, hhmm % 100, 0)?;
    Some(Utc.from_utc_datetime(&naive))
}

/// All numeric tokens in a value, ignoring units and punctuation.
fn numbers(value: &str) -> Vec<f64> {
    value
        .split_whitespace()
        .map(|t| t.trim_matches(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-')))
        .filter_map(|t| t.parse().ok())
        .collect()
}

/// Number inside parentheses, e.g. the `50` in `NE (50°)`.
fn bracketed_number(value: &str) -> Option<f64> {
    let start = value.find('(')?;
    let end = value[start..].find(')')? + start;
    numbers(&value[start + 1..end]).first().copied()
}

fn first_word(value: &str) -> Option<String> {
    value
        .split_whitespace()
        .next()
        .filter(|w| w.chars().all(|c| c.is_ascii_alphabetic()))
        .map(str::to_string)
}
