//! Spectral wave files (`realtime2/{id}.data_spec` and `.swdir`).
//!
//! Rows list `value (frequency)` pairs after the timestamp. The energy file
//! carries an extra separation frequency column before the pairs:
//!
//! ```text
//! #YY  MM DD hh mm Sep_Freq  < spec_1 (freq_1) spec_2 (freq_2) ... >
//! 2016 05 23 10 40 0.150 0.000 (0.033) 0.020 (0.038) ...
//! ```

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{BuoyDataError, BuoyDataResult};
use crate::reading::BuoyDataItem;
use crate::spectra::WaveSpectra;
use crate::units::UnitSystem;

use super::{clamp_count, data_rows, parse_spectral_value, parse_timestamp, TIMESTAMP_FIELDS};

const ENERGY_FORMAT: &str = "energy spectra";
const DIRECTION_FORMAT: &str = "directional spectra";

/// Separation frequencies at or above this value are placeholders.
const SEPARATION_MISSING: f64 = 9.0;

/// Placeholders in energy density bins.
const ENERGY_MISSING: &[f64] = &[99.0, 999.0, 9999.0];

/// Placeholders in mean direction bins; 99 degrees is a real bearing.
const DIRECTION_MISSING: &[f64] = &[999.0, 9999.0];

/// One decoded spectral row.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralRow {
    pub date: DateTime<Utc>,
    pub separation_frequency: Option<f64>,
    pub frequencies: Vec<f64>,
    pub values: Vec<Option<f64>>,
}

impl SpectralRow {
    /// Value for a frequency bin, matched within rounding of the file.
    pub fn value_at(&self, frequency: f64) -> Option<f64> {
        self.frequencies
            .iter()
            .position(|f| (f - frequency).abs() < 1e-6)
            .and_then(|i| self.values[i])
    }
}

/// Parse the rows of an energy (`.data_spec`) file.
pub fn parse_energy_rows(text: &str, count: usize) -> BuoyDataResult<Vec<SpectralRow>> {
    parse_rows(text, count, ENERGY_FORMAT, ENERGY_MISSING, true)
}

/// Parse the rows of a mean direction (`.swdir`) file.
pub fn parse_direction_rows(text: &str, count: usize) -> BuoyDataResult<Vec<SpectralRow>> {
    parse_rows(text, count, DIRECTION_FORMAT, DIRECTION_MISSING, false)
}

fn parse_rows(
    text: &str,
    count: usize,
    format: &'static str,
    missing: &[f64],
    has_separation: bool,
) -> BuoyDataResult<Vec<SpectralRow>> {
    let mut rows = Vec::new();

    for (line, tokens) in data_rows(text).take(clamp_count(count)) {
        let date = parse_timestamp(&tokens, format, line)?;

        let mut rest = &tokens[TIMESTAMP_FIELDS..];
        let mut separation_frequency = None;
        if has_separation {
            let (first, tail) = rest
                .split_first()
                .ok_or_else(|| BuoyDataError::malformed(format, line, "missing separation frequency"))?;
            separation_frequency = parse_spectral_value(first, ENERGY_MISSING).filter(|f| *f < SEPARATION_MISSING);
            rest = tail;
        }

        if rest.len() % 2 != 0 {
            return Err(BuoyDataError::malformed(format, line, "unpaired value/frequency tokens"));
        }

        let mut frequencies = Vec::with_capacity(rest.len() / 2);
        let mut values = Vec::with_capacity(rest.len() / 2);
        for pair in rest.chunks_exact(2) {
            let frequency = pair[1]
                .trim_start_matches('(')
                .trim_end_matches(')')
                .parse::<f64>()
                .map_err(|_| {
                    BuoyDataError::malformed(format, line, format!("bad frequency '{}'", pair[1]))
                })?;
            frequencies.push(frequency);
            values.push(parse_spectral_value(pair[0], missing));
        }

        rows.push(SpectralRow {
            date,
            separation_frequency,
            frequencies,
            values,
        });
    }

    if rows.is_empty() {
        return Err(BuoyDataError::NoData(format));
    }
    Ok(rows)
}

/// Combine energy and direction rows into wave records.
///
/// Rows are paired by timestamp. Energy rows without a direction row still
/// produce a record with no per-bin angles; bins with missing energy are
/// dropped.
pub fn combine(energy: &[SpectralRow], directions: &[SpectralRow]) -> Vec<BuoyDataItem> {
    energy
        .iter()
        .map(|row| {
            let direction = directions.iter().find(|d| d.date == row.date);
            if direction.is_none() {
                debug!(date = %row.date, "No directional row for energy spectrum");
            }

            let mut spectra = WaveSpectra {
                separation_frequency: row.separation_frequency,
                ..Default::default()
            };
            for (frequency, energy) in row.frequencies.iter().zip(&row.values) {
                let Some(energy) = energy else { continue };
                spectra.frequencies.push(*frequency);
                spectra.energies.push(*energy);
                spectra
                    .angles
                    .push(direction.and_then(|d| d.value_at(*frequency)));
            }

            let mut item = BuoyDataItem::new(row.date, UnitSystem::Metric);
            item.wave_summary = spectra.wave_summary();
            item.swell_components = spectra.swell_components();
            item.mean_wave_direction = item.wave_summary.as_ref().and_then(|s| s.direction);
            item.wave_spectra = Some(spectra);
            item
        })
        .collect()
}
