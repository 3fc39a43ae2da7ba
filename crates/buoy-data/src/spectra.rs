//! Wave energy spectra and swell partitioning.
//!
//! Energy densities are in m²/Hz. Significant wave height for a band of the
//! spectrum is `4 * sqrt(m0)` where `m0` is the band's zeroth moment.

use serde::{Deserialize, Serialize};

use crate::swell::Swell;
use crate::units::UnitSystem;

/// Peaks below this fraction of the spectral maximum are treated as noise.
const PEAK_THRESHOLD_RATIO: f64 = 0.05;

/// Partitions with a lower significant height (metres) are dropped.
const MIN_COMPONENT_HEIGHT_M: f64 = 0.1;

/// Frequency-resolved wave energy for one observation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WaveSpectra {
    /// Bin centre frequencies in Hz, ascending.
    pub frequencies: Vec<f64>,

    /// Energy density per bin in m²/Hz.
    pub energies: Vec<f64>,

    /// Mean wave direction per bin (degrees true), when reported.
    #[serde(default)]
    pub angles: Vec<Option<f64>>,

    /// Swell/wind-sea separation frequency reported by the buoy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separation_frequency: Option<f64>,
}

impl WaveSpectra {
    /// Number of frequency bins.
    pub fn len(&self) -> usize {
        self.frequencies.len().min(self.energies.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Direction at a bin, if reported.
    pub fn angle(&self, index: usize) -> Option<f64> {
        self.angles.get(index).copied().flatten()
    }

    /// Width of each frequency bin, from central differences.
    pub fn bandwidths(&self) -> Vec<f64> {
        let n = self.len();
        let f = &self.frequencies;
        match n {
            0 => Vec::new(),
            1 => vec![0.0],
            _ => (0..n)
                .map(|i| {
                    if i == 0 {
                        f[1] - f[0]
                    } else if i == n - 1 {
                        f[n - 1] - f[n - 2]
                    } else {
                        (f[i + 1] - f[i - 1]) / 2.0
                    }
                })
                .collect(),
        }
    }

    /// Zeroth spectral moment over `start..end`.
    pub fn zeroth_moment(&self, start: usize, end: usize) -> f64 {
        let widths = self.bandwidths();
        let end = end.min(self.len());
        (start..end).map(|i| self.energies[i] * widths[i]).sum()
    }

    /// Significant wave height of the whole spectrum in metres.
    pub fn significant_wave_height(&self) -> f64 {
        4.0 * self.zeroth_moment(0, self.len()).sqrt()
    }

    /// Index of the most energetic bin.
    pub fn peak_index(&self) -> Option<usize> {
        (0..self.len())
            .filter(|&i| self.frequencies[i] > 0.0)
            .max_by(|&a, &b| self.energies[a].total_cmp(&self.energies[b]))
    }

    /// Period of the most energetic bin in seconds.
    pub fn peak_period(&self) -> Option<f64> {
        self.peak_index().map(|i| 1.0 / self.frequencies[i])
    }

    /// Summary swell for the whole spectrum.
    pub fn wave_summary(&self) -> Option<Swell> {
        let peak = self.peak_index()?;
        Some(Swell::new(
            self.significant_wave_height(),
            1.0 / self.frequencies[peak],
            self.angle(peak),
            UnitSystem::Metric,
        ))
    }

    /// Split the spectrum into swell components.
    ///
    /// Each local maximum above the noise threshold owns the bins between the
    /// troughs on either side of it. Components are sorted by height, largest
    /// first.
    pub fn swell_components(&self) -> Vec<Swell> {
        let peaks = self.local_maxima();
        if peaks.is_empty() {
            return Vec::new();
        }

        let mut bounds = Vec::with_capacity(peaks.len() + 1);
        bounds.push(0);
        for pair in peaks.windows(2) {
            bounds.push(self.trough_between(pair[0], pair[1]));
        }
        bounds.push(self.len());

        let mut components: Vec<Swell> = peaks
            .iter()
            .enumerate()
            .filter_map(|(k, &peak)| {
                let height = 4.0 * self.zeroth_moment(bounds[k], bounds[k + 1]).sqrt();
                if height < MIN_COMPONENT_HEIGHT_M {
                    return None;
                }
                Some(Swell::new(
                    height,
                    1.0 / self.frequencies[peak],
                    self.angle(peak),
                    UnitSystem::Metric,
                ))
            })
            .collect();

        components.sort_by(|a, b| b.wave_height.total_cmp(&a.wave_height));
        components
    }

    fn local_maxima(&self) -> Vec<usize> {
        let n = self.len();
        let e = &self.energies;
        let max = e.iter().take(n).copied().fold(0.0_f64, f64::max);
        if max <= 0.0 {
            return Vec::new();
        }
        let threshold = max * PEAK_THRESHOLD_RATIO;

        (0..n)
            .filter(|&i| {
                let rising = i == 0 || e[i] > e[i - 1];
                let falling = i == n - 1 || e[i] >= e[i + 1];
                rising && falling && e[i] >= threshold && self.frequencies[i] > 0.0
            })
            .collect()
    }

    fn trough_between(&self, left: usize, right: usize) -> usize {
        (left + 1..right)
            .min_by(|&a, &b| self.energies[a].total_cmp(&self.energies[b]))
            .unwrap_or(right)
    }
}
