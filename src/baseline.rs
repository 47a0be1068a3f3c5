//! Trailing baseline statistics for one (metric, pavilion) series
//!
//! The baseline is what "normal" looked like before the latest period:
//! arithmetic mean and unbiased sample standard deviation over every
//! earlier period that actually reported a number. Recomputed on every
//! run, never persisted.

use crate::scorecard::Series;

/// Minimum number of historical values needed for a defined baseline.
///
/// The sample standard deviation divides by n-1, so a single historical
/// value is as undefined as none at all.
pub const MIN_HISTORY: usize = 2;

/// Historical mean and sample standard deviation for one series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub mean: f64,
    pub std_dev: f64,
}

/// Compute the baseline over periods strictly before the series' latest.
///
/// Missing values are dropped before computing; a series whose history has
/// fewer than [`MIN_HISTORY`] reported values yields `None` and the caller
/// skips classification for that pair entirely.
///
/// Pure function of the series: no side effects, deterministic.
pub fn compute_baseline(series: &Series) -> Option<Baseline> {
    let observations = series.observations();
    let latest_period = observations.iter().map(|o| o.period).max()?;

    let history: Vec<f64> = observations
        .iter()
        .filter(|o| o.period < latest_period)
        .filter_map(|o| o.value)
        .collect();

    if history.len() < MIN_HISTORY {
        return None;
    }

    let n = history.len() as f64;
    let mean = history.iter().sum::<f64>() / n;
    let sum_sq: f64 = history.iter().map(|v| (v - mean) * (v - mean)).sum();
    // Bessel's correction: unbiased sample variance divides by n-1
    let std_dev = (sum_sq / (n - 1.0)).sqrt();

    Some(Baseline { mean, std_dev })
}
