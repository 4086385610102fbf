//! Chronological train / validation / test splitting of a single series.

use crate::error::{ForecastError, Result};

/// Fractions controlling [`split_series`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitConfig {
    /// Share of the series placed before the test segment.
    pub train_fraction: f64,
    /// Share of the pre-test segment kept for fitting; the rest is validation.
    pub fit_fraction: f64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train_fraction: 0.7,
            fit_fraction: 0.8,
        }
    }
}

impl SplitConfig {
    /// Set the pre-test share.
    pub fn with_train_fraction(mut self, fraction: f64) -> Self {
        self.train_fraction = fraction;
        self
    }

    /// Set the fitting share of the pre-test segment.
    pub fn with_fit_fraction(mut self, fraction: f64) -> Self {
        self.fit_fraction = fraction;
        self
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("train_fraction", self.train_fraction),
            ("fit_fraction", self.fit_fraction),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ForecastError::InvalidConfiguration(format!(
                    "{name} must be in (0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// The three contiguous segments of a split series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSplit {
    pub train: Vec<f64>,
    pub validation: Vec<f64>,
    pub test: Vec<f64>,
}

/// Split a series into train, validation and test segments, preserving order.
///
/// With `n` points, `train_end = floor(n * train_fraction)` and
/// `validation_start = floor(train_end * fit_fraction)`. Train is
/// `[..validation_start]`, validation `[validation_start..train_end]` and
/// test `[train_end..]`.
///
/// # Example
/// ```
/// use dynsel_forecast::utils::split::{split_series, SplitConfig};
///
/// let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
/// let split = split_series(&values, &SplitConfig::default()).unwrap();
/// assert_eq!(split.train.len(), 56);
/// assert_eq!(split.validation.len(), 14);
/// assert_eq!(split.test.len(), 30);
/// ```
pub fn split_series(values: &[f64], config: &SplitConfig) -> Result<SeriesSplit> {
    config.validate()?;
    if values.is_empty() {
        return Err(ForecastError::EmptyData);
    }

    let n = values.len();
    let train_end = ((n as f64 * config.train_fraction).floor() as usize).min(n);
    let validation_start = (train_end as f64 * config.fit_fraction).floor() as usize;

    Ok(SeriesSplit {
        train: values[..validation_start].to_vec(),
        validation: values[validation_start..train_end].to_vec(),
        test: values[train_end..].to_vec(),
    })
}
