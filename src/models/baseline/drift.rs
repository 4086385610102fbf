//! Window drift regressor.
//!
//! Forecasts the last value of the window plus the window's average change,
//! a one-step random walk with drift estimated locally.

use crate::error::{ForecastError, Result};
use crate::models::traits::check_training_data;
use crate::models::Regressor;

/// Regressor computing `w[last] + (w[last] - w[0]) / (len - 1)` per window.
///
/// A single-value window has no drift and predicts its value.
#[derive(Debug, Clone, Default)]
pub struct WindowDrift;

impl WindowDrift {
    pub fn new() -> Self {
        Self
    }
}

impl Regressor for WindowDrift {
    fn fit(&mut self, features: &[Vec<f64>], targets: &[f64]) -> Result<()> {
        check_training_data(features, targets)?;
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<f64>> {
        features
            .iter()
            .map(|w| {
                let (first, last) = match (w.first(), w.last()) {
                    (Some(&first), Some(&last)) => (first, last),
                    _ => return Err(ForecastError::EmptyData),
                };
                let drift = if w.len() > 1 {
                    (last - first) / (w.len() - 1) as f64
                } else {
                    0.0
                };
                Ok(last + drift)
            })
            .collect()
    }

    fn name(&self) -> &str {
        "WindowDrift"
    }

    fn is_fitted(&self) -> bool {
        true
    }
}
