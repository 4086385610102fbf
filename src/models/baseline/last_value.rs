//! Last-value regressor.
//!
//! The lag-window analogue of the naive method: each window predicts its own
//! most recent observation.

use crate::error::{ForecastError, Result};
use crate::models::traits::check_training_data;
use crate::models::Regressor;

/// Regressor that repeats the last value of each window.
///
/// Has no parameters, so it counts as fitted from construction. Fitting
/// only validates the training data.
#[derive(Debug, Clone, Default)]
pub struct LastValue;

impl LastValue {
    pub fn new() -> Self {
        Self
    }
}

impl Regressor for LastValue {
    fn fit(&mut self, features: &[Vec<f64>], targets: &[f64]) -> Result<()> {
        check_training_data(features, targets)?;
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<f64>> {
        features
            .iter()
            .map(|w| w.last().copied().ok_or(ForecastError::EmptyData))
            .collect()
    }

    fn name(&self) -> &str {
        "LastValue"
    }

    fn is_fitted(&self) -> bool {
        true
    }
}
