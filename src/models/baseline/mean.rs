//! Constant-mean regressor.
//!
//! Ignores the lag window and predicts the mean of the training targets.

use crate::error::{ForecastError, Result};
use crate::models::traits::check_training_data;
use crate::models::Regressor;

/// Regressor that predicts the mean target seen during fitting.
#[derive(Debug, Clone, Default)]
pub struct MeanRegressor {
    mean: Option<f64>,
}

impl MeanRegressor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the fitted mean.
    pub fn mean(&self) -> Option<f64> {
        self.mean
    }
}

impl Regressor for MeanRegressor {
    fn fit(&mut self, features: &[Vec<f64>], targets: &[f64]) -> Result<()> {
        check_training_data(features, targets)?;
        self.mean = Some(targets.iter().sum::<f64>() / targets.len() as f64);
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<f64>> {
        let mean = self.mean.ok_or(ForecastError::FitRequired)?;
        Ok(vec![mean; features.len()])
    }

    fn name(&self) -> &str {
        "Mean"
    }

    fn is_fitted(&self) -> bool {
        self.mean.is_some()
    }
}
