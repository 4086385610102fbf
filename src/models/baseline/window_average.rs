//! Window-average regressor: predicts the mean of each lag window.

use crate::error::{ForecastError, Result};
use crate::models::traits::check_training_data;
use crate::models::Regressor;

/// Regressor that averages the values of each window.
#[derive(Debug, Clone, Default)]
pub struct WindowAverage;

impl WindowAverage {
    pub fn new() -> Self {
        Self
    }
}

impl Regressor for WindowAverage {
    fn fit(&mut self, features: &[Vec<f64>], targets: &[f64]) -> Result<()> {
        check_training_data(features, targets)?;
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<f64>> {
        features
            .iter()
            .map(|w| {
                if w.is_empty() {
                    Err(ForecastError::EmptyData)
                } else {
                    Ok(w.iter().sum::<f64>() / w.len() as f64)
                }
            })
            .collect()
    }

    fn name(&self) -> &str {
        "WindowAverage"
    }

    fn is_fitted(&self) -> bool {
        true
    }
}
