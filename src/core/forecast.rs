//! Forecast result structure pairing predictions with withheld actuals.

use crate::error::{ForecastError, Result};
use crate::utils::metrics::{calculate_metrics, AccuracyMetrics};

/// Outcome of a recursive dynamic-selection forecast.
///
/// `forecast[i]` is the one-step prediction made at step `i` and `actual[i]`
/// is the withheld value it is compared against. `selected[i]` is the pool
/// index of the model that produced `forecast[i]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastResult {
    forecast: Vec<f64>,
    actual: Vec<f64>,
    selected: Vec<usize>,
}

impl ForecastResult {
    /// Create a result, checking that all sequences have the same length.
    pub fn new(forecast: Vec<f64>, actual: Vec<f64>, selected: Vec<usize>) -> Result<Self> {
        if forecast.len() != actual.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: actual.len(),
                got: forecast.len(),
            });
        }
        if selected.len() != forecast.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: forecast.len(),
                got: selected.len(),
            });
        }
        Ok(Self {
            forecast,
            actual,
            selected,
        })
    }

    /// Predicted values, one per step.
    pub fn forecast(&self) -> &[f64] {
        &self.forecast
    }

    /// Withheld future values the forecast is compared against.
    pub fn actual(&self) -> &[f64] {
        &self.actual
    }

    /// Pool index of the model chosen at each step.
    pub fn selected_models(&self) -> &[usize] {
        &self.selected
    }

    /// Number of forecast steps.
    pub fn horizon(&self) -> usize {
        self.forecast.len()
    }

    /// Check if the result holds no steps.
    pub fn is_empty(&self) -> bool {
        self.forecast.is_empty()
    }

    /// Accuracy of the forecast against the withheld actuals.
    pub fn accuracy(&self) -> Result<AccuracyMetrics> {
        calculate_metrics(&self.actual, &self.forecast)
    }

    /// Split into `(forecast, actual)`.
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>) {
        (self.forecast, self.actual)
    }
}
