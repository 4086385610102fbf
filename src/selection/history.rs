//! Rolling per-model error history.

use crate::error::{ForecastError, Result};

/// Absolute errors recorded per pool model, in the order they occurred.
///
/// Models are identified by their index in the pool. The history lives as
/// long as the selector that owns it and is only emptied by [`clear`].
///
/// [`clear`]: HistoryErrors::clear
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryErrors {
    errors: Vec<Vec<f64>>,
}

impl HistoryErrors {
    /// Create an empty history for a pool of `models` models.
    pub fn new(models: usize) -> Self {
        Self {
            errors: vec![Vec::new(); models],
        }
    }

    /// Append an error to `model`'s history.
    pub fn record(&mut self, model: usize, error: f64) -> Result<()> {
        let size = self.errors.len();
        self.errors
            .get_mut(model)
            .ok_or(ForecastError::IndexOutOfBounds { index: model, size })?
            .push(error);
        Ok(())
    }

    /// Errors recorded for `model`; empty for unknown models.
    pub fn errors(&self, model: usize) -> &[f64] {
        self.errors.get(model).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Mean recorded error for `model`, if it has any.
    pub fn mean_error(&self, model: usize) -> Option<f64> {
        let errors = self.errors(model);
        if errors.is_empty() {
            None
        } else {
            Some(errors.iter().sum::<f64>() / errors.len() as f64)
        }
    }

    /// Number of models tracked.
    pub fn models(&self) -> usize {
        self.errors.len()
    }

    /// Total number of recorded errors across all models.
    pub fn total_records(&self) -> usize {
        self.errors.iter().map(Vec::len).sum()
    }

    /// Check if no errors have been recorded.
    pub fn is_empty(&self) -> bool {
        self.total_records() == 0
    }

    /// Iterate over `(model index, errors)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[f64])> {
        self.errors.iter().map(Vec::as_slice).enumerate()
    }

    /// Forget every recorded error, keeping the tracked models.
    pub fn clear(&mut self) {
        for errors in &mut self.errors {
            errors.clear();
        }
    }
}
