//! Recursive rollout over a forecast horizon.
//!
//! Holds the state both selection strategies advance step by step: the growing
//! training prefix, the withheld future, and the current lag window.

use tracing::debug;

use crate::core::{ForecastResult, WindowSet};
use crate::error::{ForecastError, Result};
use crate::models::{ModelPool, Regressor};
use crate::transform::extract_lag_windows;
use crate::utils::ErrorMeasure;

/// Rollout state for one `predict(series, horizon)` call.
///
/// The series is split into a training prefix and the last `horizon` points.
/// The withheld points are never used for fitting; after each step the true
/// value is appended to the training prefix, which also slides the lag window
/// (always the last `window_size` training values).
#[derive(Debug, Clone, PartialEq)]
pub struct Rollout {
    train: Vec<f64>,
    future: Vec<f64>,
    window_size: usize,
    step: usize,
}

impl Rollout {
    /// Split `series` for a rollout of `horizon` steps.
    ///
    /// # Errors
    /// * [`ForecastError::InvalidConfiguration`] if `window_size` or `horizon` is zero.
    /// * [`ForecastError::InsufficientLength`] if `series.len() < window_size + horizon`.
    pub fn new(series: &[f64], window_size: usize, horizon: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(ForecastError::InvalidConfiguration(
                "window_size must be positive".to_string(),
            ));
        }
        if horizon == 0 {
            return Err(ForecastError::InvalidConfiguration(
                "horizon must be positive".to_string(),
            ));
        }
        let needed = window_size + horizon;
        if series.len() < needed {
            return Err(ForecastError::InsufficientLength {
                needed,
                got: series.len(),
            });
        }

        let split = series.len() - horizon;
        let mut train = Vec::with_capacity(series.len());
        train.extend_from_slice(&series[..split]);

        Ok(Self {
            train,
            future: series[split..].to_vec(),
            window_size,
            step: 0,
        })
    }

    /// Training prefix: the original history plus every revealed value.
    pub fn train(&self) -> &[f64] {
        &self.train
    }

    /// The withheld future values.
    pub fn future(&self) -> &[f64] {
        &self.future
    }

    /// Current lag window, the last `window_size` training values.
    pub fn lags(&self) -> &[f64] {
        &self.train[self.train.len() - self.window_size..]
    }

    /// Lag windows of the current training prefix.
    ///
    /// A prefix too short to hold any window yields an empty set, which the
    /// strategies then report as a degenerate competence region.
    pub fn window_set(&self) -> Result<WindowSet> {
        match extract_lag_windows(&self.train, self.window_size) {
            Err(ForecastError::EmptyWindowSet { .. }) => Ok(WindowSet::new(self.window_size)),
            other => other,
        }
    }

    /// Zero-based index of the current step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Total number of steps.
    pub fn horizon(&self) -> usize {
        self.future.len()
    }

    /// Check if every step has been taken.
    pub fn is_done(&self) -> bool {
        self.step >= self.future.len()
    }

    /// True value for the current step.
    pub fn actual(&self) -> Option<f64> {
        self.future.get(self.step).copied()
    }

    /// Reveal the current step's true value and move to the next step.
    pub fn advance(&mut self) -> Result<()> {
        let actual = self.actual().ok_or(ForecastError::IndexOutOfBounds {
            index: self.step,
            size: self.future.len(),
        })?;
        self.train.push(actual);
        self.step += 1;
        Ok(())
    }

    /// Drive the rollout to completion.
    ///
    /// At every step `select` returns the pool index of the model to use; that
    /// model then predicts the next value from the current lag window.
    pub fn run<F>(self, pool: &mut ModelPool, select: F) -> Result<ForecastResult>
    where
        F: FnMut(&mut ModelPool, &Rollout) -> Result<usize>,
    {
        self.run_observed(pool, select, |_, _, _| Ok(()))
    }

    /// Like [`run`](Self::run), but calls `on_step(chosen, prediction, actual)`
    /// after each prediction and before the true value is revealed.
    ///
    /// Steps observed before a later failure stay observed.
    pub fn run_observed<F, G>(
        mut self,
        pool: &mut ModelPool,
        mut select: F,
        mut on_step: G,
    ) -> Result<ForecastResult>
    where
        F: FnMut(&mut ModelPool, &Rollout) -> Result<usize>,
        G: FnMut(usize, f64, f64) -> Result<()>,
    {
        let mut forecast = Vec::with_capacity(self.horizon());
        let mut selected = Vec::with_capacity(self.horizon());

        while let Some(actual) = self.actual() {
            let chosen = select(pool, &self)?;
            let model = pool.get(chosen)?;
            let prediction = predict_next(&**model, self.lags())?;
            debug!(
                step = self.step,
                model = model.name(),
                prediction,
                "selected model"
            );
            on_step(chosen, prediction, actual)?;

            forecast.push(prediction);
            selected.push(chosen);
            self.advance()?;
        }

        ForecastResult::new(forecast, self.future, selected)
    }
}

/// One-step prediction from a single lag window.
pub fn predict_next(model: &dyn Regressor, lags: &[f64]) -> Result<f64> {
    model
        .predict(&[lags.to_vec()])?
        .first()
        .copied()
        .ok_or_else(|| {
            ForecastError::ComputationError(format!(
                "model '{}' returned no prediction",
                model.name()
            ))
        })
}

/// Score a model's predictions on a competence region.
pub fn score_on_region(
    model: &dyn Regressor,
    region: &WindowSet,
    measure: ErrorMeasure,
) -> Result<f64> {
    let predictions = model.predict(region.windows())?;
    measure.score(region.targets(), &predictions)
}

/// Index of the smallest error; the first one wins ties.
///
/// NaN errors order after every number, so they are only chosen when all
/// errors are NaN.
pub fn select_best(errors: &[f64]) -> Result<usize> {
    errors
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
        .ok_or(ForecastError::EmptyData)
}
