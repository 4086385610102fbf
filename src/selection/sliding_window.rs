//! Dynamic selection on a sliding window of past windows (DSNAW).
//!
//! Every pool model is fitted once, upfront, on all lag windows of the
//! training prefix. At each step the models are scored by mean absolute error
//! on the window history minus its most recent `last_k` windows, and the best
//! one makes the next prediction. The chosen model's absolute error is added
//! to the selector's rolling history.

use tracing::{debug, trace};

use crate::core::ForecastResult;
use crate::error::{ForecastError, Result};
use crate::models::ModelPool;
use crate::selection::rollout::{score_on_region, select_best, Rollout};
use crate::selection::{DynamicSelector, HistoryErrors, SelectionStrategy};
use crate::utils::ErrorMeasure;

/// Configuration for [`SlidingWindowSelector`].
///
/// `last_k` has no default and must be given to [`SlidingWindowConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingWindowConfig {
    /// Number of lags per window.
    pub window_size: usize,
    /// Number of most recent windows excluded from the competence region.
    pub last_k: usize,
}

impl SlidingWindowConfig {
    /// Create a configuration with the default window size of 12.
    pub fn new(last_k: usize) -> Self {
        Self {
            window_size: 12,
            last_k,
        }
    }

    /// Set the number of lags per window.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(ForecastError::InvalidConfiguration(
                "window_size must be positive".to_string(),
            ));
        }
        if self.last_k == 0 {
            return Err(ForecastError::InvalidConfiguration(
                "last_k must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// DSNAW selector: score models fitted once upfront on a trailing-excluded
/// slice of the window history.
///
/// The [`history`](DynamicSelector::history) accumulates across calls to
/// `predict` and is never reset automatically.
///
/// # Example
/// ```
/// use dynsel_forecast::models::ModelPool;
/// use dynsel_forecast::models::baseline::{LastValue, MeanRegressor};
/// use dynsel_forecast::selection::{DynamicSelector, SlidingWindowConfig, SlidingWindowSelector};
///
/// let pool = ModelPool::new(vec![
///     Box::new(MeanRegressor::new()),
///     Box::new(LastValue::new()),
/// ])
/// .unwrap();
/// let config = SlidingWindowConfig::new(3).with_window_size(5);
/// let mut selector = SlidingWindowSelector::new(pool, config).unwrap();
///
/// let series: Vec<f64> = (1..=20).map(|i| i as f64).collect();
/// let result = selector.predict(&series, 3).unwrap();
/// assert_eq!(result.forecast(), &[17.0, 18.0, 19.0]);
/// assert_eq!(selector.history().errors(1), &[1.0, 1.0, 1.0]);
/// ```
#[derive(Debug)]
pub struct SlidingWindowSelector {
    pool: ModelPool,
    config: SlidingWindowConfig,
    history: HistoryErrors,
}

impl SlidingWindowSelector {
    /// Create a selector over `pool`.
    pub fn new(pool: ModelPool, config: SlidingWindowConfig) -> Result<Self> {
        config.validate()?;
        let history = HistoryErrors::new(pool.len());
        Ok(Self {
            pool,
            config,
            history,
        })
    }

    /// The selector configuration.
    pub fn config(&self) -> &SlidingWindowConfig {
        &self.config
    }

    /// Forget the accumulated error history.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Score the pretrained models on the window history minus its most
    /// recent `last_k` windows and return the index of the lowest-MAE model.
    fn select(last_k: usize, pool: &ModelPool, rollout: &Rollout) -> Result<usize> {
        let region = rollout.window_set()?.without_last(last_k)?;

        let errors = pool
            .iter()
            .map(|model| score_on_region(&**model, &region, ErrorMeasure::Absolute))
            .collect::<Result<Vec<f64>>>()?;
        trace!(step = rollout.step(), ?errors, "competence errors");

        let best = select_best(&errors)?;
        debug!(
            step = rollout.step(),
            model = best,
            score = errors[best],
            "competence winner"
        );
        Ok(best)
    }
}

impl DynamicSelector for SlidingWindowSelector {
    fn predict(&mut self, series: &[f64], horizon: usize) -> Result<ForecastResult> {
        let rollout = Rollout::new(series, self.config.window_size, horizon)?;
        debug!(
            strategy = self.name(),
            window_size = self.config.window_size,
            last_k = self.config.last_k,
            horizon,
            "starting rollout"
        );

        // Region check first so a too-short prefix fails before any fitting
        let initial = rollout.window_set()?;
        initial.without_last(self.config.last_k)?;
        self.pool.fit_all(initial.windows(), initial.targets())?;

        let last_k = self.config.last_k;
        let history = &mut self.history;
        rollout.run_observed(
            &mut self.pool,
            |pool, state| Self::select(last_k, pool, state),
            |chosen, prediction, actual| history.record(chosen, (actual - prediction).abs()),
        )
    }

    fn window_size(&self) -> usize {
        self.config.window_size
    }

    fn pool(&self) -> &ModelPool {
        &self.pool
    }

    fn history(&self) -> &HistoryErrors {
        &self.history
    }

    fn strategy(&self) -> SelectionStrategy {
        SelectionStrategy::SlidingWindow
    }
}
