//! Dynamic classifier selection by local accuracy (DCS-LA).
//!
//! At every forecast step the lag windows most similar to the current window
//! form a competence region. Every pool model is re-fitted on that region and
//! scored on it by mean squared error; the best one makes the next prediction.
//!
//! The score is in-sample: models are evaluated on the same region they were
//! just fitted on, with no held-out split. This favors flexible models and is
//! kept as is pending a decision on whether a held-out estimate is wanted.

use tracing::{debug, trace};

use crate::core::ForecastResult;
use crate::error::{ForecastError, Result};
use crate::models::ModelPool;
use crate::neighbors::{competence_region, SimilarityMetric};
use crate::selection::rollout::{score_on_region, select_best, Rollout};
use crate::selection::{DynamicSelector, HistoryErrors, SelectionStrategy};
use crate::utils::ErrorMeasure;

/// Configuration for [`LocalAccuracySelector`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalAccuracyConfig {
    /// Number of lags per window.
    pub window_size: usize,
    /// Size of the competence region.
    pub top_k: usize,
    /// Measure used to rank historical windows.
    pub similarity: SimilarityMetric,
}

impl Default for LocalAccuracyConfig {
    fn default() -> Self {
        Self {
            window_size: 12,
            top_k: 10,
            similarity: SimilarityMetric::Cosine,
        }
    }
}

impl LocalAccuracyConfig {
    /// Set the number of lags per window.
    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the competence region size.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set the similarity metric.
    pub fn with_similarity(mut self, similarity: SimilarityMetric) -> Self {
        self.similarity = similarity;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.window_size == 0 {
            return Err(ForecastError::InvalidConfiguration(
                "window_size must be positive".to_string(),
            ));
        }
        if self.top_k == 0 {
            return Err(ForecastError::InvalidConfiguration(
                "top_k must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// DCS-LA selector: re-fit and score every model on a similarity-ranked
/// competence region at each step.
///
/// # Example
/// ```
/// use dynsel_forecast::models::ModelPool;
/// use dynsel_forecast::models::baseline::{LastValue, MeanRegressor};
/// use dynsel_forecast::selection::{DynamicSelector, LocalAccuracyConfig, LocalAccuracySelector};
///
/// let pool = ModelPool::new(vec![
///     Box::new(MeanRegressor::new()),
///     Box::new(LastValue::new()),
/// ])
/// .unwrap();
/// let config = LocalAccuracyConfig::default().with_window_size(5);
/// let mut selector = LocalAccuracySelector::new(pool, config).unwrap();
///
/// let series: Vec<f64> = (1..=20).map(|i| i as f64).collect();
/// let result = selector.predict(&series, 3).unwrap();
/// assert_eq!(result.forecast(), &[17.0, 18.0, 19.0]);
/// assert_eq!(result.actual(), &[18.0, 19.0, 20.0]);
/// ```
#[derive(Debug)]
pub struct LocalAccuracySelector {
    pool: ModelPool,
    config: LocalAccuracyConfig,
    history: HistoryErrors,
}

impl LocalAccuracySelector {
    /// Create a selector over `pool`.
    pub fn new(pool: ModelPool, config: LocalAccuracyConfig) -> Result<Self> {
        config.validate()?;
        let history = HistoryErrors::new(pool.len());
        Ok(Self {
            pool,
            config,
            history,
        })
    }

    /// The selector configuration.
    pub fn config(&self) -> &LocalAccuracyConfig {
        &self.config
    }

    /// Re-fit every model on `rollout`'s competence region and return the
    /// index of the lowest-MSE model.
    fn select(
        config: &LocalAccuracyConfig,
        pool: &mut ModelPool,
        rollout: &Rollout,
    ) -> Result<usize> {
        let windows = rollout.window_set()?;
        let region = competence_region(
            rollout.lags(),
            &windows,
            config.similarity,
            config.top_k,
        )?;

        let mut errors = Vec::with_capacity(pool.len());
        for model in pool.iter_mut() {
            model.fit(region.windows(), region.targets())?;
            errors.push(score_on_region(&**model, &region, ErrorMeasure::Squared)?);
        }
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

impl DynamicSelector for LocalAccuracySelector {
    fn predict(&mut self, series: &[f64], horizon: usize) -> Result<ForecastResult> {
        let rollout = Rollout::new(series, self.config.window_size, horizon)?;
        debug!(
            strategy = self.name(),
            window_size = self.config.window_size,
            top_k = self.config.top_k,
            similarity = %self.config.similarity,
            horizon,
            "starting rollout"
        );

        let config = self.config;
        rollout.run(&mut self.pool, |pool, state| Self::select(&config, pool, state))
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
        SelectionStrategy::LocalAccuracy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::baseline::{LastValue, MeanRegressor, WindowDrift};
    use crate::models::LinearRegressor;

    fn mean_and_last() -> ModelPool {
        ModelPool::new(vec![
            Box::new(MeanRegressor::new()),
            Box::new(LastValue::new()),
        ])
        .unwrap()
    }

    fn linear_series(n: usize) -> Vec<f64> {
        (1..=n).map(|i| i as f64).collect()
    }

    #[test]
    fn default_config() {
        let config = LocalAccuracyConfig::default();
        assert_eq!(config.window_size, 12);
        assert_eq!(config.top_k, 10);
        assert_eq!(config.similarity, SimilarityMetric::Cosine);
    }

    #[test]
    fn selects_last_value_on_linear_series() {
        let config = LocalAccuracyConfig::default().with_window_size(5);
        let mut selector = LocalAccuracySelector::new(mean_and_last(), config).unwrap();

        let result = selector.predict(&linear_series(20), 3).unwrap();

        assert_eq!(result.forecast(), &[17.0, 18.0, 19.0]);
        assert_eq!(result.actual(), &[18.0, 19.0, 20.0]);
        assert_eq!(result.selected_models(), &[1, 1, 1]);
    }

    #[test]
    fn euclidean_metric_selects_same_model() {
        let config = LocalAccuracyConfig::default()
            .with_window_size(5)
            .with_similarity(SimilarityMetric::Euclidean);
        let mut selector = LocalAccuracySelector::new(mean_and_last(), config).unwrap();

        let result = selector.predict(&linear_series(20), 3).unwrap();
        assert_eq!(result.selected_models(), &[1, 1, 1]);
    }

    #[test]
    fn drift_beats_last_value_on_trend() {
        let pool = ModelPool::new(vec![
            Box::new(LastValue::new()),
            Box::new(WindowDrift::new()),
        ])
        .unwrap();
        let config = LocalAccuracyConfig::default().with_window_size(4).with_top_k(5);
        let mut selector = LocalAccuracySelector::new(pool, config).unwrap();

        let series: Vec<f64> = (0..30).map(|i| 2.0 * i as f64).collect();
        let result = selector.predict(&series, 4).unwrap();

        assert_eq!(result.selected_models(), &[1, 1, 1, 1]);
        assert_eq!(result.forecast(), result.actual());
    }

    #[test]
    fn insufficient_length_fails_fast() {
        let mut selector =
            LocalAccuracySelector::new(mean_and_last(), LocalAccuracyConfig::default()).unwrap();
        let series = linear_series(10);
        assert_eq!(
            selector.predict(&series, 1),
            Err(ForecastError::InsufficientLength {
                needed: 13,
                got: 10
            })
        );
    }

    #[test]
    fn too_few_windows_is_degenerate() {
        // 16 training points with W=5 give 10 windows; top_k asks for 11
        let config = LocalAccuracyConfig::default()
            .with_window_size(5)
            .with_top_k(11);
        let mut selector = LocalAccuracySelector::new(mean_and_last(), config).unwrap();
        assert_eq!(
            selector.predict(&linear_series(18), 2),
            Err(ForecastError::DegenerateRegion {
                requested: 11,
                available: 10
            })
        );
    }

    #[test]
    fn invalid_configuration() {
        let zero_k = LocalAccuracyConfig::default().with_top_k(0);
        assert!(matches!(
            LocalAccuracySelector::new(mean_and_last(), zero_k),
            Err(ForecastError::InvalidConfiguration(_))
        ));

        let zero_window = LocalAccuracyConfig::default().with_window_size(0);
        assert!(matches!(
            LocalAccuracySelector::new(mean_and_last(), zero_window),
            Err(ForecastError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn zero_horizon_is_invalid() {
        let mut selector =
            LocalAccuracySelector::new(mean_and_last(), LocalAccuracyConfig::default()).unwrap();
        assert!(matches!(
            selector.predict(&linear_series(30), 0),
            Err(ForecastError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn repeated_predictions_are_identical() {
        let pool = ModelPool::new(vec![
            Box::new(MeanRegressor::new()),
            Box::new(LinearRegressor::new()),
            Box::new(WindowDrift::new()),
        ])
        .unwrap();
        let config = LocalAccuracyConfig::default().with_window_size(6).with_top_k(8);
        let mut selector = LocalAccuracySelector::new(pool, config).unwrap();

        let series: Vec<f64> = (0..60)
            .map(|i| 10.0 + (i as f64 * 0.4).sin() * 3.0 + 0.1 * i as f64)
            .collect();
        let first = selector.predict(&series, 6).unwrap();
        let second = selector.predict(&series, 6).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.horizon(), 6);
    }

    #[test]
    fn history_is_not_recorded() {
        let config = LocalAccuracyConfig::default().with_window_size(5);
        let mut selector = LocalAccuracySelector::new(mean_and_last(), config).unwrap();
        selector.predict(&linear_series(20), 3).unwrap();
        assert!(selector.history().is_empty());
        assert_eq!(selector.history().models(), 2);
        assert_eq!(selector.name(), "DCS-LA");
        assert_eq!(selector.window_size(), 5);
    }
}
