//! Parallel forecasting over many independent series.
//!
//! Each series gets its own selector from the factory, so model pools are
//! never shared between threads. Results come back in input order.

use rayon::prelude::*;
use tracing::debug;

use crate::core::ForecastResult;
use crate::error::Result;
use crate::selection::DynamicSelector;

/// Forecast for one named series.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchForecast {
    /// Series identifier.
    pub id: String,
    /// Rollout result for the series.
    pub result: ForecastResult,
}

/// Run a fresh selector over every series in parallel.
///
/// `factory` is called once per series. If any series fails, the error of
/// the first failing series in input order is returned.
///
/// # Example
/// ```
/// use dynsel_forecast::batch::forecast_batch;
/// use dynsel_forecast::models::ModelPool;
/// use dynsel_forecast::models::baseline::{LastValue, WindowAverage};
/// use dynsel_forecast::selection::{LocalAccuracyConfig, LocalAccuracySelector};
///
/// let series = vec![
///     ("up".to_string(), (1..=30).map(|i| i as f64).collect::<Vec<_>>()),
///     ("flat".to_string(), vec![4.0; 30]),
/// ];
/// let results = forecast_batch(&series, 2, || {
///     let pool = ModelPool::new(vec![
///         Box::new(WindowAverage::new()),
///         Box::new(LastValue::new()),
///     ])?;
///     LocalAccuracySelector::new(pool, LocalAccuracyConfig::default().with_window_size(4))
/// })
/// .unwrap();
///
/// assert_eq!(results[0].id, "up");
/// assert_eq!(results[1].result.forecast(), &[4.0, 4.0]);
/// ```
pub fn forecast_batch<S, F>(
    series: &[(String, Vec<f64>)],
    horizon: usize,
    factory: F,
) -> Result<Vec<BatchForecast>>
where
    S: DynamicSelector,
    F: Fn() -> Result<S> + Sync,
{
    debug!(series = series.len(), horizon, "starting batch forecast");

    let outcomes: Vec<Result<BatchForecast>> = series
        .par_iter()
        .map(|(id, values)| {
            let mut selector = factory()?;
            let result = selector.predict(values, horizon)?;
            Ok(BatchForecast {
                id: id.clone(),
                result,
            })
        })
        .collect();

    outcomes.into_iter().collect()
}
