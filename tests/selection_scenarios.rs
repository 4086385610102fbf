//! End-to-end scenarios for both selection strategies.

use approx::assert_relative_eq;
use dynsel_forecast::batch::forecast_batch;
use dynsel_forecast::models::baseline::{LastValue, MeanRegressor, WindowAverage, WindowDrift};
use dynsel_forecast::models::{BoxedRegressor, LinearRegressor, ModelPool, ModelRegistry, ModelSpec};
use dynsel_forecast::neighbors::SimilarityMetric;
use dynsel_forecast::selection::{
    BoxedSelector, DynamicSelector, LocalAccuracyConfig, LocalAccuracySelector,
    SlidingWindowConfig, SlidingWindowSelector,
};
use dynsel_forecast::utils::{split_series, SplitConfig};
use dynsel_forecast::ForecastError;

fn linear_series(n: usize) -> Vec<f64> {
    (1..=n).map(|i| i as f64).collect()
}

fn mean_and_last() -> ModelPool {
    let models: Vec<BoxedRegressor> =
        vec![Box::new(MeanRegressor::new()), Box::new(LastValue::new())];
    ModelPool::new(models).unwrap()
}

fn selectors(window_size: usize) -> Vec<BoxedSelector> {
    vec![
        Box::new(
            LocalAccuracySelector::new(
                mean_and_last(),
                LocalAccuracyConfig::default().with_window_size(window_size),
            )
            .unwrap(),
        ),
        Box::new(
            SlidingWindowSelector::new(
                mean_and_last(),
                SlidingWindowConfig::new(3).with_window_size(window_size),
            )
            .unwrap(),
        ),
    ]
}

#[test]
fn linear_series_is_forecast_by_last_value() {
    let series = linear_series(20);
    for mut selector in selectors(5) {
        let result = selector.predict(&series, 3).unwrap();
        assert_eq!(result.forecast(), &[17.0, 18.0, 19.0], "{}", selector.name());
        assert_eq!(result.actual(), &[18.0, 19.0, 20.0]);
        assert_eq!(result.selected_models(), &[1, 1, 1]);

        let metrics = result.accuracy().unwrap();
        assert_relative_eq!(metrics.mae, 1.0);
        assert_relative_eq!(metrics.rmse, 1.0);
    }
}

#[test]
fn default_window_rejects_short_series() {
    let series: Vec<f64> = (0..10).map(|i| i as f64).collect();
    for mut selector in selectors(12) {
        assert_eq!(
            selector.predict(&series, 1),
            Err(ForecastError::InsufficientLength {
                needed: 13,
                got: 10
            })
        );
    }
}

#[test]
fn sliding_window_degenerate_region() {
    // 27 training points with W=12 give 14 windows
    let config = SlidingWindowConfig::new(14);
    let mut selector = SlidingWindowSelector::new(mean_and_last(), config).unwrap();
    assert_eq!(
        selector.predict(&linear_series(30), 3),
        Err(ForecastError::DegenerateRegion {
            requested: 15,
            available: 14
        })
    );
}

#[test]
fn local_accuracy_degenerate_region() {
    let config = LocalAccuracyConfig::default().with_top_k(20);
    let mut selector = LocalAccuracySelector::new(mean_and_last(), config).unwrap();
    assert!(matches!(
        selector.predict(&linear_series(30), 3),
        Err(ForecastError::DegenerateRegion { requested: 20, .. })
    ));
}

#[test]
fn registry_builds_pool_for_seasonal_series() {
    let mut registry = ModelRegistry::new();
    registry.register(ModelSpec::new("Mean", || Box::new(MeanRegressor::new())));
    registry.register(ModelSpec::new("WindowAverage", || Box::new(WindowAverage::new())));
    registry.register(ModelSpec::new("WindowDrift", || Box::new(WindowDrift::new())));
    registry.register(ModelSpec::new("Linear", || Box::new(LinearRegressor::new())));

    let pool = registry.build_pool().unwrap();
    assert_eq!(pool.names(), vec!["Mean", "WindowAverage", "WindowDrift", "Linear"]);

    let series: Vec<f64> = (0..96)
        .map(|i| 50.0 + 10.0 * (2.0 * std::f64::consts::PI * i as f64 / 12.0).sin())
        .collect();
    let config = LocalAccuracyConfig::default().with_similarity(SimilarityMetric::Euclidean);
    let mut selector = LocalAccuracySelector::new(pool, config).unwrap();
    let result = selector.predict(&series, 12).unwrap();

    // A full seasonal cycle of lags makes the series exactly linear in its lags
    assert!(result.selected_models().iter().all(|&m| m == 3));
    for (forecast, actual) in result.forecast().iter().zip(result.actual()) {
        assert_relative_eq!(*forecast, *actual, epsilon = 1e-3);
    }
}

#[test]
fn batch_over_split_series() {
    let long = linear_series(100);
    let split = split_series(&long, &SplitConfig::default()).unwrap();
    let series = vec![
        ("train".to_string(), split.train.clone()),
        ("full".to_string(), long.clone()),
    ];

    let config = SlidingWindowConfig::new(3).with_window_size(5);
    let results =
        forecast_batch(&series, 4, || SlidingWindowSelector::new(mean_and_last(), config)).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "train");
    assert_eq!(results[1].result.actual(), &long[96..]);
    assert!(results.iter().all(|b| b.result.selected_models() == [1usize; 4]));
}
