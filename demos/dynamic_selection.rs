//! Compare DCS-LA and DSNAW on a trending seasonal series.
//!
//! Run with: cargo run --example dynamic_selection

use dynsel_forecast::models::baseline::{LastValue, MeanRegressor, WindowAverage, WindowDrift};
use dynsel_forecast::models::{LinearRegressor, ModelPool, ModelRegistry, ModelSpec};
use dynsel_forecast::neighbors::SimilarityMetric;
use dynsel_forecast::selection::{
    BoxedSelector, DynamicSelector, LocalAccuracyConfig, LocalAccuracySelector,
    SlidingWindowConfig, SlidingWindowSelector,
};
use dynsel_forecast::utils::{split_series, SplitConfig};

fn registry() -> ModelRegistry {
    let mut registry = ModelRegistry::new();
    registry.register(ModelSpec::new("Mean", || Box::new(MeanRegressor::new())));
    registry.register(ModelSpec::new("LastValue", || Box::new(LastValue::new())));
    registry.register(ModelSpec::new("WindowAverage", || Box::new(WindowAverage::new())));
    registry.register(ModelSpec::new("WindowDrift", || Box::new(WindowDrift::new())));
    registry.register(ModelSpec::new("Linear", || Box::new(LinearRegressor::new())));
    registry
}

fn build_pool(registry: &ModelRegistry) -> ModelPool {
    registry.build_pool().expect("registry is not empty")
}

fn main() {
    println!("=== Dynamic Model Selection ===\n");

    // Trend plus a 12-step cycle and a slower wobble
    let values: Vec<f64> = (0..144)
        .map(|i| {
            20.0 + 0.3 * i as f64
                + 6.0 * (2.0 * std::f64::consts::PI * i as f64 / 12.0).sin()
                + 1.5 * (i as f64 * 0.37).cos()
        })
        .collect();

    let split = split_series(&values, &SplitConfig::default()).expect("non-empty series");
    println!(
        "Series of {} points: train {}, validation {}, test {}",
        values.len(),
        split.train.len(),
        split.validation.len(),
        split.test.len()
    );

    let registry = registry();
    let names: Vec<String> = build_pool(&registry)
        .names()
        .into_iter()
        .map(String::from)
        .collect();
    println!("Pool: {}", names.join(", "));

    let horizon = 12;
    let selectors: Vec<BoxedSelector> = vec![
        Box::new(
            LocalAccuracySelector::new(build_pool(&registry), LocalAccuracyConfig::default())
                .expect("valid config"),
        ),
        Box::new(
            LocalAccuracySelector::new(
                build_pool(&registry),
                LocalAccuracyConfig::default().with_similarity(SimilarityMetric::Euclidean),
            )
            .expect("valid config"),
        ),
        Box::new(
            SlidingWindowSelector::new(build_pool(&registry), SlidingWindowConfig::new(12))
                .expect("valid config"),
        ),
    ];

    for mut selector in selectors {
        println!("\n--- {} ---", selector.name());
        let result = match selector.predict(&values, horizon) {
            Ok(result) => result,
            Err(e) => {
                println!("  failed: {}", e);
                continue;
            }
        };

        println!("{:>4} {:>14} {:>10} {:>10}", "h", "Model", "Forecast", "Actual");
        println!("{:-<42}", "");
        for (i, ((model, forecast), actual)) in result
            .selected_models()
            .iter()
            .zip(result.forecast())
            .zip(result.actual())
            .enumerate()
        {
            println!(
                "{:>4} {:>14} {:>10.3} {:>10.3}",
                i + 1,
                names[*model],
                forecast,
                actual
            );
        }

        if let Ok(metrics) = result.accuracy() {
            println!(
                "MAE {:.4}  RMSE {:.4}  MAPE {:.2}%",
                metrics.mae,
                metrics.rmse,
                metrics.mape * 100.0
            );
        }

        for (model, errors) in selector.history().iter() {
            if !errors.is_empty() {
                println!("  history[{}]: {} errors", names[model], errors.len());
            }
        }
    }
}
