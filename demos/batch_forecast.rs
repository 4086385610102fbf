//! Forecast several series in parallel, one selector per series.
//!
//! Run with: cargo run --example batch_forecast

use dynsel_forecast::batch::forecast_batch;
use dynsel_forecast::models::baseline::{LastValue, WindowAverage, WindowDrift};
use dynsel_forecast::models::{BoxedRegressor, LinearRegressor, ModelPool};
use dynsel_forecast::selection::{LocalAccuracyConfig, LocalAccuracySelector};

fn main() {
    println!("=== Batch Forecasting ===\n");

    let series: Vec<(String, Vec<f64>)> = (1..=6)
        .map(|s| {
            let slope = 0.1 * s as f64;
            let period = 4.0 + s as f64;
            let values = (0..120)
                .map(|i| {
                    100.0 + slope * i as f64
                        + 5.0 * (2.0 * std::f64::consts::PI * i as f64 / period).sin()
                })
                .collect();
            (format!("store-{s}"), values)
        })
        .collect();

    let config = LocalAccuracyConfig::default().with_top_k(15);
    let results = forecast_batch(&series, 8, || {
        let models: Vec<BoxedRegressor> = vec![
            Box::new(LastValue::new()),
            Box::new(WindowAverage::new()),
            Box::new(WindowDrift::new()),
            Box::new(LinearRegressor::new()),
        ];
        LocalAccuracySelector::new(ModelPool::new(models)?, config)
    });

    let results = match results {
        Ok(results) => results,
        Err(e) => {
            eprintln!("batch failed: {}", e);
            return;
        }
    };

    println!("{:>10} {:>10} {:>10}  {}", "Series", "MAE", "RMSE", "Models");
    println!("{:-<60}", "");
    for batch in &results {
        let selected: Vec<String> = batch
            .result
            .selected_models()
            .iter()
            .map(|m| m.to_string())
            .collect();
        match batch.result.accuracy() {
            Ok(metrics) => println!(
                "{:>10} {:>10.4} {:>10.4}  {}",
                batch.id,
                metrics.mae,
                metrics.rmse,
                selected.join(" ")
            ),
            Err(e) => println!("{:>10} error: {}", batch.id, e),
        }
    }
}
