//! Accuracy metrics for competence evaluation and forecast scoring.

use crate::error::{ForecastError, Result};

/// Accuracy metrics for evaluating forecast performance.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyMetrics {
    /// Mean Absolute Error
    pub mae: f64,
    /// Mean Squared Error
    pub mse: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
    /// Mean Absolute Percentage Error, as a fraction
    pub mape: f64,
    /// R-squared (coefficient of determination)
    pub r_squared: f64,
}

/// Error measure used to score candidate models on a competence region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorMeasure {
    /// Mean squared error.
    Squared,
    /// Mean absolute error.
    Absolute,
}

impl ErrorMeasure {
    /// Score `predicted` against `actual`.
    ///
    /// Unlike the standalone helpers, mismatched or empty inputs are errors.
    pub fn score(self, actual: &[f64], predicted: &[f64]) -> Result<f64> {
        check_pair(actual, predicted)?;
        Ok(match self {
            ErrorMeasure::Squared => mse(actual, predicted),
            ErrorMeasure::Absolute => mae(actual, predicted),
        })
    }

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            ErrorMeasure::Squared => "MSE",
            ErrorMeasure::Absolute => "MAE",
        }
    }
}

fn check_pair(actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.is_empty() || predicted.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if actual.len() != predicted.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }
    Ok(())
}

/// Calculate accuracy metrics between actual and predicted values.
///
/// # Arguments
/// * `actual` - Actual observed values
/// * `predicted` - Predicted/forecast values
///
/// # Returns
/// `AccuracyMetrics` struct with all computed metrics
pub fn calculate_metrics(actual: &[f64], predicted: &[f64]) -> Result<AccuracyMetrics> {
    check_pair(actual, predicted)?;

    let n = actual.len() as f64;
    let mae = mae(actual, predicted);
    let mse = mse(actual, predicted);
    let rmse = mse.sqrt();

    // Denominator floored at machine epsilon so zeros in `actual` stay finite
    let mape = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs() / a.abs().max(f64::EPSILON))
        .sum::<f64>()
        / n;

    let mean_actual = actual.iter().sum::<f64>() / n;
    let ss_tot: f64 = actual.iter().map(|a| (a - mean_actual).powi(2)).sum();
    let ss_res = mse * n;
    let r_squared = if ss_tot == 0.0 {
        1.0
    } else {
        1.0 - ss_res / ss_tot
    };

    Ok(AccuracyMetrics {
        mae,
        mse,
        rmse,
        mape,
        r_squared,
    })
}

/// Calculate MAE between two slices.
pub fn mae(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs())
        .sum::<f64>()
        / actual.len() as f64
}

/// Calculate MSE between two slices.
pub fn mse(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() != predicted.len() || actual.is_empty() {
        return f64::NAN;
    }
    actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).powi(2))
        .sum::<f64>()
        / actual.len() as f64
}

/// Calculate RMSE between two slices.
pub fn rmse(actual: &[f64], predicted: &[f64]) -> f64 {
    mse(actual, predicted).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn calculate_metrics_perfect_prediction() {
        let actual = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let predicted = vec![1.0, 2.0, 3.0, 4.0, 5.0];

        let metrics = calculate_metrics(&actual, &predicted).unwrap();

        assert_relative_eq!(metrics.mae, 0.0, epsilon = 1e-10);
        assert_relative_eq!(metrics.mse, 0.0, epsilon = 1e-10);
        assert_relative_eq!(metrics.rmse, 0.0, epsilon = 1e-10);
        assert_relative_eq!(metrics.mape, 0.0, epsilon = 1e-10);
        assert_relative_eq!(metrics.r_squared, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn calculate_metrics_known_values() {
        let actual = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let predicted = vec![1.5, 2.5, 2.5, 4.5, 4.5];
        // Errors: 0.5, 0.5, 0.5, 0.5, 0.5

        let metrics = calculate_metrics(&actual, &predicted).unwrap();

        assert_relative_eq!(metrics.mae, 0.5, epsilon = 1e-10);
        assert_relative_eq!(metrics.mse, 0.25, epsilon = 1e-10);
        assert_relative_eq!(metrics.rmse, 0.5, epsilon = 1e-10);
        // 1 - 1.25 / 10
        assert_relative_eq!(metrics.r_squared, 0.875, epsilon = 1e-10);
    }

    #[test]
    fn calculate_metrics_mape_is_a_fraction() {
        let actual = vec![2.0, 4.0];
        let predicted = vec![1.0, 5.0];
        // |1/2| and |1/4| -> mean 0.375
        let metrics = calculate_metrics(&actual, &predicted).unwrap();
        assert_relative_eq!(metrics.mape, 0.375, epsilon = 1e-12);
    }

    #[test]
    fn calculate_metrics_mape_with_zeros_stays_finite() {
        let actual = vec![0.0, 1.0, 2.0];
        let predicted = vec![0.0, 1.1, 2.1];

        let metrics = calculate_metrics(&actual, &predicted).unwrap();
        assert!(metrics.mape.is_finite());
    }

    #[test]
    fn calculate_metrics_dimension_mismatch() {
        let result = calculate_metrics(&[1.0, 2.0, 3.0], &[1.0, 2.0]);
        assert!(matches!(
            result,
            Err(ForecastError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn calculate_metrics_empty_data() {
        let result = calculate_metrics(&[], &[]);
        assert!(matches!(result, Err(ForecastError::EmptyData)));
    }

    #[test]
    fn r_squared_negative_for_poor_model() {
        let actual = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let predicted = vec![5.0, 4.0, 3.0, 2.0, 1.0];

        let metrics = calculate_metrics(&actual, &predicted).unwrap();
        assert!(metrics.r_squared < 0.0);
    }

    #[test]
    fn standalone_helpers() {
        assert_relative_eq!(
            mae(&[1.0, 2.0, 3.0], &[1.5, 2.5, 3.5]),
            0.5,
            epsilon = 1e-10
        );
        assert_relative_eq!(
            rmse(&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]),
            1.0,
            epsilon = 1e-10
        );
        assert!(mse(&[1.0], &[]).is_nan());
    }

    #[test]
    fn error_measure_scores() {
        let actual = [1.0, 2.0, 3.0];
        let predicted = [2.0, 2.0, 5.0];
        assert_relative_eq!(
            ErrorMeasure::Squared.score(&actual, &predicted).unwrap(),
            5.0 / 3.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            ErrorMeasure::Absolute.score(&actual, &predicted).unwrap(),
            1.0,
            epsilon = 1e-12
        );
        assert_eq!(ErrorMeasure::Squared.name(), "MSE");
        assert_eq!(ErrorMeasure::Absolute.name(), "MAE");
    }

    #[test]
    fn error_measure_rejects_bad_input() {
        assert_eq!(
            ErrorMeasure::Absolute.score(&[], &[]),
            Err(ForecastError::EmptyData)
        );
        assert!(matches!(
            ErrorMeasure::Squared.score(&[1.0, 2.0], &[1.0]),
            Err(ForecastError::DimensionMismatch {
                expected: 2,
                got: 1
            })
        ));
    }
}
