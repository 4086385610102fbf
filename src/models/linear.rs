//! Linear autoregression on lag windows.
//!
//! Fits `y = intercept + sum(coef_j * window[j])` by least squares with a small
//! ridge penalty. Lag features are centered before solving, so the intercept
//! is not penalized and strongly collinear windows (e.g. from a trending
//! series) still give a positive definite system.

use crate::error::{ForecastError, Result};
use crate::models::traits::{check_feature_width, check_training_data};
use crate::models::Regressor;

const DEFAULT_RIDGE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
struct LinearFit {
    coefficients: Vec<f64>,
    intercept: f64,
}

/// Ridge-regularized least squares regressor over lag features.
#[derive(Debug, Clone)]
pub struct LinearRegressor {
    ridge: f64,
    fit: Option<LinearFit>,
}

impl Default for LinearRegressor {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearRegressor {
    pub fn new() -> Self {
        Self {
            ridge: DEFAULT_RIDGE,
            fit: None,
        }
    }

    /// Set the ridge penalty added to the diagonal of `X'X`.
    pub fn with_ridge(mut self, ridge: f64) -> Self {
        self.ridge = ridge;
        self
    }

    /// Fitted lag coefficients, oldest lag first.
    pub fn coefficients(&self) -> Option<&[f64]> {
        self.fit.as_ref().map(|f| f.coefficients.as_slice())
    }

    /// Fitted intercept.
    pub fn intercept(&self) -> Option<f64> {
        self.fit.as_ref().map(|f| f.intercept)
    }
}

impl Regressor for LinearRegressor {
    fn fit(&mut self, features: &[Vec<f64>], targets: &[f64]) -> Result<()> {
        if !(self.ridge >= 0.0 && self.ridge.is_finite()) {
            return Err(ForecastError::InvalidConfiguration(format!(
                "ridge penalty must be finite and non-negative, got {}",
                self.ridge
            )));
        }
        let p = check_training_data(features, targets)?;
        let n = targets.len() as f64;

        let x_mean: Vec<f64> = (0..p)
            .map(|j| features.iter().map(|w| w[j]).sum::<f64>() / n)
            .collect();
        let y_mean = targets.iter().sum::<f64>() / n;

        // Normal equations on centered data
        let mut xtx = vec![vec![0.0; p]; p];
        let mut xty = vec![0.0; p];
        for (window, &y) in features.iter().zip(targets) {
            let yc = y - y_mean;
            for i in 0..p {
                let xi = window[i] - x_mean[i];
                xty[i] += xi * yc;
                for j in 0..=i {
                    xtx[i][j] += xi * (window[j] - x_mean[j]);
                }
            }
        }
        for i in 0..p {
            for j in 0..i {
                xtx[j][i] = xtx[i][j];
            }
            xtx[i][i] += self.ridge;
        }

        // All-constant features leave nothing to regress on: fall back to the mean
        let coefficients = if xtx.iter().enumerate().all(|(i, row)| row[i] <= 0.0) {
            vec![0.0; p]
        } else {
            solve_symmetric(&xtx, &xty).ok_or_else(|| {
                ForecastError::ComputationError(
                    "linear regression failed: matrix not positive definite".into(),
                )
            })?
        };

        let intercept = y_mean
            - coefficients
                .iter()
                .zip(x_mean.iter())
                .map(|(c, m)| c * m)
                .sum::<f64>();

        self.fit = Some(LinearFit {
            coefficients,
            intercept,
        });
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<f64>> {
        let fit = self.fit.as_ref().ok_or(ForecastError::FitRequired)?;
        check_feature_width(features, fit.coefficients.len())?;
        Ok(features
            .iter()
            .map(|w| {
                fit.intercept
                    + w.iter()
                        .zip(fit.coefficients.iter())
                        .map(|(x, c)| x * c)
                        .sum::<f64>()
            })
            .collect())
    }

    fn name(&self) -> &str {
        "Linear"
    }

    fn is_fitted(&self) -> bool {
        self.fit.is_some()
    }
}

/// Solve symmetric positive definite system using Cholesky decomposition.
///
/// Solves A @ x = b where A is symmetric positive definite.
fn solve_symmetric(a: &[Vec<f64>], b: &[f64]) -> Option<Vec<f64>> {
    let n = b.len();
    if n == 0 || a.len() != n {
        return None;
    }

    // Cholesky decomposition A = L @ L'
    let mut l = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in 0..=i {
            let mut sum = a[i][j];
            for k in 0..j {
                sum -= l[i][k] * l[j][k];
            }

            if i == j {
                if sum <= 0.0 {
                    return None;
                }
                l[i][j] = sum.sqrt();
            } else {
                l[i][j] = sum / l[j][j];
            }
        }
    }

    // Forward substitution: L @ y = b
    let mut y = vec![0.0; n];
    for i in 0..n {
        let mut sum = b[i];
        for j in 0..i {
            sum -= l[i][j] * y[j];
        }
        y[i] = sum / l[i][i];
    }

    // Backward substitution: L' @ x = y
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = y[i];
        for j in (i + 1)..n {
            sum -= l[j][i] * x[j];
        }
        x[i] = sum / l[i][i];
    }

    Some(x)
}
