//! # dynsel-forecast
//!
//! Dynamic per-step model selection for recursive time series forecasting.
//!
//! A pool of regressors is trained on lag windows of a series. At each step of
//! a recursive rollout one model is chosen by its accuracy on a competence
//! region of historical windows:
//!
//! - DCS-LA ([`selection::LocalAccuracySelector`]) uses the `top_k` windows
//!   most similar to the current one and re-fits on them.
//! - DSNAW ([`selection::SlidingWindowSelector`]) fits once and uses the
//!   window history minus its most recent `last_k` windows.

// Allow some clippy warnings for cleaner code in specific cases
#![allow(clippy::needless_range_loop)]

pub mod batch;
pub mod core;
pub mod error;
pub mod models;
pub mod neighbors;
pub mod selection;
pub mod transform;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::batch::{forecast_batch, BatchForecast};
    pub use crate::core::{ForecastResult, WindowSet};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::{BoxedRegressor, ModelPool, Regressor};
    pub use crate::neighbors::SimilarityMetric;
    pub use crate::selection::{
        DynamicSelector, LocalAccuracyConfig, LocalAccuracySelector, SlidingWindowConfig,
        SlidingWindowSelector,
    };
    pub use crate::utils::{calculate_metrics, AccuracyMetrics};
}
