//! Baseline regressors over lag windows.
//!
//! Simple methods that serve as pool members and benchmarks for richer models.

mod drift;
mod last_value;
mod mean;
mod window_average;

pub use drift::WindowDrift;
pub use last_value::LastValue;
pub use mean::MeanRegressor;
pub use window_average::WindowAverage;
