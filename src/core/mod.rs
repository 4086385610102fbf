//! Core data structures for dynamic-selection forecasting.

mod forecast;
mod window_set;

pub use forecast::ForecastResult;
pub use window_set::WindowSet;
