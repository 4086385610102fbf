//! Feature construction for lag-based forecasting.

pub mod lags;

pub use lags::{extract_lag_windows, lag_window_count};
