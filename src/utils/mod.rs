//! Utility functions for evaluating and preparing series.

pub mod metrics;
pub mod split;

pub use metrics::{calculate_metrics, AccuracyMetrics, ErrorMeasure};
pub use split::{split_series, SeriesSplit, SplitConfig};
