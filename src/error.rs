//! Error types for the dynsel-forecast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur during dynamic-selection forecasting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Series is too short for the requested window size and horizon.
    #[error("insufficient series length: need at least {needed}, got {got}")]
    InsufficientLength { needed: usize, got: usize },

    /// Selector or component configuration is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The competence region cannot hold the requested number of windows.
    #[error("degenerate competence region: requested {requested} windows, {available} available")]
    DegenerateRegion { requested: usize, available: usize },

    /// Lag extraction produced no (window, target) pairs.
    #[error("no lag windows of size {window_size} fit in a series of length {len}")]
    EmptyWindowSet { len: usize, window_size: usize },

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Index out of bounds.
    #[error("index out of bounds: {index} (size: {size})")]
    IndexOutOfBounds { index: usize, size: usize },

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// Computation error (e.g., numerical issues).
    #[error("computation error: {0}")]
    ComputationError(String),
}
