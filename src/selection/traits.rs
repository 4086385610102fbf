//! DynamicSelector trait shared by the selection strategies.

use std::fmt;

use crate::core::ForecastResult;
use crate::error::Result;
use crate::models::ModelPool;
use crate::selection::HistoryErrors;

/// Strategy tag identifying how a selector scores its candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionStrategy {
    /// Dynamic classifier selection by local accuracy (DCS-LA).
    LocalAccuracy,
    /// Dynamic selection on a sliding window of past windows (DSNAW).
    SlidingWindow,
}

impl SelectionStrategy {
    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            SelectionStrategy::LocalAccuracy => "DCS-LA",
            SelectionStrategy::SlidingWindow => "DSNAW",
        }
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Common interface for per-step dynamic model selection.
///
/// `predict` withholds the last `horizon` points of `series`, then forecasts
/// them one step at a time. Each step picks one pool model, predicts from the
/// current lag window, and advances the window with the *true* next value.
///
/// This trait is object-safe and can be used with `Box<dyn DynamicSelector>`.
pub trait DynamicSelector {
    /// Forecast the last `horizon` points of `series` recursively.
    fn predict(&mut self, series: &[f64], horizon: usize) -> Result<ForecastResult>;

    /// Number of lags per window.
    fn window_size(&self) -> usize;

    /// The candidate models.
    fn pool(&self) -> &ModelPool;

    /// Rolling error history of the chosen models.
    fn history(&self) -> &HistoryErrors;

    /// Which strategy this selector implements.
    fn strategy(&self) -> SelectionStrategy;

    /// Get the selector name.
    fn name(&self) -> &str {
        self.strategy().name()
    }
}

/// Type alias for boxed selector trait objects.
pub type BoxedSelector = Box<dyn DynamicSelector + Send>;
