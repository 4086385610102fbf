//! Per-step dynamic model selection.
//!
//! Two strategies share one recursive rollout:
//!
//! - [`LocalAccuracySelector`] (DCS-LA): re-fits every model on the `top_k`
//!   windows most similar to the current one and keeps the lowest-MSE model.
//! - [`SlidingWindowSelector`] (DSNAW): fits once upfront, then scores on the
//!   window history minus its most recent `last_k` windows by MAE.

mod history;
mod local_accuracy;
pub mod rollout;
mod sliding_window;
mod traits;

pub use history::HistoryErrors;
pub use local_accuracy::{LocalAccuracyConfig, LocalAccuracySelector};
pub use rollout::{predict_next, score_on_region, select_best, Rollout};
pub use sliding_window::{SlidingWindowConfig, SlidingWindowSelector};
pub use traits::{BoxedSelector, DynamicSelector, SelectionStrategy};
