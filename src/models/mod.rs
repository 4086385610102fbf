//! Base models for dynamic selection.

mod traits;

pub mod baseline;
pub mod linear;

pub use linear::LinearRegressor;
pub use traits::{BoxedRegressor, ModelPool, ModelRegistry, ModelSpec, Regressor};
