//! Regressor trait and the model pool the selectors choose from.

use crate::error::{ForecastError, Result};

/// Common interface for base models in a dynamic-selection pool.
///
/// A regressor maps a lag window to the next value. Selectors treat it as
/// opaque: they only call [`fit`](Regressor::fit) and
/// [`predict`](Regressor::predict), possibly many times, and re-fitting must
/// replace any previous state in place.
///
/// The trait is object-safe and used as `Box<dyn Regressor + Send>`.
pub trait Regressor {
    /// Fit the model on lag windows and their one-step-ahead targets.
    fn fit(&mut self, features: &[Vec<f64>], targets: &[f64]) -> Result<()>;

    /// Predict one value per lag window.
    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<f64>>;

    /// Get the model name.
    fn name(&self) -> &str;

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool;
}

/// Type alias for boxed regressor trait objects.
///
/// # Example
///
/// ```
/// use dynsel_forecast::models::{BoxedRegressor, Regressor};
/// use dynsel_forecast::models::baseline::LastValue;
///
/// let model: BoxedRegressor = Box::new(LastValue::new());
/// assert_eq!(model.name(), "LastValue");
/// ```
pub type BoxedRegressor = Box<dyn Regressor + Send>;

/// Check that `features` and `targets` describe a usable training set.
///
/// Returns the common window width.
pub(crate) fn check_training_data(features: &[Vec<f64>], targets: &[f64]) -> Result<usize> {
    if features.is_empty() {
        return Err(ForecastError::EmptyData);
    }
    if features.len() != targets.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: features.len(),
            got: targets.len(),
        });
    }
    check_feature_width(features, features[0].len())?;
    Ok(features[0].len())
}

/// Check that every window in `features` has `width` values.
pub(crate) fn check_feature_width(features: &[Vec<f64>], width: usize) -> Result<()> {
    match features.iter().find(|w| w.len() != width) {
        Some(bad) => Err(ForecastError::DimensionMismatch {
            expected: width,
            got: bad.len(),
        }),
        None => Ok(()),
    }
}

/// Ordered, non-empty collection of base models.
///
/// Models are identified by their position in the pool.
pub struct ModelPool {
    models: Vec<BoxedRegressor>,
}

impl ModelPool {
    /// Create a pool; fails if `models` is empty.
    pub fn new(models: Vec<BoxedRegressor>) -> Result<Self> {
        if models.is_empty() {
            return Err(ForecastError::InvalidConfiguration(
                "model pool must contain at least one model".to_string(),
            ));
        }
        Ok(Self { models })
    }

    /// Number of models in the pool.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Always false: a pool holds at least one model.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Get the model at `index`.
    pub fn get(&self, index: usize) -> Result<&BoxedRegressor> {
        self.models.get(index).ok_or(ForecastError::IndexOutOfBounds {
            index,
            size: self.models.len(),
        })
    }

    /// Model names in pool order.
    pub fn names(&self) -> Vec<&str> {
        self.models.iter().map(|m| m.name()).collect()
    }

    /// Iterate over the models.
    pub fn iter(&self) -> impl Iterator<Item = &BoxedRegressor> {
        self.models.iter()
    }

    /// Iterate mutably over the models.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut BoxedRegressor> {
        self.models.iter_mut()
    }

    /// Fit every model on the same training set.
    pub fn fit_all(&mut self, features: &[Vec<f64>], targets: &[f64]) -> Result<()> {
        for model in &mut self.models {
            model.fit(features, targets)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for ModelPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelPool")
            .field("models", &self.names())
            .finish()
    }
}

/// Model specification: a name plus a factory producing fresh instances.
///
/// # Example
///
/// ```
/// use dynsel_forecast::models::{ModelSpec, Regressor};
/// use dynsel_forecast::models::baseline::WindowAverage;
///
/// let spec = ModelSpec::new("WindowAverage", || Box::new(WindowAverage::new()));
/// let model = spec.create();
/// assert!(model.is_fitted());
/// ```
pub struct ModelSpec {
    /// Display name of the model
    pub name: &'static str,
    /// Factory function to create a new instance
    factory: Box<dyn Fn() -> BoxedRegressor + Send + Sync>,
}

impl ModelSpec {
    /// Create a model spec from a factory.
    pub fn new<F>(name: &'static str, factory: F) -> Self
    where
        F: Fn() -> BoxedRegressor + Send + Sync + 'static,
    {
        Self {
            name,
            factory: Box::new(factory),
        }
    }

    /// Create a new model instance.
    pub fn create(&self) -> BoxedRegressor {
        (self.factory)()
    }
}

/// Collection of model specifications, used to build independent pools.
///
/// Every call to [`build_pool`](ModelRegistry::build_pool) yields fresh model
/// instances, so pools built for different series never share state.
///
/// # Example
///
/// ```
/// use dynsel_forecast::models::{ModelRegistry, ModelSpec};
/// use dynsel_forecast::models::baseline::{LastValue, MeanRegressor};
///
/// let mut registry = ModelRegistry::new();
/// registry.register(ModelSpec::new("Mean", || Box::new(MeanRegressor::new())));
/// registry.register(ModelSpec::new("LastValue", || Box::new(LastValue::new())));
///
/// let pool = registry.build_pool().unwrap();
/// assert_eq!(pool.names(), vec!["Mean", "LastValue"]);
/// ```
pub struct ModelRegistry {
    models: Vec<ModelSpec>,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { models: Vec::new() }
    }

    /// Register a model specification.
    pub fn register(&mut self, spec: ModelSpec) {
        self.models.push(spec);
    }

    /// Get the number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Iterate over model specifications.
    pub fn iter(&self) -> impl Iterator<Item = &ModelSpec> {
        self.models.iter()
    }

    /// Instantiate every registered model into a new pool.
    pub fn build_pool(&self) -> Result<ModelPool> {
        ModelPool::new(self.models.iter().map(ModelSpec::create).collect())
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
