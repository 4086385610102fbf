//! Lag window collections.
//!
//! A [`WindowSet`] is the ordered list of `(window, target)` pairs extracted
//! from one series. Competence regions are subsets of a window set.

use crate::error::{ForecastError, Result};

/// Ordered collection of lag windows and their one-step-ahead targets.
///
/// Every window holds exactly `window_size` values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowSet {
    window_size: usize,
    windows: Vec<Vec<f64>>,
    targets: Vec<f64>,
}

impl WindowSet {
    /// Create an empty window set for windows of the given size.
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            windows: Vec::new(),
            targets: Vec::new(),
        }
    }

    /// Create an empty window set with room for `capacity` pairs.
    pub fn with_capacity(window_size: usize, capacity: usize) -> Self {
        Self {
            window_size,
            windows: Vec::with_capacity(capacity),
            targets: Vec::with_capacity(capacity),
        }
    }

    /// Build a window set from parallel windows and targets.
    pub fn from_parts(
        window_size: usize,
        windows: Vec<Vec<f64>>,
        targets: Vec<f64>,
    ) -> Result<Self> {
        if windows.len() != targets.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: windows.len(),
                got: targets.len(),
            });
        }
        if let Some(bad) = windows.iter().find(|w| w.len() != window_size) {
            return Err(ForecastError::DimensionMismatch {
                expected: window_size,
                got: bad.len(),
            });
        }
        Ok(Self {
            window_size,
            windows,
            targets,
        })
    }

    /// Append a `(window, target)` pair.
    pub fn push(&mut self, window: &[f64], target: f64) -> Result<()> {
        if window.len() != self.window_size {
            return Err(ForecastError::DimensionMismatch {
                expected: self.window_size,
                got: window.len(),
            });
        }
        self.windows.push(window.to_vec());
        self.targets.push(target);
        Ok(())
    }

    /// Number of values in each window.
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Number of `(window, target)` pairs.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Check if the set holds no pairs.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Feature windows, oldest first.
    pub fn windows(&self) -> &[Vec<f64>] {
        &self.windows
    }

    /// Targets aligned with [`windows`](Self::windows).
    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    /// Get the pair at `index`.
    pub fn get(&self, index: usize) -> Option<(&[f64], f64)> {
        let window = self.windows.get(index)?;
        Some((window.as_slice(), self.targets[index]))
    }

    /// Iterate over `(window, target)` pairs in series order.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], f64)> + '_ {
        self.windows
            .iter()
            .map(Vec::as_slice)
            .zip(self.targets.iter().copied())
    }

    /// Build a new set from the pairs at `indices`, in the order given.
    pub fn select(&self, indices: &[usize]) -> Result<WindowSet> {
        let mut subset = WindowSet::with_capacity(self.window_size, indices.len());
        for &index in indices {
            let (window, target) = self.get(index).ok_or(ForecastError::IndexOutOfBounds {
                index,
                size: self.len(),
            })?;
            subset.windows.push(window.to_vec());
            subset.targets.push(target);
        }
        Ok(subset)
    }

    /// Drop the most recent `count` pairs.
    ///
    /// Fails with [`ForecastError::DegenerateRegion`] when nothing would remain.
    pub fn without_last(&self, count: usize) -> Result<WindowSet> {
        if count >= self.len() {
            return Err(ForecastError::DegenerateRegion {
                requested: count + 1,
                available: self.len(),
            });
        }
        let keep = self.len() - count;
        Ok(WindowSet {
            window_size: self.window_size,
            windows: self.windows[..keep].to_vec(),
            targets: self.targets[..keep].to_vec(),
        })
    }
}
