//! Similarity and distance measures between lag windows.

use std::fmt;
use std::str::FromStr;

use crate::error::ForecastError;

/// Measure used to compare a query window against candidate windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimilarityMetric {
    /// Cosine similarity; larger is closer.
    #[default]
    Cosine,
    /// Euclidean distance; smaller is closer.
    Euclidean,
}

impl SimilarityMetric {
    /// Score `candidate` against `query` under this metric.
    pub fn score(self, query: &[f64], candidate: &[f64]) -> f64 {
        match self {
            SimilarityMetric::Cosine => cosine_similarity(query, candidate),
            SimilarityMetric::Euclidean => euclidean_distance(query, candidate),
        }
    }

    /// Whether a larger score means a closer candidate.
    pub fn higher_is_closer(self) -> bool {
        matches!(self, SimilarityMetric::Cosine)
    }

    /// Lowercase identifier, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            SimilarityMetric::Cosine => "cosine",
            SimilarityMetric::Euclidean => "euclidean",
        }
    }
}

impl fmt::Display for SimilarityMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimilarityMetric {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cosine" => Ok(SimilarityMetric::Cosine),
            "euclidean" => Ok(SimilarityMetric::Euclidean),
            other => Err(ForecastError::InvalidConfiguration(format!(
                "unknown similarity metric '{other}', expected 'cosine' or 'euclidean'"
            ))),
        }
    }
}

/// Dot product of two equal-length slices.
#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Cosine similarity between two windows treated as vectors.
///
/// A zero-norm input has similarity 0 with everything.
///
/// # Example
/// ```
/// use dynsel_forecast::neighbors::cosine_similarity;
///
/// assert!((cosine_similarity(&[1.0, 2.0], &[2.0, 4.0]) - 1.0).abs() < 1e-12);
/// assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
/// ```
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let norm_a = dot(a, a).sqrt();
    let norm_b = dot(b, b).sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot(a, b) / (norm_a * norm_b)
}

/// Squared Euclidean distance.
#[inline]
pub fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}

/// Euclidean distance between two windows.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    squared_distance(a, b).sqrt()
}
