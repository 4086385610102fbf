//! Top-k ranking of candidate windows against a query window.

use crate::core::WindowSet;
use crate::error::{ForecastError, Result};
use crate::neighbors::SimilarityMetric;

/// A ranked candidate: its position in the window set and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub index: usize,
    pub score: f64,
}

/// Rank `candidates` against `query` and return the `k` closest.
///
/// Cosine neighbors come back in descending similarity, Euclidean neighbors in
/// ascending distance. Candidates are first stably sorted by ascending score;
/// cosine then takes the tail (so among equal scores the later window wins)
/// and Euclidean takes the head (so the earlier window wins).
///
/// # Errors
/// * [`ForecastError::InvalidConfiguration`] if `k` is zero.
/// * [`ForecastError::DegenerateRegion`] if `candidates` is empty or holds
///   fewer than `k` windows. `k` is never clamped.
/// * [`ForecastError::DimensionMismatch`] if `query` has the wrong length.
pub fn rank_neighbors(
    query: &[f64],
    candidates: &WindowSet,
    metric: SimilarityMetric,
    k: usize,
) -> Result<Vec<Neighbor>> {
    if k == 0 {
        return Err(ForecastError::InvalidConfiguration(
            "top_k must be positive".to_string(),
        ));
    }
    if candidates.is_empty() || k > candidates.len() {
        return Err(ForecastError::DegenerateRegion {
            requested: k,
            available: candidates.len(),
        });
    }
    if query.len() != candidates.window_size() {
        return Err(ForecastError::DimensionMismatch {
            expected: candidates.window_size(),
            got: query.len(),
        });
    }

    let mut ranked: Vec<Neighbor> = candidates
        .windows()
        .iter()
        .enumerate()
        .map(|(index, window)| Neighbor {
            index,
            score: metric.score(query, window),
        })
        .collect();

    // sort_by is stable, ties keep index order
    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));

    if metric.higher_is_closer() {
        let tail = ranked.split_off(ranked.len() - k);
        Ok(tail.into_iter().rev().collect())
    } else {
        ranked.truncate(k);
        Ok(ranked)
    }
}

/// Build the competence region: the `k` windows closest to `query`.
///
/// Pairs appear in rank order, closest first.
///
/// # Example
/// ```
/// use dynsel_forecast::neighbors::{competence_region, SimilarityMetric};
/// use dynsel_forecast::transform::extract_lag_windows;
///
/// let series: Vec<f64> = (1..=12).map(|i| i as f64).collect();
/// let windows = extract_lag_windows(&series, 3).unwrap();
/// let region = competence_region(&[9.0, 10.0, 11.0], &windows, SimilarityMetric::Euclidean, 2)
///     .unwrap();
/// assert_eq!(region.targets(), &[11.0, 10.0]);
/// ```
pub fn competence_region(
    query: &[f64],
    candidates: &WindowSet,
    metric: SimilarityMetric,
    k: usize,
) -> Result<WindowSet> {
    let indices: Vec<usize> = rank_neighbors(query, candidates, metric, k)?
        .into_iter()
        .map(|n| n.index)
        .collect();
    candidates.select(&indices)
}
