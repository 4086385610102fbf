//! Lag window extraction.
//!
//! Turns a flat series into fixed-length feature windows paired with the value
//! that follows each window.

use crate::core::WindowSet;
use crate::error::{ForecastError, Result};

/// Extract `(window, target)` pairs from a series.
///
/// For every index `i` with `window_size <= i < series.len() - 1` this emits
/// `window = series[i - window_size..i]` and `target = series[i]`, so a series
/// of length `n` yields `n - window_size - 1` pairs.
///
/// The upper bound is `n - 1`, not `n`: the final element of the series is
/// never used as a target, only as part of a feature window. Whether that is
/// an intentional reservation of the last point or an off-by-one is an open
/// question; the boundary is kept as is.
///
/// # Errors
/// * [`ForecastError::InvalidConfiguration`] if `window_size` is zero.
/// * [`ForecastError::EmptyWindowSet`] if `series.len() <= window_size + 1`.
///
/// # Example
/// ```
/// use dynsel_forecast::transform::extract_lag_windows;
///
/// let series = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
/// let set = extract_lag_windows(&series, 3).unwrap();
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.windows()[0], vec![1.0, 2.0, 3.0]);
/// assert_eq!(set.targets(), &[4.0, 5.0]);
/// ```
pub fn extract_lag_windows(series: &[f64], window_size: usize) -> Result<WindowSet> {
    if window_size == 0 {
        return Err(ForecastError::InvalidConfiguration(
            "window_size must be positive".to_string(),
        ));
    }

    let n = series.len();
    if n <= window_size + 1 {
        return Err(ForecastError::EmptyWindowSet {
            len: n,
            window_size,
        });
    }

    let mut set = WindowSet::with_capacity(window_size, n - window_size - 1);
    for i in window_size..n - 1 {
        set.push(&series[i - window_size..i], series[i])?;
    }

    Ok(set)
}

/// Number of pairs [`extract_lag_windows`] produces, zero when it would fail.
pub fn lag_window_count(len: usize, window_size: usize) -> usize {
    len.saturating_sub(window_size + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_expected_pairs() {
        let series: Vec<f64> = (1..=8).map(|i| i as f64).collect();
        let set = extract_lag_windows(&series, 3).unwrap();

        assert_eq!(set.len(), 4);
        assert_eq!(set.window_size(), 3);
        assert_eq!(set.windows()[0], vec![1.0, 2.0, 3.0]);
        assert_eq!(set.windows()[3], vec![4.0, 5.0, 6.0]);
        assert_eq!(set.targets(), &[4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn last_element_is_never_a_target() {
        let series = [10.0, 20.0, 30.0, 40.0, 50.0];
        let set = extract_lag_windows(&series, 2).unwrap();
        assert!(!set.targets().contains(&50.0));
        assert_eq!(set.targets(), &[30.0, 40.0]);
    }

    #[test]
    fn too_short_series_is_empty_result() {
        let series = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(
            extract_lag_windows(&series, 3),
            Err(ForecastError::EmptyWindowSet {
                len: 4,
                window_size: 3
            })
        );
        assert!(extract_lag_windows(&series, 10).is_err());
        assert!(extract_lag_windows(&[], 1).is_err());
    }

    #[test]
    fn minimal_series_yields_one_pair() {
        let set = extract_lag_windows(&[1.0, 2.0, 3.0], 1).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(0), Some((&[1.0][..], 2.0)));
    }

    #[test]
    fn zero_window_is_invalid() {
        assert!(matches!(
            extract_lag_windows(&[1.0, 2.0, 3.0], 0),
            Err(ForecastError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn count_matches_extraction() {
        assert_eq!(lag_window_count(20, 5), 14);
        assert_eq!(lag_window_count(6, 5), 0);
        assert_eq!(lag_window_count(3, 5), 0);
        let series: Vec<f64> = (0..20).map(|i| i as f64).collect();
        assert_eq!(extract_lag_windows(&series, 5).unwrap().len(), 14);
    }
}
