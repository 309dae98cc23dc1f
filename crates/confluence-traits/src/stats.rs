//! Statistical utility functions for factor processing.
//!
//! Cross-sectional percentile ranking and the finite-value guard used by the
//! window statistics.

use ndarray::Array1;

/// Replaces a non-finite value (NaN, +/-Inf) with `0.0`.
pub const fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Percentile ranks of `values`, in `(0, 1]`.
///
/// Ranks are 1-based and divided by the number of finite values, so the
/// largest value maps to `1.0`. Ties share their average rank. Non-finite
/// inputs are excluded from the ranking and come back as NaN.
///
/// # Examples
///
/// ```
/// use confluence_traits::stats::percentile_rank;
///
/// let ranks = percentile_rank(&[3.0, 1.0, 2.0, 2.0]);
/// assert_eq!(ranks, vec![1.0, 0.25, 0.625, 0.625]);
/// ```
pub fn percentile_rank(values: &[f64]) -> Vec<f64> {
    let mut ranked = vec![f64::NAN; values.len()];

    let mut indexed: Vec<(usize, f64)> = values
        .iter()
        .copied()
        .enumerate()
        .filter(|(_, v)| v.is_finite())
        .collect();

    let n = indexed.len();
    if n == 0 {
        return ranked;
    }

    indexed.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut i = 0;
    while i < n {
        let mut j = i;
        while j < n && indexed[j].1 == indexed[i].1 {
            j += 1;
        }

        // Positions i..j are tied; 1-based ranks i+1..=j average to (i+j+1)/2.
        let avg_rank = (i + j + 1) as f64 / 2.0;
        for &(idx, _) in &indexed[i..j] {
            ranked[idx] = avg_rank / n as f64;
        }

        i = j;
    }

    ranked
}

/// Percentile ranks of an ndarray vector. See [`percentile_rank`].
///
/// # Examples
///
/// ```
/// use confluence_traits::stats::percentile_rank_array;
/// use ndarray::array;
///
/// let ranks = percentile_rank_array(&array![10.0, 30.0, 20.0]);
/// assert_eq!(ranks[1], 1.0);
/// ```
pub fn percentile_rank_array(values: &Array1<f64>) -> Array1<f64> {
    match values.as_slice() {
        Some(slice) => Array1::from_vec(percentile_rank(slice)),
        None => Array1::from_vec(percentile_rank(&values.to_vec())),
    }
}
