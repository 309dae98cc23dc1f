//! Cross-sectional rank transform.
//!
//! Implements the `rank(...)` step of
//! `-rank(ts_sum((close-low)/(high-close),3)) * rank(ts_delta(close,3))`:
//! the trailing ratio sum and the close delta are each replaced by their
//! percentile rank across the universe before the legs are multiplied.

use confluence_traits::{Components, stats::percentile_rank_array};
use ndarray::Array1;

/// Replaces raw components with cross-sectional percentile ranks.
///
/// For every ticker `i`:
/// - `reversal_i = -rank(ratio_sum_i)` where `ratio_sum_i = -raw_reversal_i`
/// - `momentum_i = rank(raw_momentum_i)`
///
/// Ranks lie in `(0, 1]` with ties averaged, so ranked reversal is in
/// `[-1, 0)`, ranked momentum in `(0, 1]`, and their product in `[-1, 0)`.
/// Output order matches input order.
///
/// # Example
///
/// ```rust,ignore
/// use confluence_eval::rank_components;
/// use confluence_traits::Components;
///
/// let ranked = rank_components(&[Components::new(-4.0, 2.0), Components::new(1.0, -1.0)]);
/// assert_eq!(ranked[0].reversal, -1.0);
/// ```
pub fn rank_components(components: &[Components]) -> Vec<Components> {
    let ratio_sums: Array1<f64> = components.iter().map(|c| -c.reversal).collect();
    let deltas: Array1<f64> = components.iter().map(|c| c.momentum).collect();

    let sum_ranks = percentile_rank_array(&ratio_sums);
    let delta_ranks = percentile_rank_array(&deltas);

    sum_ranks
        .iter()
        .zip(delta_ranks.iter())
        .map(|(&s, &d)| Components::new(-s, d))
        .collect()
}
