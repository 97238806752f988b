//! Statistical helper functions for judging Monte-Carlo estimates.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Standard error of an empirical proportion `p` estimated from `n` trials.
///
/// `sqrt(p * (1 - p) / n)`. Returns 0.0 if `n` is zero; `p` is clamped to
/// `[0, 1]`.
pub fn binomial_standard_error(p: f64, n: u64) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let p = p.clamp(0.0, 1.0);
    (p * (1.0 - p) / n as f64).sqrt()
}

/// Total-variation distance between two distributions: `0.5 * sum |a_i - b_i|`.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn total_variation_distance(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(
        a.len(),
        b.len(),
        "total_variation_distance: length mismatch"
    );
    0.5 * a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum::<f64>()
}

/// Largest absolute element-wise difference. Returns 0.0 for empty input.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn max_abs_deviation(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "max_abs_deviation: length mismatch");
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}
