//! Histogram distance functions
//!
//! Ready-made distances for [`compare_tables`](crate::compare_tables).
//! Each takes two equal-length histograms and returns an `f64`; identical
//! inputs always give 0.

use inthist_core::Accumulator;

/// Chi-squared distance: `sum((h1 - h2)^2 / (h1 + h2))`.
///
/// Bins where both histograms are empty are skipped.
///
/// # Examples
///
/// ```
/// use inthist_integral::distance::chi_squared;
///
/// assert_eq!(chi_squared(&[2u32, 2], &[2, 2]), 0.0);
/// assert_eq!(chi_squared(&[4u32, 0], &[0, 0]), 4.0);
/// ```
pub fn chi_squared<A: Accumulator>(h1: &[A], h2: &[A]) -> f64 {
    h1.iter()
        .zip(h2)
        .map(|(&a, &b)| {
            let (a, b) = (a.to_f64(), b.to_f64());
            let den = a + b;
            if den == 0.0 {
                0.0
            } else {
                let d = a - b;
                d * d / den
            }
        })
        .sum()
}

/// L1 (city block) distance: `sum(|h1 - h2|)`
pub fn l1_distance<A: Accumulator>(h1: &[A], h2: &[A]) -> f64 {
    h1.iter()
        .zip(h2)
        .map(|(&a, &b)| (a.to_f64() - b.to_f64()).abs())
        .sum()
}

/// One minus the normalized histogram intersection.
///
/// The overlap `sum(min(h1, h2))` is divided by the larger of the two
/// totals, so the result lies in `[0, 1]` for non-negative histograms.
/// Two empty histograms are at distance 0.
pub fn intersection_distance<A: Accumulator>(h1: &[A], h2: &[A]) -> f64 {
    let mut overlap = 0.0;
    let mut total1 = 0.0;
    let mut total2 = 0.0;
    for (&a, &b) in h1.iter().zip(h2) {
        let (a, b) = (a.to_f64(), b.to_f64());
        overlap += a.min(b);
        total1 += a;
        total2 += b;
    }
    let total = f64::max(total1, total2);
    if total == 0.0 {
        0.0
    } else {
        1.0 - overlap / total
    }
}
