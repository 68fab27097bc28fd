//! Weighted record-to-record dissimilarity metrics.

use argus_record::{MISSING_DISCRETE, Record, Weights, is_missing_real};

/// A weighted dissimilarity metric between two records.
///
/// Implementations must be pure: the same pair of records and weights
/// always yields the same distance.
pub trait DistanceMetric {
    /// Computes the dissimilarity of `a` and `b` under `weights`.
    fn distance(&self, a: &Record, b: &Record, weights: &Weights) -> f64;
}

/// Shared accumulation for both metric variants.
///
/// Real field i contributes `w[i] * (a[i] - b[i])^2` when both values are
/// present, the fixed penalty `w[i]` when exactly one is missing, and
/// nothing when both are missing. Discrete field j contributes `w[j]` when
/// the category codes differ. The `-1` missing sentinel participates in
/// that comparison like any other code: missing-vs-present differs,
/// missing-vs-missing matches.
fn weighted_sum(a: &Record, b: &Record, weights: &Weights) -> f64 {
    debug_assert_eq!(a.reals().len(), weights.real().len());
    debug_assert_eq!(b.reals().len(), weights.real().len());
    debug_assert_eq!(a.discretes().len(), weights.discrete().len());
    debug_assert_eq!(b.discretes().len(), weights.discrete().len());
    debug_assert!(a.discretes().iter().all(|&c| c >= MISSING_DISCRETE));

    let mut acc = 0.0;
    for ((&av, &bv), &w) in a.reals().iter().zip(b.reals()).zip(weights.real()) {
        match (is_missing_real(av), is_missing_real(bv)) {
            (false, false) => {
                let d = av - bv;
                acc += w * d * d;
            }
            (true, true) => {}
            _ => acc += w,
        }
    }
    for ((&ac, &bc), &w) in a.discretes().iter().zip(b.discretes()).zip(weights.discrete()) {
        if ac != bc {
            acc += w;
        }
    }
    acc
}

/// Weighted squared dissimilarity (no square root).
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredDistance;

impl DistanceMetric for SquaredDistance {
    fn distance(&self, a: &Record, b: &Record, weights: &Weights) -> f64 {
        weighted_sum(a, b, weights)
    }
}

/// Square root of the weighted squared dissimilarity.
///
/// Interchangeable with [`SquaredDistance`]; both induce the same neighbor
/// ordering, but scores differ in scale.
#[derive(Debug, Clone, Copy, Default)]
pub struct RootedDistance;

impl DistanceMetric for RootedDistance {
    fn distance(&self, a: &Record, b: &Record, weights: &Weights) -> f64 {
        weighted_sum(a, b, weights).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn rec(id: i32, reals: Vec<f64>, discretes: Vec<i32>) -> Record {
        Record::new(id, reals, discretes)
    }

    #[test]
    fn real_fields_hand_computed() {
        let a = rec(0, vec![1.0, 2.0], vec![]);
        let b = rec(1, vec![4.0, 6.0], vec![]);
        let w = Weights::new(vec![1.0, 0.5], vec![]);
        // 1*(1-4)^2 + 0.5*(2-6)^2 = 9 + 8 = 17
        assert_abs_diff_eq!(
            SquaredDistance.distance(&a, &b, &w),
            17.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn rooted_is_sqrt_of_squared() {
        let a = rec(0, vec![0.0], vec![]);
        let b = rec(1, vec![3.0], vec![]);
        let w = Weights::uniform(1, 0);
        assert_abs_diff_eq!(RootedDistance.distance(&a, &b, &w), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn one_missing_real_costs_the_weight() {
        let a = rec(0, vec![f64::NAN], vec![]);
        let b = rec(1, vec![7.0], vec![]);
        let w = Weights::new(vec![2.5], vec![]);
        assert_abs_diff_eq!(SquaredDistance.distance(&a, &b, &w), 2.5, epsilon = 1e-12);
        // Symmetric.
        assert_abs_diff_eq!(SquaredDistance.distance(&b, &a, &w), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn both_missing_reals_cost_nothing() {
        let a = rec(0, vec![f64::NAN, 1.0], vec![]);
        let b = rec(1, vec![f64::NAN, 1.0], vec![]);
        let w = Weights::uniform(2, 0);
        assert_abs_diff_eq!(SquaredDistance.distance(&a, &b, &w), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn discrete_mismatch_costs_the_weight() {
        let a = rec(0, vec![], vec![0, 1, 2]);
        let b = rec(1, vec![], vec![0, 2, 2]);
        let w = Weights::new(vec![], vec![10.0, 3.0, 1.0]);
        // Only the middle field differs.
        assert_abs_diff_eq!(SquaredDistance.distance(&a, &b, &w), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn missing_discrete_sentinel_compares_as_a_code() {
        let w = Weights::new(vec![], vec![4.0]);
        let missing = rec(0, vec![], vec![MISSING_DISCRETE]);
        let present = rec(1, vec![], vec![2]);
        assert_abs_diff_eq!(
            SquaredDistance.distance(&missing, &present, &w),
            4.0,
            epsilon = 1e-12
        );
        let also_missing = rec(2, vec![], vec![MISSING_DISCRETE]);
        assert_abs_diff_eq!(
            SquaredDistance.distance(&missing, &also_missing, &w),
            0.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn mixed_fields_accumulate() {
        let a = rec(0, vec![1.0, f64::NAN], vec![3, 0]);
        let b = rec(1, vec![3.0, 5.0], vec![3, 1]);
        let w = Weights::new(vec![1.0, 0.5], vec![2.0, 4.0]);
        // reals: 1*(1-3)^2 + 0.5 (one missing) = 4.5
        // discretes: codes 3==3 (free), 0!=1 (4.0) => total 8.5
        assert_abs_diff_eq!(SquaredDistance.distance(&a, &b, &w), 8.5, epsilon = 1e-12);
    }

    #[test]
    fn identical_records_have_zero_distance() {
        let a = rec(0, vec![1.5, 2.5], vec![1]);
        let w = Weights::uniform(2, 1);
        assert_abs_diff_eq!(SquaredDistance.distance(&a, &a, &w), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(RootedDistance.distance(&a, &a, &w), 0.0, epsilon = 1e-12);
    }
}
