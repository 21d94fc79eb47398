//! Property-based tests using proptest.
//!
//! These tests verify the laws the calculators must obey for arbitrary
//! inputs: domain policy, clamping, additivity and entropy bounds.

use info_quantity::{
    clamp, compute_entropy, compute_information, compute_joint, log_base2, max_entropy,
    select_base, validate, LogBase, ProbabilityDistribution, Quantity, UndefinedCause,
};
use proptest::prelude::*;

// Strictly positive probabilities
fn positive_probability() -> impl Strategy<Value = f64> {
    (1e-12f64..=1.0).prop_filter("non-zero", |p| *p > 0.0)
}

// Small distributions with some exact zeros mixed in
fn distribution_strategy() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(prop_oneof![Just(0.0), 0.0f64..=1.0], 1..8)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn information_is_minus_log2(p in positive_probability()) {
        let r = compute_information(p);
        let v = r.value.value().unwrap();
        prop_assert!(v >= 0.0);
        prop_assert!((v - (-log_base2(p))).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_input_is_clamped(raw in -1e6f64..1e6) {
        prop_assert_eq!(compute_information(raw), compute_information(clamp(raw, 0.0, 1.0)));
    }

    #[test]
    fn clamping_is_idempotent(raw in -1e6f64..1e6) {
        let once = clamp(raw, 0.0, 1.0);
        prop_assert_eq!(clamp(once, 0.0, 1.0), once);
    }

    #[test]
    fn information_is_additive(pa in positive_probability(), pb in positive_probability()) {
        let j = compute_joint(pa, pb);
        // P(A)·P(B) can underflow to 0 for tiny inputs
        prop_assume!(j.iab.is_defined());
        prop_assert!(j.difference().unwrap() < 1e-9);
        prop_assert_eq!(j.match_percentage(), Some(100.0));
    }

    #[test]
    fn entropy_is_bounded(raw in distribution_strategy()) {
        let dist = ProbabilityDistribution::from_raw(&raw);
        let h = compute_entropy(&dist);
        prop_assert!(h.entropy.is_finite());
        prop_assert!(h.entropy >= 0.0);
        prop_assert_eq!(h.trace.len(), raw.len());

        // The bound log₂ n only holds for normalized input
        if validate(&dist).within_tolerance {
            prop_assert!(h.entropy <= max_entropy(dist.len()) + 1e-9);
        }
    }

    #[test]
    fn zero_entries_contribute_nothing(raw in distribution_strategy()) {
        let dist = ProbabilityDistribution::from_raw(&raw);
        let h = compute_entropy(&dist);
        for (p, c) in raw.iter().zip(&h.contributions) {
            if *p == 0.0 {
                prop_assert_eq!(*c, 0.0);
            }
        }
    }

    #[test]
    fn computations_are_pure(p in -2.0f64..2.0, raw in distribution_strategy()) {
        prop_assert_eq!(compute_information(p), compute_information(p));
        prop_assert_eq!(compute_joint(p, 0.5), compute_joint(p, 0.5));
        let dist = ProbabilityDistribution::from_raw(&raw);
        prop_assert_eq!(compute_entropy(&dist), compute_entropy(&dist));
    }
}

#[test]
fn zero_probability_is_undefined() {
    let r = compute_information(0.0);
    assert_eq!(r.value, Quantity::Undefined(UndefinedCause::ZeroProbability));
    assert!(r.value.value().is_none());
}

#[test]
fn certain_event_is_zero_bits() {
    assert_eq!(compute_information(1.0).value, Quantity::Defined(0.0));
}

#[test]
fn two_fair_coins_are_two_bits() {
    let j = compute_joint(0.5, 0.5);
    let close = |q: Quantity, x: f64| (q.value().unwrap() - x).abs() < 1e-12;
    assert!(close(j.ia, 1.0));
    assert!(close(j.ib, 1.0));
    assert_eq!(j.pab.map(|p| p.value()), Some(0.25));
    assert!(close(j.iab, 2.0));
    assert!(close(j.sum, 2.0));
}

#[test]
fn entropy_reference_values() {
    let fair = compute_entropy(&ProbabilityDistribution::from_raw(&[0.5, 0.5]));
    assert!((fair.entropy - 1.0).abs() < 1e-12);

    let certain = compute_entropy(&ProbabilityDistribution::from_raw(&[1.0, 0.0, 0.0, 0.0]));
    assert_eq!(certain.entropy, 0.0);

    let with_zero = compute_entropy(&ProbabilityDistribution::from_raw(&[1.0, 0.0]));
    assert_eq!(with_zero.entropy, 0.0);
}

#[test]
fn validation_reference_values() {
    assert!(validate(&ProbabilityDistribution::from_raw(&[0.5, 0.5])).within_tolerance);

    let report = validate(&ProbabilityDistribution::from_raw(&[0.5, 0.4]));
    assert!(!report.within_tolerance);
    assert!((report.deviation - 0.1).abs() < 1e-9);
}

#[test]
fn unit_selection_reference_values() {
    let nat = select_base("nat");
    assert!((-nat.log(1.0 / std::f64::consts::E) - 1.0).abs() < 1e-12);

    let bit = select_base("bit");
    assert!((-bit.log(0.5) - 1.0).abs() < 1e-12);

    let dit = select_base("dit");
    assert!((-dit.log(0.1) - 1.0).abs() < 1e-12);

    assert_eq!(select_base("parsec"), LogBase::Bit);
}
