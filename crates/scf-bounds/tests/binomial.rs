use proptest::prelude::*;
use scf_bounds::combinatorics::{ln_gamma, LnFactorials};
use scf_bounds::{binom, binom_int};

#[test]
fn zero_selection_is_one() {
    for n in [0.0, 1.0, 7.0, 2.5, 1e6] {
        assert_eq!(binom(n, 0.0), 1.0);
    }
    assert_eq!(binom_int(0, 0), 1.0);
}

#[test]
fn out_of_range_selection_is_zero() {
    assert_eq!(binom(3.0, 4.0), 0.0);
    assert_eq!(binom_int(3, 4), 0.0);
    assert_eq!(binom(5.0, -1.0), 0.0);
    assert_eq!(binom(4.0, 4.5), 0.0);
    assert!(binom(f64::NAN, 1.0).is_nan());
}

#[test]
fn small_integer_values_are_exact() {
    assert_eq!(binom(19.0, 3.0), 969.0);
    assert_eq!(binom_int(52, 5), 2_598_960.0);
    assert_eq!(binom_int(60, 30), 118_264_581_564_861_424.0);
}

#[test]
fn real_arguments_follow_the_gamma_extension() {
    let value = binom(2.4, 2.0);
    assert!((value - 1.68).abs() < 1e-12);
    let half = binom(0.5, 0.5);
    assert!((half - 1.0).abs() < 1e-12);
    assert!((ln_gamma(4.5) - 11.631_728_396_567_45_f64.ln()).abs() < 1e-12);
}

#[test]
fn fractional_tops_extend_past_the_selection() {
    assert!((binom(1.5, 2.0) - 0.375).abs() < 1e-15);
    assert!((binom(0.7, 2.0) + 0.105).abs() < 1e-15);
    assert_eq!(binom(-1.0, 2.0), 1.0);
    // Reflection branch: Γ(n - k + 1) is evaluated at negative arguments.
    assert!((binom(0.7, 2.5) + 0.047_644_471_747_702_91).abs() < 1e-10);
    assert!((binom(2.3, 3.6) + 0.046_347_004_031_390_48).abs() < 1e-10);
    assert!((binom(-0.5, 2.2) - 0.290_868_334_802_223).abs() < 1e-10);
    assert_eq!(binom(-0.5, 1.5), 0.0);
}

#[test]
fn large_arguments_do_not_overflow_prematurely() {
    let value = binom_int(1_000, 500);
    assert!(value.is_finite());
    let table = LnFactorials::new(1_000);
    assert!((table.ln_binom(1_000, 500) - value.ln()).abs() < 1e-9);
    // C(2000, 1000) exceeds f64::MAX.
    assert!(binom_int(2_000, 1_000).is_infinite());
    assert!(table.ln_binom(1_000, 3).is_finite());
}

proptest! {
    #[test]
    fn symmetric_in_selection(n in 0u64..200, k in 0u64..200) {
        prop_assume!(k <= n);
        let left = binom_int(n, k);
        let right = binom_int(n, n - k);
        prop_assert!((left - right).abs() <= 1e-12 * left.max(1.0));
    }

    #[test]
    fn pascal_rule_holds(n in 1u64..120, k in 1u64..120) {
        prop_assume!(k <= n);
        let lhs = binom_int(n, k);
        let rhs = binom_int(n - 1, k - 1) + binom_int(n - 1, k);
        prop_assert!((lhs - rhs).abs() <= 1e-12 * lhs);
    }
}
