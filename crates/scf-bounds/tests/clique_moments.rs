use scf_bounds::combinatorics::{binom_int, pairs};
use scf_bounds::{
    better_second_moment_cliques, clique_moments, exp_simp_clique, CliqueMoments, GnpParams,
};

fn params(n: u64, p: f64) -> GnpParams {
    GnpParams::new(n, p).unwrap()
}

fn direct_moments(n: u64, p: f64, k_max: u64) -> (f64, f64) {
    let mut expectation = 0.0;
    let mut correction = 0.0;
    for k in 1..=k_max {
        let mut neigh = 0.0;
        for l in 0..=(n - k) {
            neigh += binom_int(n - k, l)
                * p.powi(l as i32)
                * (1.0 - p).powi((n - k - l) as i32)
                * p.powf(pairs(l));
        }
        let attached = p.powf(pairs(k)) * neigh.powi(k as i32);
        expectation += binom_int(n, k) * attached;
        correction += binom_int(n, k) * attached * attached;
    }
    (expectation, correction)
}

#[test]
fn single_vertex_is_a_simplicial_clique() {
    let moments = clique_moments(params(1, 0.7), 1);
    assert_eq!(
        moments,
        CliqueMoments {
            expectation: 1.0,
            correction: 1.0
        }
    );
    assert_eq!(better_second_moment_cliques(params(1, 0.7), 1), 1.0);
}

#[test]
fn log_space_sum_matches_direct_sum() {
    for (n, p) in [(6, 0.3), (8, 0.3), (12, 0.5), (15, 0.85), (20, 0.05)] {
        let (expectation, correction) = direct_moments(n, p, n);
        let moments = clique_moments(params(n, p), n);
        assert!(
            (moments.expectation - expectation).abs() <= 1e-10 * expectation,
            "n={n} p={p}"
        );
        assert!(
            (moments.correction - correction).abs() <= 1e-10 * correction,
            "n={n} p={p}"
        );
    }
}

#[test]
fn sizes_beyond_n_contribute_nothing() {
    let params = params(9, 0.4);
    assert_eq!(exp_simp_clique(params, 9), exp_simp_clique(params, 50));
    assert_eq!(exp_simp_clique(params, 0), 0.0);
    assert_eq!(better_second_moment_cliques(params, 0), 0.0);
    assert!(exp_simp_clique(params, 3) < exp_simp_clique(params, 9));
}

#[test]
fn correction_never_exceeds_expectation() {
    for n in [2, 5, 17, 60] {
        for p in [0.01, 0.3, 0.6, 0.95] {
            let moments = clique_moments(params(n, p), n);
            assert!(moments.correction <= moments.expectation);
        }
    }
}

#[test]
fn second_moment_estimate_is_a_probability_below_the_expectation() {
    for n in [2, 5, 17, 60] {
        for p in [0.01, 0.3, 0.6, 0.95] {
            let params = params(n, p);
            let estimate = better_second_moment_cliques(params, n);
            assert!((0.0..=1.0).contains(&estimate));
            assert!(estimate <= exp_simp_clique(params, n) * (1.0 + 1e-12));
        }
    }
}

#[test]
fn large_graphs_stay_finite() {
    let sparse = clique_moments(params(3_000, 0.001), 3_000);
    assert!(sparse.expectation.is_finite());
    assert!(sparse.expectation > 1.0);
    assert!((0.0..=1.0).contains(&sparse.second_moment_estimate()));

    // Every clique term underflows at half density.
    let dense = clique_moments(params(3_000, 0.5), 3_000);
    assert_eq!(dense.expectation, 0.0);
    assert_eq!(dense.second_moment_estimate(), 0.0);
}
