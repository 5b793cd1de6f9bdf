//! Moments of the number of claws (induced `K_{1,3}`) in G(n, p).

use scf_core::GnpParams;

use crate::combinatorics::binom;

/// Probability weight of a fixed claw: three present spokes, three absent
/// edges among the leaves.
fn claw_weight(params: GnpParams) -> f64 {
    params.p().powi(3) * params.q().powi(3)
}

/// Expected number of claws, `n · C(n-1, 3) · p³ (1-p)³`.
///
/// Exact by linearity of expectation: a centre and an unordered leaf triple.
pub fn exp_claws(params: GnpParams) -> f64 {
    let n = params.n();
    if n < 4 {
        return 0.0;
    }
    n as f64 * binom((n - 1) as f64, 3.0) * claw_weight(params)
}

/// Ratio `E[X²] / E[X]²` for the claw count `X`.
///
/// Sums the pair contributions of two claws by the number of shared vertices
/// (none, one, two, three or all four), normalised by `C(n, 4)`. Graphs with
/// fewer than four vertices carry no claws; the ratio is then `+inf`, the
/// limit under which `1 - 1/ratio` (the upper bound on `P(X = 0)`) is `1`.
pub fn inverted_second_moment_claws(params: GnpParams) -> f64 {
    let n = params.n();
    if n < 4 {
        return f64::INFINITY;
    }
    let p = params.p();
    let q = params.q();
    let rest = (n - 4) as f64;
    let disjoint = binom(rest, 4.0);
    let one_shared = 4.0 * binom(rest, 3.0);
    let two_shared = 3.0 * binom(rest, 2.0) / (2.0 * p * q);
    let three_shared = rest / 4.0 * (1.0 / q.powi(3) + 3.0 / (p * p * q));
    let identical = 1.0 / (4.0 * p.powi(3) * q.powi(3));
    (disjoint + one_shared + two_shared + three_shared + identical) / binom(n as f64, 4.0)
}

/// Second moment `E[X]² · E[X²]/E[X]²` of the claw count, for diagnostics.
///
/// Zero when the graph is too small to contain a claw.
pub fn variance_claws(params: GnpParams) -> f64 {
    let exp = exp_claws(params);
    if exp == 0.0 {
        return 0.0;
    }
    exp * exp * inverted_second_moment_claws(params)
}
