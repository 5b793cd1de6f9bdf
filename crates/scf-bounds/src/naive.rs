//! Closed-form bounds that need no summation over neighbourhoods.
//!
//! These are the coarse estimates plotted against empirical frequencies for
//! small graphs. They are raw values and are not clipped.

use scf_core::GnpParams;

use crate::combinatorics::{binom, binom_int, pairs};

/// Probability that a fixed 4-set induces a claw, `4 p³ (1-p)³`.
pub fn four_set_has_claw(p: f64) -> f64 {
    4.0 * p.powi(3) * (1.0 - p).powi(3)
}

/// `P(claw-free) <= 1 - P(a fixed 4-set induces a claw)`.
pub fn naive_claw_free_upper(p: f64) -> f64 {
    1.0 - four_set_has_claw(p)
}

/// Union bound `P(claw-free) >= 1 - C(n, 4) · 4 p³ (1-p)³`.
pub fn naive_claw_free_lower(params: GnpParams) -> f64 {
    1.0 - binom_int(params.n(), 4) * four_set_has_claw(params.p())
}

/// Exponent of `p` for a set of `set_size` vertices to be a simplicial clique,
/// with the outside neighbourhood replaced by its expected size.
///
/// The effective neighbourhood `(n - s) p` is fractional, hence the real
/// binomial.
pub fn simplicial_exponent(p: f64, set_size: u64, size: u64) -> f64 {
    pairs(set_size) + binom(size.saturating_sub(set_size) as f64 * p, 2.0)
}

/// `p^simplicial_exponent`, the approximate probability that a fixed set is a
/// simplicial clique.
pub fn set_is_simplicial_clique(p: f64, set_size: u64, size: u64) -> f64 {
    p.powf(simplicial_exponent(p, set_size, size))
}

/// Expected number of simplicial cliques under the mean-neighbourhood
/// approximation, an upper bound on `P(some simplicial clique)`.
pub fn naive_simplicial_upper(params: GnpParams) -> f64 {
    let n = params.n();
    (1..=n)
        .map(|s| binom_int(n, s) * set_is_simplicial_clique(params.p(), s, n))
        .sum()
}

/// The whole graph being complete guarantees a simplicial clique.
pub fn naive_simplicial_lower(params: GnpParams) -> f64 {
    set_is_simplicial_clique(params.p(), params.n(), params.n())
}

/// Upper bound on the probability that a fixed vertex of a claw-free graph is
/// not simplicial.
///
/// Counts leaf triples among the other `n - 1` vertices that are not
/// compatible with the vertex being simplicial; independent triples are
/// excluded since they would form a claw.
pub fn single_vertex_not_simplicial_upper(params: GnpParams) -> f64 {
    let p = params.p();
    let q = params.q();
    let partial = p.powi(3) + 3.0 * p * p * q + 3.0 * p * q * q;
    let compatible =
        q.powi(3) + 3.0 * p * q * q + 3.0 * p * p * q + p.powi(3) * (p.powi(3) / partial);
    binom_int(params.n().saturating_sub(1), 3) * (1.0 - compatible)
}

/// `max(0, 1 - single_vertex_not_simplicial_upper)`.
pub fn single_vertex_simplicial_lower(params: GnpParams) -> f64 {
    (1.0 - single_vertex_not_simplicial_upper(params)).max(0.0)
}

/// Expected number of simplicial vertices implied by
/// [`single_vertex_simplicial_lower`].
pub fn expected_simplicial_vertices_lower(params: GnpParams) -> f64 {
    params.n() as f64 * single_vertex_simplicial_lower(params)
}
