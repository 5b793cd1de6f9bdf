//! Moments of the number of simplicial cliques in G(n, p).
//!
//! A clique of size `k` is simplicial when every outside vertex adjacent to it
//! is adjacent to all of it, so its attached neighbours form a clique as
//! well. The estimate treats each member's neighbourhood independently: for
//! one member, the `l` attached neighbours among the `n - k` outside vertices
//! must be mutually adjacent, giving the neighbourhood mass
//!
//! ```text
//! N(k) = Σ_{l=0}^{n-k} C(n-k, l) · p^l · (1-p)^(n-k-l) · p^C(l,2)
//! ```
//!
//! which is raised to the `k`-th power. Both simplifications overcount for
//! dense graphs, so the resulting bounds are loose for large `p`.

use scf_core::GnpParams;
use serde::{Deserialize, Serialize};

use crate::combinatorics::{pairs, LnFactorials};
use crate::moments::paley_zygmund;

/// Logarithms below this underflow to zero in `f64`.
const LN_UNDERFLOW: f64 = -745.2;

/// First moment and diagonal second-moment correction of the simplicial
/// clique count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CliqueMoments {
    /// `Σ_k C(n, k) · t_k` with `t_k = p^C(k,2) · N(k)^k`.
    pub expectation: f64,
    /// `Σ_k C(n, k) · t_k²`.
    pub correction: f64,
}

impl CliqueMoments {
    /// Paley–Zygmund estimate of `P(some simplicial clique exists)`.
    pub fn second_moment_estimate(&self) -> f64 {
        paley_zygmund(self.expectation, self.correction)
    }
}

/// Neighbourhood mass `N(k)` for `outside = n - k` candidate neighbours.
///
/// Terms are evaluated in log space. Once the term ratio drops below one the
/// terms decrease monotonically, so the sum stops as soon as they underflow.
fn neighbourhood_mass(table: &LnFactorials, outside: u64, ln_p: f64, ln_q: f64) -> f64 {
    let mut mass = 0.0;
    for l in 0..=outside {
        let ln_term = table.ln_binom(outside, l)
            + l as f64 * ln_p
            + (outside - l) as f64 * ln_q
            + pairs(l) * ln_p;
        mass += ln_term.exp();
        if l == outside {
            break;
        }
        let ln_ratio = ((outside - l) as f64).ln() - ((l + 1) as f64).ln() + ln_p - ln_q
            + l as f64 * ln_p;
        if ln_ratio < 0.0 && ln_term < LN_UNDERFLOW {
            break;
        }
    }
    mass.min(1.0)
}

/// Computes both moments over clique sizes `1..=k_max` in a single pass.
///
/// `k_max` above `n` is clamped to `n`; `k_max == 0` yields zero moments.
pub fn clique_moments(params: GnpParams, k_max: u64) -> CliqueMoments {
    let n = params.n();
    let k_max = k_max.min(n);
    let table = LnFactorials::new(n);
    let ln_p = params.p().ln();
    let ln_q = params.q().ln();

    let mut expectation = 0.0;
    let mut correction = 0.0;
    for k in 1..=k_max {
        let mass = neighbourhood_mass(&table, n - k, ln_p, ln_q);
        if mass <= 0.0 {
            continue;
        }
        let ln_attached = pairs(k) * ln_p + k as f64 * mass.ln();
        let ln_count = table.ln_binom(n, k);
        expectation += (ln_count + ln_attached).exp();
        correction += (ln_count + 2.0 * ln_attached).exp();
    }
    CliqueMoments {
        expectation,
        correction,
    }
}

/// Expected number of simplicial cliques of size at most `k_max`.
pub fn exp_simp_clique(params: GnpParams, k_max: u64) -> f64 {
    clique_moments(params, k_max).expectation
}

/// Second-moment estimate `1 / (1 + 1/E - C/E²)` of the probability that a
/// simplicial clique of size at most `k_max` exists.
///
/// Returns `0` when the expectation vanishes.
pub fn better_second_moment_cliques(params: GnpParams, k_max: u64) -> f64 {
    clique_moments(params, k_max).second_moment_estimate()
}
