//! Dense-limit asymptotics for claw-free graphs.

use scf_core::GnpParams;

use crate::combinatorics::pairs;

/// Density `(3 - √5) / 2` at which the dominant claw-free structure switches.
pub fn claw_free_transition_point() -> f64 {
    (3.0 - 5.0_f64.sqrt()) / 2.0
}

/// Per-pair exponent rate `r(p)` of the claw-free probability.
///
/// `-log2(1 - p)` below [`claw_free_transition_point`], `-log2(p) / 2` from
/// it onwards. The two branches meet at the transition.
pub fn claw_free_rate(p: f64) -> f64 {
    if p < claw_free_transition_point() {
        -(1.0 - p).log2()
    } else {
        -0.5 * p.log2()
    }
}

/// Asymptotic `P(G(n, p) is claw-free) ≈ 2^(-C(n, 2) · r(p))` for dense
/// graphs (Perkins, "The Typical Structure of Dense Claw-free Graphs").
pub fn limit_claw_free(params: GnpParams) -> f64 {
    (-pairs(params.n()) * claw_free_rate(params.p())).exp2()
}
