//! Probability transforms applied to substructure counts.
//!
//! Every transform takes an expectation `E[X]` of a non-negative integer
//! count `X` and produces an estimate of `P(X = 0)` or `P(X > 0)`. Inputs are
//! raw expectations and may exceed one; none of the transforms clip, that is
//! left to the bound layer.

/// Markov building block, `P(X > 0) <= E[X]`.
pub fn first_moment(exp: f64) -> f64 {
    exp
}

/// `P(X = 0) >= 1 - E[X]`.
///
/// Only informative for `exp <= 1`; the result is negative otherwise and must
/// be clipped by the caller.
pub fn inverted_first_moment(exp: f64) -> f64 {
    1.0 - exp
}

/// Second-moment estimate of `P(X > 0)`, `1 / (1 + 1/E[X])`.
///
/// Tends to `0` as `exp -> 0` and to `1` as `exp -> inf`.
pub fn second_moment(exp: f64) -> f64 {
    if exp <= 0.0 {
        return 0.0;
    }
    if exp.is_infinite() {
        return 1.0;
    }
    exp / (1.0 + exp)
}

/// Second-moment estimate of `P(X = 0)`, `1 / (E[X] + 1)`.
pub fn inverted_second_moment(exp: f64) -> f64 {
    1.0 / (exp + 1.0)
}

/// Paley–Zygmund estimate `1 / (1 + 1/E - C/E^2)` of `P(X > 0)`.
///
/// `correction` is the diagonal contribution to `E[X^2]` beyond `E[X]`.
/// Requires `0 <= correction <= exp`, which keeps the result in `[0, 1]`.
/// The limiting values are `0` for `exp == 0` and `1` for `exp == inf`.
pub fn paley_zygmund(exp: f64, correction: f64) -> f64 {
    if exp <= 0.0 {
        return 0.0;
    }
    if exp.is_infinite() {
        return 1.0;
    }
    // (E - C) / E^2 without forming E^2, which overflows long before E does.
    let excess = (exp - correction).max(0.0) / exp / exp;
    1.0 / (1.0 + excess)
}
