//! Binomial coefficients over integer and real arguments.
//!
//! Integer coefficients are evaluated with an interleaved multiply/divide
//! product, which is exact as long as the result fits in the 53-bit mantissa
//! and degrades gracefully to `inf` when the true value exceeds `f64::MAX`.
//! Real arguments (the "effective" neighbourhood sizes used by the density
//! heuristics) go through the log-gamma extension. The summation kernels use
//! [`LnFactorials`] so that nested sums never form a factorial directly.

use std::f64::consts::PI;

const LANCZOS_G: f64 = 7.0;

const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

/// Largest integer argument for which the exact product path is taken.
const MAX_EXACT_ARGUMENT: f64 = 9_007_199_254_740_992.0;

/// Largest integral `k` evaluated by the falling-factorial product.
const MAX_FALLING_PRODUCT: f64 = 1_024.0;

/// `ln |Γ(x)|`; `+inf` at the poles `x = 0, -1, -2, ...`.
pub fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        return (PI / (PI * x).sin().abs()).ln() - ln_gamma(1.0 - x);
    }
    let x = x - 1.0;
    let mut acc = LANCZOS_COEFFICIENTS[0];
    for (idx, coefficient) in LANCZOS_COEFFICIENTS.iter().enumerate().skip(1) {
        acc += coefficient / (x + idx as f64);
    }
    let t = x + LANCZOS_G + 0.5;
    0.5 * (2.0 * PI).ln() + (x + 0.5) * t.ln() - t + acc.ln()
}

/// Binomial coefficient `C(n, k)` for non-negative integers.
///
/// Returns `0.0` when `k > n`.
pub fn binom_int(n: u64, k: u64) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut result = 1.0_f64;
    for i in 0..k {
        result = result * (n - i) as f64 / (i + 1) as f64;
    }
    result
}

/// Sign of `Γ(x)` away from its poles.
fn gamma_sign(x: f64) -> f64 {
    if x > 0.0 || x.floor().rem_euclid(2.0) == 0.0 {
        1.0
    } else {
        -1.0
    }
}

fn is_pole(x: f64) -> bool {
    x <= 0.0 && x.fract() == 0.0
}

/// Binomial coefficient generalised to real arguments.
///
/// For a non-negative integer `n` the combinatorial convention holds: the
/// coefficient is `0.0` whenever `k > n`. Any other `n` goes through the gamma
/// extension `Γ(n+1) / (Γ(k+1) Γ(n-k+1))`, which can be negative, e.g.
/// `C(0.7, 2) = -0.105`. Integral `k` uses the falling-factorial product.
/// `C(n, 0) = 1`, `k < 0` gives `0.0`, and NaN inputs propagate. A pole of
/// `Γ(n+1)` reached outside the product path yields NaN.
pub fn binom(n: f64, k: f64) -> f64 {
    if n.is_nan() || k.is_nan() {
        return f64::NAN;
    }
    if k < 0.0 {
        return 0.0;
    }
    if k == 0.0 {
        return 1.0;
    }
    if n >= 0.0 && n.fract() == 0.0 {
        if k > n {
            return 0.0;
        }
        if k == n {
            return 1.0;
        }
        if k.fract() == 0.0 && n <= MAX_EXACT_ARGUMENT {
            return binom_int(n as u64, k as u64);
        }
    } else if k.fract() == 0.0 && k <= MAX_FALLING_PRODUCT {
        return falling_binom(n, k as u64);
    }

    if is_pole(n + 1.0) {
        return f64::NAN;
    }
    let rest = n - k + 1.0;
    if is_pole(rest) {
        return 0.0;
    }
    let sign = gamma_sign(n + 1.0) * gamma_sign(rest);
    sign * (ln_gamma(n + 1.0) - ln_gamma(k + 1.0) - ln_gamma(rest)).exp()
}

/// `n (n-1) ... (n-k+1) / k!` for any real `n`.
fn falling_binom(n: f64, k: u64) -> f64 {
    let mut result = 1.0_f64;
    for i in 0..k {
        result = result * (n - i as f64) / (i + 1) as f64;
    }
    result
}

/// Number of unordered pairs in a set of `k` elements, `C(k, 2)`.
pub fn pairs(k: u64) -> f64 {
    let k = k as f64;
    k * (k - 1.0) / 2.0
}

/// Rounds half-way cases to the nearest even integer and saturates into `u64`.
///
/// Component sizes in the regime heuristics are rounded this way.
pub fn round_half_even(x: f64) -> u64 {
    x.round_ties_even() as u64
}

/// Cumulative table of `ln(i!)` for `i = 0..=max`.
#[derive(Debug, Clone)]
pub struct LnFactorials {
    table: Vec<f64>,
}

impl LnFactorials {
    /// Builds the table up to and including `max!`.
    pub fn new(max: u64) -> Self {
        let mut table = Vec::with_capacity(max as usize + 1);
        let mut acc = 0.0;
        table.push(acc);
        for i in 1..=max {
            acc += (i as f64).ln();
            table.push(acc);
        }
        Self { table }
    }

    /// Largest argument covered by the table.
    pub fn max(&self) -> u64 {
        (self.table.len() - 1) as u64
    }

    /// `ln(n!)`.
    ///
    /// # Panics
    /// Panics when `n` exceeds [`LnFactorials::max`].
    pub fn ln_factorial(&self, n: u64) -> f64 {
        self.table[n as usize]
    }

    /// `ln C(n, k)`, or `-inf` when `k > n`.
    pub fn ln_binom(&self, n: u64, k: u64) -> f64 {
        if k > n {
            return f64::NEG_INFINITY;
        }
        self.ln_factorial(n) - self.ln_factorial(k) - self.ln_factorial(n - k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gamma_matches_factorials() {
        assert!(ln_gamma(1.0).abs() < 1e-13);
        assert!(ln_gamma(2.0).abs() < 1e-13);
        assert!((ln_gamma(6.0) - 120.0_f64.ln()).abs() < 1e-12);
        assert!((ln_gamma(0.5) - PI.sqrt().ln()).abs() < 1e-12);
    }

    #[test]
    fn table_agrees_with_product() {
        let table = LnFactorials::new(60);
        assert_eq!(table.max(), 60);
        for (n, k) in [(10, 3), (19, 3), (40, 20), (60, 1)] {
            let direct = binom_int(n, k);
            assert!((table.ln_binom(n, k).exp() - direct).abs() / direct < 1e-11);
        }
        assert_eq!(table.ln_binom(3, 4), f64::NEG_INFINITY);
    }

    #[test]
    fn ties_round_to_even() {
        assert_eq!(round_half_even(0.5), 0);
        assert_eq!(round_half_even(1.5), 2);
        assert_eq!(round_half_even(2.5), 2);
        assert_eq!(round_half_even(2.6), 3);
    }
}
