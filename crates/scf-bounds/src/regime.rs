//! Density regimes of G(n, p) and the component layouts assumed in each.
//!
//! Below `p = 1/n` the graph is modelled as `n / ln n` components of size
//! `ln n`; between `1/n` and `ln(n)/n` as a giant component of size `2n/3`
//! plus small components of size `ln n`; above `ln(n)/n` as one component.
//! Sizes and counts are rounded half-to-even.

use scf_core::GnpParams;
use serde::{Deserialize, Serialize};

use crate::combinatorics::round_half_even;
use crate::config::CriticalRegimePolicy;

/// Density regime of a parameter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Regime {
    /// `p < 1/n`: many small components.
    Sparse,
    /// `1/n <= p < ln(n)/n`: one giant component plus small ones.
    Critical,
    /// `p >= ln(n)/n`: asymptotically connected.
    Connected,
}

impl Regime {
    /// Classifies `(n, p)`.
    pub fn classify(params: GnpParams) -> Self {
        let n = params.n() as f64;
        let p = params.p();
        if p < 1.0 / n {
            Regime::Sparse
        } else if p < n.ln() / n {
            Regime::Critical
        } else {
            Regime::Connected
        }
    }

    /// Lowercase label used in reports and CSV exports.
    pub fn label(&self) -> &'static str {
        match self {
            Regime::Sparse => "sparse",
            Regime::Critical => "critical",
            Regime::Connected => "connected",
        }
    }
}

/// Gumbel approximation `exp(-exp(-c))`, `c = n p / ln n`, of the probability
/// that G(n, p) is connected. A single vertex is always connected.
pub fn prob_connected(params: GnpParams) -> f64 {
    if params.n() == 1 {
        return 1.0;
    }
    let n = params.n() as f64;
    let c = n * params.p() / n.ln();
    (-(-c).exp()).exp()
}

/// Component structure assumed for the unconnected part of the bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "layout", rename_all = "kebab-case")]
pub enum ComponentLayout {
    /// The whole graph is treated as one component.
    Single,
    /// `count` independent components of `size` vertices each.
    Uniform {
        /// Vertices per component.
        size: u64,
        /// Number of components.
        count: u64,
    },
    /// One giant component plus `small_count` components of `small_size`.
    GiantPlusSmall {
        /// Vertices in the giant component.
        giant: u64,
        /// Vertices per small component.
        small_size: u64,
        /// Number of small components.
        small_count: u64,
    },
}

impl ComponentLayout {
    /// Layout assumed for `params` in `regime`.
    ///
    /// The critical regime only decomposes into a giant component under
    /// [`CriticalRegimePolicy::GiantComponent`]; otherwise it is treated like
    /// the connected regime.
    pub fn for_regime(params: GnpParams, regime: Regime, policy: CriticalRegimePolicy) -> Self {
        let n = params.n();
        if n == 1 {
            return ComponentLayout::Single;
        }
        let n_f = n as f64;
        let ln_n = n_f.ln();
        match (regime, policy) {
            (Regime::Sparse, _) => ComponentLayout::Uniform {
                size: round_half_even(ln_n).max(1),
                count: round_half_even(n_f / ln_n),
            },
            (Regime::Critical, CriticalRegimePolicy::GiantComponent) => {
                let giant = round_half_even(2.0 / 3.0 * n_f);
                let small_size = round_half_even(ln_n).max(1);
                let small_count =
                    round_half_even(n.saturating_sub(giant) as f64 / small_size as f64);
                ComponentLayout::GiantPlusSmall {
                    giant,
                    small_size,
                    small_count,
                }
            }
            (Regime::Critical, CriticalRegimePolicy::Connected) | (Regime::Connected, _) => {
                ComponentLayout::Single
            }
        }
    }
}
