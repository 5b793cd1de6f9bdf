//! Regime-weighted bounds on `P(G(n, p) is claw-free and has a simplicial clique)`.
//!
//! Both bounds have the form
//!
//! ```text
//! P(conn) · claw(G) · clique(G) + (1 - P(conn)) · claw(layout) · clique(layout)
//! ```
//!
//! where the second term evaluates the factors on the component layout of the
//! density regime and multiplies them across components. Claw-freeness and
//! clique existence are treated as independent. Factors are clipped here and
//! nowhere earlier.

use scf_core::errors::{ErrorInfo, ScfError};
use scf_core::GnpParams;
use serde::{Deserialize, Serialize};

use crate::claws::{exp_claws, inverted_second_moment_claws};
use crate::cliques::{better_second_moment_cliques, exp_simp_clique};
use crate::config::BoundConfig;
use crate::moments::{first_moment, inverted_first_moment};
use crate::regime::{prob_connected, ComponentLayout, Regime};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Lower,
    Upper,
}

/// Claw-free and simplicial-clique factors of one component (or a product of
/// components).
#[derive(Debug, Clone, Copy)]
struct Factors {
    claw: f64,
    clique: f64,
}

impl Factors {
    fn of(params: GnpParams, side: Side) -> Self {
        let n = params.n();
        match side {
            Side::Lower => {
                let claw = inverted_first_moment(exp_claws(params)).max(0.0);
                // The clique factor is irrelevant once the claw factor vanishes.
                let clique = if claw > 0.0 {
                    better_second_moment_cliques(params, n).max(0.0)
                } else {
                    0.0
                };
                Self { claw, clique }
            }
            Side::Upper => {
                let claw = (1.0 - 1.0 / inverted_second_moment_claws(params)).max(0.0);
                let clique = if claw > 0.0 {
                    first_moment(exp_simp_clique(params, n)).min(1.0)
                } else {
                    0.0
                };
                Self { claw, clique }
            }
        }
    }

    fn powu(self, count: u64) -> Self {
        Self {
            claw: powu(self.claw, count),
            clique: powu(self.clique, count),
        }
    }

    fn times(self, other: Self) -> Self {
        Self {
            claw: self.claw * other.claw,
            clique: self.clique * other.clique,
        }
    }

    fn product(&self) -> f64 {
        self.claw * self.clique
    }
}

fn powu(base: f64, exp: u64) -> f64 {
    match i32::try_from(exp) {
        Ok(exp) => base.powi(exp),
        Err(_) => base.powf(exp as f64),
    }
}

fn layout_factors(params: GnpParams, layout: ComponentLayout, whole: Factors, side: Side) -> Factors {
    match layout {
        ComponentLayout::Single => whole,
        ComponentLayout::Uniform { size, count } => {
            Factors::of(params.resized(size), side).powu(count)
        }
        ComponentLayout::GiantPlusSmall {
            giant,
            small_size,
            small_count,
        } => {
            let big = Factors::of(params.resized(giant), side);
            let small = Factors::of(params.resized(small_size), side);
            big.times(small.powu(small_count))
        }
    }
}

fn compose(params: GnpParams, config: &BoundConfig, side: Side) -> Result<f64, ScfError> {
    let regime = Regime::classify(params);
    let connected = prob_connected(params);
    let layout = ComponentLayout::for_regime(params, regime, config.critical_regime);
    let whole = Factors::of(params, side);
    let split = layout_factors(params, layout, whole, side);
    let value = connected * whole.product() + (1.0 - connected) * split.product();
    if !value.is_finite() {
        return Err(ScfError::Numeric(
            ErrorInfo::new("non-finite-bound", "bound evaluated to a non-finite value")
                .with_context("n", params.n().to_string())
                .with_context("p", params.p().to_string())
                .with_context("side", format!("{side:?}").to_lowercase()),
        ));
    }
    Ok(value.clamp(0.0, 1.0))
}

/// Lower bound under an explicit configuration.
///
/// Uses `max(0, 1 - E[claws])` for claw-freeness and the Paley–Zygmund clique
/// estimate over all clique sizes.
pub fn lower_bound_with(params: GnpParams, config: &BoundConfig) -> Result<f64, ScfError> {
    compose(params, config, Side::Lower)
}

/// Upper bound under an explicit configuration.
///
/// Uses `1 - E[claws]²/E[claws²]` for claw-freeness and `min(1, E[cliques])`
/// for clique existence.
pub fn upper_bound_with(params: GnpParams, config: &BoundConfig) -> Result<f64, ScfError> {
    compose(params, config, Side::Upper)
}

/// Lower bound on the probability that G(n, p) is claw-free and has a
/// simplicial clique, with the default configuration.
pub fn get_lower_bound(n: u64, p: f64) -> Result<f64, ScfError> {
    lower_bound_with(GnpParams::new(n, p)?, &BoundConfig::default())
}

/// Upper bound counterpart of [`get_lower_bound`].
pub fn get_upper_bound(n: u64, p: f64) -> Result<f64, ScfError> {
    upper_bound_with(GnpParams::new(n, p)?, &BoundConfig::default())
}

/// Both bounds together with the regime data they were composed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundEstimate {
    /// Evaluated parameters.
    pub params: GnpParams,
    /// Density regime of `params`.
    pub regime: Regime,
    /// Component layout used for the unconnected term.
    pub layout: ComponentLayout,
    /// Approximate probability that the graph is connected.
    pub connected: f64,
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
}

impl BoundEstimate {
    /// Width of the bracket, `upper - lower`.
    pub fn gap(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Evaluates both bounds for `params`.
pub fn estimate(params: GnpParams, config: &BoundConfig) -> Result<BoundEstimate, ScfError> {
    let regime = Regime::classify(params);
    Ok(BoundEstimate {
        params,
        regime,
        layout: ComponentLayout::for_regime(params, regime, config.critical_regime),
        connected: prob_connected(params),
        lower: lower_bound_with(params, config)?,
        upper: upper_bound_with(params, config)?,
    })
}
