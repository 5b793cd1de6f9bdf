#![deny(missing_docs)]
#![doc = "Moment-method bounds on the probability that G(n, p) is claw-free and contains a simplicial clique."]

//! Data flows one way: [`combinatorics`] feeds the claw and clique moment
//! calculators, [`bounds`] composes them per density regime, and [`search`]
//! inverts the lower bound. Every function is pure; [`batch`] maps them over
//! arrays in parallel.

/// Element-wise parallel evaluation.
pub mod batch;
/// Regime-weighted lower and upper bounds.
pub mod bounds;
/// Claw count moments.
pub mod claws;
/// Simplicial clique count moments.
pub mod cliques;
/// Binomial coefficients and log-factorial tables.
pub mod combinatorics;
/// YAML configuration schema and defaults.
pub mod config;
/// Random k-local Hamiltonian interaction graphs.
pub mod klocal;
/// Dense-limit asymptotics.
pub mod limits;
/// Probability transforms of moment values.
pub mod moments;
/// Closed-form coarse bounds.
pub mod naive;
/// Density regimes and component layouts.
pub mod regime;
/// Threshold search.
pub mod search;

pub use bounds::{
    estimate, get_lower_bound, get_upper_bound, lower_bound_with, upper_bound_with, BoundEstimate,
};
pub use claws::{exp_claws, inverted_second_moment_claws, variance_claws};
pub use cliques::{better_second_moment_cliques, clique_moments, exp_simp_clique, CliqueMoments};
pub use combinatorics::{binom, binom_int};
pub use config::{BoundConfig, CriticalRegimePolicy, SearchConfig};
pub use moments::{first_moment, inverted_first_moment, inverted_second_moment, second_moment};
pub use regime::{prob_connected, ComponentLayout, Regime};
pub use search::{gnp_almost_surely_scf_get_n, gnp_almost_surely_scf_get_threshold, search_n};

pub use scf_core::{GnpParams, ScfError};
