//! Random interaction graphs of k-local spin Hamiltonians as G(n, p).
//!
//! Each of the `d · C(spins, 2) · k³` terms of a k-local Hamiltonian on
//! `spins` sites becomes a vertex; two terms are joined when they
//! anticommute, which happens when they overlap on an odd number of sites
//! with differing Pauli factors.

use scf_core::errors::{ErrorInfo, ScfError};
use scf_core::GnpParams;
use serde::{Deserialize, Serialize};

use crate::combinatorics::{binom_int, round_half_even};

/// Parameters of a random k-local Hamiltonian ensemble.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KLocalModel {
    /// Number of spins.
    pub spins: u64,
    /// Locality of every term.
    pub locality: u64,
    /// Term density relative to `C(spins, 2) · k³`.
    pub density: f64,
}

/// Probability that two random k-local terms on `spins` sites anticommute.
///
/// Sums the binomial weights of odd overlaps with per-site anticommutation
/// probability `2k / (3 · spins)`.
pub fn edge_probability(spins: u64, locality: u64) -> f64 {
    let q = 2.0 * locality as f64 / (3.0 * spins as f64);
    (1..=locality)
        .step_by(2)
        .map(|j| {
            binom_int(locality, j) * q.powi(j as i32) * (1.0 - q).powi((locality - j) as i32)
        })
        .sum()
}

impl KLocalModel {
    /// Number of terms, i.e. vertices of the interaction graph.
    pub fn vertices(&self) -> u64 {
        let k = self.locality as f64;
        round_half_even(self.density * binom_int(self.spins, 2) * k * k * k)
    }

    /// G(n, p) parameters of the interaction graph.
    pub fn gnp(&self) -> Result<GnpParams, ScfError> {
        if self.spins == 0 || self.locality == 0 || self.locality > self.spins {
            return Err(ScfError::Domain(
                ErrorInfo::new("klocal-invalid", "locality must lie in 1..=spins")
                    .with_context("spins", self.spins.to_string())
                    .with_context("locality", self.locality.to_string()),
            ));
        }
        GnpParams::new(self.vertices(), edge_probability(self.spins, self.locality))
    }
}
