//! Validated parameters of the Erdős–Rényi model G(n, p).

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, ScfError};

/// Vertex count and edge probability of a G(n, p) random graph.
///
/// Instances can only be obtained through [`GnpParams::new`], so every value
/// in circulation satisfies `1 <= n <= MAX_VERTICES` and `0 < p < 1`. Downstream moment
/// calculators rely on this and never re-check their inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGnpParams", into = "RawGnpParams")]
pub struct GnpParams {
    n: u64,
    p: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawGnpParams {
    n: u64,
    p: f64,
}

impl GnpParams {
    /// Validates and wraps the model parameters.
    pub fn new(n: u64, p: f64) -> Result<Self, ScfError> {
        validate_n(n)?;
        validate_p(p)?;
        Ok(Self { n, p })
    }

    /// Number of vertices.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Independent edge probability.
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Complementary probability `1 - p`.
    pub fn q(&self) -> f64 {
        1.0 - self.p
    }

    /// Parameters of a component with `n` vertices and the same edge
    /// probability. Sizes below one vertex are clamped to a single vertex.
    pub fn resized(&self, n: u64) -> Self {
        Self {
            n: n.max(1),
            p: self.p,
        }
    }
}

impl TryFrom<RawGnpParams> for GnpParams {
    type Error = ScfError;

    fn try_from(raw: RawGnpParams) -> Result<Self, Self::Error> {
        GnpParams::new(raw.n, raw.p)
    }
}

impl From<GnpParams> for RawGnpParams {
    fn from(params: GnpParams) -> Self {
        Self {
            n: params.n,
            p: params.p,
        }
    }
}

/// Largest vertex count accepted by [`validate_n`].
///
/// The clique sums keep an `ln(i!)` table of `n + 1` entries and iterate over
/// every clique size, so memory and time grow linearly in `n`.
pub const MAX_VERTICES: u64 = 1 << 20;

/// Rejects empty graphs and graphs above [`MAX_VERTICES`].
pub fn validate_n(n: u64) -> Result<(), ScfError> {
    if n == 0 {
        return Err(ScfError::Domain(
            ErrorInfo::new("n-out-of-range", "graph must have at least one vertex")
                .with_context("n", n.to_string()),
        ));
    }
    if n > MAX_VERTICES {
        return Err(ScfError::Domain(
            ErrorInfo::new("n-out-of-range", "graph is too large to evaluate")
                .with_context("n", n.to_string())
                .with_context("max", MAX_VERTICES.to_string())
                .with_hint("dense-limit asymptotics cover very large graphs"),
        ));
    }
    Ok(())
}

/// Rejects edge probabilities outside the open unit interval.
pub fn validate_p(p: f64) -> Result<(), ScfError> {
    if !(p.is_finite() && p > 0.0 && p < 1.0) {
        return Err(ScfError::Domain(
            ErrorInfo::new("p-out-of-range", "edge probability must lie in (0, 1)")
                .with_context("p", p.to_string())
                .with_hint("the bounds degenerate at p = 0 and p = 1"),
        ));
    }
    Ok(())
}

/// Rejects probability thresholds outside `[0, 1]`.
pub fn validate_threshold(threshold: f64) -> Result<(), ScfError> {
    if !(threshold.is_finite() && (0.0..=1.0).contains(&threshold)) {
        return Err(ScfError::Domain(
            ErrorInfo::new(
                "threshold-out-of-range",
                "probability threshold must lie in [0, 1]",
            )
            .with_context("threshold", threshold.to_string()),
        ));
    }
    Ok(())
}
