use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use scf_bounds::BoundConfig;
use scf_core::errors::{ErrorInfo, ScfError};
use scf_core::serde::{from_yaml_slice, to_yaml_string};
use scf_core::{stable_hash_string, validate_n, validate_p, validate_threshold};
use serde::{Deserialize, Serialize};

fn plan_invalid(message: &str, field: &str, cause: &ScfError) -> ScfError {
    ScfError::Config(
        ErrorInfo::new("plan-invalid", message)
            .with_context("field", field)
            .with_context("cause", cause.to_string()),
    )
}

/// Edge probabilities visited by a sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DensityGrid {
    /// `points` evenly spaced values from `start` to `end`, both included.
    Linspace {
        /// First density.
        start: f64,
        /// Last density.
        end: f64,
        /// Number of densities.
        points: usize,
    },
    /// Densities listed verbatim.
    Explicit {
        /// Densities in evaluation order.
        values: Vec<f64>,
    },
}

impl DensityGrid {
    /// Materialises the grid.
    pub fn values(&self) -> Vec<f64> {
        match self {
            DensityGrid::Linspace { start, end, points } => linspace(*start, *end, *points),
            DensityGrid::Explicit { values } => values.clone(),
        }
    }
}

fn linspace(start: f64, end: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (points - 1) as f64;
            let mut values: Vec<f64> = (0..points).map(|i| start + i as f64 * step).collect();
            values[points - 1] = end;
            values
        }
    }
}

/// Sweep description: bound curves per size and threshold curves per
/// threshold, all over the same density grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPlan {
    /// Vertex counts, one bound curve each.
    pub sizes: Vec<u64>,
    /// Densities shared by every curve.
    pub densities: DensityGrid,
    /// Probability thresholds, one threshold curve each.
    #[serde(default)]
    pub thresholds: Vec<f64>,
    /// Engine configuration applied to every evaluation.
    #[serde(default)]
    pub bounds: BoundConfig,
}

impl SweepPlan {
    /// Canonical SHA-256 of the plan.
    pub fn plan_hash(&self) -> Result<String, ScfError> {
        stable_hash_string(self)
    }

    /// Serializes the plan back into YAML.
    pub fn to_yaml_string(&self) -> Result<String, ScfError> {
        to_yaml_string(self)
    }

    /// Rejects plans that would evaluate out-of-domain parameters.
    pub fn validate(&self) -> Result<(), ScfError> {
        if self.sizes.is_empty() {
            return Err(ScfError::Config(
                ErrorInfo::new("plan-invalid", "sweep needs at least one size")
                    .with_context("field", "sizes"),
            ));
        }
        let mut seen = BTreeSet::new();
        for &n in &self.sizes {
            validate_n(n).map_err(|err| plan_invalid("size out of range", "sizes", &err))?;
            if !seen.insert(n) {
                return Err(ScfError::Config(
                    ErrorInfo::new("plan-invalid", "size listed more than once")
                        .with_context("field", "sizes")
                        .with_context("n", n.to_string()),
                ));
            }
        }
        let densities = self.densities.values();
        if densities.is_empty() {
            return Err(ScfError::Config(
                ErrorInfo::new("plan-invalid", "density grid is empty")
                    .with_context("field", "densities"),
            ));
        }
        for &p in &densities {
            validate_p(p).map_err(|err| plan_invalid("density out of range", "densities", &err))?;
        }
        for &threshold in &self.thresholds {
            validate_threshold(threshold)
                .map_err(|err| plan_invalid("threshold out of range", "thresholds", &err))?;
        }
        self.bounds
            .validate()
            .map_err(|err| plan_invalid("engine configuration rejected", "bounds", &err))
    }
}

/// Reads and validates a YAML sweep plan.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<SweepPlan, ScfError> {
    let plan_path = path.as_ref();
    let bytes = fs::read(plan_path).map_err(|err| {
        ScfError::Serde(
            ErrorInfo::new("plan_read", err.to_string())
                .with_context("path", plan_path.display().to_string()),
        )
    })?;
    let plan: SweepPlan = from_yaml_slice(&bytes)?;
    plan.validate()?;
    Ok(plan)
}
