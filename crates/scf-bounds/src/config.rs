use std::fs;
use std::path::Path;

use scf_core::errors::{ErrorInfo, ScfError};
use scf_core::serde::from_yaml_slice;
use scf_core::MAX_VERTICES;
use serde::{Deserialize, Serialize};

/// YAML-configurable knobs of the bound engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BoundConfig {
    /// Treatment of the critical density regime.
    #[serde(default)]
    pub critical_regime: CriticalRegimePolicy,
    /// Threshold search limits.
    #[serde(default)]
    pub search: SearchConfig,
    /// Worker threads for batch evaluation and sweeps. 0 selects the rayon
    /// default for batches and the caller's concurrency for sweeps.
    #[serde(default)]
    pub threads: usize,
}

/// How the critical regime `1/n <= p < ln(n)/n` is composed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CriticalRegimePolicy {
    /// Evaluate the critical regime with the connected-regime formula.
    #[default]
    Connected,
    /// Decompose into a giant component of size `2n/3` plus components of
    /// size `ln n`.
    GiantComponent,
}

/// Limits for the linear threshold scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Largest vertex count probed before the search reports exhaustion.
    #[serde(default = "default_max_n")]
    pub max_n: u64,
}

fn default_max_n() -> u64 {
    10_000
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_n: default_max_n(),
        }
    }
}

impl BoundConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml_slice(data: &[u8]) -> Result<Self, ScfError> {
        let config: BoundConfig = from_yaml_slice(data)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, ScfError> {
        let bytes = fs::read(path).map_err(|err| {
            ScfError::Serde(
                ErrorInfo::new("config_read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        Self::from_yaml_slice(&bytes)
    }

    /// Checks cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), ScfError> {
        if self.search.max_n < 2 {
            return Err(ScfError::Config(
                ErrorInfo::new("config-invalid", "search ceiling must be at least 2")
                    .with_context("max_n", self.search.max_n.to_string()),
            ));
        }
        if self.search.max_n > MAX_VERTICES {
            return Err(ScfError::Config(
                ErrorInfo::new("config-invalid", "search ceiling exceeds the vertex limit")
                    .with_context("max_n", self.search.max_n.to_string())
                    .with_context("limit", MAX_VERTICES.to_string()),
            ));
        }
        Ok(())
    }
}
