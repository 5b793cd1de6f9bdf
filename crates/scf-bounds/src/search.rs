//! Threshold queries on the lower bound.

use scf_core::errors::{ErrorInfo, ScfError};
use scf_core::{validate_p, validate_threshold, GnpParams};
use tracing::{debug, info, warn};

use crate::bounds::{get_lower_bound, lower_bound_with};
use crate::config::BoundConfig;

/// First vertex count probed by the scan.
pub const SEARCH_START_N: u64 = 2;

/// Scans `n = 2, 3, ...` for fixed `p` and returns the first `n` whose lower
/// bound falls below `threshold`.
///
/// The returned value is the first failure, one past the last `n` that still
/// met the threshold. The scan assumes the bound eventually decreases in `n`;
/// it gives up with a `search-exhausted` error once `config.search.max_n` is
/// passed.
pub fn search_n(p: f64, threshold: f64, config: &BoundConfig) -> Result<u64, ScfError> {
    validate_p(p)?;
    validate_threshold(threshold)?;
    config.validate()?;
    let max_n = config.search.max_n;
    debug!(p, threshold, max_n, "threshold search: start");

    for n in SEARCH_START_N..=max_n {
        let lower = lower_bound_with(GnpParams::new(n, p)?, config)?;
        if !(lower >= threshold) {
            info!(p, threshold, n, lower, "threshold search: bound crossed");
            return Ok(n);
        }
    }

    warn!(p, threshold, max_n, "threshold search: exhausted");
    Err(ScfError::Search(
        ErrorInfo::new(
            "search-exhausted",
            "lower bound stayed above the threshold within the search range",
        )
        .with_context("p", p.to_string())
        .with_context("threshold", threshold.to_string())
        .with_context("max_n", max_n.to_string())
        .with_hint("raise search.max_n or lower the threshold"),
    ))
}

/// [`search_n`] with the default configuration.
pub fn gnp_almost_surely_scf_get_n(p: f64, threshold: f64) -> Result<u64, ScfError> {
    search_n(p, threshold, &BoundConfig::default())
}

/// The lower bound at `(n, p)`; the inverse query of
/// [`gnp_almost_surely_scf_get_n`].
pub fn gnp_almost_surely_scf_get_threshold(n: u64, p: f64) -> Result<f64, ScfError> {
    get_lower_bound(n, p)
}
