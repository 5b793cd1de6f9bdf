//! Element-wise evaluation over arrays of densities or sizes.
//!
//! Each element is evaluated independently; results keep the input order.

use rayon::prelude::*;
use scf_core::errors::{ErrorInfo, ScfError};
use scf_core::GnpParams;

use crate::bounds::{estimate, lower_bound_with, upper_bound_with, BoundEstimate};
use crate::config::BoundConfig;
use crate::search::search_n;

fn in_pool<T, F>(config: &BoundConfig, job: F) -> Result<T, ScfError>
where
    T: Send,
    F: FnOnce() -> Result<T, ScfError> + Send,
{
    if config.threads == 0 {
        return job();
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.threads)
        .build()
        .map_err(|err| ScfError::Config(ErrorInfo::new("thread_pool", err.to_string())))?;
    pool.install(job)
}

/// Lower bounds at fixed `n` for every density in `densities`.
pub fn lower_bounds(n: u64, densities: &[f64], config: &BoundConfig) -> Result<Vec<f64>, ScfError> {
    in_pool(config, || {
        densities
            .par_iter()
            .map(|&p| lower_bound_with(GnpParams::new(n, p)?, config))
            .collect()
    })
}

/// Upper bounds at fixed `n` for every density in `densities`.
pub fn upper_bounds(n: u64, densities: &[f64], config: &BoundConfig) -> Result<Vec<f64>, ScfError> {
    in_pool(config, || {
        densities
            .par_iter()
            .map(|&p| upper_bound_with(GnpParams::new(n, p)?, config))
            .collect()
    })
}

/// Lower bounds at fixed `p` for every size in `sizes`.
pub fn lower_bounds_over_sizes(
    sizes: &[u64],
    p: f64,
    config: &BoundConfig,
) -> Result<Vec<f64>, ScfError> {
    in_pool(config, || {
        sizes
            .par_iter()
            .map(|&n| lower_bound_with(GnpParams::new(n, p)?, config))
            .collect()
    })
}

/// Full estimates at fixed `n` for every density in `densities`.
pub fn estimates(
    n: u64,
    densities: &[f64],
    config: &BoundConfig,
) -> Result<Vec<BoundEstimate>, ScfError> {
    in_pool(config, || {
        densities
            .par_iter()
            .map(|&p| estimate(GnpParams::new(n, p)?, config))
            .collect()
    })
}

/// Threshold search for every density in `densities`.
///
/// Searches are independent; each entry carries its own outcome so one
/// exhausted scan does not discard the others.
pub fn search_ns(
    densities: &[f64],
    threshold: f64,
    config: &BoundConfig,
) -> Result<Vec<Result<u64, ScfError>>, ScfError> {
    in_pool(config, || {
        Ok(densities
            .par_iter()
            .map(|&p| search_n(p, threshold, config))
            .collect())
    })
}
