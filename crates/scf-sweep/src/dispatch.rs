use std::fs;
use std::path::Path;

use rayon::prelude::*;
use scf_bounds::{estimate, search_n};
use scf_core::errors::{ErrorInfo, ScfError};
use scf_core::serde::to_canonical_json_bytes;
use scf_core::GnpParams;
use tracing::info;

use crate::export::{write_bound_curve_csv, write_threshold_curve_csv};
use crate::plan::{load_plan, SweepPlan};
use crate::report::{BoundCurve, CurvePoint, SweepReport, ThresholdCurve, ThresholdPoint};

fn io_error(code: &str, path: &Path, err: impl ToString) -> ScfError {
    ScfError::Serde(
        ErrorInfo::new(code, err.to_string()).with_context("path", path.display().to_string()),
    )
}

/// Options governing sweep execution.
#[derive(Debug, Clone)]
pub struct RunOpts {
    /// Worker threads evaluating grid points when the plan's
    /// `bounds.threads` is 0.
    pub concurrency: usize,
    /// Write one CSV per curve next to the JSON report.
    pub write_csv: bool,
}

impl Default for RunOpts {
    fn default() -> Self {
        Self {
            concurrency: 1,
            write_csv: true,
        }
    }
}

/// Pool size for `plan`: `bounds.threads` when set, else `opts.concurrency`,
/// and never below one.
pub fn worker_count(plan: &SweepPlan, opts: &RunOpts) -> usize {
    match plan.bounds.threads {
        0 => opts.concurrency.max(1),
        threads => threads,
    }
}

/// Evaluates every curve of `plan`.
///
/// Grid points are spread over [`worker_count`] workers; the report lists
/// curves and points in plan order whatever the thread count.
pub fn run_sweep(plan: &SweepPlan, opts: &RunOpts) -> Result<SweepReport, ScfError> {
    plan.validate()?;
    let plan_hash = plan.plan_hash()?;
    let densities = plan.densities.values();
    info!(
        plan_hash = plan_hash.as_str(),
        sizes = plan.sizes.len(),
        densities = densities.len(),
        thresholds = plan.thresholds.len(),
        "sweep: start"
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(worker_count(plan, opts))
        .build()
        .map_err(|err| ScfError::Config(ErrorInfo::new("thread_pool", err.to_string())))?;

    let bound_jobs: Vec<(u64, f64)> = plan
        .sizes
        .iter()
        .flat_map(|&n| densities.iter().map(move |&p| (n, p)))
        .collect();
    let threshold_jobs: Vec<(f64, f64)> = plan
        .thresholds
        .iter()
        .flat_map(|&threshold| densities.iter().map(move |&p| (threshold, p)))
        .collect();

    let (points, searches) = pool.install(|| -> Result<_, ScfError> {
        let points = bound_jobs
            .par_iter()
            .map(|&(n, p)| {
                let evaluated = estimate(GnpParams::new(n, p)?, &plan.bounds)?;
                Ok(CurvePoint::from(&evaluated))
            })
            .collect::<Result<Vec<_>, ScfError>>()?;
        let searches: Vec<ThresholdPoint> = threshold_jobs
            .par_iter()
            .map(|&(threshold, p)| match search_n(p, threshold, &plan.bounds) {
                Ok(n) => ThresholdPoint {
                    p,
                    n: Some(n),
                    failure: None,
                },
                Err(err) => ThresholdPoint {
                    p,
                    n: None,
                    failure: Some(err.code().to_string()),
                },
            })
            .collect();
        Ok((points, searches))
    })?;

    let bound_curves: Vec<BoundCurve> = plan
        .sizes
        .iter()
        .zip(points.chunks(densities.len()))
        .map(|(&n, chunk)| BoundCurve::new(n, chunk.to_vec()))
        .collect();
    let threshold_curves: Vec<ThresholdCurve> = plan
        .thresholds
        .iter()
        .zip(searches.chunks(densities.len()))
        .map(|(&threshold, chunk)| ThresholdCurve {
            threshold,
            points: chunk.to_vec(),
        })
        .collect();

    let report = SweepReport {
        plan_hash,
        plan: plan.clone(),
        bound_curves,
        threshold_curves,
    };
    info!(
        plan_hash = report.plan_hash.as_str(),
        points = bound_jobs.len(),
        searches = threshold_jobs.len(),
        ordering_violations = report.ordering_violations(),
        "sweep: complete"
    );
    Ok(report)
}

/// Runs the sweep and writes `sweep_report.json` (canonical JSON) plus, when
/// enabled, `bounds_n{n}.csv` per size and `threshold_{i}.csv` per threshold.
pub fn run_sweep_to_dir(
    plan: &SweepPlan,
    out: &Path,
    opts: &RunOpts,
) -> Result<SweepReport, ScfError> {
    fs::create_dir_all(out).map_err(|err| io_error("sweep_out_dir", out, err))?;
    let report = run_sweep(plan, opts)?;

    let report_path = out.join("sweep_report.json");
    let bytes = to_canonical_json_bytes(&report)?;
    fs::write(&report_path, bytes).map_err(|err| io_error("sweep_report_write", &report_path, err))?;

    if opts.write_csv {
        for curve in &report.bound_curves {
            write_bound_curve_csv(curve, &out.join(format!("bounds_n{}.csv", curve.n)))?;
        }
        for (index, curve) in report.threshold_curves.iter().enumerate() {
            write_threshold_curve_csv(curve, &out.join(format!("threshold_{index}.csv")))?;
        }
    }
    Ok(report)
}

/// Loads a plan from disk and executes it into `out`.
pub fn run_sweep_from_path(
    plan_path: &Path,
    out: &Path,
    opts: &RunOpts,
) -> Result<SweepReport, ScfError> {
    let plan = load_plan(plan_path)?;
    run_sweep_to_dir(&plan, out, opts)
}
