#![deny(missing_docs)]
#![doc = "Deterministic parameter sweeps over G(n, p) grids for the SCF bound engine."]

/// Sweep execution.
pub mod dispatch;
/// CSV exports of curves.
pub mod export;
/// Sweep plan schema and loading.
pub mod plan;
/// Curve and report types.
pub mod report;
/// Per-curve summaries.
pub mod stat;

pub use dispatch::{run_sweep, run_sweep_from_path, run_sweep_to_dir, worker_count, RunOpts};
pub use export::{write_bound_curve_csv, write_threshold_curve_csv};
pub use plan::{load_plan, DensityGrid, SweepPlan};
pub use report::{BoundCurve, CurvePoint, SweepReport, ThresholdCurve, ThresholdPoint};
pub use stat::{CurveSummary, PeakLower};
