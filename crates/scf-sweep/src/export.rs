use std::path::Path;

use scf_core::errors::{ErrorInfo, ScfError};

use crate::report::{BoundCurve, ThresholdCurve};

fn export_error(path: &Path, err: impl ToString) -> ScfError {
    ScfError::Serde(
        ErrorInfo::new("sweep_export", err.to_string())
            .with_context("path", path.display().to_string()),
    )
}

/// Writes `p,lower,upper,regime,connected` rows for one bound curve.
pub fn write_bound_curve_csv(curve: &BoundCurve, out_path: &Path) -> Result<(), ScfError> {
    let mut wtr = csv::Writer::from_path(out_path).map_err(|err| export_error(out_path, err))?;
    wtr.write_record(["p", "lower", "upper", "regime", "connected"])
        .map_err(|err| export_error(out_path, err))?;
    for point in &curve.points {
        wtr.write_record([
            point.p.to_string(),
            point.lower.to_string(),
            point.upper.to_string(),
            point.regime.label().to_string(),
            point.connected.to_string(),
        ])
        .map_err(|err| export_error(out_path, err))?;
    }
    wtr.flush().map_err(|err| export_error(out_path, err))
}

/// Writes `p,n,failure` rows for one threshold curve; absent fields stay empty.
pub fn write_threshold_curve_csv(curve: &ThresholdCurve, out_path: &Path) -> Result<(), ScfError> {
    let mut wtr = csv::Writer::from_path(out_path).map_err(|err| export_error(out_path, err))?;
    wtr.write_record(["p", "n", "failure"])
        .map_err(|err| export_error(out_path, err))?;
    for point in &curve.points {
        wtr.write_record([
            point.p.to_string(),
            point.n.map(|n| n.to_string()).unwrap_or_default(),
            point.failure.clone().unwrap_or_default(),
        ])
        .map_err(|err| export_error(out_path, err))?;
    }
    wtr.flush().map_err(|err| export_error(out_path, err))
}
