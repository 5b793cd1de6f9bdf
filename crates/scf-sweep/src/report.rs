use scf_bounds::{BoundEstimate, Regime};
use serde::{Deserialize, Serialize};

use crate::plan::SweepPlan;
use crate::stat::CurveSummary;

/// Bounds at one density.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Edge probability.
    pub p: f64,
    /// Lower bound.
    pub lower: f64,
    /// Upper bound.
    pub upper: f64,
    /// Density regime the bounds were composed in.
    pub regime: Regime,
    /// Approximate probability that the graph is connected.
    pub connected: f64,
}

impl From<&BoundEstimate> for CurvePoint {
    fn from(estimate: &BoundEstimate) -> Self {
        Self {
            p: estimate.params.p(),
            lower: estimate.lower,
            upper: estimate.upper,
            regime: estimate.regime,
            connected: estimate.connected,
        }
    }
}

/// Both bounds across the density grid at a fixed size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundCurve {
    /// Vertex count.
    pub n: u64,
    /// One point per density, in grid order.
    pub points: Vec<CurvePoint>,
    /// Gap and ordering statistics of `points`.
    pub summary: CurveSummary,
}

impl BoundCurve {
    /// Builds a curve and its summary.
    pub fn new(n: u64, points: Vec<CurvePoint>) -> Self {
        let summary = CurveSummary::from_points(&points);
        Self { n, points, summary }
    }
}

/// Outcome of a threshold search at one density.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdPoint {
    /// Edge probability.
    pub p: f64,
    /// First vertex count whose lower bound falls below the threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u64>,
    /// Error code when the search did not locate a crossing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

/// Search results across the density grid for one threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdCurve {
    /// Probability threshold.
    pub threshold: f64,
    /// One point per density, in grid order.
    pub points: Vec<ThresholdPoint>,
}

impl ThresholdCurve {
    /// Number of densities where the search located a crossing.
    pub fn located(&self) -> usize {
        self.points.iter().filter(|point| point.n.is_some()).count()
    }
}

/// Everything a sweep produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Canonical hash of `plan`.
    pub plan_hash: String,
    /// Plan that was executed.
    pub plan: SweepPlan,
    /// One curve per planned size, in plan order.
    pub bound_curves: Vec<BoundCurve>,
    /// One curve per planned threshold, in plan order.
    pub threshold_curves: Vec<ThresholdCurve>,
}

impl SweepReport {
    /// Total ordering violations across every bound curve.
    pub fn ordering_violations(&self) -> usize {
        self.bound_curves
            .iter()
            .map(|curve| curve.summary.ordering_violations)
            .sum()
    }
}
