use serde::{Deserialize, Serialize};

use crate::report::CurvePoint;

/// Slack allowed before `lower > upper` counts as a violation.
pub const ORDERING_TOLERANCE: f64 = 1e-12;

/// Density at which a curve's lower bound peaks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakLower {
    /// Density of the first maximum.
    pub p: f64,
    /// Lower bound at that density.
    pub lower: f64,
}

/// Aggregate view of one bound curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSummary {
    /// Largest `upper - lower` along the curve.
    pub max_gap: f64,
    /// Mean `upper - lower` along the curve.
    pub mean_gap: f64,
    /// Points where the lower bound exceeds the upper bound.
    pub ordering_violations: usize,
    /// Location of the largest lower bound, absent for an empty curve.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_lower: Option<PeakLower>,
}

impl CurveSummary {
    /// Summarises the points of a curve.
    pub fn from_points(points: &[CurvePoint]) -> Self {
        if points.is_empty() {
            return Self {
                max_gap: 0.0,
                mean_gap: 0.0,
                ordering_violations: 0,
                peak_lower: None,
            };
        }
        let gaps: Vec<f64> = points.iter().map(|point| point.upper - point.lower).collect();
        let max_gap = gaps.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean_gap = gaps.iter().sum::<f64>() / gaps.len() as f64;
        let ordering_violations = gaps
            .iter()
            .filter(|&&gap| gap < -ORDERING_TOLERANCE)
            .count();

        let mut peak = PeakLower {
            p: points[0].p,
            lower: points[0].lower,
        };
        for point in &points[1..] {
            if point.lower > peak.lower {
                peak = PeakLower {
                    p: point.p,
                    lower: point.lower,
                };
            }
        }

        Self {
            max_gap,
            mean_gap,
            ordering_violations,
            peak_lower: Some(peak),
        }
    }
}
