//! Weighted control points and the clamped uniform NURBS curve.

use nurbs_core::{NurbsError, Result};
use nurbs_math::{DVec2, Point2};
use serde::{Deserialize, Serialize};

use crate::nurbs::{basis_row, EndPolicy, KnotVector};

/// A control point: a position in the drawing plane and its weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub position: Point2,
    pub weight: f64,
}

impl ControlPoint {
    pub fn new(x: f64, y: f64, weight: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
            weight,
        }
    }

    /// Control point with weight `1.0`.
    pub fn unit(x: f64, y: f64) -> Self {
        Self::new(x, y, 1.0)
    }
}

/// Check positions and weights of a control polygon.
///
/// Positions and weights must be finite. Weights must be positive unless
/// `allow_nonpositive` is set.
pub fn validate_control_points(points: &[ControlPoint], allow_nonpositive: bool) -> Result<()> {
    if points.is_empty() {
        return Err(NurbsError::invalid_config("no control points"));
    }
    for (i, cp) in points.iter().enumerate() {
        if !cp.position.is_finite() {
            return Err(NurbsError::invalid_config(format!(
                "control point {} has a non-finite position {:?}",
                i, cp.position
            )));
        }
        if !cp.weight.is_finite() {
            return Err(NurbsError::invalid_config(format!(
                "control point {} has a non-finite weight {}",
                i, cp.weight
            )));
        }
        if !allow_nonpositive && cp.weight <= 0.0 {
            return Err(NurbsError::invalid_config(format!(
                "control point {} has non-positive weight {}",
                i, cp.weight
            )));
        }
    }
    Ok(())
}

/// A NURBS curve over a clamped uniform knot vector.
///
/// Owns a snapshot of its control points; editing the source polygon
/// afterwards does not affect it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NurbsCurve {
    degree: usize,
    knots: KnotVector,
    control_points: Vec<ControlPoint>,
}

impl NurbsCurve {
    /// Build a curve over the clamped uniform knot vector for `control_points`.
    ///
    /// # Errors
    /// `InvalidConfiguration` when there are not more control points than `degree`.
    pub fn clamped(control_points: Vec<ControlPoint>, degree: usize) -> Result<Self> {
        let knots = KnotVector::clamped_uniform(control_points.len(), degree)?;
        Ok(Self {
            degree,
            knots,
            control_points,
        })
    }

    pub fn knots(&self) -> &KnotVector {
        &self.knots
    }

    /// Rational point at `t` from the full basis row.
    ///
    /// Returns `None` when the weighted basis sum is not positive, which
    /// happens at `t_max` under `EndPolicy::HalfOpen` and with zero or
    /// negative weights.
    pub fn rational_point(&self, t: f64, end: EndPolicy) -> Option<Point2> {
        let basis = basis_row(self.degree, &self.knots, t, end);

        let mut point = DVec2::ZERO;
        let mut weight_sum = 0.0;
        for (n, cp) in basis.iter().zip(&self.control_points) {
            let bw = n * cp.weight;
            point += bw * cp.position;
            weight_sum += bw;
        }

        if weight_sum > 0.0 {
            Some(point / weight_sum)
        } else {
            None
        }
    }
}
