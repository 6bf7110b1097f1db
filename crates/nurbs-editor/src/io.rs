//! JSON interchange for control polygons and sampled curves.

use nurbs_geometry::{ControlPoint, SampledCurve};
use nurbs_math::DVec2;
use serde::{Deserialize, Serialize};

fn default_weight() -> f64 {
    1.0
}

/// One control point as written in a points file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

impl From<PointRecord> for ControlPoint {
    fn from(r: PointRecord) -> Self {
        ControlPoint::new(r.x, r.y, r.weight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XY {
    pub x: f64,
    pub y: f64,
}

impl From<DVec2> for XY {
    fn from(p: DVec2) -> Self {
        Self { x: p.x, y: p.y }
    }
}

/// Evaluation output as written by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveReport {
    pub knots: Vec<f64>,
    pub points: Vec<XY>,
    pub degenerate: Vec<usize>,
}

impl From<&SampledCurve> for CurveReport {
    fn from(curve: &SampledCurve) -> Self {
        Self {
            knots: curve.knots.to_vec(),
            points: curve.points.iter().copied().map(XY::from).collect(),
            degenerate: curve.degenerate.clone(),
        }
    }
}

/// Parse a JSON array of `{x, y, weight}` records.
pub fn parse_points(json: &str) -> serde_json::Result<Vec<ControlPoint>> {
    let records: Vec<PointRecord> = serde_json::from_str(json)?;
    Ok(records.into_iter().map(ControlPoint::from).collect())
}
