//! Weighted control points and the rational B-spline curve.

mod nurbs;

pub use nurbs::{validate_control_points, ControlPoint, NurbsCurve};
