//! nurbs-sketch geometry: knot vectors, basis functions and rational curve sampling.

pub mod curve;
pub mod nurbs;
pub mod sample;

pub use curve::{ControlPoint, NurbsCurve};
pub use nurbs::{EndPolicy, KnotVector};
pub use sample::{evaluate, evaluate_strict, evaluate_with, SampledCurve};
