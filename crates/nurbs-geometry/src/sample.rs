//! Uniform sampling of a rational curve into a renderable polyline.

use nurbs_core::traits::{BoundingBox, Validate};
use nurbs_core::{CurveOptions, EndpointPolicy, NurbsError, Result};
use nurbs_math::{Aabb2, DVec2, Point2};
use rayon::prelude::*;

use crate::curve::{validate_control_points, ControlPoint, NurbsCurve};
use crate::nurbs::{EndPolicy, KnotVector};

/// Result of one curve evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    /// Knot vector the curve was evaluated over.
    pub knots: KnotVector,
    /// Parameter value of each returned point.
    pub parameters: Vec<f64>,
    /// Curve points, first to last along the domain.
    pub points: Vec<Point2>,
    /// Indices into `points` whose weight sum was not positive. Those points
    /// are left at the origin.
    pub degenerate: Vec<usize>,
}

impl SampledCurve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_degenerate(&self) -> bool {
        !self.degenerate.is_empty()
    }
}

impl BoundingBox for SampledCurve {
    type Point = Point2;

    fn bounding_box(&self) -> Option<(Point2, Point2)> {
        Aabb2::from_points(&self.points).map(|aabb| (aabb.min, aabb.max))
    }
}

/// `samples` evenly spaced values over `[t_min, t_max]`, both ends included.
///
/// Standalone helper: the evaluators reject `samples < 2` before calling it,
/// but zero samples give an empty vector and one sample gives `[t_min]`.
pub fn parameters(domain: (f64, f64), samples: usize) -> Vec<f64> {
    let (t_min, t_max) = domain;
    match samples {
        0 => Vec::new(),
        1 => vec![t_min],
        _ => {
            let step = (t_max - t_min) / (samples - 1) as f64;
            let mut ts: Vec<f64> = (0..samples).map(|j| t_min + step * j as f64).collect();
            ts[samples - 1] = t_max;
            ts
        }
    }
}

/// Sample the clamped uniform NURBS curve of `points`.
///
/// Uses the default endpoint policy (trim), so `samples - 1` points are
/// returned.
pub fn evaluate(points: &[ControlPoint], degree: usize, samples: usize) -> Result<SampledCurve> {
    evaluate_with(points, &CurveOptions::new(degree, samples))
}

/// Sample the clamped uniform NURBS curve of `points` under `options`.
///
/// # Errors
/// `InvalidConfiguration` when `samples < 2`, when there are not more points
/// than the degree, or when a position or weight is rejected by
/// [`validate_control_points`].
pub fn evaluate_with(points: &[ControlPoint], options: &CurveOptions) -> Result<SampledCurve> {
    options.validate()?;
    validate_control_points(points, options.allow_nonpositive_weights)?;

    let curve = NurbsCurve::clamped(points.to_vec(), options.degree)?;
    Ok(sample_curve(&curve, options))
}

/// Like [`evaluate_with`], but a degenerate sample is an error.
///
/// # Errors
/// `DegenerateEvaluation` for the first sample whose weight sum is not
/// positive, in addition to the errors of [`evaluate_with`].
pub fn evaluate_strict(points: &[ControlPoint], options: &CurveOptions) -> Result<SampledCurve> {
    let sampled = evaluate_with(points, options)?;
    if let Some(&index) = sampled.degenerate.first() {
        return Err(NurbsError::DegenerateEvaluation {
            index,
            t: sampled.parameters[index],
        });
    }
    Ok(sampled)
}

fn sample_curve(curve: &NurbsCurve, options: &CurveOptions) -> SampledCurve {
    let end = match options.endpoint {
        EndpointPolicy::Trim => EndPolicy::HalfOpen,
        EndpointPolicy::Close => EndPolicy::ClosedLast,
    };

    let mut ts = parameters(curve.knots().domain(), options.samples);
    // Under the half-open convention every basis function vanishes at t_max.
    if options.endpoint == EndpointPolicy::Trim {
        ts.pop();
    }

    let eval = |&t: &f64| curve.rational_point(t, end);
    let results: Vec<Option<Point2>> = if options.samples >= options.parallel_threshold {
        ts.par_iter().map(eval).collect()
    } else {
        ts.iter().map(eval).collect()
    };

    let mut degenerate = Vec::new();
    let points = results
        .into_iter()
        .enumerate()
        .map(|(i, p)| {
            p.unwrap_or_else(|| {
                degenerate.push(i);
                DVec2::ZERO
            })
        })
        .collect();

    if !degenerate.is_empty() {
        log::warn!(
            "{} of {} samples have a non-positive weight sum (first at t = {})",
            degenerate.len(),
            ts.len(),
            ts[degenerate[0]]
        );
    }

    SampledCurve {
        knots: curve.knots().clone(),
        parameters: ts,
        points,
        degenerate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nurbs_math::dvec2;

    fn square() -> Vec<ControlPoint> {
        vec![
            ControlPoint::unit(0.0, 0.0),
            ControlPoint::unit(100.0, 0.0),
            ControlPoint::unit(100.0, 100.0),
            ControlPoint::unit(0.0, 100.0),
        ]
    }

    #[test]
    fn test_parameters_include_both_ends() {
        let ts = parameters((0.0, 3.0), 7);
        assert_eq!(ts.len(), 7);
        assert_eq!(ts[0], 0.0);
        assert_eq!(ts[6], 3.0);
        assert_abs_diff_eq!(ts[1], 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_parameters_with_fewer_than_two_samples() {
        assert!(parameters((1.0, 4.0), 0).is_empty());
        assert_eq!(parameters((1.0, 4.0), 1), vec![1.0]);
        assert_eq!(parameters((1.0, 4.0), 2), vec![1.0, 4.0]);
    }

    #[test]
    fn test_square_bezier() {
        let sampled = evaluate(&square(), 3, 100).unwrap();
        assert_eq!(sampled.knots.as_slice(), &[0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(sampled.len(), 99);
        assert_abs_diff_eq!(sampled.points[0], dvec2(0.0, 0.0), epsilon = 1e-12);
        assert!(!sampled.is_degenerate());

        // Cubic Bézier midpoint: (P0 + 3P1 + 3P2 + P3) / 8
        let mid = evaluate(&square(), 3, 3).unwrap();
        assert_eq!(mid.parameters, vec![0.0, 0.5]);
        assert_abs_diff_eq!(mid.points[1], dvec2(75.0, 50.0), epsilon = 1e-12);
    }

    #[test]
    fn test_trim_drops_last_sample() {
        let sampled = evaluate(&square(), 3, 5).unwrap();
        assert_eq!(sampled.parameters, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_close_keeps_endpoint() {
        let opts = CurveOptions::new(3, 10).with_endpoint(EndpointPolicy::Close);
        let sampled = evaluate_with(&square(), &opts).unwrap();
        assert_eq!(sampled.len(), 10);
        assert_abs_diff_eq!(sampled.points[9], dvec2(0.0, 100.0), epsilon = 1e-12);
        assert!(!sampled.is_degenerate());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let pts = vec![
            ControlPoint::new(0.0, 0.0, 1.0),
            ControlPoint::new(30.0, 80.0, 2.0),
            ControlPoint::new(70.0, -20.0, 0.7),
            ControlPoint::new(120.0, 60.0, 1.3),
            ControlPoint::new(160.0, 0.0, 1.0),
            ControlPoint::new(200.0, 40.0, 4.0),
        ];
        let sequential = evaluate_with(&pts, &CurveOptions::new(3, 500)).unwrap();
        let parallel =
            evaluate_with(&pts, &CurveOptions::new(3, 500).with_parallel_threshold(1)).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_bounding_box() {
        let sampled = evaluate(&square(), 3, 50).unwrap();
        let (min, max) = sampled.bounding_box().unwrap();
        assert!(min.x >= 0.0 && min.y >= 0.0);
        assert!(max.x <= 100.0 && max.y <= 100.0);
    }
}
