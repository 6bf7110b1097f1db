use nurbs_core::traits::BoundingBox;
use nurbs_geometry::SampledCurve;
use nurbs_math::{Aabb2, Point2};

/// Everything a renderer needs to redraw the canvas after an event.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Control point positions in order; consecutive points form the polygon.
    pub control_polygon: Vec<Point2>,
    pub labels: Vec<char>,
    /// Sampled curve, present once there are more points than the degree.
    pub curve: Option<SampledCurve>,
    /// Weight of the picked point while the weight slider is shown.
    pub selected_weight: Option<f64>,
    pub bounds: Option<Aabb2>,
}

impl Frame {
    pub fn new(
        control_polygon: Vec<Point2>,
        labels: Vec<char>,
        curve: Option<SampledCurve>,
        selected_weight: Option<f64>,
    ) -> Self {
        let polygon_bounds = Aabb2::from_points(&control_polygon);
        let curve_bounds = curve
            .as_ref()
            .and_then(|c| c.bounding_box())
            .map(|(min, max)| Aabb2::new(min, max));

        let bounds = match (polygon_bounds, curve_bounds) {
            (Some(a), Some(b)) => Some(a.merge(&b)),
            (a, b) => a.or(b),
        };

        Self {
            control_polygon,
            labels,
            curve,
            selected_weight,
            bounds,
        }
    }

    /// Line segments of the sampled curve, as drawn between consecutive samples.
    pub fn curve_segments(&self) -> Vec<(Point2, Point2)> {
        self.curve
            .as_ref()
            .map(|c| c.points.windows(2).map(|w| (w[0], w[1])).collect())
            .unwrap_or_default()
    }

    /// Line segments of the control polygon.
    pub fn polygon_segments(&self) -> Vec<(Point2, Point2)> {
        self.control_polygon
            .windows(2)
            .map(|w| (w[0], w[1]))
            .collect()
    }
}
