//! Convex hull of a control polygon and point containment.

use crate::Point2;

fn cross(o: Point2, a: Point2, b: Point2) -> f64 {
    (a - o).perp_dot(b - o)
}

/// Convex hull of `points` in counter-clockwise order (monotone chain).
///
/// Collinear points on the boundary are dropped. Fewer than three distinct
/// points yield the distinct points themselves.
pub fn convex_hull(points: &[Point2]) -> Vec<Point2> {
    let mut pts: Vec<Point2> = points.to_vec();
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts.dedup();

    if pts.len() < 3 {
        return pts;
    }

    let mut hull: Vec<Point2> = Vec::with_capacity(pts.len() * 2);

    // Lower hull
    for &p in &pts {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0 {
            hull.pop();
        }
        hull.push(p);
    }

    // Upper hull
    let lower_len = hull.len() + 1;
    for &p in pts.iter().rev().skip(1) {
        while hull.len() >= lower_len
            && cross(hull[hull.len() - 2], hull[hull.len() - 1], p) <= 0.0
        {
            hull.pop();
        }
        hull.push(p);
    }

    hull.pop();
    hull
}

/// Whether `p` lies inside or on a counter-clockwise convex polygon, with
/// `eps` slack on every edge.
pub fn hull_contains(hull: &[Point2], p: Point2, eps: f64) -> bool {
    match hull.len() {
        0 => false,
        1 => (p - hull[0]).length() <= eps,
        2 => {
            let (a, b) = (hull[0], hull[1]);
            let ab = b - a;
            let t = ((p - a).dot(ab) / ab.length_squared()).clamp(0.0, 1.0);
            (a + ab * t - p).length() <= eps
        }
        n => (0..n).all(|i| {
            let a = hull[i];
            let b = hull[(i + 1) % n];
            let edge = b - a;
            edge.perp_dot(p - a) >= -eps * edge.length()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn test_square_hull() {
        let pts = vec![
            dvec2(0.0, 0.0),
            dvec2(1.0, 1.0),
            dvec2(0.5, 0.5),
            dvec2(1.0, 0.0),
            dvec2(0.0, 1.0),
        ];
        let hull = convex_hull(&pts);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&dvec2(0.5, 0.5)));
    }

    #[test]
    fn test_hull_contains() {
        let hull = convex_hull(&[
            dvec2(0.0, 0.0),
            dvec2(100.0, 0.0),
            dvec2(100.0, 100.0),
            dvec2(0.0, 100.0),
        ]);
        assert!(hull_contains(&hull, dvec2(50.0, 50.0), 1e-9));
        assert!(hull_contains(&hull, dvec2(100.0, 30.0), 1e-9));
        assert!(!hull_contains(&hull, dvec2(100.1, 30.0), 1e-9));
        assert!(!hull_contains(&hull, dvec2(-1.0, -1.0), 1e-9));
    }

    #[test]
    fn test_degenerate_hulls() {
        let segment = convex_hull(&[dvec2(0.0, 0.0), dvec2(2.0, 0.0), dvec2(2.0, 0.0)]);
        assert_eq!(segment.len(), 2);
        assert!(hull_contains(&segment, dvec2(1.0, 0.0), 1e-9));
        assert!(!hull_contains(&segment, dvec2(1.0, 0.1), 1e-9));

        let single = convex_hull(&[dvec2(3.0, 4.0)]);
        assert!(hull_contains(&single, dvec2(3.0, 4.0), 1e-9));
    }
}
