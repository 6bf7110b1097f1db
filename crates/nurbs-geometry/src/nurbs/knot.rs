//! Knot vector construction and lookup.

use std::ops::Deref;

use nurbs_core::{NurbsError, Result};
use serde::{Deserialize, Serialize};

/// A non-decreasing knot vector for a curve of a given degree.
///
/// Holds `n + degree + 1` values for `n` control points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnotVector {
    degree: usize,
    knots: Vec<f64>,
}

impl KnotVector {
    /// Build the clamped uniform knot vector for `count` control points.
    ///
    /// The first `degree + 1` knots are `0`, the interior knots are the
    /// integers `1 ..= count - degree - 1` and the last `degree + 1` knots are
    /// `count - degree`. With `count == degree + 1` the interior is empty and
    /// the curve is a single Bézier segment over `[0, 1]`.
    ///
    /// # Errors
    /// `InvalidConfiguration` when `count <= degree`.
    pub fn clamped_uniform(count: usize, degree: usize) -> Result<Self> {
        if count <= degree {
            return Err(NurbsError::invalid_config(format!(
                "a degree {} curve needs more than {} control points, got {}",
                degree, degree, count
            )));
        }

        let spans = count - degree;
        let end = spans as f64;

        let mut knots = Vec::with_capacity(count + degree + 1);
        knots.extend(std::iter::repeat(0.0).take(degree + 1));
        knots.extend((1..spans).map(|k| k as f64));
        knots.extend(std::iter::repeat(end).take(degree + 1));

        let kv = Self { degree, knots };
        debug_assert_eq!(kv.len(), count + degree + 1);
        debug_assert!(kv.is_clamped(), "unclamped knot vector {:?}", kv.knots);
        log::trace!("knot vector for {} CPs, degree {}: {:?}", count, degree, kv.knots);

        Ok(kv)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.knots
    }

    /// Valid parameter range `(knots[p], knots[len - p - 1])`.
    pub fn domain(&self) -> (f64, f64) {
        let p = self.degree;
        (self.knots[p], self.knots[self.knots.len() - p - 1])
    }

    /// Number of knots equal to `value`.
    ///
    /// Clamped uniform knots are small integers, so exact comparison is safe.
    pub fn multiplicity(&self, value: f64) -> usize {
        self.knots.iter().filter(|&&k| k == value).count()
    }

    /// Whether both ends repeat exactly `degree + 1` times.
    pub fn is_clamped(&self) -> bool {
        let (first, last) = (self.knots[0], self.knots[self.knots.len() - 1]);
        first < last
            && self.multiplicity(first) == self.degree + 1
            && self.multiplicity(last) == self.degree + 1
    }
}

impl Deref for KnotVector {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.knots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_four_points_is_bezier() {
        let kv = KnotVector::clamped_uniform(4, 3).unwrap();
        assert_eq!(kv.as_slice(), &[0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(kv.domain(), (0.0, 1.0));
    }

    #[test]
    fn test_cubic_six_points() {
        let kv = KnotVector::clamped_uniform(6, 3).unwrap();
        assert_eq!(
            kv.as_slice(),
            &[0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 3.0, 3.0, 3.0]
        );
        assert_eq!(kv.domain(), (0.0, 3.0));
    }

    #[test]
    fn test_length_monotonicity_and_clamping() {
        for degree in 0..6 {
            for count in (degree + 1)..(degree + 12) {
                let kv = KnotVector::clamped_uniform(count, degree).unwrap();
                assert_eq!(kv.len(), count + degree + 1, "n={} d={}", count, degree);
                assert!(kv.windows(2).all(|w| w[0] <= w[1]));
                assert!(kv.is_clamped(), "n={} d={}: {:?}", count, degree, kv);
                assert_eq!(kv.domain(), (0.0, (count - degree) as f64));
            }
        }
    }

    #[test]
    fn test_degree_zero() {
        let kv = KnotVector::clamped_uniform(3, 0).unwrap();
        assert_eq!(kv.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_rejects_too_few_points() {
        assert!(matches!(
            KnotVector::clamped_uniform(3, 3),
            Err(NurbsError::InvalidConfiguration(_))
        ));
        assert!(KnotVector::clamped_uniform(0, 0).is_err());
        assert!(KnotVector::clamped_uniform(1, 0).is_ok());
    }

    #[test]
    fn test_clamping_counts_end_multiplicity() {
        let kv = KnotVector::clamped_uniform(5, 2).unwrap();
        assert_eq!(kv.as_slice(), &[0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 3.0, 3.0]);
        assert_eq!(kv.multiplicity(0.0), 3);
        assert_eq!(kv.multiplicity(3.0), 3);
        assert_eq!(kv.multiplicity(1.0), 1);
        assert_eq!(kv.multiplicity(1.5), 0);
        assert!(kv.is_clamped());
    }
}
