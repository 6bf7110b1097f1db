//! B-spline basis functions (Cox–de Boor).
//!
//! A zero denominator in the recursion contributes `0` (`0/0 := 0`), so
//! repeated knots never produce a division error.

/// Boundary convention of the degree-0 basis functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EndPolicy {
    /// Every span is `[knots[i], knots[i+1])`; at the last knot all basis
    /// functions are zero.
    #[default]
    HalfOpen,
    /// Like `HalfOpen`, but the last non-empty span also contains its right
    /// end, so the basis still sums to one at the last knot.
    ClosedLast,
}

fn step(i: usize, t: f64, knots: &[f64], end: EndPolicy) -> f64 {
    let (lo, hi) = (knots[i], knots[i + 1]);
    if lo <= t && t < hi {
        return 1.0;
    }
    let last = knots[knots.len() - 1];
    if end == EndPolicy::ClosedLast && lo < hi && hi == last && t == last {
        1.0
    } else {
        0.0
    }
}

/// `N(i, k)` at `t`, by direct recursion over the degree.
///
/// Branches twice per level, so the cost is `O(2^k)`. Reference form of
/// [`basis_row`].
pub fn cox_de_boor(i: usize, k: usize, t: f64, knots: &[f64], end: EndPolicy) -> f64 {
    if k == 0 {
        return step(i, t, knots, end);
    }

    let left_den = knots[i + k] - knots[i];
    let right_den = knots[i + k + 1] - knots[i + 1];

    let left = if left_den != 0.0 {
        (t - knots[i]) / left_den * cox_de_boor(i, k - 1, t, knots, end)
    } else {
        0.0
    };
    let right = if right_den != 0.0 {
        (knots[i + k + 1] - t) / right_den * cox_de_boor(i + 1, k - 1, t, knots, end)
    } else {
        0.0
    };

    left + right
}

/// All basis functions `N(0, k) .. N(len - k - 2, k)` at `t`.
///
/// Builds the Cox–de Boor table bottom-up: the degree-0 row first, then each
/// level in place from the one below. Same arithmetic as [`cox_de_boor`] at
/// `O(len * k)` per call. Returns an empty vector when `knots` is too short
/// for degree `k`.
pub fn basis_row(k: usize, knots: &[f64], t: f64, end: EndPolicy) -> Vec<f64> {
    let m = knots.len();
    if m < k + 2 {
        return Vec::new();
    }

    let mut row: Vec<f64> = (0..m - 1).map(|i| step(i, t, knots, end)).collect();

    for level in 1..=k {
        // Ascending `i` reads row[i + 1] before it is overwritten.
        for i in 0..m - 1 - level {
            let left_den = knots[i + level] - knots[i];
            let right_den = knots[i + level + 1] - knots[i + 1];

            let left = if left_den != 0.0 {
                (t - knots[i]) / left_den * row[i]
            } else {
                0.0
            };
            let right = if right_den != 0.0 {
                (knots[i + level + 1] - t) / right_den * row[i + 1]
            } else {
                0.0
            };

            row[i] = left + right;
        }
        row.truncate(m - 1 - level);
    }

    row
}
