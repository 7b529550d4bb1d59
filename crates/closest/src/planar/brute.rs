//! Exhaustive O(n²) search: the oracle and the recursion base case.

use super::distance::distance;
use super::types::{ClosestPair, Point2};

/// Scan every unordered pair `(i, j)`, `i < j`, once.
///
/// Ties keep the first pair reached in `(i, j)` order. Requires `points.len() >= 2`.
pub(crate) fn search(points: &[Point2]) -> ClosestPair {
    debug_assert!(points.len() >= 2, "brute force needs two points");
    let mut best = ClosestPair::new(points[0], points[1]);
    for (i, &p) in points.iter().enumerate() {
        for &q in &points[i + 1..] {
            let d = distance(p, q);
            if d < best.distance {
                best = ClosestPair { a: p, b: q, distance: d };
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn first_tie_wins() {
        let pts = [vector![0.0, 0.0], vector![1.0, 1.0], vector![2.0, 2.0]];
        let cp = search(&pts);
        assert_eq!(cp.pair(), (vector![0.0, 0.0], vector![1.0, 1.0]));
    }

    #[test]
    fn later_strictly_closer_pair_replaces() {
        let pts = [
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![4.0, 4.0],
            vector![4.5, 4.0],
        ];
        let cp = search(&pts);
        assert_eq!(cp.pair(), (vector![4.0, 4.0], vector![4.5, 4.0]));
        assert_eq!(cp.distance, 0.5);
    }

    #[test]
    fn two_points() {
        let cp = search(&[vector![1.0, 1.0], vector![4.0, 5.0]]);
        assert_eq!(cp.distance, 5.0);
    }
}
