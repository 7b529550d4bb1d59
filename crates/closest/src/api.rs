//! Public entry points.
//!
//! Callers hand in an unordered point list and get back the closest pair and
//! its distance. The caller's slice is never reordered: sorting builds new
//! vectors.

use crate::error::ClosestPairError;
use crate::planar::{brute, dnc, sort, Axis, ClosestPair, Point2};

/// Check the preconditions shared by both searches.
///
/// Reports `TooFewPoints` before looking at coordinates, then the first
/// non-finite point in caller order, then `SpanOverflow` if the diagonal of the
/// bounding box is not a finite `f64`. Past these checks every pairwise
/// distance is finite, and it is zero only for identical points.
pub fn validate(points: &[Point2]) -> Result<(), ClosestPairError> {
    if points.len() < 2 {
        return Err(ClosestPairError::TooFewPoints { len: points.len() });
    }
    if let Some((index, p)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.x.is_finite() && p.y.is_finite()))
    {
        return Err(ClosestPairError::NonFinite {
            index,
            x: p.x,
            y: p.y,
        });
    }
    let (mut lo, mut hi) = (points[0], points[0]);
    for p in &points[1..] {
        lo = lo.inf(p);
        hi = hi.sup(p);
    }
    let span = hi - lo;
    if !span.x.hypot(span.y).is_finite() {
        return Err(ClosestPairError::SpanOverflow {
            span_x: span.x,
            span_y: span.y,
        });
    }
    Ok(())
}

/// Closest pair by divide and conquer, O(n log n).
///
/// Any finite coordinates are accepted as long as the bounding-box diagonal
/// fits in an `f64` (about 1.3e308 for points around the origin).
///
/// Builds the x-sorted and y-sorted views, then recurses over the full range.
///
/// ```
/// use closest::{closest_pair, Point2};
///
/// let pts = [Point2::new(0.0, 0.0), Point2::new(3.0, 4.0), Point2::new(1.0, 1.0)];
/// let best = closest_pair(&pts)?;
/// assert!((best.distance - 2f64.sqrt()).abs() < 1e-12);
/// # Ok::<(), closest::ClosestPairError>(())
/// ```
pub fn closest_pair(points: &[Point2]) -> Result<ClosestPair, ClosestPairError> {
    validate(points)?;
    let by_x = sort::sorted_by(points, Axis::X);
    let by_y = sort::ranked_by_y(&by_x);
    let best = dnc::search(&by_x, &by_y);
    tracing::debug!(n = points.len(), distance = best.distance, "closest_pair");
    Ok(best)
}

/// Closest pair by exhaustive scan, O(n²). Reference for `closest_pair`.
pub fn closest_pair_brute_force(points: &[Point2]) -> Result<ClosestPair, ClosestPairError> {
    validate(points)?;
    let best = brute::search(points);
    tracing::debug!(
        n = points.len(),
        distance = best.distance,
        "closest_pair_brute_force"
    );
    Ok(best)
}
