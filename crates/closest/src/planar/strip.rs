//! Cross-boundary refinement around the split line.

use super::cfg::STRIP_WINDOW;
use super::distance::distance;
use super::sort::Ranked;
use super::types::{ClosestPair, Point2};

/// Look for a pair closer than `best` that straddles the split line.
///
/// `by_x` and `by_y` are the two views of the same range. The split line is at
/// the x of the median point of `by_x`; only points within `best.distance` of it
/// can improve on `best`. Each strip point is compared with its next
/// `STRIP_WINDOW` successors in y order. Returns `best` unchanged when nothing
/// is strictly closer.
pub(crate) fn refine(by_x: &[Point2], by_y: &[Ranked], best: ClosestPair) -> ClosestPair {
    let split_x = by_x[by_x.len() / 2].x;
    let d = best.distance;
    let strip: Vec<Point2> = by_y
        .iter()
        .map(|r| r.p)
        .filter(|p| split_x - d <= p.x && p.x <= split_x + d)
        .collect();

    let mut best = best;
    for (i, &p) in strip.iter().enumerate() {
        for &q in strip.iter().skip(i + 1).take(STRIP_WINDOW) {
            let dq = distance(p, q);
            if dq < best.distance {
                best = ClosestPair { a: p, b: q, distance: dq };
            }
        }
    }
    best
}
