//! Divide-and-conquer search over synchronized x and y views.
//!
//! Each call owns a contiguous range of the x view and the y view of exactly
//! the same points. Ranges of at most `LEAF_SIZE` points go to brute force;
//! larger ranges split at the x midpoint, recurse on both halves, and let the
//! strip check pairs that straddle the split.
//!
//! The y view is split by a filter predicate, never by position: a point goes
//! left iff it is at or before the last left point in x order (x first, x-view
//! index on equal x). Both halves stay sorted by y and hold the same points as
//! their x ranges, including when several points share the split x.

use super::brute;
use super::cfg::LEAF_SIZE;
use super::sort::Ranked;
use super::strip;
use super::types::{ClosestPair, Point2};

/// Search the full views. `by_y` must come from `sort::ranked_by_y(by_x)`.
pub(crate) fn search(by_x: &[Point2], by_y: &[Ranked]) -> ClosestPair {
    search_range(by_x, 0, by_y)
}

/// `by_x` is the x-view range starting at index `offset`; `by_y` holds the
/// same points in y order.
fn search_range(by_x: &[Point2], offset: usize, by_y: &[Ranked]) -> ClosestPair {
    debug_assert_eq!(by_x.len(), by_y.len(), "views out of sync");
    if by_x.len() <= LEAF_SIZE {
        return brute::search(by_x);
    }

    let mid = by_x.len() / 2;
    let (left_x, right_x) = by_x.split_at(mid);
    let last_left = Ranked {
        p: left_x[mid - 1],
        rank: offset + mid - 1,
    };
    let (left_y, right_y): (Vec<Ranked>, Vec<Ranked>) =
        by_y.iter().partition(|r| r.at_or_left_of(&last_left));
    tracing::trace!(
        n = by_x.len(),
        split_x = last_left.p.x,
        left = left_y.len(),
        right = right_y.len(),
        "split"
    );

    let left = search_range(left_x, offset, &left_y);
    let right = search_range(right_x, offset + mid, &right_y);
    let candidate = if left.distance <= right.distance {
        left
    } else {
        right
    };

    let refined = strip::refine(by_x, by_y, candidate);
    if candidate.distance <= refined.distance {
        candidate
    } else {
        refined
    }
}
