//! Coordinate-sorted views.
//!
//! `sorted_by` is the public sorter. `ranked_by_y` builds the y view used by the
//! recursion: each entry remembers its position in the x view, which is how the
//! recursion partitions the y view consistently with the x split.

use std::cmp::Ordering;

use super::types::{Axis, Point2};

/// Copy of `points` in non-decreasing `axis` order.
///
/// Stable: points with equal keys keep their relative input order. Input must be
/// finite; the input slice is not modified.
pub fn sorted_by(points: &[Point2], axis: Axis) -> Vec<Point2> {
    let mut out = points.to_vec();
    out.sort_by(|a, b| cmp_coord(axis.coord(a), axis.coord(b)));
    out
}

#[inline]
fn cmp_coord(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// A point of the y view tagged with its index in the x view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Ranked {
    pub p: Point2,
    pub rank: usize,
}

impl Ranked {
    /// `self` is at or before `split` in x order: smaller x, or equal x and
    /// not after it in the x view.
    #[inline]
    pub fn at_or_left_of(&self, split: &Ranked) -> bool {
        self.p.x < split.p.x || (self.p.x == split.p.x && self.rank <= split.rank)
    }
}

/// The x view re-sorted by y (stable), each point tagged with its x-view index.
pub(crate) fn ranked_by_y(by_x: &[Point2]) -> Vec<Ranked> {
    let mut out: Vec<Ranked> = by_x
        .iter()
        .enumerate()
        .map(|(rank, &p)| Ranked { p, rank })
        .collect();
    out.sort_by(|a, b| cmp_coord(a.p.y, b.p.y));
    out
}
