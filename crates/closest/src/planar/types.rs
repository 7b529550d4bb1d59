//! Value types shared by both searches.
//!
//! - `Point2`: a planar point, `nalgebra::Vector2<f64>`. Copy, compared by coordinates.
//! - `Axis`: coordinate selector for sorting.
//! - `ClosestPair`: the winning pair and its distance.

use nalgebra::Vector2;

use super::distance::distance;

/// Planar point `(x, y)`.
pub type Point2 = Vector2<f64>;

/// Coordinate selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    #[inline]
    pub fn coord(self, p: &Point2) -> f64 {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }
}

/// Closest pair found by a search.
///
/// Invariant: `distance == distance(a, b)`. `a` precedes `b` in the order the
/// search visited them (caller order for brute force, y order inside a strip).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClosestPair {
    pub a: Point2,
    pub b: Point2,
    pub distance: f64,
}

impl ClosestPair {
    #[inline]
    pub fn new(a: Point2, b: Point2) -> Self {
        Self {
            a,
            b,
            distance: distance(a, b),
        }
    }

    #[inline]
    pub fn pair(&self) -> (Point2, Point2) {
        (self.a, self.b)
    }

    /// True if `{a, b}` equals `{p, q}` as an unordered pair.
    pub fn is_pair_of(&self, p: Point2, q: Point2) -> bool {
        (self.a == p && self.b == q) || (self.a == q && self.b == p)
    }

    /// Segment midpoint, where plots put the distance label.
    #[inline]
    pub fn midpoint(&self) -> Point2 {
        (self.a + self.b) * 0.5
    }
}
