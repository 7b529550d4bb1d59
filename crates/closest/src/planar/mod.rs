//! Planar closest-pair search.
//!
//! Purpose
//! - Find the two points of a finite planar set at minimum Euclidean distance.
//! - Provide both the O(n²) oracle and the O(n log n) divide-and-conquer search,
//!   which must agree on the minimum distance for every input.
//!
//! Layout
//! - `types`: `Point2`, `Axis`, `ClosestPair`.
//! - `distance`, `sort`: leaf utilities.
//! - `brute`: exhaustive scan, also the recursion base case.
//! - `strip`: cross-boundary refinement around the split line.
//! - `dnc`: recursive split over synchronized x- and y-sorted views.
//! - `rand`: reproducible point clouds for tests, benches and the CLI.
//!
//! Entry points live in `crate::api`; everything here assumes validated input.

pub(crate) mod brute;
mod cfg;
mod distance;
pub(crate) mod dnc;
pub mod rand;
pub(crate) mod sort;
pub(crate) mod strip;
mod types;

pub use distance::distance;
pub use sort::sorted_by;
pub use types::{Axis, ClosestPair, Point2};

#[cfg(test)]
mod tests;
