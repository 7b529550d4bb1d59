//! Closest pair of points in the plane.
//!
//! Two searches over the same point set:
//! - `closest_pair`: O(n log n) divide and conquer over x- and y-sorted views.
//! - `closest_pair_brute_force`: O(n²) exhaustive scan, used as the oracle.
//!
//! Both validate their input (at least two points, finite coordinates) and
//! return a `ClosestPair` with the two points and their Euclidean distance.
//! Reading, plotting and timing live in callers (see the `cli` crate).

pub mod api;
pub mod error;
pub mod planar;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use api::{closest_pair, closest_pair_brute_force};
pub use error::ClosestPairError;
pub use planar::{distance, sorted_by, Axis, ClosestPair, Point2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::{closest_pair, closest_pair_brute_force, validate};
    pub use crate::error::ClosestPairError;
    pub use crate::planar::rand::{draw_cloud, CloudCfg, ReplayToken};
    pub use crate::planar::{distance, sorted_by, Axis, ClosestPair, Point2};
    pub use nalgebra::Vector2 as Vec2;
}
