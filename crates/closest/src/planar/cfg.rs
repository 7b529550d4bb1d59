//! Fixed constants of the divide-and-conquer search (internal).
//!
//! Policy
//! - These are properties of the algorithm, not tuning knobs. Changing either
//!   one breaks agreement with the brute-force oracle on some inputs.

/// Ranges of at most this many points are solved by brute force.
///
/// Every split of a larger range leaves at least two points per side, so no
/// recursive call ever sees a single point.
pub(crate) const LEAF_SIZE: usize = 3;

/// Number of y-order successors each strip point is compared against.
///
/// Packing bound: if `p` and a later strip point `q` are closer than `d`, every
/// point between them in y order lies in the `2d × d` box above `p` straddling
/// the split line. Points on one side are pairwise `>= d` apart, so each `d × d`
/// half (top edge open) holds at most 3 of them. With `p` and `q` among those 6,
/// at most 4 points separate them and `q` is within 5 positions of `p`.
pub(crate) const STRIP_WINDOW: usize = 5;
