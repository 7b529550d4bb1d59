//! Input validation errors for the public entry points.

use thiserror::Error;

/// Rejected inputs. The searches themselves are total once these checks pass.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ClosestPairError {
    /// A closest pair needs at least two points.
    #[error("need at least 2 points to form a pair, got {len}")]
    TooFewPoints { len: usize },
    /// NaN or infinite coordinate; distance ordering would be meaningless.
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },
    /// The bounding box is so large that distances across it overflow `f64`.
    #[error("coordinate span ({span_x}, {span_y}) is too large: distances would overflow")]
    SpanOverflow { span_x: f64, span_y: f64 },
}
