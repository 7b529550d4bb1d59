use super::types::Point2;

/// Euclidean distance `sqrt((x2-x1)² + (y2-y1)²)`.
///
/// Uses `hypot` on the difference, so the squares never underflow or overflow:
/// distinct finite points always get a positive distance, and the result is
/// finite whenever the difference is.
#[inline]
pub fn distance(p: Point2, q: Point2) -> f64 {
    let d = q - p;
    d.x.hypot(d.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn three_four_five() {
        assert_eq!(distance(vector![0.0, 0.0], vector![3.0, 4.0]), 5.0);
        assert_eq!(distance(vector![-1.0, 2.0], vector![-1.0, 2.0]), 0.0);
    }

    #[test]
    fn tiny_and_huge_magnitudes() {
        assert_eq!(distance(vector![0.0, 0.0], vector![1e-200, 0.0]), 1e-200);
        assert!(distance(vector![0.0, 0.0], vector![3e-320, 4e-320]) > 0.0);
        assert_eq!(distance(vector![1e300, 0.0], vector![-1e300, 0.0]), 2e300);
        let far = distance(vector![0.0, -1e300], vector![1e300, 1e300]);
        assert!(far.is_finite() && far > 2e300);
    }
}
