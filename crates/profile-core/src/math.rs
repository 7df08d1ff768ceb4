//! Small numeric helpers shared by integrals and merge backends

/// Value at `x` of the line through `(x0, y0)` and `(x1, y1)`
#[inline]
pub fn interpolate(x0: f64, x1: f64, y0: f64, y1: f64, x: f64) -> f64 {
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// Exact integral of a linear ramp of width `width` between `left` and `right`
#[inline]
pub fn trapezoid(width: f64, left: f64, right: f64) -> f64 {
    width * 0.5 * (left + right)
}

/// Absolute-tolerance comparison of two slices of equal length
pub fn all_close(a: &[f64], b: &[f64], eps: f64) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(u, v)| (u - v).abs() <= eps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interpolate() {
        assert_relative_eq!(interpolate(0.0, 2.0, 1.0, 3.0, 1.0), 2.0);
        assert_relative_eq!(interpolate(0.0, 2.0, 1.0, 3.0, 0.0), 1.0);
        assert_relative_eq!(interpolate(1.0, 3.0, 4.0, 0.0, 2.5), 1.0);
    }

    #[test]
    fn test_trapezoid() {
        assert_relative_eq!(trapezoid(2.0, 1.0, 3.0), 4.0);
        assert_relative_eq!(trapezoid(0.0, 1.0, 3.0), 0.0);
    }

    #[test]
    fn test_all_close() {
        assert!(all_close(&[1.0, 2.0], &[1.0, 2.0 + 1e-15], 1e-14));
        assert!(!all_close(&[1.0, 2.0], &[1.0, 2.1], 1e-14));
        assert!(!all_close(&[1.0], &[1.0, 2.0], 1e-14));
    }
}
