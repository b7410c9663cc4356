//! Vector helpers not provided by `glam` directly.
//!
//! Arithmetic (`+ - * /`), `length` and `dot` come from [`DVec2`]. Division by zero
//! follows IEEE semantics and is never trapped.

use glam::DVec2;

pub trait VectorExt {
    /// Perpendicular `(y, -x)`.
    fn normal(self) -> DVec2;

    /// Scalar `t` such that `t * onto` is the orthogonal projection of `self` onto
    /// the line through `onto`. NaN when `onto` is zero.
    fn projection_scalar(self, onto: DVec2) -> f64;

    /// `self / |self|`. A zero vector yields NaN components instead of panicking.
    fn unit(self) -> DVec2;
}

impl VectorExt for DVec2 {
    #[inline]
    fn normal(self) -> DVec2 {
        DVec2::new(self.y, -self.x)
    }

    #[inline]
    fn projection_scalar(self, onto: DVec2) -> f64 {
        self.dot(onto) / onto.length_squared()
    }

    #[inline]
    fn unit(self) -> DVec2 {
        self / self.length()
    }
}

/// Component-wise average. Empty input gives NaN.
pub fn mean(vectors: &[DVec2]) -> DVec2 {
    let sum: DVec2 = vectors.iter().copied().sum();
    sum / vectors.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normal_rotates_clockwise_in_math_coords() {
        let n = DVec2::new(3.0, 4.0).normal();
        assert_eq!(n, DVec2::new(4.0, -3.0));
        assert_eq!(n.dot(DVec2::new(3.0, 4.0)), 0.0);
    }

    #[test]
    fn test_projection_scalar() {
        let a = DVec2::new(5.0, 5.0);
        let b = DVec2::new(10.0, 0.0);
        assert_relative_eq!(a.projection_scalar(b), 0.5);
        assert!(a.projection_scalar(DVec2::ZERO).is_nan());
    }

    #[test]
    fn test_unit_and_zero_vector() {
        let u = DVec2::new(3.0, 4.0).unit();
        assert_relative_eq!(u.x, 0.6);
        assert_relative_eq!(u.y, 0.8);
        assert_relative_eq!(u.length(), 1.0);
        let z = DVec2::ZERO.unit();
        assert!(z.x.is_nan() && z.y.is_nan());
    }

    #[test]
    fn test_division_by_zero_propagates() {
        let v = DVec2::new(1.0, -1.0) / 0.0;
        assert_eq!(v.x, f64::INFINITY);
        assert_eq!(v.y, f64::NEG_INFINITY);
        let w = DVec2::new(1.0, 0.0) / DVec2::new(2.0, 0.0);
        assert_eq!(w.x, 0.5);
        assert!(w.y.is_nan());
    }

    #[test]
    fn test_mean() {
        let m = mean(&[DVec2::new(0.0, 0.0), DVec2::new(2.0, 4.0), DVec2::new(4.0, 2.0)]);
        assert_relative_eq!(m.x, 2.0);
        assert_relative_eq!(m.y, 2.0);
        let empty = mean(&[]);
        assert!(empty.x.is_nan());
    }
}
