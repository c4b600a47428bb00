use core::ops::Mul;

use anyhow::{anyhow, Result};
use nalgebra::Quaternion;

/// Sensor orientation as a quaternion (w, x, y, z).
///
/// Unit norm is expected but not enforced. Multiplication is the Hamilton
/// product, so `a * b` applies `b` first and then `a`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation(Quaternion<f64>);

impl Orientation {
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self(Quaternion::new(w, x, y, z))
    }

    pub fn identity() -> Self {
        Self(Quaternion::identity())
    }

    /// Builds an orientation from components in sensor log order (x, y, z, w).
    pub fn from_xyzw(components: [f64; 4]) -> Self {
        let [x, y, z, w] = components;
        Self::new(w, x, y, z)
    }

    pub fn w(&self) -> f64 {
        self.0.w
    }

    pub fn x(&self) -> f64 {
        self.0.i
    }

    pub fn y(&self) -> f64 {
        self.0.j
    }

    pub fn z(&self) -> f64 {
        self.0.k
    }

    pub fn norm_squared(&self) -> f64 {
        self.0.norm_squared()
    }

    pub fn conjugate(&self) -> Self {
        Self(self.0.conjugate())
    }

    /// Conjugate divided by the squared norm. `None` only for the zero
    /// quaternion, however small the norm of any other one.
    pub fn inverse(&self) -> Option<Self> {
        let norm_squared = self.norm_squared();
        if norm_squared == 0.0 {
            return None;
        }
        Some(Self(self.0.conjugate() / norm_squared))
    }

    /// Rotation taking `earlier` to `self`: `self * earlier⁻¹`.
    pub fn relative_to(&self, earlier: &Orientation) -> Result<Orientation> {
        let inverse = earlier
            .inverse()
            .ok_or_else(|| anyhow!("cannot invert zero quaternion {:?}", earlier))?;
        Ok(*self * inverse)
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Orientation {
    type Output = Orientation;

    fn mul(self, rhs: Orientation) -> Orientation {
        Self(self.0 * rhs.0)
    }
}

impl From<Quaternion<f64>> for Orientation {
    fn from(quaternion: Quaternion<f64>) -> Self {
        Self(quaternion)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use core::f64::consts::FRAC_1_SQRT_2;

    use super::*;

    fn assert_orientation_eq(a: Orientation, b: Orientation) {
        assert_abs_diff_eq!(a.w(), b.w(), epsilon = 1e-12);
        assert_abs_diff_eq!(a.x(), b.x(), epsilon = 1e-12);
        assert_abs_diff_eq!(a.y(), b.y(), epsilon = 1e-12);
        assert_abs_diff_eq!(a.z(), b.z(), epsilon = 1e-12);
    }

    #[test]
    fn from_xyzw_puts_scalar_last() {
        let q = Orientation::from_xyzw([1.0, 2.0, 3.0, 4.0]);
        assert_eq!((q.w(), q.x(), q.y(), q.z()), (4.0, 1.0, 2.0, 3.0));
    }

    #[test]
    fn hamilton_basis_products() {
        let i = Orientation::new(0.0, 1.0, 0.0, 0.0);
        let j = Orientation::new(0.0, 0.0, 1.0, 0.0);
        let k = Orientation::new(0.0, 0.0, 0.0, 1.0);
        assert_orientation_eq(i * j, k);
        assert_orientation_eq(j * i, Orientation::new(0.0, 0.0, 0.0, -1.0));
        assert_orientation_eq(i * i, Orientation::new(-1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn inverse_of_non_unit_quaternion() {
        let q = Orientation::new(2.0, 0.0, 0.0, 0.0);
        assert_orientation_eq(q.inverse().unwrap(), Orientation::new(0.5, 0.0, 0.0, 0.0));

        let q = Orientation::new(1.0, 2.0, 3.0, 4.0);
        assert_orientation_eq(q * q.inverse().unwrap(), Orientation::identity());
    }

    #[test]
    fn inverse_of_unit_quaternion_is_conjugate() {
        let q = Orientation::new(FRAC_1_SQRT_2, 0.0, 0.0, FRAC_1_SQRT_2);
        assert_orientation_eq(q.inverse().unwrap(), q.conjugate());
    }

    #[test]
    fn tiny_quaternion_still_inverts() {
        let q = Orientation::new(1e-9, 0.0, 0.0, 0.0);
        let inverse = q.inverse().unwrap();
        assert_abs_diff_eq!(inverse.w(), 1e9, epsilon = 1e-3);
        assert_orientation_eq(q * inverse, Orientation::identity());

        let q = Orientation::new(1e-9, 0.0, 1e-9, 0.0);
        assert!(Orientation::identity().relative_to(&q).is_ok());
    }

    #[test]
    fn zero_quaternion_has_no_inverse() {
        let zero = Orientation::new(0.0, 0.0, 0.0, 0.0);
        assert!(zero.inverse().is_none());
        assert!(Orientation::identity().relative_to(&zero).is_err());
    }

    #[test]
    fn relative_to_self_is_identity() {
        let q = Orientation::new(0.5, 0.5, 0.5, 0.5);
        assert_orientation_eq(q.relative_to(&q).unwrap(), Orientation::identity());
    }
}
