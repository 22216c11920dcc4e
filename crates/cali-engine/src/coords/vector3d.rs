use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::scalar::{Float, Scalar};
use super::vector2d::Vector2D;

/// 3D vector, generic over the element type (defaults to `f64`).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector3D<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vector3D<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Scalar> Vector3D<T> {
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    #[inline]
    pub fn length_sq(self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub fn distance_sq(self, rhs: Self) -> T {
        (rhs - self).length_sq()
    }

    #[inline]
    pub fn all_lt(self, rhs: Self) -> bool {
        self.x < rhs.x && self.y < rhs.y && self.z < rhs.z
    }

    #[inline]
    pub fn all_le(self, rhs: Self) -> bool {
        self.x <= rhs.x && self.y <= rhs.y && self.z <= rhs.z
    }

    #[inline]
    pub fn all_gt(self, rhs: Self) -> bool {
        self.x > rhs.x && self.y > rhs.y && self.z > rhs.z
    }

    #[inline]
    pub fn all_ge(self, rhs: Self) -> bool {
        self.x >= rhs.x && self.y >= rhs.y && self.z >= rhs.z
    }

    /// Drops the z component.
    #[inline]
    pub fn xy(self) -> Vector2D<T> {
        Vector2D::new(self.x, self.y)
    }
}

impl<T: Scalar + Neg<Output = T>> Vector3D<T> {
    /// `(-y, x, 0)`: +90 degree rotation projected onto the xy-plane.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x, T::zero())
    }

    /// `(y, -x, 0)`: -90 degree rotation projected onto the xy-plane.
    #[inline]
    pub fn orthogonal(self) -> Self {
        Self::new(self.y, -self.x, T::zero())
    }
}

impl<T: Float> Vector3D<T> {
    #[inline]
    pub fn length(self) -> T {
        self.length_sq().sqrt()
    }

    #[inline]
    pub fn distance(self, rhs: Self) -> T {
        (rhs - self).length()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    #[inline]
    pub fn try_normalized(self) -> Option<Self> {
        let len = self.length();
        if len == T::zero() || !len.is_finite() {
            None
        } else {
            Some(self / len)
        }
    }

    /// Unit vector in the same direction; the zero vector stays zero.
    #[inline]
    pub fn normalized(self) -> Self {
        self.try_normalized().unwrap_or_else(Self::zero)
    }

    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Unsigned angle in radians; zero if either vector has zero length.
    pub fn angle(self, rhs: Self) -> T {
        let denom = self.length() * rhs.length();
        if denom == T::zero() {
            return T::zero();
        }
        (self.dot(rhs) / denom).clamp_unit().acos()
    }

    #[inline]
    pub fn lerp(self, rhs: Self, t: T) -> Self {
        self + (rhs - self) * t
    }
}

impl<T: Scalar> Add for Vector3D<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Scalar> Sub for Vector3D<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Scalar> Mul<T> for Vector3D<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Scalar> Div<T> for Vector3D<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<T: Scalar> AddAssign for Vector3D<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl<T: Scalar> SubAssign for Vector3D<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl<T: Scalar> MulAssign<T> for Vector3D<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vector3D<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Vector3D<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T> From<(T, T, T)> for Vector3D<T> {
    #[inline]
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn v(x: f64, y: f64, z: f64) -> Vector3D {
        Vector3D::new(x, y, z)
    }

    #[test]
    fn add_then_sub_is_identity() {
        let a = v(0.5, -1.0, 8.0);
        let b = v(3.0, 2.0, -4.5);
        assert_eq!(a + b - b, a);
    }

    #[test]
    fn scaling_scales_length() {
        let a = v(1.0, 2.0, 2.0);
        assert_eq!(a.length(), 3.0);
        assert!(((a * 2.0).length() - 6.0).abs() < EPS);
    }

    #[test]
    fn cross_of_basis_vectors() {
        let x = v(1.0, 0.0, 0.0);
        let y = v(0.0, 1.0, 0.0);
        let z = v(0.0, 0.0, 1.0);
        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);
        assert_eq!(y.cross(x), -z);
    }

    #[test]
    fn cross_is_orthogonal_to_inputs() {
        let a = v(1.0, 2.0, 3.0);
        let b = v(-4.0, 0.5, 2.0);
        let c = a.cross(b);
        assert!(c.dot(a).abs() < EPS);
        assert!(c.dot(b).abs() < EPS);
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = v(3.0, -7.0, 11.0).normalized();
        assert!((n.length() - 1.0).abs() < EPS);
        assert_eq!(Vector3D::<f64>::zero().normalized(), Vector3D::zero());
    }

    #[test]
    fn compound_assignment_touches_every_component() {
        let mut a = v(1.0, 2.0, 3.0);
        a += v(1.0, 1.0, 1.0);
        a *= 2.0;
        assert_eq!(a, v(4.0, 6.0, 8.0));
        a -= v(4.0, 6.0, 8.0);
        assert_eq!(a, Vector3D::zero());
    }

    #[test]
    fn angle_is_scalar() {
        let a = v(1.0, 0.0, 0.0);
        let b = v(0.0, 0.0, 3.0);
        assert!((a.angle(b) - core::f64::consts::FRAC_PI_2).abs() < EPS);
    }

    #[test]
    fn xy_plane_rotations_zero_z() {
        let a = v(2.0, 3.0, 9.0);
        assert_eq!(a.perpendicular(), v(-3.0, 2.0, 0.0));
        assert_eq!(a.orthogonal(), v(3.0, -2.0, 0.0));
        assert_eq!(a.xy(), Vector2D::new(2.0, 3.0));
    }

    #[test]
    fn distance_between_points() {
        assert_eq!(v(1.0, 1.0, 1.0).distance(v(1.0, 4.0, 5.0)), 5.0);
        assert_eq!(v(0.0, 0.0, 0.0).distance_sq(v(1.0, 2.0, 2.0)), 9.0);
    }
}
