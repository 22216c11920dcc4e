use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::scalar::{Float, Scalar};

/// 2D vector.
///
/// Generic over the element type; defaults to `f64`. The draw stream uses
/// `Vector2D<f32>` (see [`Vec2`]) in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector2D<T = f64> {
    pub x: T,
    pub y: T,
}

/// Logical-pixel position (top-left origin, +Y down).
pub type Vec2 = Vector2D<f32>;

impl<T> Vector2D<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Scalar> Vector2D<T> {
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    #[inline]
    pub fn length_sq(self) -> T {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Z component of the 3D cross product of `(x, y, 0)` vectors.
    ///
    /// Positive when `rhs` is counter-clockwise from `self` in a +Y-up frame.
    #[inline]
    pub fn cross(self, rhs: Self) -> T {
        self.x * rhs.y - self.y * rhs.x
    }

    #[inline]
    pub fn distance_sq(self, rhs: Self) -> T {
        (rhs - self).length_sq()
    }

    #[inline]
    pub fn all_lt(self, rhs: Self) -> bool {
        self.x < rhs.x && self.y < rhs.y
    }

    #[inline]
    pub fn all_le(self, rhs: Self) -> bool {
        self.x <= rhs.x && self.y <= rhs.y
    }

    #[inline]
    pub fn all_gt(self, rhs: Self) -> bool {
        self.x > rhs.x && self.y > rhs.y
    }

    #[inline]
    pub fn all_ge(self, rhs: Self) -> bool {
        self.x >= rhs.x && self.y >= rhs.y
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x.to_f32(), self.y.to_f32())
    }
}

impl<T: Scalar + Neg<Output = T>> Vector2D<T> {
    /// Rotates by +90 degrees: `(-y, x)`.
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotates by -90 degrees: `(y, -x)`.
    #[inline]
    pub fn orthogonal(self) -> Self {
        Self::new(self.y, -self.x)
    }
}

impl<T: Float> Vector2D<T> {
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
        self.x.is_finite() && self.y.is_finite()
    }

    /// Unit vector in the same direction, or `None` for zero/non-finite length.
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

    /// Unsigned angle between `self` and `rhs` in radians, in `[0, pi]`.
    ///
    /// Returns zero if either vector has zero length.
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

impl<T: Scalar> Add for Vector2D<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub for Vector2D<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Mul<T> for Vector2D<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Scalar> Div<T> for Vector2D<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Scalar> AddAssign for Vector2D<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<T: Scalar> SubAssign for Vector2D<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<T: Scalar> MulAssign<T> for Vector2D<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vector2D<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for Vector2D<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T> From<(T, T)> for Vector2D<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn v(x: f64, y: f64) -> Vector2D {
        Vector2D::new(x, y)
    }

    #[test]
    fn add_then_sub_is_identity() {
        let a = v(1.5, -2.25);
        let b = v(-7.0, 3.5);
        assert_eq!(a + b - b, a);
    }

    #[test]
    fn scaling_scales_length() {
        let a = v(3.0, 4.0);
        assert!(((a * 2.0).length() - a.length() * 2.0).abs() < EPS);
        assert_eq!(a.length(), 5.0);
        assert_eq!(a.length_sq(), 25.0);
    }

    #[test]
    fn compound_assignment_touches_every_component() {
        let mut a = v(1.0, 2.0);
        a += v(1.0, 1.0);
        assert_eq!(a, v(2.0, 3.0));
        a -= v(0.5, 0.5);
        assert_eq!(a, v(1.5, 2.5));
        a *= 2.0;
        assert_eq!(a, v(3.0, 5.0));
        a /= 2.0;
        assert_eq!(a, v(1.5, 2.5));
    }

    #[test]
    fn normalized_has_unit_length() {
        let n = v(-3.0, 12.0).normalized();
        assert!((n.length() - 1.0).abs() < EPS);

        let mut m = v(0.0, -9.0);
        m.normalize();
        assert_eq!(m, v(0.0, -1.0));
    }

    #[test]
    fn normalized_zero_stays_zero() {
        assert_eq!(v(0.0, 0.0).normalized(), v(0.0, 0.0));
        assert!(v(0.0, 0.0).try_normalized().is_none());
    }

    #[test]
    fn dot_and_cross() {
        let x = v(1.0, 0.0);
        let y = v(0.0, 1.0);
        assert_eq!(x.dot(y), 0.0);
        assert_eq!(x.cross(y), 1.0);
        assert_eq!(y.cross(x), -1.0);
    }

    #[test]
    fn angle_between_axes() {
        let x = v(2.0, 0.0);
        let y = v(0.0, 5.0);
        assert!((x.angle(y) - core::f64::consts::FRAC_PI_2).abs() < EPS);
        assert!((x.angle(-x) - core::f64::consts::PI).abs() < EPS);
        assert_eq!(x.angle(x), 0.0);
        assert_eq!(x.angle(v(0.0, 0.0)), 0.0);
    }

    #[test]
    fn perpendicular_and_orthogonal() {
        let a = v(2.0, 1.0);
        assert_eq!(a.perpendicular(), v(-1.0, 2.0));
        assert_eq!(a.orthogonal(), v(1.0, -2.0));
        assert_eq!(a.dot(a.perpendicular()), 0.0);
    }

    #[test]
    fn distances() {
        let a = v(1.0, 1.0);
        let b = v(4.0, 5.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(a.distance_sq(b), 25.0);
    }

    #[test]
    fn componentwise_predicates() {
        let lo = v(0.0, 0.0);
        let hi = v(1.0, 1.0);
        let mixed = v(2.0, -1.0);
        assert!(lo.all_lt(hi));
        assert!(hi.all_gt(lo));
        assert!(lo.all_le(lo) && lo.all_ge(lo));
        assert!(!mixed.all_lt(hi) && !mixed.all_gt(hi));
    }

    #[test]
    fn integer_vectors() {
        let a: Vector2D<i32> = Vector2D::new(3, -4);
        assert_eq!(a + Vector2D::new(1, 1), Vector2D::new(4, -3));
        assert_eq!(a.length_sq(), 25);
        assert_eq!(-a, Vector2D::new(-3, 4));
        assert_eq!(a.to_vec2(), Vec2::new(3.0, -4.0));
    }

    #[test]
    fn lerp_midpoint() {
        assert_eq!(v(0.0, 0.0).lerp(v(2.0, 4.0), 0.5), v(1.0, 2.0));
    }
}
