use core::fmt::Debug;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Numeric element type accepted by vectors and series generators.
///
/// Integer and float types both qualify; operations that need roots or
/// trigonometry require [`Float`].
pub trait Scalar:
    Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    fn zero() -> Self;
    fn one() -> Self;

    /// Converts from an index-like integer (`as` semantics).
    fn from_i64(v: i64) -> Self;

    /// Converts to an integer, truncating toward zero (`as` semantics).
    fn to_i64(self) -> i64;

    /// Converts to `f32` for the logical-pixel draw stream.
    fn to_f32(self) -> f32;

    /// `self - rhs` truncated toward zero, saturating at the `i64` bounds
    /// instead of overflowing.
    fn span_to_i64(self, rhs: Self) -> i64;

    /// `self * rhs`, saturating at the bounds of integer types.
    fn saturating_mul(self, rhs: Self) -> Self;
}

/// Floating-point [`Scalar`].
pub trait Float: Scalar + Neg<Output = Self> {
    fn sqrt(self) -> Self;
    fn acos(self) -> Self;
    fn exp(self) -> Self;
    fn pi() -> Self;
    fn is_finite(self) -> bool;

    /// Clamps to `[-1, 1]`, the domain of `acos`.
    fn clamp_unit(self) -> Self;
}

macro_rules! impl_scalar {
    (@common $t:ty, $zero:expr, $one:expr) => {
        #[inline]
        fn zero() -> Self { $zero }
        #[inline]
        fn one() -> Self { $one }
        #[inline]
        fn from_i64(v: i64) -> Self { v as $t }
        #[inline]
        fn to_i64(self) -> i64 { self as i64 }
        #[inline]
        fn to_f32(self) -> f32 { self as f32 }
    };
    (int: $($t:ty),*) => {
        $(
            impl Scalar for $t {
                impl_scalar!(@common $t, 0, 1);

                #[inline]
                fn span_to_i64(self, rhs: Self) -> i64 {
                    (self as i64).saturating_sub(rhs as i64)
                }
                #[inline]
                fn saturating_mul(self, rhs: Self) -> Self {
                    <$t>::saturating_mul(self, rhs)
                }
            }
        )*
    };
    (float: $($t:ty),*) => {
        $(
            impl Scalar for $t {
                impl_scalar!(@common $t, 0.0, 1.0);

                // `as` saturates; NaN becomes 0.
                #[inline]
                fn span_to_i64(self, rhs: Self) -> i64 {
                    (self - rhs) as i64
                }
                #[inline]
                fn saturating_mul(self, rhs: Self) -> Self {
                    self * rhs
                }
            }
        )*
    };
}

impl_scalar!(int: i32, i64);
impl_scalar!(float: f32, f64);

macro_rules! impl_float {
    ($($t:ident),*) => {
        $(
            impl Float for $t {
                #[inline]
                fn sqrt(self) -> Self { $t::sqrt(self) }
                #[inline]
                fn acos(self) -> Self { $t::acos(self) }
                #[inline]
                fn exp(self) -> Self { $t::exp(self) }
                #[inline]
                fn pi() -> Self { core::$t::consts::PI }
                #[inline]
                fn is_finite(self) -> bool { $t::is_finite(self) }
                #[inline]
                fn clamp_unit(self) -> Self { self.clamp(-1.0, 1.0) }
            }
        )*
    };
}

impl_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_conversions_truncate() {
        assert_eq!(<f64 as Scalar>::to_i64(2.9), 2);
        assert_eq!(<f32 as Scalar>::to_i64(-1.5), -1);
        assert_eq!(<i32 as Scalar>::from_i64(7), 7);
        assert_eq!(<f64 as Scalar>::from_i64(3), 3.0);
    }

    #[test]
    fn span_saturates_instead_of_overflowing() {
        assert_eq!(i32::MAX.span_to_i64(-1), i32::MAX as i64 + 1);
        assert_eq!(i64::MAX.span_to_i64(-1), i64::MAX);
        assert_eq!(i64::MIN.span_to_i64(1), i64::MIN);
        assert_eq!(2.9f64.span_to_i64(0.4), 2);
        assert_eq!(1.0e300f64.span_to_i64(0.0), i64::MAX);
        assert_eq!(f64::NAN.span_to_i64(0.0), 0);
    }

    #[test]
    fn integer_mul_saturates() {
        assert_eq!(Scalar::saturating_mul(i32::MAX, 2), i32::MAX);
        assert_eq!(Scalar::saturating_mul(i64::MIN, 2), i64::MIN);
        assert_eq!(Scalar::saturating_mul(1.5f32, 2.0), 3.0);
    }

    #[test]
    fn clamp_unit_bounds() {
        assert_eq!(1.0000001f64.clamp_unit(), 1.0);
        assert_eq!((-3.0f32).clamp_unit(), -1.0);
        assert_eq!(0.25f64.clamp_unit(), 0.25);
    }
}
