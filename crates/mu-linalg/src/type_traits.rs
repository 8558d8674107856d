//! Per-type equality policy.
//!
//! Every scalar type carries a tolerance ([`TypeTraits::EPSILON`]) that [`Vector`] and [`Matrix`]
//! equality is based on. Integer types compare exactly, floating-point types accept an absolute
//! difference of up to their epsilon.
//!
//! [`Vector`]: crate::Vector
//! [`Matrix`]: crate::Matrix

use crate::conjunction::{Bool, False, True};

/// Equality and classification policy of a scalar type.
pub trait TypeTraits: Copy + PartialEq {
    /// [`True`] for floating-point types, [`False`] for integers.
    type FloatingPoint: Bool;

    const IS_FLOATING_POINT: bool = <Self::FloatingPoint as Bool>::VALUE;

    /// Largest absolute difference at which two values are still considered equal.
    ///
    /// Zero for integers.
    const EPSILON: Self;

    /// Compares `lhs` and `rhs` with the default tolerance of the type ([`TypeTraits::EPSILON`]).
    #[inline]
    fn equals(lhs: Self, rhs: Self) -> bool {
        Self::equals_with_tolerance(lhs, rhs, Self::EPSILON)
    }

    /// Returns whether `lhs` and `rhs` differ by at most `tolerance`.
    ///
    /// For floating-point types, two NaNs compare equal to each other (but to nothing else), and
    /// infinities are only equal to an infinity of the same sign.
    fn equals_with_tolerance(lhs: Self, rhs: Self, tolerance: Self) -> bool;
}

macro_rules! unsigned_type_traits {
    ($($types:ty),+) => {
        $(
            impl TypeTraits for $types {
                type FloatingPoint = False;
                const EPSILON: Self = 0;

                #[inline]
                fn equals_with_tolerance(lhs: Self, rhs: Self, tolerance: Self) -> bool {
                    lhs.abs_diff(rhs) <= tolerance
                }
            }
        )+
    };
}
unsigned_type_traits!(u8, u16, u32, u64, u128, usize);

macro_rules! signed_type_traits {
    ($($types:ty),+) => {
        $(
            impl TypeTraits for $types {
                type FloatingPoint = False;
                const EPSILON: Self = 0;

                #[inline]
                fn equals_with_tolerance(lhs: Self, rhs: Self, tolerance: Self) -> bool {
                    tolerance >= 0 && lhs.abs_diff(rhs) <= tolerance.unsigned_abs()
                }
            }
        )+
    };
}
signed_type_traits!(i8, i16, i32, i64, i128, isize);

impl TypeTraits for f32 {
    type FloatingPoint = True;
    const EPSILON: Self = 1.0e-5;

    fn equals_with_tolerance(lhs: Self, rhs: Self, tolerance: Self) -> bool {
        if lhs == rhs || (lhs.is_nan() && rhs.is_nan()) {
            return true;
        }
        if !lhs.is_finite() || !rhs.is_finite() {
            return false;
        }
        (lhs - rhs).abs() <= tolerance
    }
}

impl TypeTraits for f64 {
    type FloatingPoint = True;
    const EPSILON: Self = 1.0e-14;

    fn equals_with_tolerance(lhs: Self, rhs: Self, tolerance: Self) -> bool {
        if lhs == rhs || (lhs.is_nan() && rhs.is_nan()) {
            return true;
        }
        if !lhs.is_finite() || !rhs.is_finite() {
            return false;
        }
        (lhs - rhs).abs() <= tolerance
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point scalar types.
///
/// This trait is sealed and only implemented for [`f32`] and [`f64`]; naming it for any other
/// type is a compile error:
///
/// ```compile_fail
/// # use mu_linalg::FloatingPoint;
/// fn epsilon<T: FloatingPoint>() -> T {
///     T::EPSILON
/// }
///
/// epsilon::<i32>();
/// ```
pub trait FloatingPoint:
    TypeTraits<FloatingPoint = True>
    + crate::Scalar
    + crate::Sqrt
    + crate::Trig
    + std::ops::Neg<Output = Self>
    + sealed::Sealed
{
}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epsilons() {
        assert!(<f32 as TypeTraits>::EPSILON > 0.0);
        assert!(<f64 as TypeTraits>::EPSILON > 0.0);
        assert!(f64::from(<f32 as TypeTraits>::EPSILON) > <f64 as TypeTraits>::EPSILON);
        assert_eq!(<i32 as TypeTraits>::EPSILON, 0);
        assert_eq!(<u64 as TypeTraits>::EPSILON, 0);
    }

    #[test]
    fn classification() {
        assert!(f32::IS_FLOATING_POINT);
        assert!(f64::IS_FLOATING_POINT);
        assert!(!i8::IS_FLOATING_POINT);
        assert!(!usize::IS_FLOATING_POINT);
    }

    #[test]
    fn equals_absolute() {
        assert!(f64::equals(1.0, 1.0 + 1e-15));
        assert!(!f64::equals(1.0, 1.0 + 1e-13));
        assert!(f32::equals(100.0, 100.0 + 5e-6));
        assert!(!f32::equals(100.0, 100.1));
    }

    #[test]
    fn equals_close_to_zero() {
        assert!(f64::equals(0.0, -0.0));
        assert!(f64::equals(1e-15, -1e-15));
        assert!(f32::equals(0.0, 1e-6));
        assert!(!f32::equals(0.0, 1e-4));
    }

    #[test]
    fn equals_with_tolerance() {
        let a = 3.0;
        let b = 3.0 + 1e-10;
        assert!(f64::equals_with_tolerance(a, b, 1e-9));
        assert!(!f64::equals_with_tolerance(a, b, 1e-12));
        assert!(!f64::equals(a, b));
    }

    #[test]
    fn non_finite() {
        assert!(f32::equals(f32::NAN, f32::NAN));
        assert!(!f32::equals(f32::NAN, 0.0));
        assert!(f64::equals(f64::INFINITY, f64::INFINITY));
        assert!(!f64::equals(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!f64::equals_with_tolerance(f64::INFINITY, f64::MAX, f64::INFINITY));
    }

    #[test]
    fn integers_compare_exactly() {
        assert!(i32::equals(7, 7));
        assert!(!i32::equals(7, 8));
        assert!(!i64::equals(i64::MIN, i64::MAX));
        assert!(u8::equals(255, 255));
        assert!(i32::equals_with_tolerance(-3, 3, 6));
        assert!(!i32::equals_with_tolerance(-3, 3, 5));
        assert!(!i32::equals_with_tolerance(3, 3, -1));
        assert!(u16::equals_with_tolerance(10, 12, 2));
    }
}
