//! Assertions with a configurable tolerance.
//!
//! `==` on [`Vector`][crate::Vector] and [`Matrix`][crate::Matrix] already compares with the
//! [`TypeTraits::EPSILON`] of the element type. [`assert_approx_eq!`][crate::assert_approx_eq] and
//! [`assert_approx_ne!`][crate::assert_approx_ne] accept a wider absolute tolerance, a relative
//! tolerance, or both, which is what results of trigonometry or long products usually need.
//!
//! Both comparisons are built on [`TypeTraits::equals_with_tolerance`], so they treat `NaN` and
//! infinities exactly like `==` does.

use std::fmt;

use crate::type_traits::{FloatingPoint, TypeTraits};

/// Values that can be compared with an absolute or relative tolerance.
///
/// Compound values compare equal if every pair of corresponding elements does.
pub trait ApproxEq {
    /// The floating-point type tolerances are expressed in.
    type Tolerance: FloatingPoint;

    /// Returns whether `self` and `other` differ by at most `tolerance`.
    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool;

    /// Returns whether `self` and `other` differ by at most `tolerance` times the larger of their
    /// magnitudes.
    ///
    /// Comparing anything against zero this way needs a `tolerance` of at least 1.0.
    fn rel_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool;
}

macro_rules! float_approx_eq {
    ($($types:ty),+) => {
        $(
            impl ApproxEq for $types {
                type Tolerance = Self;

                #[inline]
                fn abs_diff_eq(&self, other: &Self, tolerance: Self) -> bool {
                    Self::equals_with_tolerance(*self, *other, tolerance)
                }

                fn rel_diff_eq(&self, other: &Self, tolerance: Self) -> bool {
                    if !self.is_finite() || !other.is_finite() {
                        return Self::equals(*self, *other);
                    }

                    let largest = self.abs().max(other.abs());
                    Self::equals_with_tolerance(*self, *other, largest * tolerance)
                }
            }
        )+
    };
}
float_approx_eq!(f32, f64);

impl<T: ApproxEq, const N: usize> ApproxEq for [T; N] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.abs_diff_eq(b, tolerance))
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.iter()
            .zip(other)
            .all(|(a, b)| a.rel_diff_eq(b, tolerance))
    }
}

/// macro-use only, not part of public API.
///
/// Without any tolerance, an absolute comparison with the [`TypeTraits::EPSILON`] of the
/// tolerance type is performed. With both, either one accepting the values is enough.
#[doc(hidden)]
#[track_caller]
pub fn assert_approx<T>(
    left: &T,
    right: &T,
    expect_equal: bool,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
) where
    T: ApproxEq + fmt::Debug,
{
    let abs = match (abs, rel) {
        (None, None) => Some(<T::Tolerance as TypeTraits>::EPSILON),
        (abs, _) => abs,
    };
    let equal = abs.map_or(false, |abs| left.abs_diff_eq(right, abs))
        || rel.map_or(false, |rel| left.rel_diff_eq(right, rel));

    if equal != expect_equal {
        let op = if expect_equal { "==" } else { "!=" };
        panic!(
            "assertion `left {op} right` failed (abs: {abs:?}, rel: {rel:?})
  left: {left:?}
 right: {right:?}"
        );
    }
}

/// Asserts that two values are equal within a tolerance (see [`ApproxEq`]).
///
/// The tolerances are given as `abs = ..` and/or `rel = ..` after the values.
///
/// # Examples
///
/// ```
/// # use mu_linalg::*;
/// let sum = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(sum, 1.0);
///
/// assert_approx_eq!(100.0, 99.0, abs = 1.0);
/// assert_approx_eq!(100.0, 99.0, rel = 0.01);
/// assert_approx_eq!(0.0, 1e-7, abs = 1e-6, rel = 0.01);
/// ```
///
/// Vectors and matrices are compared element by element:
///
/// ```
/// # use mu_linalg::*;
/// use std::f64::consts::FRAC_PI_2;
///
/// assert_approx_eq!(vec2(1.0, 0.0).rotated(FRAC_PI_2), vec2(0.0, 1.0), abs = 1e-12);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::assert_approx(&$lhs, &$rhs, true, None, None)
    };
    ($lhs:expr, $rhs:expr, abs = $abs:expr $(,)?) => {
        $crate::approx::assert_approx(&$lhs, &$rhs, true, Some($abs), None)
    };
    ($lhs:expr, $rhs:expr, rel = $rel:expr $(,)?) => {
        $crate::approx::assert_approx(&$lhs, &$rhs, true, None, Some($rel))
    };
    ($lhs:expr, $rhs:expr, abs = $abs:expr, rel = $rel:expr $(,)?) => {
        $crate::approx::assert_approx(&$lhs, &$rhs, true, Some($abs), Some($rel))
    };
}

/// Asserts that two values are *not* equal within a tolerance.
///
/// Accepts the same tolerances as [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use mu_linalg::*;
/// assert_approx_ne!(100.0, 99.0, abs = 0.5);
/// assert_approx_ne!(100.0, 99.0, rel = 0.005);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::assert_approx(&$lhs, &$rhs, false, None, None)
    };
    ($lhs:expr, $rhs:expr, abs = $abs:expr $(,)?) => {
        $crate::approx::assert_approx(&$lhs, &$rhs, false, Some($abs), None)
    };
    ($lhs:expr, $rhs:expr, rel = $rel:expr $(,)?) => {
        $crate::approx::assert_approx(&$lhs, &$rhs, false, None, Some($rel))
    };
    ($lhs:expr, $rhs:expr, abs = $abs:expr, rel = $rel:expr $(,)?) => {
        $crate::approx::assert_approx(&$lhs, &$rhs, false, Some($abs), Some($rel))
    };
}
