use std::{fmt, ops};

use crate::{type_traits::TypeTraits, unwrap_ref::UnwrapRef};

/// Types that support the trigonometric functions.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of the [`f32::min`] and [`f32::max`] functions
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types implement it in terms of
/// [`Ord::min`] and [`Ord::max`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;
    fn clamp(self, min: Self, max: Self) -> Self {
        self.max(min).min(max)
    }
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// Negation is not required, so that unsigned integers qualify.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// The primitive element types that [`Vector`][crate::Vector] and [`Matrix`][crate::Matrix] are
/// designed around.
///
/// This is implemented for all built-in integer types, [`f32`] and [`f64`].
pub trait Scalar:
    Number
    + MinMax
    + TypeTraits
    + UnwrapRef<Target = Self>
    + Cast<Self>
    + PartialOrd
    + ops::AddAssign
    + ops::SubAssign
    + ops::MulAssign
    + ops::DivAssign
    + Default
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
{
    /// Converts an element count into this type (`as` semantics).
    fn from_usize(n: usize) -> Self;

    /// Sums `values` without intermediate overflow.
    ///
    /// Integers are summed in 128 bits, and a total outside the range of `Self` saturates to
    /// `Self::MIN` or `Self::MAX`. Floating-point values are added in order.
    fn sum_of<I: IntoIterator<Item = Self>>(values: I) -> Self;

    /// Computes the arithmetic mean of `values`, which must yield exactly `len` items.
    ///
    /// For integers the result is the exact mean truncated toward zero, so it is never smaller
    /// than the smallest or larger than the largest value. An empty input (`len == 0`) yields zero
    /// for integers and NaN for floating-point types.
    fn mean_of<I: IntoIterator<Item = Self>>(values: I, len: usize) -> Self;

    /// macro-use only, not part of public API.
    #[doc(hidden)]
    fn exact_value(self) -> ExactValue;
}

/// The mathematical value of a [`Scalar`], used to check conversions for exactness.
#[doc(hidden)]
#[derive(Debug, Clone, Copy)]
pub enum ExactValue {
    Int(i128),
    UInt(u128),
    Float(f64),
}

impl ExactValue {
    /// Returns whether `self` and `other` denote the same number. `NaN` is the same as `NaN`.
    pub fn same(self, other: Self) -> bool {
        use ExactValue::*;

        match (self, other) {
            (Int(a), Int(b)) => a == b,
            (UInt(a), UInt(b)) => a == b,
            (Int(i), UInt(u)) | (UInt(u), Int(i)) => u128::try_from(i).map_or(false, |i| i == u),
            (Float(a), Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            // `as` saturates, so the range is checked before converting. The upper bounds round
            // up to the next power of two.
            (Float(f), Int(i)) | (Int(i), Float(f)) => {
                f.fract() == 0.0 && f >= i128::MIN as f64 && f < i128::MAX as f64 && f as i128 == i
            }
            (Float(f), UInt(u)) | (UInt(u), Float(f)) => {
                f.fract() == 0.0 && f >= 0.0 && f < u128::MAX as f64 && f as u128 == u
            }
        }
    }
}

/// Explicit, potentially lossy numeric conversion with the semantics of an `as` cast.
///
/// Integer to integer casts wrap, float to integer casts saturate and map NaN to zero, and
/// conversions between floating-point types round to the nearest representable value.
pub trait Cast<U> {
    fn cast(self) -> U;
}

macro_rules! impl_cast {
    (@from $from:ty => $($to:ty),+) => {
        $(
            impl Cast<$to> for $from {
                #[inline]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )+
    };
    ($($from:ty),+) => {
        $(
            impl_cast!(@from $from => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
        )+
    };
}
impl_cast!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

macro_rules! int_traits {
    ($wide:ty, $exact:ident: $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }

            impl One for $types {
                const ONE: Self = 1;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }

            impl Scalar for $types {
                #[inline]
                fn from_usize(n: usize) -> Self {
                    n as $types
                }

                fn sum_of<I: IntoIterator<Item = Self>>(values: I) -> Self {
                    let total = values
                        .into_iter()
                        .fold(<$wide>::ZERO, |acc, x| acc.saturating_add(x as $wide));
                    Ord::clamp(total, <$types>::MIN as $wide, <$types>::MAX as $wide) as $types
                }

                fn mean_of<I: IntoIterator<Item = Self>>(values: I, len: usize) -> Self {
                    if len == 0 {
                        return Self::ZERO;
                    }

                    // Sum the quotients and carry the remainders. Partial sums of the quotients
                    // may leave the range of `$wide`, the final one never does.
                    let n = len as $wide;
                    let (mut quot, mut rem) = (<$wide>::ZERO, <$wide>::ZERO);
                    for x in values {
                        let x = x as $wide;
                        quot = quot.wrapping_add(x.div_euclid(n));
                        rem += x.rem_euclid(n);
                        if rem >= n {
                            rem -= n;
                            quot = quot.wrapping_add(1);
                        }
                    }

                    // `quot` is the floored mean.
                    if quot < <$wide>::ZERO && rem != <$wide>::ZERO {
                        quot += 1;
                    }
                    quot as $types
                }

                #[inline]
                fn exact_value(self) -> ExactValue {
                    ExactValue::$exact(self as _)
                }
            }
        )+
    };
}
int_traits!(u128, UInt: u8, u16, u32, u64, u128, usize);
int_traits!(i128, Int: i8, i16, i32, i64, i128, isize);

macro_rules! float_traits {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }

            impl One for $types {
                const ONE: Self = 1.0;
            }

            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Scalar for $types {
                #[inline]
                fn from_usize(n: usize) -> Self {
                    n as $types
                }

                fn sum_of<I: IntoIterator<Item = Self>>(values: I) -> Self {
                    values.into_iter().fold(0.0, |acc, x| acc + x)
                }

                fn mean_of<I: IntoIterator<Item = Self>>(values: I, len: usize) -> Self {
                    Self::sum_of(values) / len as $types
                }

                #[inline]
                fn exact_value(self) -> ExactValue {
                    ExactValue::Float(self as f64)
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan(self) -> Self {
                    self.atan()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }
            }
        )+
    };
}
float_traits!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast_follows_as_semantics() {
        assert_eq!(Cast::<i32>::cast(2.9f64), 2);
        assert_eq!(Cast::<i32>::cast(-2.9f32), -2);
        assert_eq!(Cast::<u8>::cast(300i32), 44);
        assert_eq!(Cast::<u8>::cast(-1.0f64), 0);
        assert_eq!(Cast::<i32>::cast(f64::NAN), 0);
        assert_eq!(Cast::<f64>::cast(7u64), 7.0);
    }

    #[test]
    fn min_max_clamp() {
        assert_eq!(MinMax::min(3i32, -4), -4);
        assert_eq!(MinMax::max(3u8, 4), 4);
        assert_eq!(MinMax::clamp(10.0f32, 0.0, 1.0), 1.0);
        assert_eq!(MinMax::min(f64::NAN, 1.0), 1.0);
    }

    #[test]
    fn from_usize() {
        assert_eq!(i16::from_usize(12), 12);
        assert_eq!(f32::from_usize(3), 3.0);
    }

    #[test]
    fn integer_sum_saturates() {
        assert_eq!(u8::sum_of([200, 100]), 255);
        assert_eq!(i8::sum_of([-100, -100]), -128);
        assert_eq!(i8::sum_of([127, 127, -128]), 126);
        assert_eq!(u64::sum_of([u64::MAX, 1]), u64::MAX);
        assert_eq!(i128::sum_of([i128::MAX, 1]), i128::MAX);
        assert_eq!(i32::sum_of([]), 0);
    }

    #[test]
    fn integer_mean_stays_in_range() {
        assert_eq!(u8::mean_of([255; 256], 256), 255);
        assert_eq!(u8::mean_of([200, 100], 2), 150);
        assert_eq!(i8::mean_of([-128; 128], 128), -128);
        assert_eq!(i8::mean_of((0..128).map(|i| if i % 2 == 0 { 127 } else { -128 }), 128), 0);
        assert_eq!(i128::mean_of([i128::MIN; 3], 3), i128::MIN);
        assert_eq!(u128::mean_of([u128::MAX, u128::MAX - 2], 2), u128::MAX - 1);
        assert_eq!(i64::mean_of([i64::MAX, i64::MAX, i64::MAX - 1], 3), i64::MAX - 1);
        assert_eq!(u16::mean_of([], 0), 0);
    }

    #[test]
    fn integer_mean_truncates_toward_zero() {
        assert_eq!(i32::mean_of([1, 2], 2), 1);
        assert_eq!(i32::mean_of([-1, -2], 2), -1);
        assert_eq!(i32::mean_of([-7, 0, 0], 3), -2);
        assert_eq!(i32::mean_of([-6, 0, 0], 3), -2);
        assert_eq!(i32::mean_of([-5, 1, 2], 3), 0);
        assert_eq!(u32::mean_of([1, 1, 2], 3), 1);
    }

    #[test]
    fn float_mean() {
        assert_eq!(f64::mean_of([1.0, 2.0], 2), 1.5);
        assert!(f32::mean_of([], 0).is_nan());
    }

    #[test]
    fn exact_values() {
        assert!((-1i8).exact_value().same((-1.0f64).exact_value()));
        assert!(255u8.exact_value().same(255i64.exact_value()));
        assert!(!(-1i32).exact_value().same(u32::MAX.exact_value()));
        assert!(!(2.0f64.powi(63)).exact_value().same(i64::MAX.exact_value()));
        assert!(!(2.0f64.powi(64)).exact_value().same(u64::MAX.exact_value()));
        assert!(!(2.0f64.powi(127)).exact_value().same(i128::MAX.exact_value()));
        assert!(!0.5f64.exact_value().same(0i32.exact_value()));
        assert!(!f64::NAN.exact_value().same(0i32.exact_value()));
        assert!(!f32::INFINITY.exact_value().same(u128::MAX.exact_value()));
        assert!(f64::NAN.exact_value().same(f32::NAN.exact_value()));
        assert!((-0.0f64).exact_value().same(0u8.exact_value()));
    }
}
