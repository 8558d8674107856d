//! Implementations of `std::ops` and comparison traits.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{
    approx::ApproxEq,
    traits::{Cast, Scalar},
    UnwrapRef,
};

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

/// Tolerant equality of two scalars of possibly different types.
///
/// The values are compared in both `A` and `B`, and are only considered equal if both comparisons
/// agree. This keeps the relation symmetric.
#[inline]
pub(crate) fn scalars_equal<A, B>(a: A, b: B) -> bool
where
    A: Scalar + Cast<B>,
    B: Scalar + Cast<A>,
{
    A::equals(a, Cast::<A>::cast(b)) && B::equals(Cast::<B>::cast(a), b)
}

/// Element-wise tolerant equality (see [`TypeTraits::equals`]).
///
/// [`TypeTraits::equals`]: crate::TypeTraits::equals
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: UnwrapRef,
    U: UnwrapRef,
    T::Target: Scalar + Cast<U::Target>,
    U::Target: Scalar + Cast<T::Target>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| scalars_equal(a.unwrap_ref(), b.unwrap_ref()))
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: UnwrapRef,
    U: UnwrapRef,
    T::Target: Scalar + Cast<U::Target>,
    U::Target: Scalar + Cast<T::Target>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0
            .iter()
            .zip(other)
            .all(|(a, b)| scalars_equal(a.unwrap_ref(), b.unwrap_ref()))
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

// NB: both vector-vector and vector-scalar forms are provided for every operator, which rules out
// a more general `Add<U> for Vector<T, N> where T: Add<U>`. Mixing element types requires an
// explicit `cast` or `convert` first.

macro_rules! elementwise_ops {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident, $sym:tt;)+) => {
        $(
            /// Element-wise operation.
            impl<T, const N: usize> $op<Vector<T, N>> for Vector<T, N>
            where
                T: $op,
            {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| l $sym r)
                }
            }

            /// Element-wise operation.
            impl<T, const N: usize> $assign<Vector<T, N>> for Vector<T, N>
            where
                T: $assign,
            {
                fn $assign_method(&mut self, rhs: Vector<T, N>) {
                    self.0
                        .iter_mut()
                        .zip(rhs.0)
                        .for_each(|(lhs, rhs)| lhs.$assign_method(rhs));
                }
            }

            /// Applies the operation to every element and the scalar `rhs`.
            impl<T, const N: usize> $op<T> for Vector<T, N>
            where
                T: $op + Copy,
            {
                type Output = Vector<T::Output, N>;

                fn $method(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem $sym rhs)
                }
            }

            /// Applies the operation to every element and the scalar `rhs`.
            impl<T, const N: usize> $assign<T> for Vector<T, N>
            where
                T: $assign + Copy,
            {
                fn $assign_method(&mut self, rhs: T) {
                    self.0.iter_mut().for_each(|lhs| lhs.$assign_method(rhs));
                }
            }
        )+
    };
}

elementwise_ops! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

macro_rules! scalar_lhs_ops {
    ($($types:ty),+) => {
        $(
            /// Adds the scalar to every element.
            impl<const N: usize> Add<Vector<$types, N>> for $types {
                type Output = Vector<$types, N>;

                fn add(self, rhs: Vector<$types, N>) -> Self::Output {
                    rhs.map(|elem| self + elem)
                }
            }

            /// Multiplies every element with the scalar.
            impl<const N: usize> Mul<Vector<$types, N>> for $types {
                type Output = Vector<$types, N>;

                fn mul(self, rhs: Vector<$types, N>) -> Self::Output {
                    rhs.map(|elem| self * elem)
                }
            }
        )+
    };
}
scalar_lhs_ops!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Vector};

    #[test]
    fn vector_vector() {
        let a = vec3(1, 2, 3);
        let b = vec3(4, 5, 6);
        assert_eq!(a + b, vec3(5, 7, 9));
        assert_eq!(b - a, vec3(3, 3, 3));
        assert_eq!(a * b, vec3(4, 10, 18));
        assert_eq!(b / a, vec3(4, 2, 2));

        let mut c = a;
        c += b;
        c -= vec3(1, 1, 1);
        c *= vec3(2, 2, 2);
        c /= vec3(1, 2, 4);
        assert_eq!(c, vec3(8, 6, 4));
    }

    #[test]
    fn vector_scalar() {
        let v = vec2(2.0f64, -4.0);
        assert_eq!(v + 1.0, vec2(3.0, -3.0));
        assert_eq!(v - 1.0, vec2(1.0, -5.0));
        assert_eq!(v * 0.5, vec2(1.0, -2.0));
        assert_eq!(v / 2.0, vec2(1.0, -2.0));
        assert_eq!(1.0 + v, v + 1.0);
        assert_eq!(3.0 * v, v * 3.0);

        let mut w = vec2(1u8, 2);
        w += 1;
        w *= 3;
        w -= 2;
        w /= 2;
        assert_eq!(w, vec2(2, 3));
    }

    #[test]
    fn negation() {
        assert_eq!(-vec2(1i32, -2), vec2(-1, 2));
    }

    #[test]
    #[should_panic]
    fn integer_division_by_zero() {
        let v = vec2(1i32, 2);
        let zero = v.min() - 1;
        let _quotient = v / zero;
    }

    #[test]
    fn tolerant_equality() {
        let a = vec3(1.0f64, 2.0, 3.0);
        assert_eq!(a, vec3(1.0, 2.0, 3.0 + 1e-15));
        assert_ne!(a, vec3(1.0, 2.0, 3.0 + 1e-10));
        assert_eq!(vec2(1.0f32, 2.0), vec2(1.000001f32, 2.0));
        assert_ne!(vec2(1.0f32, 2.0), vec2(1.001f32, 2.0));
        assert_eq!(vec2(f64::NAN, 0.0), vec2(f64::NAN, 0.0));
    }

    #[test]
    fn cross_type_equality() {
        assert_eq!(vec2(1i32, 2), vec2(1.0f64, 2.0));
        assert_eq!(vec2(1.0f64, 2.0), vec2(1i32, 2));
        assert_ne!(vec2(1i32, 2), vec2(1.5f64, 2.0));
        assert_ne!(vec2(1.5f64, 2.0), vec2(1i32, 2));
        assert_eq!(vec2(1.0f32, 0.5), vec2(1.0f64, 0.5));
        assert_eq!(vec2(3u8, 4), [3i64, 4]);
    }

    #[test]
    fn references_compare_like_values() {
        let (x, y) = (1.5f32, 2.5f32);
        let refs: Vector<&f32, 2> = vec2(&x, &y);
        assert_eq!(refs, vec2(1.5f32, 2.5));
        assert_eq!(vec2(1.5f32, 2.5), refs);
    }
}
