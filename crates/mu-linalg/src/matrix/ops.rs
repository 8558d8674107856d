use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use super::Matrix;
use crate::{approx::ApproxEq, Vector};

impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = Vector<T, C>;

    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        &self.0[row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.0[row]
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

/// Row-wise tolerant equality (see [`Vector`]'s `PartialEq` impl).
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    Vector<T, C>: PartialEq<Vector<U, C>>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.iter().zip(&other.0).all(|(a, b)| a == b)
    }
}

impl<T, U, const R: usize, const C: usize> PartialEq<[[U; C]; R]> for Matrix<T, R, C>
where
    Vector<T, C>: PartialEq<[U; C]>,
{
    fn eq(&self, other: &[[U; C]; R]) -> bool {
        self.0.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T, const R: usize, const C: usize> ApproxEq for Matrix<T, R, C>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self(rows.map(Vector::from))
    }
}

impl<T, const R: usize, const C: usize> From<[Vector<T, C>; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [Vector<T, C>; R]) -> Self {
        Self(rows)
    }
}

impl<T, const R: usize, const C: usize> From<Matrix<T, R, C>> for [[T; C]; R] {
    #[inline]
    fn from(mat: Matrix<T, R, C>) -> Self {
        mat.0.map(Vector::into_array)
    }
}

/// Element-wise negation.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg,
{
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

// Like for `Vector`, `*` and `/` are element-wise. The matrix product is `Matrix::dot`.

macro_rules! elementwise_ops {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident, $sym:tt;)+) => {
        $(
            /// Element-wise operation between matrices of the same shape.
            impl<T, const R: usize, const C: usize> $op<Matrix<T, R, C>> for Matrix<T, R, C>
            where
                T: $op,
            {
                type Output = Matrix<T::Output, R, C>;

                fn $method(self, rhs: Matrix<T, R, C>) -> Self::Output {
                    let mut rhs = rhs.0.into_iter();
                    Matrix(self.0.map(|row| match rhs.next() {
                        Some(other) => row $sym other,
                        None => unreachable!("both matrices have `R` rows"),
                    }))
                }
            }

            impl<T, const R: usize, const C: usize> $assign<Matrix<T, R, C>> for Matrix<T, R, C>
            where
                T: $assign,
            {
                fn $assign_method(&mut self, rhs: Matrix<T, R, C>) {
                    self.0
                        .iter_mut()
                        .zip(rhs.0)
                        .for_each(|(lhs, rhs)| lhs.$assign_method(rhs));
                }
            }

            /// Applies the operation to every element and the scalar `rhs`.
            impl<T, const R: usize, const C: usize> $op<T> for Matrix<T, R, C>
            where
                T: $op + Copy,
            {
                type Output = Matrix<T::Output, R, C>;

                fn $method(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem $sym rhs)
                }
            }

            impl<T, const R: usize, const C: usize> $assign<T> for Matrix<T, R, C>
            where
                T: $assign + Copy,
            {
                fn $assign_method(&mut self, rhs: T) {
                    self.0.iter_mut().for_each(|row| row.$assign_method(rhs));
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
            impl<const R: usize, const C: usize> Add<Matrix<$types, R, C>> for $types {
                type Output = Matrix<$types, R, C>;

                fn add(self, rhs: Matrix<$types, R, C>) -> Self::Output {
                    rhs.map(|elem| self + elem)
                }
            }

            impl<const R: usize, const C: usize> Mul<Matrix<$types, R, C>> for $types {
                type Output = Matrix<$types, R, C>;

                fn mul(self, rhs: Matrix<$types, R, C>) -> Self::Output {
                    rhs.map(|elem| self * elem)
                }
            }
        )+
    };
}
scalar_lhs_ops!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
