use std::{array, fmt, mem, ops::Neg};

use crate::{
    conjunction::{Holds, IsArithmetic, IsFloatingPoint},
    error::CastError,
    traits::{Cast, Number, Scalar, Sqrt},
    One, Trig, Vector, Zero,
};

mod ops;

/// A 2x2 matrix.
pub type Matrix2x2<T> = Matrix<T, 2, 2>;
/// A 3x3 matrix.
pub type Matrix3x3<T> = Matrix<T, 3, 3>;
/// A square matrix with `N` rows and columns.
pub type MatrixNxN<T, const N: usize> = Matrix<T, N, N>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// The matrix is stored as an array of `R` row [`Vector`]s.
///
/// # Construction
///
/// There are several ways to create a [`Matrix`]:
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] allow filling a matrix with raw elements,
///   as well as creating them from an array of row or column vectors. The [`From`] impls for
///   nested arrays and arrays of [`Vector`]s do the same as [`Matrix::from_rows`].
/// - [`Matrix::from_cast_rows`] creates a matrix from rows of a different element type.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`Matrix::splat`] copies a single value into *every* element.
/// - For square matrices (where `R` equals `C`), [`Matrix::from_diagonal`] and
///   [`Matrix::identity`] only fill the diagonal and leave the other elements at zero.
/// - [`Matrix::rotation_clockwise`] and [`Matrix::rotation_counterclockwise`] allow creating 2D
///   rotation matrices from a rotation angle.
/// - [`Matrix::ZERO`], [`Matrix::zeros`] and [`Matrix::ones`] fill the matrix with 0 or 1.
///
/// A matrix of a different size is only ever created explicitly, via [`Matrix::resize`].
///
/// # Element Access
///
/// Indexing a [`Matrix`] with a single `usize` returns a reference to the row [`Vector`] stored at
/// that position. Writes through that reference modify the matrix:
///
/// ```
/// # use mu_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1],
///     [2, 3],
/// ]);
/// mat[1].x = 7;
/// mat[0] += Vector::splat(10);
/// assert_eq!(mat, Matrix::from_rows([
///     [10, 11],
///     [ 7,  3],
/// ]));
/// ```
///
/// [`Matrix`] also implements the [`Index`] and [`IndexMut`] traits for tuples of
/// `(usize, usize)`. The first element of the tuple is the *row* (Y coordinate), the second is the
/// *column* (X coordinate), matching common mathematical notation. Indices are 0-based.
///
/// ```
/// # use mu_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead and can be used for checked indexing:
///
/// ```
/// # use mu_linalg::*;
/// let mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// assert_eq!(mat.get(0, 0), Some(&0));
/// assert_eq!(mat.get(0, 1), Some(&1));
/// assert_eq!(mat.get(0, 2), None);
/// ```
///
/// # Arithmetic
///
/// `+`, `-`, `*` and `/` operate *element-wise*, both between two matrices of the same shape and
/// between a matrix and a scalar. The matrix product is [`Matrix::dot`].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([Vector<T, C>; R]);

#[rustfmt::skip]
unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

struct NonEmpty<const R: usize, const C: usize>;

impl<const R: usize, const C: usize> NonEmpty<R, C> {
    const OK: () = assert!(R > 0 && C > 0, "reduction over a matrix without elements");
}

impl<T: Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([Vector::ZERO; R]);
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let vectors = Matrix::from_rows([
    ///     vec2(0, 1),
    ///     vec2(2, 3),
    /// ]);
    /// assert_eq!(rows, vectors);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(Into::into))
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Matrix::<T, C, R>::from_rows(columns).transpose()
    }

    /// Creates a [`Matrix`] from rows of a different element type, converting each element with
    /// `as` semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let mat: Matrix2x2<f32> = Matrix::from_cast_rows([
    ///     vec2(1, 2),
    ///     vec2(3, 4),
    /// ]);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1.0, 2.0],
    ///     [3.0, 4.0],
    /// ]));
    /// ```
    pub fn from_cast_rows<U>(rows: [Vector<U, C>; R]) -> Self
    where
        U: Cast<T>,
    {
        Self(rows.map(Vector::cast))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// This mirrors [`array::from_fn`]. Elements are created in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| Vector::from_fn(|col| cb(row, col))))
    }

    /// Creates a [`Matrix`] with *every* element set to `elem`.
    ///
    /// Use [`Matrix::from_diagonal`] to only set the diagonal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let mat = Matrix::splat(3);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [3, 3, 3],
    ///     [3, 3, 3],
    /// ]));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([Vector::splat(elem); R])
    }

    /// Returns a matrix with every element set to 0 (equivalent to [`Matrix::ZERO`]).
    #[inline]
    pub fn zeros() -> Self
    where
        T: Zero,
    {
        Self::ZERO
    }

    /// Returns a matrix with every element set to 1.
    #[inline]
    pub fn ones() -> Self
    where
        T: One + Copy,
    {
        Self::splat(T::ONE)
    }

    /// Applies a closure to each element, returning a new matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// let mat = mat.map(|i| i * 2);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  2,  4],
    ///     [ 6,  8, 10],
    /// ]));
    /// ```
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Converts each element to `U` with `as` semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let mat = Matrix::from_rows([[1, 2], [3, 4]]).cast::<f64>();
    /// assert_eq!(mat, Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]));
    /// ```
    pub fn cast<U>(self) -> Matrix<U, R, C>
    where
        T: Cast<U>,
    {
        self.map(Cast::cast)
    }

    /// Converts each element to `U` using its lossless [`From`] conversion.
    pub fn convert<U>(self) -> Matrix<U, R, C>
    where
        U: From<T>,
    {
        self.map(U::from)
    }

    /// Converts each element to `U`, failing if any element does not survive the conversion.
    ///
    /// # Errors
    ///
    /// Returns [`CastError::Lossy`] for the first element whose value `U` cannot represent
    /// exactly. The error's `index` counts elements in row-major order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let mat = Matrix::from_rows([[1, 2], [-3, 4]]);
    /// assert!(mat.try_cast::<i8>().is_ok());
    /// assert!(mat.try_cast::<u8>().is_err());
    /// ```
    pub fn try_cast<U>(self) -> Result<Matrix<U, R, C>, CastError>
    where
        T: Scalar + Cast<U>,
        U: Scalar,
    {
        let converted = self.cast::<U>();
        for (index, (&elem, &conv)) in self.iter().zip(converted.iter()).enumerate() {
            if !elem.exact_value().same(conv.exact_value()) {
                return Err(CastError::lossy::<T, U>(index, elem));
            }
        }
        Ok(converted)
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transpose(self) -> Matrix<T, C, R> {
        // `from_fn` visits the output row by row, which consumes every input row front to back.
        let mut rows = self.0.map(Vector::into_iter);
        Matrix::from_fn(|_, row| match rows[row].next() {
            Some(elem) => elem,
            None => unreachable!("every input row has `C` elements"),
        })
    }

    /// Returns the shape of the matrix as `(rows, columns)`.
    #[inline]
    pub const fn size(&self) -> (usize, usize) {
        (R, C)
    }

    /// Returns a copy of the row at index `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[inline]
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        self.0[row]
    }

    /// Returns a copy of the column at index `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.row(1), vec3(3, 4, 5));
    /// assert_eq!(mat.col(1), vec2(1, 4));
    /// ```
    pub fn col(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self.0[row][col])
    }

    /// Returns an iterator over the rows of the matrix.
    #[inline]
    pub fn rows(&self) -> std::slice::Iter<'_, Vector<T, C>> {
        self.0.iter()
    }

    /// Returns an iterator over all elements, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.0.iter().flat_map(|row| row.iter())
    }

    /// Converts the matrix into its array of rows.
    #[inline]
    pub fn into_rows(self) -> [Vector<T, C>; R] {
        self.0
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row).and_then(|row| row.get(col))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let mut mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// if let Some(elem) = mat.get_mut(1, 0) {
    ///     *elem = 999;
    /// }
    /// if let Some(elem) = mat.get_mut(2, 0) {
    ///     *elem = 777;
    /// }
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [999, 4, 5],
    /// ]));
    /// ```
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(row).and_then(|row| row.get_mut(col))
    }

    /// Returns a matrix with the contents of `self`, but a potentially different size.
    ///
    /// Elements not present in `self` will be initialized with [`T::ZERO`][`Zero::ZERO`].
    /// Elements of `self` that don't fit into the new size are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2, 3],
    /// ]);
    /// let resized = mat.resize::<2, 2>();
    /// assert_eq!(resized, Matrix::from_rows([
    ///     [1, 2],
    ///     [0, 0],
    /// ]));
    /// ```
    pub fn resize<const R2: usize, const C2: usize>(mut self) -> Matrix<T, R2, C2>
    where
        T: Zero,
    {
        if R2 < R || C2 < C {
            log::debug!("resizing {R}x{C} matrix to {R2}x{C2}, dropping elements");
        }

        Matrix::from_fn(|row, col| {
            if row < R && col < C {
                mem::replace(&mut self.0[row][col], T::ZERO)
            } else {
                T::ZERO
            }
        })
    }

    /// Compares `self` and `other` element-wise, accepting differences of up to `tolerance`.
    pub fn equals_with_tolerance(&self, other: &Self, tolerance: T) -> bool
    where
        T: Scalar,
    {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.equals_with_tolerance(b, tolerance))
    }

    /// Returns the smallest element.
    pub fn min(&self) -> T
    where
        T: Scalar,
    {
        let () = NonEmpty::<R, C>::OK;
        self.iter().fold(self.0[0][0], |acc, &x| acc.min(x))
    }

    /// Returns the largest element.
    pub fn max(&self) -> T
    where
        T: Scalar,
    {
        let () = NonEmpty::<R, C>::OK;
        self.iter().fold(self.0[0][0], |acc, &x| acc.max(x))
    }

    /// Returns the sum of all elements, saturating at the bounds of an integer `T`.
    pub fn sum(&self) -> T
    where
        T: Scalar,
    {
        T::sum_of(self.iter().copied())
    }

    /// Returns the arithmetic mean of all `R * C` elements, computed in `T`.
    ///
    /// For integer element types the result is the exact mean truncated toward zero. It cannot
    /// overflow, so the mean of a `u8` matrix is always a valid `u8` between its minimum and
    /// maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let mat = Matrix2x2::<i32>::from_rows([[1, 2], [3, 4]]);
    /// assert_eq!(mat.mean(), 2);
    /// assert_eq!(mat.mean_as::<f64>(), 2.5);
    /// ```
    pub fn mean(&self) -> T
    where
        T: Scalar,
    {
        let () = NonEmpty::<R, C>::OK;
        T::mean_of(self.iter().copied(), R * C)
    }

    /// Returns the arithmetic mean of all elements, computed in the floating-point type `F`.
    pub fn mean_as<F>(&self) -> F
    where
        T: Scalar + Cast<F>,
        F: Scalar,
        (IsArithmetic<T>, IsFloatingPoint<F>): Holds,
    {
        let () = NonEmpty::<R, C>::OK;
        let sum = self.iter().fold(F::ZERO, |acc, &x| acc + Cast::<F>::cast(x));
        sum / F::from_usize(R * C)
    }

    /// Returns the population standard deviation of all elements, computed in the floating-point
    /// type `F`.
    pub fn std_dev<F>(&self) -> F
    where
        T: Scalar + Cast<F>,
        F: Scalar + Sqrt,
        (IsArithmetic<T>, IsFloatingPoint<F>): Holds,
    {
        let mean = self.mean_as::<F>();
        let squares = self.iter().fold(F::ZERO, |acc, &x| {
            let diff = Cast::<F>::cast(x) - mean;
            acc + diff * diff
        });
        (squares / F::from_usize(R * C)).sqrt()
    }

    /// Computes the matrix product of `self` and `rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let a = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// let b = Matrix::from_rows([
    ///     [5, 6, 7],
    ///     [8, 9, 10],
    /// ]);
    /// assert_eq!(a.dot(b), Matrix::from_rows([
    ///     [21, 24, 27],
    ///     [47, 54, 61],
    /// ]));
    /// ```
    pub fn dot<const P: usize>(self, rhs: Matrix<T, C, P>) -> Matrix<T, R, P>
    where
        T: Number,
    {
        Matrix::from_fn(|row, col| self.0[row].dot(rhs.col(col)))
    }

    /// Multiplies `self` with the column vector `rhs`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let mat = Matrix::from_rows([[0, 1], [2, 3]]);
    /// assert_eq!(mat.dot_vector(vec2(4, 5)), vec2(5, 23));
    /// ```
    pub fn dot_vector(self, rhs: Vector<T, C>) -> Vector<T, R>
    where
        T: Number,
    {
        Vector::from_fn(|row| self.0[row].dot(rhs))
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const C: usize>(&'a Vector<T, C>);
        impl<'a, T: fmt::Debug, const C: usize> fmt::Debug for FormatRow<'a, T, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Returns the identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any vector
    /// with this matrix returns the vector unchanged.
    pub fn identity() -> Self
    where
        T: Zero + One,
    {
        Self::from_fn(|row, col| if row == col { T::ONE } else { T::ZERO })
    }

    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// assert_eq!(mat.diagonal(), [1, 4]);
    /// ```
    pub fn diagonal(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.0[i][i])
    }

    /// Creates a square matrix from its diagonal.
    ///
    /// Elements outside the diagonal will be initialized with zero.
    ///
    /// *Note*: This method is intentionally restricted to square matrices to allow type inference
    /// of the created [`Matrix`]. To create a non-square matrix from its diagonal, use
    /// [`Matrix::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag, Matrix::from_rows([
    ///     [1, 0, 0],
    ///     [0, 2, 0],
    ///     [0, 0, 3],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero,
    {
        // Diagonal elements are visited in order by the row-major `from_fn`.
        let mut diag = diag.into().into_iter();
        Self::from_fn(|row, col| {
            if row != col {
                return T::ZERO;
            }
            match diag.next() {
                Some(elem) => elem,
                None => unreachable!("the diagonal has `N` elements"),
            }
        })
    }

    /// Returns the *trace* of the matrix (the sum of all elements on the diagonal).
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let diag = Matrix::from_diagonal([1, 2, 3]);
    /// assert_eq!(diag.trace(), 1 + 2 + 3);
    ///
    /// assert_eq!(Matrix3x3::<f32>::identity().trace(), 3.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }

    /// Returns the [determinant] of the matrix.
    ///
    /// This uses fraction-free Gaussian elimination ([Bareiss algorithm]), so the result is exact
    /// for integer matrices as long as no intermediate value overflows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [-2, -1,  2],
    ///     [ 2,  1,  4],
    ///     [-3,  3, -1],
    /// ]);
    /// assert_eq!(mat.determinant(), 54);
    /// ```
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    /// [Bareiss algorithm]: https://en.wikipedia.org/wiki/Bareiss_algorithm
    pub fn determinant(&self) -> T
    where
        T: Scalar + Neg<Output = T>,
    {
        if N == 0 {
            return T::ONE;
        }

        let mut m = self.0;
        let mut negate = false;
        let mut prev_pivot = T::ONE;
        for k in 0..N.saturating_sub(1) {
            if m[k][k] == T::ZERO {
                match (k + 1..N).find(|&i| m[i][k] != T::ZERO) {
                    Some(i) => {
                        log::trace!("zero pivot in column {k}, swapping rows {k} and {i}");
                        m.swap(k, i);
                        negate = !negate;
                    }
                    None => return T::ZERO,
                }
            }

            let pivot = m[k][k];
            for i in k + 1..N {
                for j in k + 1..N {
                    m[i][j] = (m[i][j] * pivot - m[i][k] * m[k][j]) / prev_pivot;
                }
            }
            prev_pivot = pivot;
        }

        let det = m[N - 1][N - 1];
        if negate {
            -det
        } else {
            det
        }
    }
}

impl<T> Matrix<T, 2, 2> {
    /// Inverts this 2x2 matrix.
    ///
    /// # Panics
    ///
    /// This method will panic if `self` is not invertible (ie. if its [`determinant()`] is zero).
    ///
    /// [`determinant()`]: Self::determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// assert_eq!(Matrix2x2::<i32>::identity().invert(), Matrix2x2::<i32>::identity());
    /// assert_eq!(
    ///     Matrix::from_rows([[4.0, 7.0], [2.0, 6.0]]).invert(),
    ///     Matrix::from_rows([[0.6, -0.7], [-0.2, 0.4]]),
    /// );
    /// ```
    pub fn invert(&self) -> Self
    where
        T: Scalar + Neg<Output = T>,
    {
        let det = self.determinant();
        if det == T::ZERO {
            panic!("attempt to invert a non-invertible matrix");
        }

        let [[a, b], [c, d]] = self.0.map(Vector::into_array);
        Matrix::from_rows([[d, -b], [-c, a]]) * (T::ONE / det)
    }

    /// Creates a 2x2 rotation matrix for a clockwise rotation in the XY plane.
    pub fn rotation_clockwise(radians: T) -> Self
    where
        T: Number + Trig + Neg<Output = T>,
    {
        Self::rotation_counterclockwise(-radians)
    }

    /// Creates a 2x2 rotation matrix for a counterclockwise rotation in the XY plane.
    ///
    /// The matrix rotates column vectors (see [`Matrix::dot_vector`]).
    pub fn rotation_counterclockwise(radians: T) -> Self
    where
        T: Number + Trig + Neg<Output = T>,
    {
        let (sin, cos) = (radians.sin(), radians.cos());
        Self::from_rows([[cos, -sin], [sin, cos]])
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

/// Returns the `N`x`N` identity matrix (see [`Matrix::identity`]).
///
/// # Examples
///
/// ```
/// # use mu_linalg::*;
/// assert_eq!(eye::<u8, 2>(), Matrix::from_rows([[1, 0], [0, 1]]));
/// ```
pub fn eye<T: Zero + One, const N: usize>() -> Matrix<T, N, N> {
    Matrix::identity()
}
