use std::{array, cmp::Ordering, fmt, ops::Neg};

use crate::{
    conjunction::{Holds, IsArithmetic, IsFloatingPoint},
    error::CastError,
    traits::{Cast, Number, Scalar, Sqrt},
    Matrix, MinMax, One, Trig, UnwrapRef, Zero,
};

mod ops;
mod view;

/// A 2-dimensional vector.
pub type Vector2D<T> = Vector<T, 2>;
/// A 3-dimensional vector.
pub type Vector3D<T> = Vector<T, 3>;

/// Shorthand for [`Vector2D`].
pub type Vec2<T> = Vector<T, 2>;
/// Shorthand for [`Vector3D`].
pub type Vec3<T> = Vector<T, 3>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;

/// An `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - The [`vector!`][crate::vector] macro accepts any mix of values and references to values.
/// - [`Vector::splat`] copies the given value into each element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - The [`Default`] implementation initializes each element with its default value.
/// - [`Vector::ZERO`], [`zeros`] and [`ones`] create vectors filled with 0 or 1.
///
/// # Conversion
///
/// Vectors of a different element type are never converted implicitly:
///
/// - [`Vector::convert`] performs lossless conversions via [`From`] (eg. `i32` to `f64`).
/// - [`Vector::cast`] performs `as` casts, which may lose precision or wrap.
/// - [`Vector::try_cast`] fails if any element would change.
///
/// # Element Access
///
/// - 2, 3 and 4-dimensional vectors expose their elements as fields `x`, `y`, `z` and `w`, which
///   alias the underlying storage.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::at`] and [`Vector::at_mut`] take the index as a const generic argument and reject
///   out-of-bounds indices at compile time.
/// - [`Vector::get`] returns [`None`] for out-of-bounds indices.
///
/// # Equality
///
/// `==` compares each pair of elements with [`TypeTraits::equals`], so floating-point vectors
/// compare equal if their elements differ by at most [`TypeTraits::EPSILON`]. Vectors with
/// different element types can be compared; the comparison is performed in both element types and
/// succeeds only if both agree. For a custom tolerance, use [`Vector::equals_with_tolerance`].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
/// [`TypeTraits::equals`]: crate::TypeTraits::equals
/// [`TypeTraits::EPSILON`]: crate::TypeTraits::EPSILON
#[derive(Clone, Copy)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

struct IndexCheck<const I: usize, const N: usize>;

impl<const I: usize, const N: usize> IndexCheck<I, N> {
    const IN_BOUNDS: () = assert!(I < N, "vector index out of bounds");
}

struct NonEmpty<const N: usize>;

impl<const N: usize> NonEmpty<N> {
    const OK: () = assert!(N > 0, "reduction over a vector without elements");
}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let v = Vector::from_fn(|i| i as i32 + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut other = other.0.into_iter();
        Vector(self.0.map(|a| match other.next() {
            Some(b) => (a, b),
            None => unreachable!("both vectors have `N` elements"),
        }))
    }

    /// Returns the number of elements (`N`).
    #[inline]
    pub const fn size(&self) -> usize {
        N
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Returns an iterator over references to the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Returns a [`Vector`] that borrows each element of `self`.
    ///
    /// *Note*: [`Vector`] also implements [`AsRef`]. Use fully-qualified syntax to invoke the
    /// trait method if needed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let v = vec3(1, 2, 3);
    /// let refs: Vector<&i32, 3> = v.as_ref();
    /// assert_eq!(refs, v);
    /// ```
    #[inline]
    pub fn as_ref(&self) -> Vector<&T, N> {
        Vector::from_fn(|i| &self.0[i])
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let v = vec2(5, 6);
    /// assert_eq!(v.get(1), Some(&6));
    /// assert_eq!(v.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if it is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns a reference to the element at index `I`.
    ///
    /// The index is checked at compile time:
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let v = vec3(1, 2, 3);
    /// assert_eq!(*v.at::<2>(), 3);
    /// ```
    ///
    /// ```compile_fail
    /// # use mu_linalg::*;
    /// let v = vec3(1, 2, 3);
    /// v.at::<3>();
    /// ```
    #[inline]
    pub fn at<const I: usize>(&self) -> &T {
        let () = IndexCheck::<I, N>::IN_BOUNDS;
        &self.0[I]
    }

    /// Returns a mutable reference to the element at index `I`, checked at compile time.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let mut v = vec3(1, 2, 3);
    /// *v.at_mut::<0>() = 10;
    /// assert_eq!(v, vec3(10, 2, 3));
    /// ```
    #[inline]
    pub fn at_mut<const I: usize>(&mut self) -> &mut T {
        let () = IndexCheck::<I, N>::IN_BOUNDS;
        &mut self.0[I]
    }

    /// Replaces every element with the value it refers to (see [`UnwrapRef`]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// use std::cell::Cell;
    ///
    /// let cells = [Cell::new(1u8), Cell::new(2), Cell::new(3)];
    /// let v: Vector<&Cell<u8>, 3> = Vector::from_fn(|i| &cells[i]);
    /// cells[0].set(7);
    /// assert_eq!(v.unwrap_refs(), vec3(7u8, 2, 3));
    /// ```
    pub fn unwrap_refs(&self) -> Vector<T::Target, N>
    where
        T: UnwrapRef,
    {
        Vector::from_fn(|i| self.0[i].unwrap_ref())
    }

    /// Converts each element to `U` with `as` semantics.
    ///
    /// This may lose precision (float to integer truncates toward zero, integers wrap). Use
    /// [`Vector::convert`] or [`Vector::try_cast`] if that is not acceptable.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// assert_eq!(vec3(1.5, -2.7, 3.0).cast::<i32>(), vec3(1, -2, 3));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: Cast<U>,
    {
        self.map(Cast::cast)
    }

    /// Converts each element to `U` using its lossless [`From`] conversion.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let v: Vector<f64, 2> = vec2(3, 4).convert();
    /// assert_eq!(v, vec2(3.0, 4.0));
    /// ```
    pub fn convert<U>(self) -> Vector<U, N>
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
    /// exactly: it is out of range, has a fractional part, or loses precision. `NaN` and the
    /// infinities convert between floating-point types.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// assert_eq!(vec2(2.0, 4.0).try_cast::<u8>(), Ok(vec2(2, 4)));
    /// assert!(vec2(2.5, 4.0).try_cast::<u8>().is_err());
    /// assert!(vec2(300, 4).try_cast::<u8>().is_err());
    /// assert!(vec2(u64::MAX, 0).try_cast::<f32>().is_err());
    /// ```
    pub fn try_cast<U>(self) -> Result<Vector<U, N>, CastError>
    where
        T: Scalar + Cast<U>,
        U: Scalar,
    {
        let converted = self.cast::<U>();
        for (index, (&elem, &conv)) in self.0.iter().zip(&converted.0).enumerate() {
            if !elem.exact_value().same(conv.exact_value()) {
                return Err(CastError::lossy::<T, U>(index, elem));
            }
        }
        Ok(converted)
    }

    /// Compares `self` and `other` element-wise, accepting differences of up to `tolerance`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let a = vec3(1.0, 2.0, 3.0);
    /// let b = vec3(1.0, 2.0, 3.0 + 1e-10);
    /// assert!(a.equals_with_tolerance(&b, 1e-9));
    /// assert!(!a.equals_with_tolerance(&b, 1e-12));
    /// ```
    pub fn equals_with_tolerance(&self, other: &Self, tolerance: T) -> bool
    where
        T: Scalar,
    {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(&a, &b)| T::equals_with_tolerance(a, b, tolerance))
    }

    /// Returns the smallest element.
    ///
    /// For floating-point vectors, `NaN` elements are ignored unless all elements are `NaN`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// assert_eq!(vec3(4, -2, 7).min(), -2);
    /// ```
    pub fn min(&self) -> T
    where
        T: Scalar,
    {
        let () = NonEmpty::<N>::OK;
        self.0[1..].iter().fold(self.0[0], |acc, &x| acc.min(x))
    }

    /// Returns the largest element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// assert_eq!(vec3(4.0, -2.0, 7.5).max(), 7.5);
    /// ```
    pub fn max(&self) -> T
    where
        T: Scalar,
    {
        let () = NonEmpty::<N>::OK;
        self.0[1..].iter().fold(self.0[0], |acc, &x| acc.max(x))
    }

    /// Returns the sum of all elements.
    ///
    /// Integer sums saturate at the bounds of `T` (see [`Scalar::sum_of`]).
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).sum(), 6);
    /// assert_eq!(vec2(200u8, 100).sum(), 255);
    /// ```
    pub fn sum(&self) -> T
    where
        T: Scalar,
    {
        T::sum_of(self.0)
    }

    /// Returns the arithmetic mean of the elements, computed in `T`.
    ///
    /// For integer element types the result is the exact mean truncated toward zero, even when
    /// the sum of the elements does not fit in `T`. Use [`Vector::mean_as`] to compute the mean in
    /// a floating-point type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// assert_eq!(vec2(1, 2).mean(), 1);
    /// assert_eq!(vec2(-1, -2).mean(), -1);
    /// assert_eq!(vec2(1.0, 2.0).mean(), 1.5);
    /// assert_eq!(vec2(200u8, 100).mean(), 150);
    /// ```
    pub fn mean(&self) -> T
    where
        T: Scalar,
    {
        let () = NonEmpty::<N>::OK;
        T::mean_of(self.0, N)
    }

    /// Returns the arithmetic mean of the elements, computed in the floating-point type `F`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// assert_eq!(vec2(1, 2).mean_as::<f64>(), 1.5);
    /// ```
    pub fn mean_as<F>(&self) -> F
    where
        T: Scalar + Cast<F>,
        F: Scalar,
        (IsArithmetic<T>, IsFloatingPoint<F>): Holds,
    {
        let () = NonEmpty::<N>::OK;
        let sum = self.0.iter().fold(F::ZERO, |acc, &x| acc + Cast::<F>::cast(x));
        sum / F::from_usize(N)
    }

    /// Returns the population standard deviation of the elements, computed in the floating-point
    /// type `F`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let v = vec4(2, 4, 4, 6);
    /// assert_eq!(v.std_dev::<f64>(), 2.0f64.sqrt());
    /// ```
    pub fn std_dev<F>(&self) -> F
    where
        T: Scalar + Cast<F>,
        F: Scalar + Sqrt,
        (IsArithmetic<T>, IsFloatingPoint<F>): Holds,
    {
        let mean = self.mean_as::<F>();
        let squares = self.0.iter().fold(F::ZERO, |acc, &x| {
            let diff = Cast::<F>::cast(x) - mean;
            acc + diff * diff
        });
        (squares / F::from_usize(N)).sqrt()
    }

    /// Returns the squared length of this [`Vector`].
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length (Euclidean norm) of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// assert_eq!(vec2(3.0, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Number + Sqrt,
    {
        self.length2().sqrt()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    /// ```
    pub fn normalize(self) -> Self
    where
        T: Number + Sqrt,
        (IsFloatingPoint<T>,): Holds,
    {
        let length = self.length();
        self.map(|x| x / length)
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Computes the dot product of vectors with different element types.
    ///
    /// Both operands are converted to the explicitly specified result type `R` first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let a = vec2(1, 2);
    /// let b = vec2(0.5f32, 0.25);
    /// assert_eq!(a.dot_as::<f64, _>(b), 1.0);
    /// ```
    pub fn dot_as<R, U>(self, other: Vector<U, N>) -> R
    where
        T: Cast<R>,
        U: Cast<R>,
        R: Number,
    {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(R::ZERO, |acc, (a, b)| {
                acc + Cast::<R>::cast(a) * Cast::<R>::cast(b)
            })
    }

    /// Multiplies `self`, interpreted as a row vector, with `matrix`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let m = Matrix::from_rows([
    ///     [1, 2, 3],
    ///     [4, 5, 6],
    /// ]);
    /// assert_eq!(vec2(1, 1).dot_matrix(m), vec3(5, 7, 9));
    /// ```
    pub fn dot_matrix<const C: usize>(self, matrix: Matrix<T, N, C>) -> Vector<T, C>
    where
        T: Number,
    {
        Vector::from_fn(|col| self.dot(matrix.col(col)))
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.elementwise_min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn elementwise_min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self.0[i].min(other.0[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.elementwise_max(b), vec3(3.0, 2.0, 0.0));
    /// ```
    pub fn elementwise_max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self.0[i].max(other.0[i]))
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let v = vec3(-5, 5, 50).clamp(Vector::splat(0), Vector::splat(10));
    /// assert_eq!(v, vec3(0, 5, 10));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self.0[i].clamp(min.0[i], max.0[i]))
    }

    /// Reverses the order of the elements in place.
    pub fn flip(&mut self) {
        self.0.reverse();
    }

    /// Returns a copy of `self` with the elements in reverse order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).flipped(), vec3(3, 2, 1));
    /// ```
    pub fn flipped(mut self) -> Self {
        self.flip();
        self
    }

    /// Sorts the elements in ascending order.
    ///
    /// Elements that cannot be compared (`NaN`) are treated as equal to everything, so their
    /// final position is unspecified.
    pub fn sort(&mut self)
    where
        T: PartialOrd,
    {
        self.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    }

    /// Returns a copy of `self` with the elements sorted in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// assert_eq!(vec4(3, -1, 2, 0).sorted(), vec4(-1, 0, 2, 3));
    /// ```
    pub fn sorted(mut self) -> Self
    where
        T: PartialOrd,
    {
        self.sort();
        self
    }

    /// Sorts the elements with a comparator function.
    ///
    /// The sort is stable.
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.0.sort_by(compare);
    }

    /// Returns a copy of `self` sorted with a comparator function.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// assert_eq!(vec3(3, -1, 2).sorted_by(|a, b| b.cmp(a)), vec3(3, 2, -1));
    /// ```
    pub fn sorted_by<F>(mut self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.sort_by(compare);
        self
    }
}

impl<T> Vector<T, 2> {
    /// Computes the 2D cross product (the Z component of the 3D cross product of both vectors
    /// extended with `z = 0`).
    ///
    /// The result is positive if `other` is counterclockwise from `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// assert_eq!(Vector2D::<i32>::X.cross(Vector2D::Y), 1);
    /// assert_eq!(Vector2D::<i32>::Y.cross(Vector2D::X), -1);
    /// ```
    pub fn cross(self, other: Self) -> T
    where
        T: Number,
    {
        let [a1, a2] = self.0;
        let [b1, b2] = other.0;
        a1 * b2 - a2 * b1
    }

    /// Rotates `self` counterclockwise by `radians` in place.
    ///
    /// This assumes that the Y axis points up, and the X axis points to the right.
    pub fn rotate(&mut self, radians: T)
    where
        T: Number + Trig + Neg<Output = T>,
        (IsFloatingPoint<T>,): Holds,
    {
        *self = Matrix::rotation_counterclockwise(radians).dot_vector(*self);
    }

    /// Returns `self` rotated counterclockwise by `radians`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// use std::f32::consts::PI;
    ///
    /// let v = Vector2D::<f32>::X.rotated(PI / 2.0);
    /// assert_eq!(v, Vector2D::<f32>::Y);
    /// ```
    pub fn rotated(mut self, radians: T) -> Self
    where
        T: Number + Trig + Neg<Output = T>,
        (IsFloatingPoint<T>,): Holds,
    {
        self.rotate(radians);
        self
    }
}

impl<T> Vector<T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs; swapping the arguments inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mu_linalg::*;
    /// let x = Vector3D::<f32>::X;
    /// let y = Vector3D::<f32>::Y;
    /// assert_eq!(x.cross(y), Vector3D::<f32>::Z);
    /// assert_eq!(y.cross(x), -Vector3D::<f32>::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            elem.fmt(f)?;
        }
        f.write_str(")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vector2D`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vector3D`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

/// Returns a vector with every element set to 1.
///
/// # Examples
///
/// ```
/// # use mu_linalg::*;
/// assert_eq!(ones::<u8, 3>(), vec3(1, 1, 1));
/// ```
pub const fn ones<T: One, const N: usize>() -> Vector<T, N> {
    Vector([T::ONE; N])
}

/// Returns a vector with every element set to 0 (equivalent to [`Vector::ZERO`]).
pub const fn zeros<T: Zero, const N: usize>() -> Vector<T, N> {
    Vector::ZERO
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vector3D::<f32>::X.x, 1.0);
        assert_eq!(Vector3D::<f32>::X[1], 0.0);
        assert_eq!(Vector3D::<f32>::Y.y, 1.0);
        assert_eq!(Vector3D::<f32>::Z.z, 1.0);

        let mut v = vec2(0, 1);
        assert_eq!(v.x, 0);
        assert_eq!(v.y, 1);

        v.x = 777;
        assert_eq!(v[0], 777);
        assert_eq!(*v.at::<0>(), 777);
        v[1] = 9;
        assert_eq!(v.y, 9);
        *v.at_mut::<1>() = 10;
        assert_eq!(v.y, 10);
        assert_eq!(v.as_array(), &[777, 10]);
    }

    #[test]
    #[should_panic]
    fn runtime_index_out_of_bounds() {
        let v = vec3(1, 2, 3);
        let i = v.size();
        let _elem = v[i];
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", vec4(0.0, 0.0, 0.0, 1.0)), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", vec4(0.0, 0.0, 0.0, 1.0)), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{:.1}", vec2(0.31f64, 1.0)), "(0.3, 1.0)");
    }

    #[test]
    fn reductions() {
        let v = vec4(3i32, -7, 12, 1);
        assert_eq!(v.min(), -7);
        assert_eq!(v.max(), 12);
        assert_eq!(v.sum(), 9);
        assert_eq!(v.mean(), 2);
        assert_eq!(v.mean_as::<f64>(), 2.25);

        let f = vec3(0.5f32, f32::NAN, -0.5);
        assert_eq!(f.min(), -0.5);
        assert_eq!(f.max(), 0.5);
    }

    #[test]
    fn integer_mean_truncates_toward_zero() {
        assert_eq!(vec3(1i32, 1, 2).mean(), 1);
        assert_eq!(vec3(-1i32, -1, -2).mean(), -1);
        assert_eq!(vec2(255u8, 1).mean_as::<f32>(), 128.0);
    }

    #[test]
    fn std_dev() {
        assert_eq!(vec3(5i32, 5, 5).std_dev::<f64>(), 0.0);
        assert_approx_eq!(vec2(1.0f32, 3.0).std_dev::<f32>(), 1.0);
    }

    #[test]
    fn conversions() {
        let v = vec3(1i32, -2, 3);
        let f: Vector<f64, 3> = v.convert();
        assert_eq!(f, vec3(1.0, -2.0, 3.0));
        assert_eq!(f.cast::<i32>(), v);
        assert_eq!(vec2(-1i32, 256).cast::<u8>(), vec2(255u8, 0));

        match vec3(1.0f64, 2.5, 3.0).try_cast::<i16>() {
            Err(CastError::Lossy { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(vec2(1e-10f64, 1.0).try_cast::<f32>().is_err());
        assert_eq!(vec2(0.5f64, 1.0).try_cast::<f32>(), Ok(vec2(0.5f32, 1.0)));
    }

    #[test]
    fn try_cast_rejects_saturated_and_rounded_values() {
        assert!(vec2(u64::MAX, 0).try_cast::<f32>().is_err());
        assert!(vec2(0.0, 2.0f64.powi(63)).try_cast::<i64>().is_err());
        assert!(vec2(-1i32, 1).try_cast::<u32>().is_err());
        assert!(vec2(1e300f64, 1.0).try_cast::<f32>().is_err());
        assert!(vec2(16_777_217i32, 0).try_cast::<f32>().is_err());
        assert!(vec2(f64::NAN, 0.0).try_cast::<i32>().is_err());
        assert!(vec2(f64::INFINITY, 0.0).try_cast::<u8>().is_err());

        assert_eq!(vec2(u32::MAX, 0).try_cast::<f64>(), Ok(vec2(4_294_967_295.0, 0.0)));
        assert_eq!(vec2(-128i32, 127).try_cast::<i8>(), Ok(vec2(-128i8, 127)));
        assert_eq!(vec2(-0.0f64, 255.0).try_cast::<u8>(), Ok(vec2(0u8, 255)));

        let special = vec3(f64::NAN, f64::NEG_INFINITY, 0.5).try_cast::<f32>();
        assert_eq!(special, Ok(vec3(f32::NAN, f32::NEG_INFINITY, 0.5)));
    }

    #[test]
    fn unwrap_refs_reads_current_values() {
        use std::cell::Cell;

        let cells = [Cell::new(1u8), Cell::new(2), Cell::new(3)];
        let v: Vector<&Cell<u8>, 3> = Vector::from_fn(|i| &cells[i]);
        cells[0].set(7);
        assert_eq!(v.unwrap_refs(), vec3(7u8, 2, 3));

        let values = [1.5f64, -2.0];
        let refs: Vector<&f64, 2> = Vector::from_fn(|i| &values[i]);
        assert_eq!(refs.unwrap_refs(), vec2(1.5f64, -2.0));
    }

    #[test]
    fn integer_reductions_do_not_overflow() {
        assert_eq!(vec2(200u8, 100).sum(), 255);
        assert_eq!(vec2(200u8, 100).mean(), 150);
        assert_eq!(vec2(-100i8, -100).sum(), -128);
        assert_eq!(Vector::<u8, 64>::splat(255).mean(), 255);
        assert_eq!(Vector::<i8, 128>::splat(-128).mean(), -128);
        assert_eq!(Vector::<i8, 128>::from_fn(|i| if i % 2 == 0 { 127 } else { -128 }).mean(), 0);
        assert_eq!(vec3(i128::MIN, i128::MIN, i128::MIN).mean(), i128::MIN);
        assert_eq!(vec2(u64::MAX, u64::MAX).sum(), u64::MAX);
        assert_eq!(vec2(u64::MAX, u64::MAX - 1).mean(), u64::MAX - 1);
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).length2(), 35);
        assert_eq!(vec2(1u8, 2).dot_as::<u32, _>(vec2(200u8, 200)), 600);
        assert_eq!(Vector2D::<f64>::X.dot(Vector2D::Y), 0.0);
    }

    #[test]
    fn cross() {
        assert_eq!(vec2(2, 0).cross(vec2(0, 3)), 6);
        assert_eq!(vec2(1.0, 1.0).cross(vec2(2.0, 2.0)), 0.0);

        let a = vec3(1, 2, 3);
        let b = vec3(4, 5, 6);
        let c = a.cross(b);
        assert_eq!(c, vec3(-3, 6, -3));
        assert_eq!(c.dot(a), 0);
        assert_eq!(c.dot(b), 0);
    }

    #[test]
    fn rotate() {
        assert_approx_eq!(Vector2D::<f64>::X.rotated(FRAC_PI_2), Vector2D::Y, abs = 1e-12);
        assert_approx_eq!(Vector2D::<f64>::Y.rotated(PI), -Vector2D::<f64>::Y, abs = 1e-12);

        let mut v = vec2(3.0f64, 4.0);
        v.rotate(1.234);
        assert_approx_eq!(v.length(), 5.0, abs = 1e-12);
        v.rotate(-1.234);
        assert_approx_eq!(v, vec2(3.0, 4.0), abs = 1e-12);
    }

    #[test]
    fn ordering() {
        let mut v = vec4(4, 1, 3, 2);
        v.flip();
        assert_eq!(v, vec4(2, 3, 1, 4));
        v.sort();
        assert_eq!(v, vec4(1, 2, 3, 4));
        v.sort_by(|a, b| b.cmp(a));
        assert_eq!(v, vec4(4, 3, 2, 1));
        assert_eq!(vec3(0.5, -1.5, 0.0).sorted(), vec3(-1.5, 0.0, 0.5));
    }

    #[test]
    fn constructors() {
        assert_eq!(Vector::<i64, 4>::default(), Vector::<i64, 4>::ZERO);
        assert_eq!(zeros::<f32, 2>(), vec2(0.0, 0.0));
        assert_eq!(ones::<f64, 3>().sum(), 3.0);
        assert_eq!(Vector::<u16, 3>::splat(7), vec3(7, 7, 7));
        assert_eq!(Vector::from([1, 2, 3]).into_array(), [1, 2, 3]);
    }
}
