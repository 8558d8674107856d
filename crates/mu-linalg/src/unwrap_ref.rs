use std::cell::Cell;

/// Strips reference-like indirection from a value.
///
/// Plain scalars unwrap to themselves. References (`&T`, `&mut T`) and [`Cell`]s unwrap to
/// whatever their target unwraps to, so nested wrappers like `&&Cell<f32>` decay to `f32`.
///
/// This lets generic code accept values and references to values interchangeably, for example
/// when building a [`Vector`][crate::Vector] with the [`vector!`][crate::vector] macro.
///
/// # Examples
///
/// ```
/// # use mu_linalg::UnwrapRef;
/// use std::cell::Cell;
///
/// let x = 4.0f32;
/// let cell = Cell::new(2.5f32);
/// assert_eq!(x.unwrap_ref(), 4.0);
/// assert_eq!((&x).unwrap_ref(), 4.0);
/// assert_eq!((&&cell).unwrap_ref(), 2.5);
/// ```
pub trait UnwrapRef {
    /// The value type after all indirection has been removed.
    type Target: Copy;

    fn unwrap_ref(&self) -> Self::Target;
}

macro_rules! unwrap_ref_identity {
    ($($types:ty),+) => {
        $(
            impl UnwrapRef for $types {
                type Target = Self;

                #[inline]
                fn unwrap_ref(&self) -> Self {
                    *self
                }
            }
        )+
    };
}
unwrap_ref_identity!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64, bool);

impl<T: UnwrapRef + ?Sized> UnwrapRef for &T {
    type Target = T::Target;

    #[inline]
    fn unwrap_ref(&self) -> Self::Target {
        T::unwrap_ref(self)
    }
}

impl<T: UnwrapRef + ?Sized> UnwrapRef for &mut T {
    type Target = T::Target;

    #[inline]
    fn unwrap_ref(&self) -> Self::Target {
        T::unwrap_ref(self)
    }
}

impl<T: UnwrapRef + Copy> UnwrapRef for Cell<T> {
    type Target = T::Target;

    #[inline]
    fn unwrap_ref(&self) -> Self::Target {
        self.get().unwrap_ref()
    }
}

/// Creates a [`Vector`][crate::Vector] from a list of values and references to values.
///
/// Each element is passed through [`UnwrapRef`], so the resulting vector always holds plain
/// values.
///
/// # Examples
///
/// ```
/// # use mu_linalg::*;
/// use std::cell::Cell;
///
/// let y = 2.0f64;
/// let z = Cell::new(3.0f64);
/// let v = vector![1.0f64, &y, &z];
/// assert_eq!(v, vec3(1.0, 2.0, 3.0));
/// ```
#[macro_export]
macro_rules! vector {
    ($($elem:expr),* $(,)?) => {
        $crate::Vector::from([$($crate::UnwrapRef::unwrap_ref(&$elem)),*])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decay<T: UnwrapRef>(value: T) -> T::Target {
        value.unwrap_ref()
    }

    #[test]
    fn identity() {
        assert_eq!(decay(5u8), 5);
        assert_eq!(decay(-1.5f64), -1.5);
    }

    #[test]
    fn nested_references() {
        let x = 7i64;
        let r = &x;
        assert_eq!(decay(&r), 7);
        assert_eq!(decay(&&&r), 7);

        let mut y = 1.0f32;
        assert_eq!(decay(&mut y), 1.0);
    }

    #[test]
    fn cells() {
        let cell = Cell::new(9u32);
        assert_eq!(decay(&cell), 9);
        cell.set(10);
        assert_eq!(decay(&cell), 10);
    }
}
