//! Named-axis views of small vectors.
//!
//! These structs have the same layout as the vector they are viewed through, so `v.x` is the same
//! memory as `v[0]`.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (),
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (),
}

macro_rules! view {
    ($n:literal => $view:ident) => {
        impl<T> Deref for Vector<T, $n> {
            type Target = $view<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                // Safety: `Vector<T, N>` is a transparent `[T; N]`, which has the same layout as a
                // `repr(C)` struct of `N` fields of type `T` plus a zero-sized field.
                unsafe { mem::transmute(self) }
            }
        }

        impl<T> DerefMut for Vector<T, $n> {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                // Safety: see `deref`.
                unsafe { mem::transmute(self) }
            }
        }
    };
}

view!(2 => XY);
view!(3 => XYZ);
view!(4 => XYZW);
