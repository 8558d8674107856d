//! Type-level boolean logic for gating generic methods.
//!
//! A [`Conjunction`] is a tuple of [`Predicate`]s. It evaluates to [`True`] if every predicate
//! does, and stops at the first [`False`]: predicates following a [`False`] are never inspected, so
//! they do not even need to implement [`Predicate`].
//!
//! ```
//! # use mu_linalg::conjunction::*;
//! assert!(<() as Conjunction>::VALUE);
//! assert!(<(IsFloatingPoint<f32>, IsArithmetic<u8>) as Conjunction>::VALUE);
//! assert!(!<(IsIntegral<f32>, IsFloatingPoint<f32>) as Conjunction>::VALUE);
//!
//! // `String` is neither arithmetic nor floating point, but the tail is never evaluated.
//! assert!(!<(False, IsFloatingPoint<String>) as Conjunction>::VALUE);
//! ```
//!
//! Methods use [`Holds`] in `where` clauses to require that a conjunction is satisfied:
//!
//! ```compile_fail
//! # use mu_linalg::*;
//! // `mean_as` requires a floating-point result type.
//! let mean: i64 = vec3(1, 2, 4).mean_as::<i64>();
//! ```

use std::marker::PhantomData;

use crate::{type_traits::TypeTraits, Scalar};

/// A type-level boolean.
pub trait Bool {
    const VALUE: bool;
}

/// Type-level `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct True;

/// Type-level `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct False;

impl Bool for True {
    const VALUE: bool = true;
}

impl Bool for False {
    const VALUE: bool = false;
}

/// A compile-time condition that evaluates to a [`Bool`].
pub trait Predicate {
    type Output: Bool;
}

impl Predicate for True {
    type Output = True;
}

impl Predicate for False {
    type Output = False;
}

/// Holds if `T` is a floating-point type ([`f32`] or [`f64`]).
pub struct IsFloatingPoint<T: ?Sized>(PhantomData<T>);

impl<T: TypeTraits> Predicate for IsFloatingPoint<T> {
    type Output = T::FloatingPoint;
}

/// Holds if `T` is a built-in integer type.
pub struct IsIntegral<T: ?Sized>(PhantomData<T>);

impl<T: TypeTraits> Predicate for IsIntegral<T>
where
    T::FloatingPoint: Negate,
{
    type Output = <T::FloatingPoint as Negate>::Output;
}

/// Holds for every [`Scalar`] type.
pub struct IsArithmetic<T: ?Sized>(PhantomData<T>);

impl<T: Scalar> Predicate for IsArithmetic<T> {
    type Output = True;
}

/// Inverts the result of the predicate `P`.
pub struct Not<P: ?Sized>(PhantomData<P>);

impl<P: Predicate> Predicate for Not<P>
where
    P::Output: Negate,
{
    type Output = <P::Output as Negate>::Output;
}

#[doc(hidden)]
pub trait Negate {
    type Output: Bool;
}

impl Negate for True {
    type Output = False;
}

impl Negate for False {
    type Output = True;
}

/// Continues evaluation of a conjunction after its head evaluated to `Self`.
///
/// [`False`] accepts any tail without looking at it.
#[doc(hidden)]
pub trait AndThen<Rest> {
    type Output: Bool;
}

impl<Rest> AndThen<Rest> for False {
    type Output = False;
}

impl<Rest: Conjunction> AndThen<Rest> for True {
    type Output = Rest::Output;
}

/// A short-circuiting logical AND over a tuple of [`Predicate`]s.
///
/// Implemented for `()` (which is [`True`]) and for tuples of up to 8 elements.
pub trait Conjunction {
    type Output: Bool;

    const VALUE: bool = <Self::Output as Bool>::VALUE;
}

impl Conjunction for () {
    type Output = True;
}

macro_rules! conjunction {
    ($head:ident $(, $tail:ident)*) => {
        impl<$head: Predicate, $($tail),*> Conjunction for ($head, $($tail,)*)
        where
            $head::Output: AndThen<($($tail,)*)>,
        {
            type Output = <$head::Output as AndThen<($($tail,)*)>>::Output;
        }
    };
}

conjunction!(A);
conjunction!(A, B);
conjunction!(A, B, C);
conjunction!(A, B, C, D);
conjunction!(A, B, C, D, E);
conjunction!(A, B, C, D, E, F);
conjunction!(A, B, C, D, E, F, G);
conjunction!(A, B, C, D, E, F, G, H);

/// Implemented by every [`Conjunction`] that evaluates to [`True`].
pub trait Holds: Conjunction<Output = True> {}

impl<C: Conjunction<Output = True>> Holds for C {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Implements nothing; only valid behind a `False`.
    struct Unevaluated;

    fn holds<C: Holds>() -> bool {
        C::VALUE
    }

    #[test]
    fn empty_is_true() {
        assert!(<() as Conjunction>::VALUE);
        assert!(holds::<()>());
    }

    #[test]
    fn single_predicate() {
        assert!(<(True,) as Conjunction>::VALUE);
        assert!(!<(False,) as Conjunction>::VALUE);
        assert!(<(IsFloatingPoint<f64>,) as Conjunction>::VALUE);
        assert!(!<(IsFloatingPoint<i64>,) as Conjunction>::VALUE);
        assert!(<(IsIntegral<u16>,) as Conjunction>::VALUE);
        assert!(<(Not<IsIntegral<f32>>,) as Conjunction>::VALUE);
    }

    #[test]
    fn all_must_hold() {
        assert!(<(True, True, True) as Conjunction>::VALUE);
        assert!(!<(True, True, False) as Conjunction>::VALUE);
        assert!(!<(True, False, True) as Conjunction>::VALUE);
        assert!(<(IsArithmetic<i8>, IsArithmetic<f32>, IsFloatingPoint<f32>) as Conjunction>::VALUE);
        assert!(holds::<(IsArithmetic<u32>, IsIntegral<u32>)>());
    }

    #[test]
    fn short_circuits() {
        assert!(!<(False, Unevaluated) as Conjunction>::VALUE);
        assert!(!<(True, False, Unevaluated, Unevaluated) as Conjunction>::VALUE);
        assert!(!<(IsIntegral<f64>, IsArithmetic<Unevaluated>) as Conjunction>::VALUE);
    }
}
