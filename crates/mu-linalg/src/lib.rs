//! A small generic linear algebra library with compile-time dimensions.
//!
//! # Motivation
//!
//! Many numeric algorithms only ever deal with vectors and matrices whose dimensions are known
//! when the program is written. Encoding those dimensions in the type system turns shape
//! mismatches into compile errors, and removes every heap allocation from the hot path.
//!
//! Floating-point results rarely compare bit-for-bit equal, so equality is *tolerant* by default:
//! two elements are equal if they differ by no more than the [`TypeTraits::EPSILON`] of their type.
//! Integer elements are compared exactly.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. Const generics specify vector and
//!   matrix dimensions, which keeps the API small and lets the compiler reject size mismatches.
//! - Support a single, row-major, unpadded data layout for matrices: a matrix is an array of row
//!   [`Vector`]s, and [`Matrix::row`] as well as `matrix[i]` hand out rows directly.
//! - Be generic over the element type, but only support the primitive integer and floating-point
//!   types (see [`Scalar`]). Mixing element types always requires an explicit conversion.
//! - Gate methods on properties of their element types with type-level [`conjunction`]s, rather
//!   than runtime checks.
//! - Put at least some effort into designing an ergonomic API that adheres to the
//!   [Rust API Guidelines].
//!
//! [Rust API Guidelines]: https://rust-lang.github.io/api-guidelines/

pub mod approx;
pub mod conjunction;
mod error;
mod matrix;
mod traits;
mod type_traits;
mod unwrap_ref;
mod vector;

pub use error::CastError;
pub use matrix::*;
pub use traits::*;
pub use type_traits::{FloatingPoint, TypeTraits};
pub use unwrap_ref::UnwrapRef;
pub use vector::*;
