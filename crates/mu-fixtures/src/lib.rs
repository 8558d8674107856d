//! Combination fixtures for testing [`Vector`] and [`Matrix`] over many element types and sizes.
//!
//! Two complementary tools are provided:
//!
//! - [`combinations`] enumerates, at runtime, every `(type, type, dimension)` case of an
//!   [`Operation`], and [`run`] executes a [`CombinationCheck`] for one of those cases with the
//!   concrete element types and dimension it describes.
//! - [`combinations!`] instantiates a test-body macro once per pair of element types (and,
//!   optionally, per dimension) at compile time, in its own module, so that every case gets its
//!   own named test.
//!
//! [`vector_values`] and [`matrix_values`] produce the deterministic element values used by the
//! test suites.

use std::fmt;

use itertools::{iproduct, Itertools};
use mu_linalg::{Cast, Matrix, Scalar, Vector};

/// Tag for a primitive element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScalarKind {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
}

impl ScalarKind {
    /// Every supported element type, integers first.
    pub const ALL: [Self; 10] = [
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::F32,
        Self::F64,
    ];

    /// Returns the Rust name of the type (eg. `"f32"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    pub const fn is_floating_point(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    pub const fn is_signed(self) -> bool {
        !matches!(self, Self::U8 | Self::U16 | Self::U32 | Self::U64)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The kind of operation a set of combinations is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Element-wise operations between two vectors (or matrices) of the same dimension.
    ElementWise,
    /// Operations between a vector and a single scalar.
    ScalarBroadcast,
    /// Conversion of a vector into a vector of the same dimension and another element type.
    Conversion,
}

/// Whether both operands of a [`Combination`] share their element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombinationKind {
    SameType,
    CrossType,
}

/// A single generated test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination {
    pub lhs: ScalarKind,
    pub rhs: ScalarKind,
    pub lhs_dim: usize,
    /// Dimension of the right-hand operand, or [`None`] if it is a scalar.
    pub rhs_dim: Option<usize>,
    pub kind: CombinationKind,
}

impl Combination {
    fn new(lhs: ScalarKind, rhs: ScalarKind, lhs_dim: usize, rhs_dim: Option<usize>) -> Self {
        let kind = if lhs == rhs {
            CombinationKind::SameType
        } else {
            CombinationKind::CrossType
        };
        Self {
            lhs,
            rhs,
            lhs_dim,
            rhs_dim,
            kind,
        }
    }

    #[inline]
    pub fn is_same_type(&self) -> bool {
        self.kind == CombinationKind::SameType
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rhs_dim {
            Some(dim) => write!(
                f,
                "Vector<{}, {}> x Vector<{}, {}>",
                self.lhs, self.lhs_dim, self.rhs, dim
            ),
            None => write!(f, "Vector<{}, {}> x {}", self.lhs, self.lhs_dim, self.rhs),
        }
    }
}

/// Returns every ordered pair of `types`, including pairs of a type with itself.
///
/// Duplicate entries in `types` are ignored, so `k` distinct types yield exactly `k * k` pairs.
///
/// # Examples
///
/// ```
/// # use mu_fixtures::*;
/// let pairs = type_pairs(&[ScalarKind::I32, ScalarKind::F32, ScalarKind::F64]);
/// assert_eq!(pairs.len(), 9);
/// assert_eq!(pairs.iter().filter(|(a, b)| a == b).count(), 3);
/// ```
pub fn type_pairs(types: &[ScalarKind]) -> Vec<(ScalarKind, ScalarKind)> {
    let types = types.iter().copied().unique().collect::<Vec<_>>();
    iproduct!(types.iter().copied(), types.iter().copied()).collect()
}

/// Generates every test case of `operation` over `types` and `dims`.
///
/// Invalid dimension pairings are never generated:
///
/// - For [`Operation::ElementWise`] and [`Operation::Conversion`], both operands always have the
///   same dimension, and every ordered type pair is combined with every dimension.
/// - For [`Operation::ScalarBroadcast`], every vector `(type, dimension)` is combined with every
///   scalar type.
///
/// Cases are ordered by left-hand type first. Duplicate entries in `types` or `dims` are ignored.
pub fn combinations(types: &[ScalarKind], dims: &[usize], operation: Operation) -> Vec<Combination> {
    let dims = dims.iter().copied().unique().collect::<Vec<_>>();
    let pairs = type_pairs(types);

    let cases: Vec<_> = match operation {
        Operation::ElementWise | Operation::Conversion => iproduct!(pairs, dims.iter().copied())
            .map(|((lhs, rhs), dim)| Combination::new(lhs, rhs, dim, Some(dim)))
            .collect(),
        Operation::ScalarBroadcast => iproduct!(pairs, dims.iter().copied())
            .map(|((lhs, rhs), dim)| Combination::new(lhs, rhs, dim, None))
            .collect(),
    };

    log::debug!(
        "generated {} {:?} combinations ({} same-type)",
        cases.len(),
        operation,
        cases.iter().filter(|case| case.is_same_type()).count(),
    );
    cases
}

/// The dimensions [`run`] can dispatch to.
pub const SUPPORTED_DIMS: [usize; 4] = [1, 2, 3, 4];

/// A check that is generic over the element types and the dimension of a [`Combination`].
///
/// `L` and `R` are the left and right element types, and `N` is the left-hand dimension. For
/// [`Operation::ScalarBroadcast`] cases, `R` is the type of the scalar.
pub trait CombinationCheck {
    fn check<L, R, const N: usize>(&self, case: &Combination)
    where
        L: Scalar + Cast<R>,
        R: Scalar + Cast<L>,
        f64: Cast<L> + Cast<R>;
}

/// Runs `check` with the element types and dimension described by `case`.
///
/// # Panics
///
/// Panics if `case.lhs_dim` is not one of [`SUPPORTED_DIMS`], or if the check itself panics.
///
/// # Examples
///
/// ```
/// use mu_fixtures::*;
/// use mu_linalg::{Cast, Scalar};
///
/// struct SumIsTriangular;
///
/// impl CombinationCheck for SumIsTriangular {
///     fn check<L, R, const N: usize>(&self, case: &Combination)
///     where
///         L: Scalar + Cast<R>,
///         R: Scalar + Cast<L>,
///         f64: Cast<L> + Cast<R>,
///     {
///         let expected = Cast::<L>::cast((N * (N + 1) / 2) as f64);
///         assert_eq!(vector_values::<L, N>().sum(), expected, "{case}");
///     }
/// }
///
/// for case in combinations(&ScalarKind::ALL, &SUPPORTED_DIMS, Operation::ElementWise) {
///     run(&SumIsTriangular, &case);
/// }
/// ```
pub fn run<C: CombinationCheck>(check: &C, case: &Combination) {
    log::trace!("running {case}");

    macro_rules! with_dim {
        ($lhs:ty, $rhs:ty) => {
            match case.lhs_dim {
                1 => check.check::<$lhs, $rhs, 1>(case),
                2 => check.check::<$lhs, $rhs, 2>(case),
                3 => check.check::<$lhs, $rhs, 3>(case),
                4 => check.check::<$lhs, $rhs, 4>(case),
                dim => panic!("unsupported dimension {dim} in `{case}`"),
            }
        };
    }

    macro_rules! with_rhs {
        ($lhs:ty) => {
            match case.rhs {
                ScalarKind::I8 => with_dim!($lhs, i8),
                ScalarKind::I16 => with_dim!($lhs, i16),
                ScalarKind::I32 => with_dim!($lhs, i32),
                ScalarKind::I64 => with_dim!($lhs, i64),
                ScalarKind::U8 => with_dim!($lhs, u8),
                ScalarKind::U16 => with_dim!($lhs, u16),
                ScalarKind::U32 => with_dim!($lhs, u32),
                ScalarKind::U64 => with_dim!($lhs, u64),
                ScalarKind::F32 => with_dim!($lhs, f32),
                ScalarKind::F64 => with_dim!($lhs, f64),
            }
        };
    }

    match case.lhs {
        ScalarKind::I8 => with_rhs!(i8),
        ScalarKind::I16 => with_rhs!(i16),
        ScalarKind::I32 => with_rhs!(i32),
        ScalarKind::I64 => with_rhs!(i64),
        ScalarKind::U8 => with_rhs!(u8),
        ScalarKind::U16 => with_rhs!(u16),
        ScalarKind::U32 => with_rhs!(u32),
        ScalarKind::U64 => with_rhs!(u64),
        ScalarKind::F32 => with_rhs!(f32),
        ScalarKind::F64 => with_rhs!(f64),
    }
}

/// Returns the fixture values for an `N`-element vector: `1, 2, 3, ...`.
///
/// # Examples
///
/// ```
/// # use mu_fixtures::vector_values;
/// # use mu_linalg::vec3;
/// assert_eq!(vector_values::<u8, 3>(), vec3(1, 2, 3));
/// assert_eq!(vector_values::<f32, 3>(), vec3(1.0, 2.0, 3.0));
/// ```
pub fn vector_values<T: Scalar, const N: usize>() -> Vector<T, N> {
    let mut acc = T::ZERO;
    Vector::from_fn(|_| {
        acc += T::ONE;
        acc
    })
}

/// Returns the fixture values for an `R`x`C` matrix.
///
/// The elements, in row-major order, accumulate the step `1.5` converted to `T`. Floating-point
/// matrices hold `1.5, 3.0, 4.5, ...`, while the step truncates to 1 for integer matrices, which
/// hold `1, 2, 3, ...`.
///
/// # Examples
///
/// ```
/// # use mu_fixtures::matrix_values;
/// # use mu_linalg::Matrix;
/// assert_eq!(matrix_values::<f64, 2, 2>(), Matrix::from_rows([[1.5, 3.0], [4.5, 6.0]]));
/// assert_eq!(matrix_values::<i16, 2, 2>(), Matrix::from_rows([[1, 2], [3, 4]]));
/// ```
pub fn matrix_values<T, const R: usize, const C: usize>() -> Matrix<T, R, C>
where
    T: Scalar,
    f64: Cast<T>,
{
    let step = Cast::<T>::cast(1.5f64);
    let mut acc = T::ZERO;
    Matrix::from_fn(|_, _| {
        acc += step;
        acc
    })
}

/// Instantiates a test-body macro for every pair of element types, and optionally every dimension.
///
/// The first argument names the body macro. It is followed by two lists of `tag: type` entries.
/// For every entry `a: A` of the first list and `b: B` of the second, the body is expanded as
/// `body!(A, B)` inside the module `a::b`.
///
/// An optional third list of `tag: dimension` entries adds a dimension axis: for every entry
/// `d: D`, the body is expanded as `body!(A, B, N)` inside the module `a::b::d`, which defines
/// `const N: usize = D`.
///
/// Tags are module names, so they must not shadow the types themselves (use `int`, not `i32`).
///
/// # Examples
///
/// ```
/// use mu_fixtures::combinations;
/// use mu_linalg::Vector;
///
/// macro_rules! zero_is_additive_identity {
///     ($lhs:ty, $rhs:ty) => {
///         pub fn check() {
///             let v = Vector::<$lhs, 3>::splat(2 as $lhs);
///             assert_eq!(v + Vector::ZERO, v);
///             assert_eq!(Vector::<$rhs, 3>::ZERO, [0 as $rhs; 3]);
///         }
///     };
/// }
///
/// combinations!(zero_is_additive_identity; [int: i32, double: f64]; [float: f32, byte: u8]);
///
/// fn main() {
///     int::float::check();
///     int::byte::check();
///     double::float::check();
///     double::byte::check();
/// }
/// ```
///
/// With dimensions:
///
/// ```
/// use mu_fixtures::combinations;
/// use mu_linalg::Vector;
///
/// macro_rules! splat_has_dimension {
///     ($lhs:ty, $rhs:ty, $n:ident) => {
///         pub fn check() {
///             let v = Vector::<$lhs, $n>::splat(1 as $lhs);
///             assert_eq!(v.size(), $n);
///             assert_eq!(v.cast::<$rhs>(), Vector::<$rhs, $n>::splat(1 as $rhs));
///         }
///     };
/// }
///
/// combinations!(splat_has_dimension; [int: i32]; [double: f64]; [two: 2, five: 5]);
///
/// fn main() {
///     assert_eq!(int::double::five::N, 5);
///     int::double::two::check();
///     int::double::five::check();
/// }
/// ```
#[macro_export]
macro_rules! combinations {
    (@dims $body:ident; $lty:ty; $rty:ty; [$($dname:ident: $dim:literal),+ $(,)?]) => {
        $(
            pub mod $dname {
                #[allow(unused_imports)]
                use super::*;

                pub const N: usize = $dim;

                $body!($lty, $rty, N);
            }
        )+
    };
    (@rhs $body:ident; $lty:ty; [$($rname:ident: $rty:ty),+ $(,)?]; $dims:tt) => {
        $(
            pub mod $rname {
                #[allow(unused_imports)]
                use super::*;

                $crate::combinations!(@dims $body; $lty; $rty; $dims);
            }
        )+
    };
    (@rhs $body:ident; $lty:ty; [$($rname:ident: $rty:ty),+ $(,)?]) => {
        $(
            pub mod $rname {
                #[allow(unused_imports)]
                use super::*;

                $body!($lty, $rty);
            }
        )+
    };
    ($body:ident; [$($lname:ident: $lty:ty),+ $(,)?]; $rhs:tt; $dims:tt) => {
        $(
            pub mod $lname {
                #[allow(unused_imports)]
                use super::*;

                $crate::combinations!(@rhs $body; $lty; $rhs; $dims);
            }
        )+
    };
    ($body:ident; [$($lname:ident: $lty:ty),+ $(,)?]; $rhs:tt) => {
        $(
            pub mod $lname {
                #[allow(unused_imports)]
                use super::*;

                $crate::combinations!(@rhs $body; $lty; $rhs);
            }
        )+
    };
}
