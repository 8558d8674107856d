//! Matrix construction, arithmetic and conversion over every pair of element types and dimension.

use mu::{Cast, Matrix, TypeTraits, Vector};
use mu_fixtures::{combinations, matrix_values, vector_values};

macro_rules! matrix_pair {
    ($lhs:ty, $rhs:ty, $n:ident) => {
        #[test]
        fn rows_round_trip() {
            fn check<const R: usize, const C: usize>() {
                let rows: [Vector<$lhs, C>; R] =
                    std::array::from_fn(|row| vector_values::<$lhs, C>() * (row as $lhs + 1 as $lhs));
                let m = Matrix::<$lhs, R, C>::from_rows(rows);
                for (row, expected) in rows.iter().enumerate() {
                    assert_eq!(m.row(row), *expected);
                    assert_eq!(m[row], *expected);
                }
                assert_eq!(m.into_rows(), rows);
            }
            check::<1, $n>();
            check::<$n, 1>();
            check::<$n, $n>();
            check::<2, $n>();
        }

        #[test]
        fn identity_product() {
            let m = matrix_values::<$lhs, $n, $n>();
            let id = Matrix::<$lhs, $n, $n>::identity();
            assert_eq!(id.dot(m), m);
            assert_eq!(m.dot(id), m);
            assert_eq!(
                m.dot_vector(Vector::<$lhs, $n>::splat(1 as $lhs)),
                Vector::from_fn(|row| m.row(row).sum()),
            );
        }

        #[test]
        fn elementwise_and_transpose() {
            let m = matrix_values::<$lhs, 2, $n>();
            assert_eq!(m + Matrix::<$lhs, 2, $n>::ZERO, m);
            assert_eq!(m - m, Matrix::<$lhs, 2, $n>::ZERO);
            assert_eq!(m * m, Matrix::from_fn(|r, c| m[(r, c)] * m[(r, c)]));
            assert_eq!(m / m, Matrix::<$lhs, 2, $n>::ones());

            let t = m.transpose();
            assert_eq!(t.size(), ($n, 2));
            assert_eq!(t[($n - 1, 1)], m[(1, $n - 1)]);
            assert_eq!(t.transpose(), m);
        }

        #[test]
        fn cross_type_init() {
            let m = matrix_values::<$lhs, $n, $n>();
            let cast: Matrix<$rhs, $n, $n> = m.cast();
            assert_eq!(
                cast,
                Matrix::<$rhs, $n, $n>::from_fn(|r, c| Cast::<$rhs>::cast(m[(r, c)])),
            );
            assert_eq!(Matrix::<$rhs, $n, $n>::from_cast_rows(m.into_rows()), cast);
        }

        #[test]
        fn cross_type_equality() {
            // Floating-point fixtures step by 1.5, integer fixtures by 1.
            let same_class =
                <$lhs as TypeTraits>::IS_FLOATING_POINT == <$rhs as TypeTraits>::IS_FLOATING_POINT;
            let a = matrix_values::<$lhs, 2, $n>();
            let b = matrix_values::<$rhs, 2, $n>();
            assert_eq!(a == b, same_class);
            assert_eq!(b == a, same_class);
        }
    };
}

combinations!(
    matrix_pair;
    [int: i32, float: f32, double: f64];
    [int: i32, float: f32, double: f64];
    [one: 1, two: 2, three: 3, four: 4]
);
