use itertools::Itertools;
use mu::{assert_approx_eq, vec3, Matrix, Matrix2x2, Matrix3x3, TypeTraits, Vector};
use mu_fixtures::{type_pairs, ScalarKind};

#[test]
fn tolerance_decides_near_equality() {
    let a = vec3(1.0f64, 2.0, 3.0);
    let b = vec3(1.0f64, 2.0, 3.0 + 1e-10);
    assert!(a.equals_with_tolerance(&b, 1e-9));
    assert!(!a.equals_with_tolerance(&b, 1e-12));

    // The default `f64` tolerance is tighter than the difference.
    assert!(<f64 as TypeTraits>::EPSILON < 1e-10);
    assert_ne!(a, b);
    assert_eq!(a, vec3(1.0f64, 2.0, 3.0 + 1e-15));
}

#[test]
fn integer_mean_truncates() {
    let m = Matrix2x2::<i32>::from_rows([[1, 2], [3, 4]]);
    assert_eq!(m.mean(), 2);
    assert_eq!(m.mean_as::<f64>(), 2.5);
    assert_eq!(Matrix2x2::<i32>::from_rows([[-1, -2], [-3, -4]]).mean(), -2);
}

#[test]
fn int_to_double_matrix() {
    let ints = Matrix2x2::<i32>::from_rows([[1, 2], [3, 4]]);
    let doubles = Matrix2x2::<f64>::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    assert_eq!(ints.convert::<f64>(), doubles);
    assert_eq!(ints.cast::<f64>(), doubles);
    assert_eq!(doubles.try_cast::<i32>(), Ok(ints));
}

#[test]
fn nine_type_pairings() {
    let pairs = type_pairs(&[ScalarKind::I32, ScalarKind::F32, ScalarKind::F64]);
    assert_eq!(pairs.len(), 9);
    assert_eq!(pairs.iter().filter(|(lhs, rhs)| lhs == rhs).count(), 3);
    assert!(pairs.iter().all_unique());
}

fn random_matrix<const R: usize, const C: usize>(rng: &mut fastrand::Rng) -> Matrix<f64, R, C> {
    Matrix::from_fn(|_, _| rng.f64() * 20.0 - 10.0)
}

#[test]
fn determinant_matches_nalgebra() {
    let mut rng = fastrand::Rng::with_seed(3);
    for _ in 0..100 {
        let m = random_matrix::<3, 3>(&mut rng);
        let reference = nalgebra::Matrix3::from_fn(|r, c| m[(r, c)]).determinant();
        assert_approx_eq!(m.determinant(), reference, abs = 1e-9, rel = 1e-12);
    }

    // Zero leading pivot.
    let m = Matrix3x3::<f64>::from_rows([[0.0, 2.0, 1.0], [1.0, 1.0, 0.0], [3.0, 0.0, 2.0]]);
    let reference = nalgebra::Matrix3::from_fn(|r, c| m[(r, c)]).determinant();
    assert_approx_eq!(m.determinant(), reference, abs = 1e-12);
}

#[test]
fn products_match_nalgebra() {
    let mut rng = fastrand::Rng::with_seed(5);
    for _ in 0..100 {
        let a = random_matrix::<2, 3>(&mut rng);
        let b = random_matrix::<3, 4>(&mut rng);
        let na = nalgebra::Matrix2x3::from_fn(|r, c| a[(r, c)]);
        let nb = nalgebra::Matrix3x4::from_fn(|r, c| b[(r, c)]);

        let product = a.dot(b);
        let reference = na * nb;
        assert_approx_eq!(product, Matrix::from_fn(|r, c| reference[(r, c)]), abs = 1e-9);

        let v = Vector::<f64, 3>::from_fn(|_| rng.f64());
        let nv = nalgebra::Vector3::from_fn(|r, _| v[r]);
        let reference = na * nv;
        assert_approx_eq!(a.dot_vector(v), Vector::from_fn(|r| reference[r]), abs = 1e-9);
    }
}
