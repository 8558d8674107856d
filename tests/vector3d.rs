use mu::{vec3, Vector3D};
use mu_fixtures::vector_values;

macro_rules! typed {
    ($($name:ident: $ty:ty),+) => {
        $(
            mod $name {
                use super::*;

                #[test]
                fn components() {
                    let mut v = vector_values::<$ty, 3>();
                    assert_eq!((v.x, v.y, v.z), (1 as $ty, 2 as $ty, 3 as $ty));

                    v.z = v.x + v.y;
                    assert_eq!(v, [1 as $ty, 2 as $ty, 3 as $ty]);
                    v.y = 0 as $ty;
                    assert_eq!(v.sum(), 4 as $ty);
                }

                #[test]
                fn cross() {
                    let x = Vector3D::<$ty>::X;
                    let y = Vector3D::<$ty>::Y;
                    let z = Vector3D::<$ty>::Z;
                    assert_eq!(x.cross(y), z);
                    assert_eq!(y.cross(z), x);
                    assert_eq!(z.cross(x), y);

                    let a = vector_values::<$ty, 3>();
                    let b = vec3(4 as $ty, 5 as $ty, 6 as $ty);
                    let c = a.cross(b);
                    assert_eq!(c, vec3(-3 as $ty, 6 as $ty, -3 as $ty));
                    assert_eq!(c.dot(a), 0 as $ty);
                    assert_eq!(c.dot(b), 0 as $ty);
                }
            }
        )+
    };
}

typed!(short: i16, int: i32, float: f32, double: f64);

#[test]
fn anticommutative() {
    let mut rng = fastrand::Rng::with_seed(9);
    for _ in 0..1000 {
        let a = Vector3D::<i64>::from_fn(|_| rng.i64(-1000..1000));
        let b = Vector3D::<i64>::from_fn(|_| rng.i64(-1000..1000));
        assert_eq!(a.cross(b), -b.cross(a));
        assert_eq!(a.cross(a), Vector3D::<i64>::ZERO);
    }
}
