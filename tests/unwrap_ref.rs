use std::cell::Cell;

use mu::{vec3, vector, UnwrapRef, Vector};

#[test]
fn vector_from_mixed_values_and_references() {
    let x = 1i32;
    let y = Cell::new(2i32);
    let mut z = 3i32;
    let v = vector![x, &y, &mut z];
    assert_eq!(v, vec3(1, 2, 3));

    let v: Vector<f32, 4> = vector![0.5f32, &&0.25f32, &Cell::new(2.0f32), 8.0f32];
    assert_eq!(v.sum(), 10.75);
}

#[test]
fn references_keep_tracking_their_source() {
    let cells = [Cell::new(1.0f64), Cell::new(2.0), Cell::new(3.0)];
    let view = Vector::from([&cells[0], &cells[1], &cells[2]]);
    assert_eq!(view.unwrap_refs(), vec3(1.0, 2.0, 3.0));

    cells[1].set(20.0);
    assert_eq!(view.unwrap_refs(), vec3(1.0, 20.0, 3.0));
    assert_eq!(view.unwrap_refs().max(), 20.0);
}

#[test]
fn reference_vectors_compare_like_value_vectors() {
    let (a, b) = (5u16, 6u16);
    let refs = vec3(&a, &b, &a);
    assert_eq!(refs, vec3(5u16, 6, 5));
    assert_ne!(refs, vec3(5u16, 6, 6));
    assert_eq!(refs, vec3(5.0f32, 6.0, 5.0));
}

#[test]
fn targets() {
    fn target<T: UnwrapRef>(_: &T) -> &'static str {
        std::any::type_name::<T::Target>()
    }
    let x = 0u8;
    assert_eq!(target(&x), "u8");
    assert_eq!(target(&&&x), "u8");
    assert_eq!(target(&Cell::new(0.0f64)), "f64");
    assert_eq!(target(&&Cell::new(true)), "bool");
}
