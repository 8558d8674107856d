//! Matrix construction, products and determinants.

use std::f64::consts::FRAC_PI_3;

use mu::{eye, vec3, Matrix, Matrix2x2, Matrix3x3};

fn main() -> anyhow::Result<()> {
    mu::init_logger!();

    #[rustfmt::skip]
    let mat: Matrix3x3<i64> = Matrix::from_rows([
        [-2, -1,  2],
        [ 2,  1,  4],
        [-3,  3, -1],
    ]);
    log::info!("matrix: {mat:?}");
    log::info!("transposed: {:?}", mat.transpose());
    log::info!("determinant: {}", mat.determinant());
    log::info!("trace: {}, diagonal: {}", mat.trace(), mat.diagonal());
    log::info!("mean: {} (truncated), {} (exact)", mat.mean(), mat.mean_as::<f64>());

    let product = mat.dot(eye());
    log::info!("M * I == M: {}", product == mat);
    log::info!("M * (1, 1, 1): {}", mat.dot_vector(vec3(1, 1, 1)));

    let floats = mat.cast::<f32>() * 0.5;
    log::info!("scaled: {floats:?}");
    if let Err(e) = floats.try_cast::<i64>() {
        log::info!("halves don't convert back: {e}");
    }
    let back = (floats * 2.0).try_cast::<i64>()?;
    log::info!("doubled again, back to integers: {back:?}");

    let padded = mat.resize::<4, 4>();
    log::info!("padded: {padded:#?}");
    let cropped = mat.resize::<2, 2>();
    log::info!("cropped: {cropped:?}, determinant {}", cropped.determinant());

    let ccw = Matrix2x2::<f64>::rotation_counterclockwise(FRAC_PI_3);
    let cw = Matrix2x2::<f64>::rotation_clockwise(FRAC_PI_3);
    log::info!("inverse of {ccw:?} is {:?}", ccw.invert());
    log::info!("inverse matches the clockwise rotation: {}", ccw.invert() == cw);

    Ok(())
}
