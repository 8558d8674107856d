//! Reductions, conversions and tolerant comparisons on generic vectors.

use mu::{vec4, vector, Vector};

fn main() -> anyhow::Result<()> {
    mu::init_logger!();

    let samples = vec4(3i32, -7, 12, 1);
    log::info!("samples: {samples}");
    log::info!(
        "min {}, max {}, sum {}, mean {} (truncated), mean {} (exact), std dev {:.3}",
        samples.min(),
        samples.max(),
        samples.sum(),
        samples.mean(),
        samples.mean_as::<f64>(),
        samples.std_dev::<f64>(),
    );
    log::info!("sorted: {}", samples.sorted());

    let halves: Vector<f64, 4> = samples.convert::<f64>() / 2.0;
    log::info!("halved: {halves}");
    match halves.try_cast::<i32>() {
        Ok(ints) => log::info!("halves are integral: {ints}"),
        Err(e) => log::info!("halves are not integral: {e}"),
    }
    let doubled = (halves * 2.0).try_cast::<i8>()?;
    log::info!("round trip through i8: {doubled}");

    let scale = 2.5f32;
    let mixed = vector![1.0f32, &scale, scale * 2.0];
    log::info!("built from values and references: {mixed}");

    let a = mixed;
    let b = mixed + 1e-7;
    log::info!("{a:?} == {b:?}: {}", a == b);
    log::info!("equal within 1e-9: {}", a.equals_with_tolerance(&b, 1e-9));

    Ok(())
}
