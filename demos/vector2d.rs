//! Rotating a 2D vector around the origin.

use std::f64::consts::PI;

use mu::{vec2, Vector2D};

fn main() -> anyhow::Result<()> {
    mu::init_logger!();

    // Usage: vector2d [STEPS]
    let steps: u32 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 8,
    };
    let mut v = vec2(2.0f64, 0.0);
    for step in 0..steps {
        log::info!(
            "step {step}: ({:+.3}, {:+.3}), length {:.3}, cross with X {:+.3}",
            v.x,
            v.y,
            v.length(),
            Vector2D::X.cross(v),
        );
        v.rotate(2.0 * PI / f64::from(steps));
    }

    let full_turn = vec2(2.0f64, 0.0).rotated(2.0 * PI);
    log::info!("full turn lands on the start: {}", full_turn == vec2(2.0, 0.0));

    Ok(())
}
