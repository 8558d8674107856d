//! Cross products and normals in 3D.

use mu::{vec3, Vector3D};

fn main() -> anyhow::Result<()> {
    mu::init_logger!();

    let a = vec3(1.0f32, 0.0, 0.0);
    let b = vec3(1.0f32, 1.0, 0.0);
    let c = vec3(0.0f32, 1.0, 1.0);

    let normal = (b - a).cross(c - a).normalize();
    log::info!("triangle normal: {normal}");
    log::info!("x {}, y {}, z {}", normal.x, normal.y, normal.z);
    log::info!(
        "perpendicular to both edges: {}",
        normal.dot(b - a) == 0.0 && normal.dot(c - a) == 0.0
    );
    log::info!("Z axis: {}", Vector3D::<f32>::X.cross(Vector3D::Y));

    let lattice = (b - a).try_cast::<i32>()?.cross((c - a).try_cast::<i32>()?);
    log::info!("the same edges on the integer lattice: {lattice}");

    Ok(())
}
