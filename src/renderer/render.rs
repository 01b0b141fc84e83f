use super::*;
use crate::scene::World;
use std::sync::atomic::AtomicBool;

/// Casts a single ray through the centre of every pixel and shades it — no supersampling.
///
/// # Parameters
/// `show_progress`: set to `true` when using e.g. `cargo run` for real-time progress updates;
///                  set to `false` when running benchmarks, otherwise it'll cripple performance due to stdout locking
/// `cancelled`: polled between rows; see `Canvas::draw`.
pub fn render(world: &World, camera: &Camera, show_progress: bool, cancelled: &AtomicBool) -> Canvas {
    let mut canvas =
        Canvas::new(camera.width(), camera.height()).expect("Camera dimensions are too large");

    canvas.draw(show_progress, cancelled, |x, y| {
        world.colour_at(camera.ray_at(x, y, 0.5, 0.5))
    });

    canvas
}
