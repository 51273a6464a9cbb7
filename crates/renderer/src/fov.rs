use std::f32::consts::FRAC_PI_2;

use glam::Vec2;

/// System rotation convention: rotation 0 points along +y (down-screen),
/// a small positive rotation turns the heading toward −x.
pub fn heading(rotation: f32) -> Vec2 {
    Vec2::new(-rotation.sin(), rotation.cos())
}

/// Canvas arcs measure angles from +x toward +y, while rotations are
/// measured from +y, so sensor-space angles shift by a quarter turn
/// when handed to a drawing primitive.
pub fn arc_angle(sensor_angle: f32) -> f32 {
    sensor_angle + FRAC_PI_2
}

/// One angular subdivision of an agent's field of view, in sensor space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FovCell {
    pub index: usize,
    pub from: f32,
    pub to: f32,
}

/// Splits `[rotation − fov_angle/2, rotation + fov_angle/2)` into `cells`
/// equal-width cells, leftmost first, matching vision array order.
/// Adjacent cells share boundaries exactly: both sides evaluate the same
/// `start + i·width` expression.
pub fn partition(rotation: f32, fov_angle: f32, cells: usize) -> impl Iterator<Item = FovCell> {
    let width = fov_angle / cells as f32;
    let start = rotation - fov_angle / 2.0;
    (0..cells).map(move |i| FovCell {
        index: i,
        from: start + i as f32 * width,
        to: start + (i + 1) as f32 * width,
    })
}
