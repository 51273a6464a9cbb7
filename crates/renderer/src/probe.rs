use glam::Vec2;
use types::{Agent, WorldSnapshot};

use crate::surface::to_normalized;

/// Maximum normalized distance between pointer and agent for a hit.
pub const HIT_THRESHOLD: f32 = 0.005;

/// The drawing surface's bounding rectangle in client space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
}

/// Client-space pointer coordinates to normalized world space. Divides by
/// the CSS side length so the mapping holds under device-pixel-ratio
/// scaling.
pub fn pointer_to_normalized(client_x: f64, client_y: f64, rect: SurfaceRect, css_side: f64) -> Vec2 {
    Vec2::new(
        to_normalized(client_x, rect.left, css_side),
        to_normalized(client_y, rect.top, css_side),
    )
}

/// Nearest-agent hit-testing for diagnostic inspection. Read-only: never
/// mutates simulation or render state.
#[derive(Debug, Clone, Copy)]
pub struct PointerProbe {
    threshold: f32,
}

impl Default for PointerProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerProbe {
    pub fn new() -> Self {
        Self {
            threshold: HIT_THRESHOLD,
        }
    }

    /// First agent in world order strictly within the threshold, with its
    /// index. Ties go to the earlier agent; no distance minimization.
    /// `None` is the normal no-agent-under-cursor outcome.
    pub fn locate<'w>(&self, world: &'w WorldSnapshot, pointer: Vec2) -> Option<(usize, &'w Agent)> {
        world
            .animals
            .iter()
            .enumerate()
            .find(|(_, agent)| agent.position.distance(pointer) < self.threshold)
    }
}
