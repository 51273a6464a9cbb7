use std::f32::consts::{FRAC_PI_4, PI};

/// Per-run simulation parameters the renderer reads every frame.
/// All lengths are normalized fractions of the square viewport side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub world_animals: usize,
    /// Angular sensor partitions per agent.
    pub eye_cells: usize,
    /// Total field-of-view width, radians.
    pub eye_fov_angle: f32,
    /// Sensor radius, normalized units.
    pub eye_fov_range: f32,
    /// Normalized diameter used as the base drawing scale.
    pub food_size: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            world_animals: 40,
            eye_cells: 9,
            eye_fov_angle: PI + FRAC_PI_4,
            eye_fov_range: 0.25,
            food_size: 0.01,
        }
    }
}
