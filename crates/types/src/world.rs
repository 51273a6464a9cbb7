use glam::Vec2;

/// One food pellet, position in normalized [0,1]² space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Food {
    pub position: Vec2,
}

/// One agent as reported by the simulation. `vision` holds one energy
/// reading in [0,1] per FOV cell, ordered leftmost to rightmost.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub position: Vec2,
    /// Radians; 0 points along +y, increasing clockwise on screen.
    pub rotation: f32,
    pub speed: f32,
    pub vision: Vec<f32>,
}

/// Full world state at one instant. Produced fresh by every query;
/// the renderer only reads it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorldSnapshot {
    pub foods: Vec<Food>,
    pub animals: Vec<Agent>,
}
