//! Crate-internal test doubles: an op-recording canvas backend and a
//! scripted simulation engine.

use glam::Vec2;
use sim_bridge::Simulation;
use types::{Agent, Food, GenerationSummary, Rgba, SimulationConfig, WorldSnapshot};

use crate::surface::PixelCanvas;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Resize { backing_px: u32, css_px: u32 },
    Clear { side_px: f32 },
    Circle { x: f32, y: f32, radius: f32, color: Rgba },
    Line { x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Rgba },
    Arc { x: f32, y: f32, radius: f32, from: f32, to: f32, width: f32, color: Rgba },
    Triangle { a: Vec2, b: Vec2, c: Vec2, color: Rgba },
    Sector { x: f32, y: f32, radius: f32, from: f32, to: f32, color: Rgba },
}

/// Records every primitive call in order instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
}

impl PixelCanvas for RecordingCanvas {
    fn resize(&mut self, backing_px: u32, css_px: u32) {
        self.ops.push(Op::Resize { backing_px, css_px });
    }

    fn clear(&mut self, side_px: f32) {
        self.ops.push(Op::Clear { side_px });
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgba) {
        self.ops.push(Op::Circle { x, y, radius, color });
    }

    fn stroke_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, width: f32, color: Rgba) {
        self.ops.push(Op::Line { x0, y0, x1, y1, width, color });
    }

    fn stroke_arc(&mut self, x: f32, y: f32, radius: f32, from: f32, to: f32, width: f32, color: Rgba) {
        self.ops.push(Op::Arc { x, y, radius, from, to, width, color });
    }

    fn fill_triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Rgba) {
        self.ops.push(Op::Triangle { a, b, c, color });
    }

    fn fill_sector(&mut self, x: f32, y: f32, radius: f32, from: f32, to: f32, color: Rgba) {
        self.ops.push(Op::Sector { x, y, radius, from, to, color });
    }
}

/// Scripted engine. Each step nudges every agent +x by 0.001 so snapshots
/// from different tick counts are distinguishable; a summary is emitted
/// every `summary_every` steps when set.
pub struct ScriptedSim {
    pub config: SimulationConfig,
    pub foods: Vec<Food>,
    pub animals: Vec<Agent>,
    pub steps: usize,
    pub summary_every: Option<usize>,
}

impl ScriptedSim {
    pub fn new(config: SimulationConfig, foods: Vec<Food>, animals: Vec<Agent>) -> Self {
        Self {
            config,
            foods,
            animals,
            steps: 0,
            summary_every: None,
        }
    }
}

impl Simulation for ScriptedSim {
    fn config(&self) -> SimulationConfig {
        self.config
    }

    fn world(&self) -> WorldSnapshot {
        let drift = 0.001 * self.steps as f32;
        WorldSnapshot {
            foods: self.foods.clone(),
            animals: self
                .animals
                .iter()
                .cloned()
                .map(|mut agent| {
                    agent.position.x += drift;
                    agent
                })
                .collect(),
        }
    }

    fn step(&mut self) -> Option<GenerationSummary> {
        self.steps += 1;
        let every = self.summary_every?;
        (self.steps % every == 0).then(|| GenerationSummary {
            generation: self.steps / every,
            best_fitness: 20.0,
            worst_fitness: 0.5,
            avg_fitness: 8.0,
        })
    }

    fn age(&self) -> usize {
        self.steps
    }

    fn generation(&self) -> usize {
        self.summary_every.map_or(0, |every| self.steps / every)
    }
}
