use sim_bridge::{Simulation, SimulationBridge};
use thiserror::Error;
use types::{Agent, GenerationSummary, SimulationConfig};

use crate::colors;
use crate::fov;
use crate::surface::{DrawSurface, LayoutBounds, PixelCanvas};

/// The one contract violation the renderer checks instead of indexing
/// blindly: the engine must report one vision reading per configured cell.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("agent {agent}: vision has {got} cells, config expects {expected}")]
    VisionLength {
        agent: usize,
        expected: usize,
        got: usize,
    },
}

/// Pipeline-owned mutable state. The pause flag lives on the bridge.
#[derive(Debug, Clone, Copy)]
pub struct RenderState {
    /// Catch-up step multiplier, kept ≥ 1.
    pub steps_per_frame: u32,
    /// Frames drawn since startup; diagnostics only.
    pub frame_count: u64,
}

/// Per-frame orchestration: conditionally step the engine, re-query it,
/// resize the surface, redraw everything. Holds no references between
/// frames; the host hands in the bridge and surface on every call.
pub struct RenderPipeline {
    state: RenderState,
}

impl Default for RenderPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderPipeline {
    pub fn new() -> Self {
        Self {
            state: RenderState {
                steps_per_frame: 1,
                frame_count: 0,
            },
        }
    }

    pub fn steps_per_frame(&self) -> u32 {
        self.state.steps_per_frame
    }

    pub fn set_steps_per_frame(&mut self, steps: u32) {
        self.state.steps_per_frame = steps.max(1);
    }

    pub fn frame_count(&self) -> u64 {
        self.state.frame_count
    }

    /// Draw one frame. Returns any generation summaries the engine emitted
    /// while stepping, for the host to log.
    ///
    /// The order is load-bearing: step before querying so the frame shows
    /// post-step state, resize before drawing so primitives scale to the
    /// current viewport.
    pub fn draw_frame<S: Simulation, C: PixelCanvas>(
        &mut self,
        bridge: &mut SimulationBridge<S>,
        surface: &mut DrawSurface<C>,
        bounds: LayoutBounds,
    ) -> Result<Vec<GenerationSummary>, FrameError> {
        self.state.frame_count += 1;

        let mut summaries = Vec::new();
        if bridge.is_active() {
            for _ in 0..self.state.steps_per_frame {
                if let Some(summary) = bridge.step() {
                    summaries.push(summary);
                }
            }
        }

        let config = bridge.config();
        let world = bridge.world();

        surface.resize_to_fit(bounds);

        for food in &world.foods {
            surface.draw_circle(
                food.position.x,
                food.position.y,
                config.food_size / 2.0,
                colors::FOOD,
            );
        }

        for (idx, animal) in world.animals.iter().enumerate() {
            draw_agent(surface, &config, idx, animal)?;
        }

        Ok(summaries)
    }
}

fn draw_agent<C: PixelCanvas>(
    surface: &mut DrawSurface<C>,
    config: &SimulationConfig,
    idx: usize,
    agent: &Agent,
) -> Result<(), FrameError> {
    if agent.vision.len() != config.eye_cells {
        return Err(FrameError::VisionLength {
            agent: idx,
            expected: config.eye_cells,
            got: agent.vision.len(),
        });
    }

    let pos = agent.position;
    surface.draw_triangle(pos.x, pos.y, config.food_size, agent.rotation, colors::BODY);

    let tip = pos + fov::heading(agent.rotation) * config.eye_fov_range;
    surface.draw_line(pos.x, pos.y, tip.x, tip.y, colors::ORIENTATION);

    for cell in fov::partition(agent.rotation, config.eye_fov_angle, config.eye_cells) {
        let energy = agent.vision[cell.index];
        let flair = colors::cell_color(idx, cell.index);
        let fill = if energy == 0.0 {
            colors::ZERO_ENERGY
        } else {
            flair.with_alpha(energy * colors::FILL_ALPHA_SCALE)
        };
        let (from, to) = (fov::arc_angle(cell.from), fov::arc_angle(cell.to));
        surface.draw_sector(
            pos.x,
            pos.y,
            from,
            to,
            config.eye_fov_range,
            fill,
            colors::SECTOR_EDGE,
        );
        surface.draw_arc(
            pos.x,
            pos.y,
            config.food_size * 2.5,
            from,
            to,
            flair.with_alpha(energy),
        );
    }

    Ok(())
}
