use types::{GenerationSummary, SimulationConfig, WorldSnapshot};

/// The narrow surface this renderer consumes from the external engine.
/// `config` and `world` are pure queries against current state (not
/// necessarily cheap — nothing here caches them). `step` advances the
/// engine exactly one tick and may return end-of-generation statistics.
pub trait Simulation {
    fn config(&self) -> SimulationConfig;
    fn world(&self) -> WorldSnapshot;
    fn step(&mut self) -> Option<GenerationSummary>;
    fn age(&self) -> usize;
    fn generation(&self) -> usize;
}

impl<S: Simulation + ?Sized> Simulation for Box<S> {
    fn config(&self) -> SimulationConfig {
        (**self).config()
    }

    fn world(&self) -> WorldSnapshot {
        (**self).world()
    }

    fn step(&mut self) -> Option<GenerationSummary> {
        (**self).step()
    }

    fn age(&self) -> usize {
        (**self).age()
    }

    fn generation(&self) -> usize {
        (**self).generation()
    }
}

/// Owns the engine handle and the pause flag. The flag belongs to the
/// renderer side, not the engine: pausing stops the render loop from
/// stepping, it does not tell the engine anything.
pub struct SimulationBridge<S: Simulation> {
    sim: S,
    active: bool,
}

impl<S: Simulation> SimulationBridge<S> {
    /// Starts active (running).
    pub fn new(sim: S) -> Self {
        Self { sim, active: true }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn pause(&mut self) {
        self.active = false;
    }

    pub fn resume(&mut self) {
        self.active = true;
    }

    /// Flips the pause flag and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    pub fn config(&self) -> SimulationConfig {
        self.sim.config()
    }

    pub fn world(&self) -> WorldSnapshot {
        self.sim.world()
    }

    pub fn step(&mut self) -> Option<GenerationSummary> {
        self.sim.step()
    }

    pub fn age(&self) -> usize {
        self.sim.age()
    }

    pub fn generation(&self) -> usize {
        self.sim.generation()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use types::Agent;

    /// Scripted engine: one agent that drifts +x a little per step, and a
    /// summary every `summary_every` steps.
    struct ScriptedSim {
        steps: usize,
        summary_every: usize,
    }

    impl Simulation for ScriptedSim {
        fn config(&self) -> SimulationConfig {
            SimulationConfig::default()
        }

        fn world(&self) -> WorldSnapshot {
            let config = self.config();
            WorldSnapshot {
                foods: Vec::new(),
                animals: vec![Agent {
                    position: Vec2::new(0.1 + 0.01 * self.steps as f32, 0.5),
                    rotation: 0.0,
                    speed: 0.001,
                    vision: vec![0.0; config.eye_cells],
                }],
            }
        }

        fn step(&mut self) -> Option<GenerationSummary> {
            self.steps += 1;
            (self.steps % self.summary_every == 0).then(|| GenerationSummary {
                generation: self.steps / self.summary_every,
                best_fitness: 10.0,
                worst_fitness: 1.0,
                avg_fitness: 5.0,
            })
        }

        fn age(&self) -> usize {
            self.steps
        }

        fn generation(&self) -> usize {
            self.steps / self.summary_every
        }
    }

    #[test]
    fn starts_active() {
        let bridge = SimulationBridge::new(ScriptedSim { steps: 0, summary_every: 10 });
        assert!(bridge.is_active());
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut bridge = SimulationBridge::new(ScriptedSim { steps: 0, summary_every: 10 });
        let initial = bridge.is_active();
        assert_eq!(bridge.toggle(), !initial);
        assert_eq!(bridge.toggle(), initial);
    }

    #[test]
    fn pause_resume() {
        let mut bridge = SimulationBridge::new(ScriptedSim { steps: 0, summary_every: 10 });
        bridge.pause();
        assert!(!bridge.is_active());
        bridge.resume();
        assert!(bridge.is_active());
    }

    #[test]
    fn step_passes_summaries_through() {
        let mut bridge = SimulationBridge::new(ScriptedSim { steps: 0, summary_every: 3 });
        assert!(bridge.step().is_none());
        assert!(bridge.step().is_none());
        let summary = bridge.step().unwrap();
        assert_eq!(summary.generation, 1);
        assert_eq!(bridge.age(), 3);
    }

    #[test]
    fn world_reflects_steps() {
        let mut bridge = SimulationBridge::new(ScriptedSim { steps: 0, summary_every: 10 });
        let before = bridge.world();
        bridge.step();
        let after = bridge.world();
        assert!(after.animals[0].position.x > before.animals[0].position.x);
    }

    #[test]
    fn boxed_engine_works() {
        let sim: Box<dyn Simulation> = Box::new(ScriptedSim { steps: 0, summary_every: 10 });
        let mut bridge = SimulationBridge::new(sim);
        bridge.step();
        assert_eq!(bridge.age(), 1);
    }
}
