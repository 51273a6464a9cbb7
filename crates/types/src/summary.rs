use std::fmt;

/// Advisory statistics the simulation may return when a step closes an
/// evolutionary generation. Telemetry only; the frame driver just logs it.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    pub generation: usize,
    pub best_fitness: f32,
    pub worst_fitness: f32,
    pub avg_fitness: f32,
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "generation {}: best {:.2}, worst {:.2}, avg {:.2}",
            self.generation, self.best_fitness, self.worst_fitness, self.avg_fitness
        )
    }
}
