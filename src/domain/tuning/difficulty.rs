/// Spawn-interval ramp applied while a session is running.

#[derive(Debug, Clone, Copy)]
pub struct DifficultyTuning {
    pub initial_spawn_interval_ms: u64,
    pub ramp_step_ms: u64,
    pub min_spawn_interval_ms: u64,
    /// How often the ramp is applied.
    pub ramp_period_ms: u64,
}

impl Default for DifficultyTuning {
    fn default() -> Self {
        Self {
            initial_spawn_interval_ms: 2000,
            ramp_step_ms: 500,
            min_spawn_interval_ms: 500,
            ramp_period_ms: 10_000,
        }
    }
}
