use crate::domain::tuning::DifficultyTuning;

/// Next spawn interval after one ramp step. Never rises and never goes below the floor.
pub fn next_spawn_interval(current_ms: u64, tuning: &DifficultyTuning) -> u64 {
    current_ms
        .saturating_sub(tuning.ramp_step_ms)
        .max(tuning.min_spawn_interval_ms)
        .min(current_ms)
}
