/// Fixed periods of the session's recurring tasks, in milliseconds.

#[derive(Debug, Clone, Copy)]
pub struct ScheduleTuning {
    pub movement_period_ms: u64,
    pub elapsed_period_ms: u64,
}

impl Default for ScheduleTuning {
    fn default() -> Self {
        Self {
            movement_period_ms: 20,
            elapsed_period_ms: 1000,
        }
    }
}
