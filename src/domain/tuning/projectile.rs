use crate::domain::state::Size;

/// Gameplay tuning for projectiles.
#[derive(Debug, Clone, Copy)]
pub struct ProjectileTuning {
    pub size: Size,

    /// Upward distance per motion tick.
    pub step: f32,

    /// Period of each projectile's motion task in milliseconds.
    pub tick_ms: u64,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            size: Size {
                width: 10.0,
                height: 10.0,
            },
            step: 5.0,
            tick_ms: 20,
        }
    }
}
