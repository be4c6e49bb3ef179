use crate::domain::state::Size;

/// Gameplay tuning for falling hazards.
#[derive(Debug, Clone, Copy)]
pub struct HazardTuning {
    pub size: Size,

    /// Downward distance per movement tick.
    pub fall_step: f32,

    /// Upper (exclusive) bound of the random horizontal offset, in percent of viewport width.
    pub max_offset_pct: f32,
}

impl Default for HazardTuning {
    fn default() -> Self {
        Self {
            size: Size {
                width: 50.0,
                height: 50.0,
            },
            fall_step: 5.0,
            max_offset_pct: 90.0,
        }
    }
}
