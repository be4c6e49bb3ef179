use crate::domain::state::Size;

/// Gameplay tuning for the player-controlled character.
///
/// Keep this separate from runtime configuration (snapshot rates, channel sizes, etc.).
#[derive(Debug, Clone, Copy)]
pub struct PlayerTuning {
    /// Bounding box of the character.
    pub size: Size,

    /// Distance moved per held direction on each movement tick.
    pub movement_step: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            size: Size {
                width: 50.0,
                height: 50.0,
            },
            movement_step: 10.0,
        }
    }
}
