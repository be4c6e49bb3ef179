// Gameplay tuning grouped per entity kind.

pub mod difficulty;
pub mod hazard;
pub mod player;
pub mod projectile;
pub mod schedule;

pub use difficulty::DifficultyTuning;
pub use hazard::HazardTuning;
pub use player::PlayerTuning;
pub use projectile::ProjectileTuning;
pub use schedule::ScheduleTuning;

#[derive(Debug, Clone, Copy, Default)]
pub struct GameTuning {
    pub player: PlayerTuning,
    pub hazard: HazardTuning,
    pub projectile: ProjectileTuning,
    pub difficulty: DifficultyTuning,
    pub schedule: ScheduleTuning,
}
