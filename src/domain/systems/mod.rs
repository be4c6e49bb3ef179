// Pure per-tick rules applied by the session's scheduled tasks.

pub mod collision;
pub mod difficulty;
pub mod hazards;
pub mod movement;
pub mod projectiles;
