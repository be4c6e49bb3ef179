// Domain layer: core simulation types and rules.

pub mod input;
pub mod ports;
pub mod session;
pub mod state;
pub mod systems;
pub mod tuning;

pub use input::{Direction, InputState, Key, KeyPress};
pub use ports::{Viewport, ViewportSize};
pub use session::{GameSession, SessionState};
pub use state::{
    EntityStore, Hazard, HazardId, HazardSnapshot, PlayerEntity, PlayerSnapshot, Position,
    Projectile, ProjectileId, ProjectileSnapshot, Rect, Size,
};
