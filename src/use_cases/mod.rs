// Use cases layer: the session engine and the task that drives it.

pub mod game;
pub mod scheduler;
pub mod session;
pub mod types;

pub use game::{EngineSettings, GameEngine, ShootingPolicy};
pub use scheduler::{Scheduler, TaskKind};
pub use session::{SessionError, SessionHandle, session_task, spawn_session};
pub use types::{GameEvent, GameSnapshot, StateChange};
