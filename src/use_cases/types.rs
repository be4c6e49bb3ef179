// Use-case level inputs/outputs for the session task.

use crate::domain::{HazardSnapshot, PlayerSnapshot, ProjectileSnapshot, SessionState};

/// Commands the presentation layer forwards into the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    Start,
    Shoot,
    KeyDown { key: String },
    KeyUp { key: String },
}

/// Read-only view of the engine handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub state: SessionState,
    pub player: PlayerSnapshot,
    pub hazards: Vec<HazardSnapshot>,
    pub projectiles: Vec<ProjectileSnapshot>,
    pub elapsed_seconds: u64,
    pub last_score: u64,
    pub spawn_interval_ms: u64,
    pub shooting_allowed: bool,
}

/// One lifecycle transition, published in the order the engine performed them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    pub state: SessionState,
    // Meaningful once the session has ended at least once.
    pub last_score: u64,
}

impl From<&GameSnapshot> for StateChange {
    fn from(snapshot: &GameSnapshot) -> Self {
        Self {
            state: snapshot.state,
            last_score: snapshot.last_score,
        }
    }
}
