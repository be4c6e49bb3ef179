// JSON-lines protocol between the engine and a presentation client.

use crate::domain::{HazardSnapshot, PlayerSnapshot, ProjectileSnapshot, SessionState};
use crate::use_cases::{GameSnapshot, StateChange};
use serde::{Deserialize, Serialize};

/// Messages the engine writes to the presentation client.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum ServerMessage {
    // Latest view of the session.
    Snapshot(SnapshotDto),
    // Emitted when the session state changes.
    GameState(SessionStateDto),
}

/// Messages the presentation client sends to the engine.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ClientMessage {
    Start,
    Shoot,
    KeyDown(KeyPayload),
    KeyUp(KeyPayload),
    // New viewport dimensions after a window resize.
    Resize(ResizePayload),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KeyPayload {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResizePayload {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotDto {
    pub state: SessionStateDto,
    pub player: PlayerDto,
    pub hazards: Vec<HazardDto>,
    pub projectiles: Vec<ProjectileDto>,
    pub elapsed_seconds: u64,
    pub last_score: u64,
    pub spawn_interval_ms: u64,
    pub shooting_allowed: bool,
}

impl From<&GameSnapshot> for SnapshotDto {
    fn from(snapshot: &GameSnapshot) -> Self {
        Self {
            state: SessionStateDto::from(snapshot),
            player: PlayerDto::from(&snapshot.player),
            hazards: snapshot.hazards.iter().map(HazardDto::from).collect(),
            projectiles: snapshot.projectiles.iter().map(ProjectileDto::from).collect(),
            elapsed_seconds: snapshot.elapsed_seconds,
            last_score: snapshot.last_score,
            spawn_interval_ms: snapshot.spawn_interval_ms,
            shooting_allowed: snapshot.shooting_allowed,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerDto {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&PlayerSnapshot> for PlayerDto {
    fn from(player: &PlayerSnapshot) -> Self {
        Self {
            top: player.top,
            left: player.left,
            width: player.width,
            height: player.height,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HazardDto {
    pub id: String,
    // Percent of the viewport width; the client scales it.
    pub offset_pct: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&HazardSnapshot> for HazardDto {
    fn from(hazard: &HazardSnapshot) -> Self {
        Self {
            id: hazard.id.to_string(),
            offset_pct: hazard.offset_pct,
            top: hazard.top,
            width: hazard.width,
            height: hazard.height,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectileDto {
    pub id: String,
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&ProjectileSnapshot> for ProjectileDto {
    fn from(projectile: &ProjectileSnapshot) -> Self {
        Self {
            id: projectile.id.to_string(),
            top: projectile.top,
            left: projectile.left,
            width: projectile.width,
            height: projectile.height,
        }
    }
}

/// Session lifecycle state sent to clients for UI flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SessionStateDto {
    Idle,
    Active,
    Ended { last_score: u64 },
}

impl From<StateChange> for SessionStateDto {
    fn from(change: StateChange) -> Self {
        match change.state {
            SessionState::Idle => SessionStateDto::Idle,
            SessionState::Active => SessionStateDto::Active,
            SessionState::Ended => SessionStateDto::Ended {
                last_score: change.last_score,
            },
        }
    }
}

impl From<&GameSnapshot> for SessionStateDto {
    fn from(snapshot: &GameSnapshot) -> Self {
        StateChange::from(snapshot).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_unit_and_payload_commands() {
        let start: ClientMessage = serde_json::from_str(r#"{"type":"Start"}"#).expect("start");
        assert_eq!(start, ClientMessage::Start);

        let key: ClientMessage =
            serde_json::from_str(r#"{"type":"KeyDown","data":{"key":"ArrowUp"}}"#).expect("key");
        assert_eq!(
            key,
            ClientMessage::KeyDown(KeyPayload {
                key: "ArrowUp".to_string()
            })
        );

        let resize: ClientMessage =
            serde_json::from_str(r#"{"type":"Resize","data":{"width":800,"height":600}}"#)
                .expect("resize");
        assert_eq!(
            resize,
            ClientMessage::Resize(ResizePayload {
                width: 800.0,
                height: 600.0
            })
        );
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"Pause"}"#).is_err());
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"KeyUp"}"#).is_err());
    }

    #[test]
    fn ended_state_carries_the_score() {
        let snapshot = GameSnapshot {
            state: SessionState::Ended,
            player: PlayerSnapshot {
                top: 1.0,
                left: 2.0,
                width: 50.0,
                height: 50.0,
            },
            hazards: Vec::new(),
            projectiles: vec![ProjectileSnapshot {
                id: 9,
                top: 4.0,
                left: 2.0,
                width: 10.0,
                height: 10.0,
            }],
            elapsed_seconds: 14,
            last_score: 14,
            spawn_interval_ms: 1500,
            shooting_allowed: false,
        };

        let msg = ServerMessage::GameState(SessionStateDto::from(&snapshot));
        assert_eq!(
            serde_json::to_value(&msg).expect("serialize"),
            json!({"type": "GameState", "data": {"Ended": {"last_score": 14}}})
        );

        let msg = ServerMessage::Snapshot(SnapshotDto::from(&snapshot));
        let value = serde_json::to_value(&msg).expect("serialize");
        assert_eq!(value["type"], "Snapshot");
        assert_eq!(value["data"]["spawn_interval_ms"], 1500);
        assert_eq!(value["data"]["projectiles"][0]["id"], "9");
    }
}
