use crate::domain::input::{Direction, InputState};
use crate::domain::ports::ViewportSize;
use crate::domain::state::{Position, Size};

#[derive(Debug, Clone, Copy)]
pub struct MovementConfig {
    pub step: f32, // units per held key per tick

    pub max_top: f32,
    pub max_left: f32,
}

impl MovementConfig {
    pub fn new(step: f32, viewport: ViewportSize, player: Size) -> Self {
        Self {
            step,
            // A viewport smaller than the player pins it to the origin.
            max_top: (viewport.height - player.height).max(0.0),
            max_left: (viewport.width - player.width).max(0.0),
        }
    }
}

/// Applies one step per held direction and clamps the result to the viewport.
pub fn step_player(position: Position, input: &InputState, cfg: MovementConfig) -> Position {
    let mut top = position.top;
    let mut left = position.left;

    if input.is_held(Direction::Up) {
        top -= cfg.step;
    }
    if input.is_held(Direction::Down) {
        top += cfg.step;
    }
    if input.is_held(Direction::Left) {
        left -= cfg.step;
    }
    if input.is_held(Direction::Right) {
        left += cfg.step;
    }

    clamp_position(Position { top, left }, cfg)
}

pub fn clamp_position(position: Position, cfg: MovementConfig) -> Position {
    Position {
        top: position.top.clamp(0.0, cfg.max_top),
        left: position.left.clamp(0.0, cfg.max_left),
    }
}
