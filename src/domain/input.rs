// Held-key tracking for player movement and edge detection for the action key.

use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Move(Direction),
    Action,
    Other,
}

impl Key {
    /// Maps a raw key identifier as reported by the presentation layer.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "ArrowUp" => Key::Move(Direction::Up),
            "ArrowDown" => Key::Move(Direction::Down),
            "ArrowLeft" => Key::Move(Direction::Left),
            "ArrowRight" => Key::Move(Direction::Right),
            "x" | "X" => Key::Action,
            _ => Key::Other,
        }
    }
}

/// Outcome of a key-down event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    /// The action key went down after being up.
    Fire,
    /// A movement key is now held.
    Held,
    /// Repeat of an already-held action key, or an unmapped key.
    Ignored,
}

#[derive(Debug, Default, Clone)]
pub struct InputState {
    held: HashSet<Direction>,
    action_down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) -> KeyPress {
        match key {
            Key::Move(direction) => {
                self.held.insert(direction);
                KeyPress::Held
            }
            Key::Action if !self.action_down => {
                self.action_down = true;
                KeyPress::Fire
            }
            Key::Action | Key::Other => KeyPress::Ignored,
        }
    }

    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Move(direction) => {
                self.held.remove(&direction);
            }
            Key::Action => self.action_down = false,
            Key::Other => {}
        }
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        self.held.contains(&direction)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.held.is_empty() && !self.action_down
    }

    pub fn clear(&mut self) {
        self.held.clear();
        self.action_down = false;
    }
}
