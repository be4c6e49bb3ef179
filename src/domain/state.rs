// Domain-level simulation entities and the store that owns them.

use super::ports::ViewportSize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub top: f32,
    pub left: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Axis-aligned rectangle in viewport units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(position: Position, size: Size) -> Self {
        Self {
            top: position.top,
            left: position.left,
            width: size.width,
            height: size.height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HazardId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectileId(pub u64);

#[derive(Debug, Clone)]
pub struct PlayerEntity {
    pub position: Position,
    pub size: Size,
}

impl PlayerEntity {
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }
}

#[derive(Debug, Clone)]
pub struct Hazard {
    pub id: HazardId,
    // Horizontal offset as a percentage of the viewport width.
    pub offset_pct: f32,
    pub top: f32,
    pub size: Size,
}

impl Hazard {
    /// Bounding box for the given viewport width; the pixel offset is derived on every call
    /// so a resize between ticks is honored.
    pub fn rect(&self, viewport_width: f32) -> Rect {
        Rect {
            top: self.top,
            left: self.offset_pct / 100.0 * viewport_width,
            width: self.size.width,
            height: self.size.height,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: ProjectileId,
    pub position: Position,
    pub size: Size,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HazardSnapshot {
    pub id: u64,
    pub offset_pct: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileSnapshot {
    pub id: u64,
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&PlayerEntity> for PlayerSnapshot {
    fn from(p: &PlayerEntity) -> Self {
        Self {
            top: p.position.top,
            left: p.position.left,
            width: p.size.width,
            height: p.size.height,
        }
    }
}

impl From<&Hazard> for HazardSnapshot {
    fn from(h: &Hazard) -> Self {
        Self {
            id: h.id.0,
            offset_pct: h.offset_pct,
            top: h.top,
            width: h.size.width,
            height: h.size.height,
        }
    }
}

impl From<&Projectile> for ProjectileSnapshot {
    fn from(p: &Projectile) -> Self {
        Self {
            id: p.id.0,
            top: p.position.top,
            left: p.position.left,
            width: p.size.width,
            height: p.size.height,
        }
    }
}

/// Authoritative positions of every entity in the session.
///
/// Hazards and projectiles are keyed by identifier so removals never depend on insertion
/// order. Identifiers keep increasing across sessions.
#[derive(Debug)]
pub struct EntityStore {
    player: PlayerEntity,
    hazards: BTreeMap<HazardId, Hazard>,
    projectiles: BTreeMap<ProjectileId, Projectile>,
    next_hazard_id: u64,
    next_projectile_id: u64,
}

impl EntityStore {
    pub fn new(player_size: Size) -> Self {
        Self {
            player: PlayerEntity {
                position: Position::default(),
                size: player_size,
            },
            hazards: BTreeMap::new(),
            projectiles: BTreeMap::new(),
            next_hazard_id: 1,
            next_projectile_id: 1,
        }
    }

    pub fn player(&self) -> &PlayerEntity {
        &self.player
    }

    pub fn set_player_position(&mut self, position: Position) {
        self.player.position = position;
    }

    /// Places the player in the middle of the viewport.
    pub fn recenter_player(&mut self, viewport: ViewportSize) {
        let size = self.player.size;
        self.player.position = Position {
            top: (viewport.height / 2.0 - size.height / 2.0).max(0.0),
            left: (viewport.width / 2.0 - size.width / 2.0).max(0.0),
        };
    }

    pub fn insert_hazard(&mut self, offset_pct: f32, size: Size) -> HazardId {
        let id = HazardId(self.next_hazard_id);
        self.next_hazard_id = self.next_hazard_id.wrapping_add(1);
        self.hazards.insert(
            id,
            Hazard {
                id,
                offset_pct,
                top: 0.0,
                size,
            },
        );
        id
    }

    pub fn hazards(&self) -> impl Iterator<Item = &Hazard> {
        self.hazards.values()
    }

    pub fn hazards_mut(&mut self) -> impl Iterator<Item = &mut Hazard> {
        self.hazards.values_mut()
    }

    #[cfg(test)]
    pub fn hazard(&self, id: HazardId) -> Option<&Hazard> {
        self.hazards.get(&id)
    }

    #[cfg(test)]
    pub fn hazard_mut(&mut self, id: HazardId) -> Option<&mut Hazard> {
        self.hazards.get_mut(&id)
    }

    pub fn retain_hazards(&mut self, mut keep: impl FnMut(&Hazard) -> bool) {
        self.hazards.retain(|_, h| keep(h));
    }

    pub fn hazard_count(&self) -> usize {
        self.hazards.len()
    }

    pub fn insert_projectile(&mut self, position: Position, size: Size) -> ProjectileId {
        let id = ProjectileId(self.next_projectile_id);
        self.next_projectile_id = self.next_projectile_id.wrapping_add(1);
        self.projectiles.insert(id, Projectile { id, position, size });
        id
    }

    pub fn projectiles(&self) -> impl Iterator<Item = &Projectile> {
        self.projectiles.values()
    }

    pub fn projectile_mut(&mut self, id: ProjectileId) -> Option<&mut Projectile> {
        self.projectiles.get_mut(&id)
    }

    pub fn remove_projectile(&mut self, id: ProjectileId) -> Option<Projectile> {
        self.projectiles.remove(&id)
    }

    #[cfg(test)]
    pub fn projectile_count(&self) -> usize {
        self.projectiles.len()
    }

    // Bulk clear of everything that only lives during an active session.
    pub fn clear_transient(&mut self) {
        self.hazards.clear();
        self.projectiles.clear();
    }
}
