use crate::domain::state::{EntityStore, ProjectileId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileFate {
    InFlight,
    /// Reached the top edge and was removed from the store.
    Expired,
    /// No projectile with that id exists (already removed or cleared).
    Missing,
}

/// One motion tick for a single projectile, addressed by id.
///
/// The projectile rises by `step` while its top is positive and is removed in the same tick
/// its top first reaches zero or below.
pub fn advance_projectile(store: &mut EntityStore, id: ProjectileId, step: f32) -> ProjectileFate {
    let Some(projectile) = store.projectile_mut(id) else {
        return ProjectileFate::Missing;
    };

    if projectile.position.top > 0.0 {
        projectile.position.top -= step;
    }

    if projectile.position.top <= 0.0 {
        store.remove_projectile(id);
        ProjectileFate::Expired
    } else {
        ProjectileFate::InFlight
    }
}
