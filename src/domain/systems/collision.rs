use crate::domain::state::{HazardId, Rect};

/// AABB overlap test. Touching edges count as a hit.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    !(a.bottom() < b.top || a.top > b.bottom() || a.right() < b.left || a.left > b.right())
}

/// Returns the first hazard (in iteration order) whose box overlaps the player.
pub fn first_hit<I>(player: &Rect, hazards: I) -> Option<HazardId>
where
    I: IntoIterator<Item = (HazardId, Rect)>,
{
    hazards
        .into_iter()
        .find(|(_, rect)| overlaps(player, rect))
        .map(|(id, _)| id)
}
