use crate::domain::state::EntityStore;
use rand::Rng;

/// Uniform horizontal offset in `[0, max_offset_pct)` percent of the viewport width.
pub fn random_offset(rng: &mut impl Rng, max_offset_pct: f32) -> f32 {
    if max_offset_pct <= 0.0 {
        return 0.0;
    }
    rng.gen_range(0.0..max_offset_pct)
}

/// Moves every hazard down by `fall_step` and drops those that left the viewport.
/// Returns how many were dropped.
pub fn fall_and_prune(store: &mut EntityStore, fall_step: f32, viewport_height: f32) -> usize {
    for hazard in store.hazards_mut() {
        hazard.top += fall_step;
    }

    let before = store.hazard_count();
    store.retain_hazards(|h| h.top <= viewport_height);
    before - store.hazard_count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::Size;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const CUBE: Size = Size {
        width: 50.0,
        height: 50.0,
    };

    #[test]
    fn offsets_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let offset = random_offset(&mut rng, 90.0);
            assert!((0.0..90.0).contains(&offset), "offset {offset} out of range");
        }
    }

    #[test]
    fn hazards_fall_by_the_step() {
        let mut store = EntityStore::new(CUBE);
        let id = store.insert_hazard(10.0, CUBE);
        fall_and_prune(&mut store, 5.0, 600.0);
        fall_and_prune(&mut store, 5.0, 600.0);
        assert_eq!(store.hazard(id).map(|h| h.top), Some(10.0));
    }

    #[test]
    fn hazards_below_the_viewport_are_dropped() {
        let mut store = EntityStore::new(CUBE);
        let low = store.insert_hazard(10.0, CUBE);
        let high = store.insert_hazard(20.0, CUBE);
        if let Some(h) = store.hazard_mut(low) {
            h.top = 598.0;
        }

        let dropped = fall_and_prune(&mut store, 5.0, 600.0);
        assert_eq!(dropped, 1);
        assert!(store.hazard(low).is_none());
        assert!(store.hazard(high).is_some());
    }
}
