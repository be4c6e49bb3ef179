use crate::domain::ViewportSize;
use crate::use_cases::ShootingPolicy;
use std::{env, time::Duration};

// Runtime constants and environment lookups (not gameplay tuning).

pub const INPUT_CHANNEL_CAPACITY: usize = 1024;

pub fn viewport_size() -> ViewportSize {
    let dimension = |key: &str, default: f32| {
        env::var(key)
            .ok()
            .and_then(|v| v.parse::<f32>().ok())
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(default)
    };
    ViewportSize::new(
        dimension("DODGE_VIEWPORT_WIDTH", 1280.0),
        dimension("DODGE_VIEWPORT_HEIGHT", 720.0),
    )
}

pub fn shooting_policy() -> ShootingPolicy {
    match env::var("DODGE_ALLOW_SHOOTING").as_deref() {
        Ok("1") | Ok("true") | Ok("TRUE") | Ok("yes") => ShootingPolicy::WhileActive,
        _ => ShootingPolicy::Disabled,
    }
}

pub fn rng_seed() -> Option<u64> {
    env::var("DODGE_RNG_SEED")
        .ok()
        .and_then(|v| v.parse().ok())
}

pub fn snapshot_interval() -> Duration {
    let millis = env::var("DODGE_SNAPSHOT_INTERVAL_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(50);
    Duration::from_millis(millis)
}
