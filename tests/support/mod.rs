// Shared builders for session-level integration tests.
use cube_dodge::domain::ViewportSize;
use cube_dodge::domain::tuning::GameTuning;
use cube_dodge::interface_adapters::viewport::FixedViewport;
use cube_dodge::use_cases::{SessionHandle, spawn_session};
use cube_dodge::{EngineSettings, GameEngine, ShootingPolicy};
use tokio::task::JoinHandle;

// Fixed seed so spawn offsets are reproducible across runs.
pub const SEED: u64 = 42;

pub fn settings(tuning: GameTuning, shooting: ShootingPolicy) -> EngineSettings {
    EngineSettings {
        tuning,
        shooting,
        rng_seed: Some(SEED),
    }
}

// Hazards never fall, so a centered player is never hit.
pub fn calm_tuning() -> GameTuning {
    let mut tuning = GameTuning::default();
    tuning.hazard.fall_step = 0.0;
    tuning
}

// Spawn a session task over a fixed viewport and return its handle and join handle.
#[allow(dead_code)]
pub fn spawn(
    width: f32,
    height: f32,
    settings: EngineSettings,
) -> (SessionHandle, JoinHandle<()>) {
    let engine = GameEngine::new(FixedViewport(ViewportSize::new(width, height)), settings);
    spawn_session(engine, 64)
}
