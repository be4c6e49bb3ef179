use super::scheduler::{Scheduler, TaskKind};
use super::types::{GameEvent, GameSnapshot, StateChange};
use crate::domain::systems::{collision, difficulty, hazards, movement, projectiles};
use crate::domain::tuning::GameTuning;
use crate::domain::{
    EntityStore, GameSession, InputState, Key, KeyPress, ProjectileId, SessionState, Viewport,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, info};

/// Whether `shoot()` may create projectiles once a session is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShootingPolicy {
    /// Shooting is never enabled; the action key is inert.
    #[default]
    Disabled,
    /// Shooting is enabled for the whole active session.
    WhileActive,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EngineSettings {
    pub tuning: GameTuning,
    pub shooting: ShootingPolicy,
    /// Fixed seed for hazard placement; entropy when unset.
    pub rng_seed: Option<u64>,
}

/// The session state machine and the callbacks of every scheduled task.
///
/// Time is virtual: the engine only moves when `advance_to` is called, and fires every timer
/// that fell due in deadline order. All mutation happens through `&mut self`, so callers that
/// own the engine on a single task get serialized updates without locking.
pub struct GameEngine<V> {
    viewport: V,
    tuning: GameTuning,
    shooting: ShootingPolicy,
    session: GameSession,
    entities: EntityStore,
    input: InputState,
    scheduler: Scheduler,
    rng: StdRng,
    // Transitions not yet collected by the driver.
    transitions: Vec<StateChange>,
}

impl<V: Viewport> GameEngine<V> {
    pub fn new(viewport: V, settings: EngineSettings) -> Self {
        let tuning = settings.tuning;
        let rng = match settings.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut entities = EntityStore::new(tuning.player.size);
        if let Some(size) = viewport.size() {
            entities.recenter_player(size);
        }

        Self {
            viewport,
            tuning,
            shooting: settings.shooting,
            session: GameSession::new(tuning.difficulty.initial_spawn_interval_ms),
            entities,
            input: InputState::new(),
            scheduler: Scheduler::new(),
            rng,
            transitions: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.session.state
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn entities(&self) -> &EntityStore {
        &self.entities
    }

    pub fn now_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Virtual time of the next armed task, or None when nothing is scheduled.
    pub fn next_deadline(&self) -> Option<u64> {
        self.scheduler.next_due()
    }

    pub fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::Start => self.start(),
            GameEvent::Shoot => {
                self.shoot();
            }
            GameEvent::KeyDown { key } => self.on_key_down(&key),
            GameEvent::KeyUp { key } => self.on_key_up(&key),
        }
    }

    pub fn start(&mut self) {
        let allow_shooting = self.shooting == ShootingPolicy::WhileActive;
        if !self
            .session
            .begin(self.tuning.difficulty.initial_spawn_interval_ms, allow_shooting)
        {
            debug!("start ignored; session already active");
            return;
        }

        self.entities.clear_transient();
        self.recenter_player();
        self.input.clear();

        let schedule = self.tuning.schedule;
        self.scheduler.cancel_all();
        self.scheduler.arm(TaskKind::Movement, schedule.movement_period_ms);
        self.scheduler.arm(TaskKind::Spawn, self.session.spawn_interval_ms);
        self.scheduler.arm(TaskKind::Elapsed, schedule.elapsed_period_ms);
        self.scheduler.arm(TaskKind::Ramp, self.tuning.difficulty.ramp_period_ms);
        self.record_transition();

        info!(
            at_ms = self.now_ms(),
            spawn_interval_ms = self.session.spawn_interval_ms,
            shooting_allowed = self.session.shooting_allowed,
            "session started"
        );
    }

    pub fn end(&mut self) {
        if !self.session.finish() {
            debug!(state = ?self.session.state, "end ignored; session not active");
            return;
        }

        // Nothing armed for the ended session may fire again, including ticks due right now.
        let cancelled = self.scheduler.cancel_all();
        self.entities.clear_transient();
        self.recenter_player();
        self.input.clear();
        self.record_transition();

        info!(
            at_ms = self.now_ms(),
            last_score = self.session.last_score,
            cancelled_tasks = cancelled,
            "session ended"
        );
    }

    /// Fires a projectile from the player's position when shooting is allowed.
    pub fn shoot(&mut self) -> Option<ProjectileId> {
        if !self.session.is_active() || !self.session.shooting_allowed {
            return None;
        }

        let tuning = self.tuning.projectile;
        let origin = self.entities.player().position;
        let id = self.entities.insert_projectile(origin, tuning.size);
        self.scheduler.arm(TaskKind::Projectile(id), tuning.tick_ms);
        debug!(projectile_id = id.0, top = origin.top, left = origin.left, "projectile fired");
        Some(id)
    }

    pub fn on_key_down(&mut self, raw: &str) {
        if !self.session.is_active() {
            return;
        }
        if self.input.key_down(Key::parse(raw)) == KeyPress::Fire {
            self.shoot();
        }
    }

    pub fn on_key_up(&mut self, raw: &str) {
        if !self.session.is_active() {
            return;
        }
        self.input.key_up(Key::parse(raw));
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.session.state,
            player: self.entities.player().into(),
            hazards: self.entities.hazards().map(Into::into).collect(),
            projectiles: self.entities.projectiles().map(Into::into).collect(),
            elapsed_seconds: self.session.elapsed_seconds,
            last_score: self.session.last_score,
            spawn_interval_ms: self.session.spawn_interval_ms,
            shooting_allowed: self.session.shooting_allowed,
        }
    }

    /// Drains the lifecycle transitions performed since the last call, oldest first.
    pub fn take_transitions(&mut self) -> Vec<StateChange> {
        std::mem::take(&mut self.transitions)
    }

    /// Runs every task due up to and including `now_ms`, then moves the clock there.
    pub fn advance_to(&mut self, now_ms: u64) {
        while let Some(task) = self.scheduler.pop_due(now_ms) {
            self.run_task(task);
        }
        self.scheduler.settle(now_ms);
    }

    pub fn advance(&mut self, by: Duration) {
        let by_ms = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        self.advance_to(self.now_ms().saturating_add(by_ms));
    }

    fn run_task(&mut self, task: TaskKind) {
        if !self.session.is_active() {
            debug!(?task, "task fired outside an active session; ignored");
            return;
        }
        match task {
            TaskKind::Movement => self.movement_tick(),
            TaskKind::Projectile(id) => self.projectile_tick(id),
            TaskKind::Spawn => self.spawn_tick(),
            TaskKind::Elapsed => self.session.elapsed_seconds += 1,
            TaskKind::Ramp => self.ramp_tick(),
        }
    }

    fn movement_tick(&mut self) {
        let Some(viewport) = self.viewport.size() else {
            debug!("viewport unavailable; movement tick skipped");
            return;
        };

        let player = self.tuning.player;
        let cfg = movement::MovementConfig::new(player.movement_step, viewport, player.size);
        let next = movement::step_player(self.entities.player().position, &self.input, cfg);
        self.entities.set_player_position(next);

        let dropped =
            hazards::fall_and_prune(&mut self.entities, self.tuning.hazard.fall_step, viewport.height);
        if dropped > 0 {
            debug!(dropped, "hazards left the viewport");
        }

        let player_rect = self.entities.player().rect();
        let hit = collision::first_hit(
            &player_rect,
            self.entities
                .hazards()
                .map(|h| (h.id, h.rect(viewport.width))),
        );
        if let Some(hazard_id) = hit {
            info!(
                hazard_id = hazard_id.0,
                elapsed_seconds = self.session.elapsed_seconds,
                "player hit"
            );
            self.end();
        }
    }

    fn spawn_tick(&mut self) {
        if self.viewport.size().is_none() {
            debug!("viewport unavailable; spawn skipped");
            return;
        }
        let tuning = self.tuning.hazard;
        let offset_pct = hazards::random_offset(&mut self.rng, tuning.max_offset_pct);
        let id = self.entities.insert_hazard(offset_pct, tuning.size);
        debug!(hazard_id = id.0, offset_pct, "hazard spawned");
    }

    fn ramp_tick(&mut self) {
        let current = self.session.spawn_interval_ms;
        let next = difficulty::next_spawn_interval(current, &self.tuning.difficulty);
        if next == current {
            return;
        }
        self.session.spawn_interval_ms = next;
        // The new period counts from now; the old pending spawn is dropped.
        self.scheduler.arm(TaskKind::Spawn, next);
        debug!(from_ms = current, to_ms = next, "spawn interval ramped");
    }

    fn projectile_tick(&mut self, id: ProjectileId) {
        match projectiles::advance_projectile(&mut self.entities, id, self.tuning.projectile.step) {
            projectiles::ProjectileFate::InFlight => {}
            projectiles::ProjectileFate::Expired | projectiles::ProjectileFate::Missing => {
                self.scheduler.cancel(TaskKind::Projectile(id));
            }
        }
    }

    fn record_transition(&mut self) {
        self.transitions.push(StateChange {
            state: self.session.state,
            last_score: self.session.last_score,
        });
    }

    fn recenter_player(&mut self) {
        if let Some(size) = self.viewport.size() {
            self.entities.recenter_player(size);
        }
    }
}
