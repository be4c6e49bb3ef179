// Session-scoped mutable fields: lifecycle state, score, and difficulty.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Active,
    Ended,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    pub state: SessionState,
    // Seconds survived in the current (or last) session; frozen on end.
    pub elapsed_seconds: u64,
    // Copy of elapsed_seconds taken at the moment the last session ended.
    pub last_score: u64,
    pub spawn_interval_ms: u64,
    pub shooting_allowed: bool,
}

impl GameSession {
    pub fn new(initial_spawn_interval_ms: u64) -> Self {
        Self {
            state: SessionState::Idle,
            elapsed_seconds: 0,
            last_score: 0,
            spawn_interval_ms: initial_spawn_interval_ms,
            shooting_allowed: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    /// Resets per-session counters and enters Active. Returns false when already Active.
    pub fn begin(&mut self, initial_spawn_interval_ms: u64, shooting_allowed: bool) -> bool {
        if self.is_active() {
            return false;
        }
        self.state = SessionState::Active;
        self.elapsed_seconds = 0;
        self.spawn_interval_ms = initial_spawn_interval_ms;
        self.shooting_allowed = shooting_allowed;
        true
    }

    /// Records the score and enters Ended. Returns false unless the session was Active.
    pub fn finish(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.state = SessionState::Ended;
        self.last_score = self.elapsed_seconds;
        self.shooting_allowed = false;
        true
    }
}
