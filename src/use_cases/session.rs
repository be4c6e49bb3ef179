// Async driver that owns the engine and maps tokio time onto its virtual clock.

use super::game::GameEngine;
use super::types::{GameEvent, GameSnapshot, StateChange};
use crate::domain::Viewport;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Notify, broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

// Transitions are rare; this only has to cover a slow subscriber between two writes.
const STATE_BROADCAST_CAPACITY: usize = 64;

#[derive(Debug)]
pub enum SessionError {
    /// The session task has exited and no longer accepts commands.
    Closed,
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Closed => write!(f, "session task closed"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Channels into and out of a running session task.
#[derive(Clone)]
pub struct SessionHandle {
    /// Sender for commands into the session task.
    pub input_tx: mpsc::Sender<GameEvent>,
    /// Latest snapshot published after every processed step.
    pub snapshot_rx: watch::Receiver<GameSnapshot>,
    /// Every lifecycle transition, including ones shorter than any sampling interval.
    pub state_tx: broadcast::Sender<StateChange>,
    /// Signals the session task to exit.
    pub shutdown: Arc<Notify>,
}

impl SessionHandle {
    pub async fn send(&self, event: GameEvent) -> Result<(), SessionError> {
        self.input_tx
            .send(event)
            .await
            .map_err(|_| SessionError::Closed)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Current state plus a receiver for every transition after it.
    ///
    /// Subscribing while a step is being published can repeat that step's transitions; a
    /// subscriber taken before the first command sees the exact sequence.
    pub fn subscribe_states(&self) -> (StateChange, broadcast::Receiver<StateChange>) {
        let rx = self.state_tx.subscribe();
        let current = StateChange::from(&*self.snapshot_rx.borrow());
        (current, rx)
    }

    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }
}

/// Spawns the session task for `engine` and returns its handle.
pub fn spawn_session<V>(
    engine: GameEngine<V>,
    input_channel_capacity: usize,
) -> (SessionHandle, JoinHandle<()>)
where
    V: Viewport + 'static,
{
    let (input_tx, input_rx) = mpsc::channel::<GameEvent>(input_channel_capacity);
    let (snapshot_tx, snapshot_rx) = watch::channel(engine.snapshot());
    let (state_tx, _) = broadcast::channel::<StateChange>(STATE_BROADCAST_CAPACITY);
    let shutdown = Arc::new(Notify::new());

    let task = tokio::spawn(session_task(
        engine,
        input_rx,
        snapshot_tx,
        state_tx.clone(),
        shutdown.clone(),
    ));

    let handle = SessionHandle {
        input_tx,
        snapshot_rx,
        state_tx,
        shutdown,
    };
    (handle, task)
}

/// Owns the engine for its whole lifetime. Commands and timer deadlines are handled one at a
/// time on this task, so every engine mutation is serialized.
pub async fn session_task<V: Viewport>(
    mut engine: GameEngine<V>,
    mut input_rx: mpsc::Receiver<GameEvent>,
    snapshot_tx: watch::Sender<GameSnapshot>,
    state_tx: broadcast::Sender<StateChange>,
    shutdown: Arc<Notify>,
) {
    // Engine time 0 corresponds to `origin`; the engine clock may already be ahead of it.
    let now = Instant::now();
    let origin = now
        .checked_sub(Duration::from_millis(engine.now_ms()))
        .unwrap_or(now);

    loop {
        let deadline = engine
            .next_deadline()
            .map(|due_ms| origin + Duration::from_millis(due_ms));

        tokio::select! {
            biased;
            _ = shutdown.notified() => {
                // Exit cleanly when the runtime shuts the session down.
                break;
            }
            maybe_event = input_rx.recv() => {
                let Some(event) = maybe_event else {
                    debug!("input channel closed; session task exiting");
                    break;
                };
                // Catch up on everything that fell due before the command arrived.
                engine.advance_to(elapsed_ms(origin));
                engine.apply(event);
            }
            _ = sleep_until_deadline(deadline) => {
                engine.advance_to(elapsed_ms(origin));
            }
        }

        snapshot_tx.send_replace(engine.snapshot());
        for change in engine.take_transitions() {
            // No subscribers is fine; the snapshot still carries the state.
            let _ = state_tx.send(change);
        }
    }

    info!(
        last_score = engine.session().last_score,
        "session task stopped"
    );
}

fn elapsed_ms(origin: Instant) -> u64 {
    u64::try_from(origin.elapsed().as_millis()).unwrap_or(u64::MAX)
}

async fn sleep_until_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at).await,
        None => std::future::pending::<()>().await,
    }
}
