// Framework bootstrap for the headless game runtime.

use crate::domain::ViewportSize;
use crate::domain::tuning::GameTuning;
use crate::frameworks::config;
use crate::interface_adapters::console::{command_reader, snapshot_writer};
use crate::interface_adapters::viewport::viewport_channel;
use crate::use_cases::{EngineSettings, GameEngine, spawn_session};

use std::io::Result;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncWrite, BufReader};

/// Everything `run` needs, resolved from the environment by `run_with_config`.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeSettings {
    /// Viewport assumed until the client sends a resize.
    pub viewport: ViewportSize,
    pub engine: EngineSettings,
    /// Capacity for inbound client commands.
    pub input_channel_capacity: usize,
    /// How often the latest snapshot is written out.
    pub snapshot_interval: Duration,
}

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // stdout carries the snapshot stream, so logs go to stderr.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

fn build_settings() -> RuntimeSettings {
    let settings = RuntimeSettings {
        viewport: config::viewport_size(),
        engine: EngineSettings {
            tuning: GameTuning::default(),
            shooting: config::shooting_policy(),
            rng_seed: config::rng_seed(),
        },
        input_channel_capacity: config::INPUT_CHANNEL_CAPACITY,
        snapshot_interval: config::snapshot_interval(),
    };
    tracing::debug!(
        viewport_width = settings.viewport.width,
        viewport_height = settings.viewport.height,
        shooting = ?settings.engine.shooting,
        seeded = settings.engine.rng_seed.is_some(),
        snapshot_interval_ms = settings.snapshot_interval.as_millis(),
        "runtime configured"
    );
    settings
}

/// Runs one engine against a command stream and a snapshot sink until the input ends.
pub async fn run<R, W>(settings: RuntimeSettings, reader: R, writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (viewport_tx, viewport) = viewport_channel(Some(settings.viewport));
    let engine = GameEngine::new(viewport, settings.engine);
    let (session, session_task) = spawn_session(engine, settings.input_channel_capacity);

    // Subscribed before any command is read, so the writer sees every transition.
    let (initial_state, state_rx) = session.subscribe_states();
    let writer_task = tokio::spawn(snapshot_writer(
        session.snapshot_rx.clone(),
        initial_state,
        state_rx,
        writer,
        settings.snapshot_interval,
    ));

    tracing::info!("reading commands");
    // The reader owns the last handle; once it returns the session drains what is queued and
    // exits, which closes the transition stream and lets the writer flush the final snapshot.
    let read_result = command_reader(reader, session, viewport_tx).await;

    session_task
        .await
        .map_err(|e| std::io::Error::other(format!("session task failed: {e}")))?;

    let write_result = writer_task
        .await
        .map_err(|e| std::io::Error::other(format!("snapshot writer failed: {e}")))?;

    read_result.inspect_err(|e| tracing::error!(error = %e, "command reader failed"))?;
    write_result.inspect_err(|e| tracing::error!(error = %e, "snapshot writer failed"))?;
    Ok(())
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();
    let settings = build_settings();

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    run(settings, stdin, stdout).await
}
