use crate::domain::ViewportSize;
use crate::interface_adapters::protocol::{ClientMessage, ServerMessage, SnapshotDto};
use crate::use_cases::{GameEvent, GameSnapshot, SessionHandle, StateChange};

use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::{broadcast, watch};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub enum ConsoleError {
    // Categorizes adapter failures so the runtime can report them.
    Io(std::io::Error),
    Serialization(serde_json::Error),
    InputClosed,
}

impl std::fmt::Display for ConsoleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConsoleError::Io(e) => write!(f, "console io error: {e}"),
            ConsoleError::Serialization(e) => write!(f, "failed to serialize message: {e}"),
            ConsoleError::InputClosed => write!(f, "session stopped accepting commands"),
        }
    }
}

impl std::error::Error for ConsoleError {}

impl From<std::io::Error> for ConsoleError {
    fn from(e: std::io::Error) -> Self {
        ConsoleError::Io(e)
    }
}

impl From<serde_json::Error> for ConsoleError {
    fn from(e: serde_json::Error) -> Self {
        ConsoleError::Serialization(e)
    }
}

impl From<ConsoleError> for std::io::Error {
    fn from(e: ConsoleError) -> Self {
        match e {
            ConsoleError::Io(e) => e,
            other => std::io::Error::other(other.to_string()),
        }
    }
}

/// What a single client line asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Game(GameEvent),
    // Raw dimensions; validated before they reach the viewport.
    Resize { width: f32, height: f32 },
    Quit,
}

impl From<ClientMessage> for Command {
    fn from(msg: ClientMessage) -> Self {
        match msg {
            ClientMessage::Start => Command::Game(GameEvent::Start),
            ClientMessage::Shoot => Command::Game(GameEvent::Shoot),
            ClientMessage::KeyDown(payload) => Command::Game(GameEvent::KeyDown { key: payload.key }),
            ClientMessage::KeyUp(payload) => Command::Game(GameEvent::KeyUp { key: payload.key }),
            ClientMessage::Resize(payload) => Command::Resize {
                width: payload.width,
                height: payload.height,
            },
            ClientMessage::Quit => Command::Quit,
        }
    }
}

/// Reads JSON-lines commands until EOF or `Quit`, forwarding game events to the session and
/// resizes to the viewport channel. Malformed lines are logged and skipped.
pub async fn command_reader<R>(
    reader: R,
    session: SessionHandle,
    viewport_tx: watch::Sender<Option<ViewportSize>>,
) -> Result<(), ConsoleError>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let msg = match serde_json::from_str::<ClientMessage>(line) {
            Ok(msg) => msg,
            Err(e) => {
                warn!(error = %e, line, "ignoring malformed command");
                continue;
            }
        };

        match Command::from(msg) {
            Command::Game(event) => {
                session
                    .send(event)
                    .await
                    .map_err(|_| ConsoleError::InputClosed)?;
            }
            Command::Resize { width, height } => match ViewportSize::checked(width, height) {
                Some(size) => {
                    debug!(width, height, "viewport resized");
                    viewport_tx.send_replace(Some(size));
                }
                None => warn!(width, height, "ignoring unusable viewport size"),
            },
            Command::Quit => {
                info!("quit requested");
                return Ok(());
            }
        }
    }

    debug!("command input reached EOF");
    Ok(())
}

/// Writes one `GameState` line for the starting state and for every transition after it,
/// and samples the latest snapshot every `interval`, writing it when it changed.
/// Exits after the final snapshot once every sender of the transition stream is gone.
pub async fn snapshot_writer<W>(
    mut snapshot_rx: watch::Receiver<GameSnapshot>,
    initial_state: StateChange,
    mut state_rx: broadcast::Receiver<StateChange>,
    mut writer: W,
    interval: Duration,
) -> Result<(), ConsoleError>
where
    W: AsyncWrite + Unpin,
{
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    write_message(&mut writer, &ServerMessage::GameState(initial_state.into())).await?;
    let mut last_state = initial_state;
    let mut last_written: Option<GameSnapshot> = None;

    loop {
        tokio::select! {
            biased;
            change = state_rx.recv() => match change {
                // A subscription taken mid-step can repeat the state it started from.
                Ok(change) if change == last_state => {}
                Ok(change) => {
                    write_message(&mut writer, &ServerMessage::GameState(change.into())).await?;
                    last_state = change;
                }
                Err(broadcast::error::RecvError::Lagged(missed)) => {
                    warn!(missed, "state stream lagged; transitions were dropped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    debug!("state stream closed; writer exiting");
                    break;
                }
            },
            _ = ticker.tick() => {
                write_changed_snapshot(&mut snapshot_rx, &mut last_written, &mut writer).await?;
            }
        }
    }

    write_changed_snapshot(&mut snapshot_rx, &mut last_written, &mut writer).await?;
    writer.flush().await?;
    Ok(())
}

async fn write_changed_snapshot<W>(
    snapshot_rx: &mut watch::Receiver<GameSnapshot>,
    last_written: &mut Option<GameSnapshot>,
    writer: &mut W,
) -> Result<(), ConsoleError>
where
    W: AsyncWrite + Unpin,
{
    let snapshot = snapshot_rx.borrow_and_update().clone();
    if last_written.as_ref() == Some(&snapshot) {
        return Ok(());
    }
    write_message(writer, &ServerMessage::Snapshot(SnapshotDto::from(&snapshot))).await?;
    *last_written = Some(snapshot);
    Ok(())
}

async fn write_message<W>(writer: &mut W, msg: &ServerMessage) -> Result<(), ConsoleError>
where
    W: AsyncWrite + Unpin,
{
    let mut line = serde_json::to_string(msg)?;
    line.push('\n');
    writer.write_all(line.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}
