// Runtime bootstrap and the host-facing engine handle.

use std::sync::Arc;

use tokio::sync::{Notify, mpsc, watch};
use tokio::task::JoinHandle;

use crate::frameworks::config;
use crate::frameworks::store::FileSettings;
use crate::interface_adapters::settings::SharedSettings;
use crate::interface_adapters::sink::{Frame, FrameSink};
use crate::use_cases::engine::{TickGame, engine_task};
use crate::use_cases::jump::JumpEngine;
use crate::use_cases::snake::SnakeEngine;
use crate::use_cases::types::{EngineCommand, GameState, TiltSample};

/// One-time process setup: env file, structured logging, panic hook.
pub fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

/// Handle the host uses to drive one engine. Every call is non-blocking: it
/// lands on the engine's command queue and takes effect at the next suspend
/// boundary.
pub struct EngineHandle {
    commands: mpsc::Sender<EngineCommand>,
    state_rx: watch::Receiver<GameState>,
    shutdown: Arc<Notify>,
    task: JoinHandle<()>,
}

impl EngineHandle {
    /// Attaches a fresh frame channel and returns its receiving end. The
    /// engine renders its current state once the command is processed;
    /// frames that cannot be delivered are dropped.
    pub fn connect(&self) -> mpsc::Receiver<Frame> {
        let (tx, rx) = mpsc::channel(config::FRAME_CHANNEL_CAPACITY);
        self.send(EngineCommand::AttachSink(FrameSink::new(tx)));
        rx
    }

    /// Stops rendering. Simulation keeps running.
    pub fn disconnect(&self) {
        self.send(EngineCommand::DetachSink);
    }

    pub fn long_press(&self) {
        self.send(EngineCommand::LongPress);
    }

    pub fn tilt(&self, sample: TiltSample) {
        self.send(EngineCommand::Tilt(sample));
    }

    /// Most recently published engine state.
    pub fn state(&self) -> GameState {
        *self.state_rx.borrow()
    }

    /// Watch stream of engine state changes.
    pub fn state_stream(&self) -> watch::Receiver<GameState> {
        self.state_rx.clone()
    }

    /// Cancels whatever loop is active and waits for the engine task to
    /// finish. Cancellation is cooperative: the task exits at its next
    /// suspend boundary.
    pub async fn shutdown(self) {
        self.shutdown.notify_one();
        let _ = self.task.await;
    }

    fn send(&self, command: EngineCommand) {
        if let Err(err) = self.commands.try_send(command) {
            tracing::warn!(%err, "engine command dropped");
        }
    }
}

/// Spawns the engine task for any tick game and returns its handle.
pub fn spawn_engine<G>(game: G) -> EngineHandle
where
    G: TickGame + Send + 'static,
{
    let (commands, command_rx) = mpsc::channel(config::COMMAND_CHANNEL_CAPACITY);
    let (state_tx, state_rx) = watch::channel(game.state());
    let shutdown = Arc::new(Notify::new());
    let task = tokio::spawn(engine_task(game, command_rx, state_tx, Arc::clone(&shutdown)));
    EngineHandle {
        commands,
        state_rx,
        shutdown,
        task,
    }
}

/// Default settings store at the configured path.
pub fn default_settings() -> SharedSettings {
    Arc::new(FileSettings::open(config::settings_path()))
}

/// Spawns the platformer engine with the given settings store.
pub fn spawn_jump(settings: SharedSettings) -> EngineHandle {
    spawn_engine(JumpEngine::new(settings))
}

/// Spawns the snake engine.
pub fn spawn_snake() -> EngineHandle {
    spawn_engine(SnakeEngine::new())
}
