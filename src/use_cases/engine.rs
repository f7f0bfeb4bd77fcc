// Cooperative frame scheduling shared by both engines.
//
// Each engine runs as one spawned task that owns all of its state; commands
// arrive over a channel and take effect at the next suspend boundary. At
// most one deadline is armed at a time — the simulation tick while playing,
// the idle blink while on the home screen, none otherwise — so the two
// loops are mutually exclusive by construction and pausing disarms the tick
// instead of interrupting anything mid-frame.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Notify, mpsc, watch};
use tokio::time::{Instant, sleep_until};

use crate::interface_adapters::sink::FrameSink;
use crate::use_cases::types::{EngineCommand, GameState, TiltSample};

/// The capability set both game engines implement: advance, render, handle
/// the long-press control, reset. Hosts bind a concrete engine; nothing here
/// is used as a trait object.
pub trait TickGame {
    fn state(&self) -> GameState;

    /// The single discrete control event; drives every state transition.
    fn handle_long_press(&mut self);

    /// A raw tilt sample, mapped onto the game's control signal.
    fn handle_tilt(&mut self, sample: TiltSample);

    /// Advances the simulation by one tick and renders the result. A run
    /// that ends here renders its terminal frame immediately, not on a
    /// later schedule.
    fn advance(&mut self);

    /// One idle-screen animation step: render, then toggle the blink phase.
    fn render_idle(&mut self);

    /// Delay before the next simulation tick.
    fn tick_delay(&self) -> Duration;

    /// Delay between idle-screen animation steps.
    fn idle_delay(&self) -> Duration;

    fn bind_sink(&mut self, sink: FrameSink);
    fn release_sink(&mut self);
}

/// Deadline for the engine's single active loop, if any state needs one.
fn arm<G: TickGame>(game: &G) -> Option<Instant> {
    match game.state() {
        GameState::Playing => Some(Instant::now() + game.tick_delay()),
        GameState::Home => Some(Instant::now() + game.idle_delay()),
        GameState::Paused | GameState::GameOver => None,
    }
}

/// Owns one engine: applies commands, paces the active loop, publishes
/// state changes. Returns when the shutdown gate fires or every command
/// sender is dropped.
pub async fn engine_task<G: TickGame>(
    mut game: G,
    mut commands: mpsc::Receiver<EngineCommand>,
    state_tx: watch::Sender<GameState>,
    shutdown: Arc<Notify>,
) {
    let mut deadline = arm(&game);

    loop {
        let sleep_target = deadline.unwrap_or_else(Instant::now);
        tokio::select! {
            _ = shutdown.notified() => break,
            command = commands.recv() => {
                let Some(command) = command else { break };
                let before = game.state();
                match command {
                    EngineCommand::LongPress => game.handle_long_press(),
                    EngineCommand::Tilt(sample) => game.handle_tilt(sample),
                    EngineCommand::AttachSink(sink) => game.bind_sink(sink),
                    EngineCommand::DetachSink => game.release_sink(),
                }
                if game.state() != before {
                    // A transition swaps which loop is active; re-arm from now.
                    deadline = arm(&game);
                }
            }
            _ = sleep_until(sleep_target), if deadline.is_some() => {
                match game.state() {
                    GameState::Playing => game.advance(),
                    GameState::Home => game.render_idle(),
                    GameState::Paused | GameState::GameOver => {}
                }
                deadline = arm(&game);
            }
        }

        if *state_tx.borrow() != game.state() {
            let _ = state_tx.send(game.state());
        }
    }
}
