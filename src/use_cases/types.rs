// Use-case level inputs/outputs for the engine loops.

use crate::interface_adapters::sink::FrameSink;

/// Lifecycle phase shared by both game engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Home,
    Playing,
    Paused,
    GameOver,
}

/// One raw accelerometer sample from the host's sensor feed. Each game reads
/// only the first two axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltSample {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Host-provided capture time, in microseconds.
    pub timestamp_us: u64,
}

/// Discrete calls into an engine, serialized through its command channel and
/// applied at the next suspend boundary.
#[derive(Debug)]
pub enum EngineCommand {
    /// The single long-press control event driving state transitions.
    LongPress,
    /// A raw tilt sample from the sensor feed.
    Tilt(TiltSample),
    /// Makes the engine renderable.
    AttachSink(FrameSink),
    /// Stops rendering; simulation keeps running.
    DetachSink,
}
