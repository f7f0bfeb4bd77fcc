// Use cases layer: engine workflows built on the domain simulations.

pub mod engine;
pub mod jump;
pub mod snake;
pub mod types;

pub use engine::{TickGame, engine_task};
pub use jump::JumpEngine;
pub use snake::SnakeEngine;
pub use types::{EngineCommand, GameState, TiltSample};
