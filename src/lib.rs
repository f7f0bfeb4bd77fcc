pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::service::{
    EngineHandle, default_settings, init_runtime, spawn_engine, spawn_jump, spawn_snake,
};
pub use interface_adapters::sink::Frame;
pub use use_cases::types::{GameState, TiltSample};
