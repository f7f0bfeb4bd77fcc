use std::env;
use std::path::PathBuf;

// Runtime constants and environment knobs (not gameplay tuning).

/// Capacity for inbound engine commands (input events, lifecycle calls).
pub const COMMAND_CHANNEL_CAPACITY: usize = 1024;

/// Capacity for outbound display frames.
pub const FRAME_CHANNEL_CAPACITY: usize = 128;

/// Where the file-backed settings store keeps its values.
pub fn settings_path() -> PathBuf {
    env::var("GLYPH_GAMES_SETTINGS")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("glyph_games_settings.json"))
}
