// Port to the host's persisted key-value settings.

use std::sync::Arc;

/// The minimal key-value access the engines need. Implementations live at
/// the frameworks edge; the engines only ever read through this trait.
pub trait SettingsStore: Send + Sync {
    fn get_f32(&self, key: &str) -> Option<f32>;
    fn set_f32(&self, key: &str, value: f32);
}

pub type SharedSettings = Arc<dyn SettingsStore>;

/// Horizontal tilt sensitivity for the platformer. Out-of-range values are
/// clamped on both read and write, never rejected.
pub mod sensitivity {
    use super::SettingsStore;

    pub const KEY: &str = "horizontal_sensitivity";
    pub const DEFAULT: f32 = 0.4;
    pub const MIN: f32 = 0.1;
    pub const MAX: f32 = 1.0;

    pub fn get(store: &dyn SettingsStore) -> f32 {
        store.get_f32(KEY).unwrap_or(DEFAULT).clamp(MIN, MAX)
    }

    pub fn set(store: &dyn SettingsStore, value: f32) {
        store.set_f32(KEY, value.clamp(MIN, MAX));
    }
}
