// Shared helpers for the integration tests.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use glyph_games::interface_adapters::settings::{SettingsStore, SharedSettings};

/// In-memory settings store so tests never touch the filesystem.
#[derive(Default)]
pub struct MemorySettings {
    values: RwLock<HashMap<String, f32>>,
}

impl SettingsStore for MemorySettings {
    fn get_f32(&self, key: &str) -> Option<f32> {
        self.values.read().ok()?.get(key).copied()
    }

    fn set_f32(&self, key: &str, value: f32) {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_string(), value);
        }
    }
}

pub fn memory_settings() -> SharedSettings {
    Arc::new(MemorySettings::default())
}
