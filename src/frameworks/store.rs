// File-backed settings store. Errors here are logged and swallowed:
// settings are a convenience, never a reason to take the games down.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::interface_adapters::settings::SettingsStore;

#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsDocument {
    #[serde(default)]
    values: HashMap<String, f32>,
}

pub struct FileSettings {
    path: PathBuf,
    values: RwLock<HashMap<String, f32>>,
}

impl FileSettings {
    /// Opens the store, loading any previously persisted values. A missing
    /// or unreadable file starts empty.
    pub fn open(path: PathBuf) -> Self {
        let values = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<SettingsDocument>(&raw) {
                Ok(document) => document.values,
                Err(err) => {
                    warn!(path = %path.display(), %err, "settings file unreadable, starting empty");
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };
        Self {
            path,
            values: RwLock::new(values),
        }
    }

    fn persist(&self, values: &HashMap<String, f32>) {
        let document = SettingsDocument {
            values: values.clone(),
        };
        match serde_json::to_string_pretty(&document) {
            Ok(raw) => {
                if let Err(err) = fs::write(&self.path, raw) {
                    warn!(path = %self.path.display(), %err, "failed to persist settings");
                }
            }
            Err(err) => warn!(%err, "failed to serialize settings"),
        }
    }
}

impl SettingsStore for FileSettings {
    fn get_f32(&self, key: &str) -> Option<f32> {
        self.values.read().ok()?.get(key).copied()
    }

    fn set_f32(&self, key: &str, value: f32) {
        let Ok(mut values) = self.values.write() else {
            return;
        };
        values.insert(key.to_string(), value);
        self.persist(&values);
    }
}
