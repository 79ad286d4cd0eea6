use std::{collections::HashMap, fs, path::PathBuf};

use crate::{warn, DEBUG_NAME};

/// Persisted store key names. These match what the watchface has always
/// written; renaming them would orphan existing installs' state.
pub mod store_keys {
    pub const DISABLE_WEATHER: &str = "disable_weather";
    pub const ENABLE_FORECAST: &str = "enable_forecast";
    pub const WEATHER_LOC: &str = "weather_loc";
    pub const WEATHER_LOC_LAT: &str = "weather_loc_lat";
    pub const WEATHER_LOC_LNG: &str = "weather_loc_lng";
    pub const WEATHER_DATASOURCE: &str = "weather_datasource";
    pub const WEATHER_API_KEY: &str = "weather_api_key";
}

/// String key/value store that survives restarts. The only state in the
/// bridge with a lifetime longer than one reconciliation pass.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// JSON-file-backed store, write-through on every `set`. A missing or
/// unreadable file starts empty rather than failing the process.
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl FileSettingsStore {
    pub fn load(path: PathBuf) -> Self {
        let values = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<HashMap<String, String>>(&text) {
                Ok(map) => map,
                Err(e) => {
                    warn!(
                        "[{}][STORE] Failed to parse {}: {e}; starting empty",
                        DEBUG_NAME,
                        path.display()
                    );
                    HashMap::new()
                }
            },
            Err(_) => HashMap::new(),
        };

        Self { path, values }
    }

    fn flush(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        match serde_json::to_string_pretty(&self.values) {
            Ok(text) => {
                if let Err(e) = fs::write(&self.path, text) {
                    warn!(
                        "[{}][STORE] Failed to write {}: {e}",
                        DEBUG_NAME,
                        self.path.display()
                    );
                }
            }
            Err(e) => warn!("[{}][STORE] Failed to serialize store: {e}", DEBUG_NAME),
        }
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.flush();
    }
}

/// In-memory store for tests and hosts without a writable data dir.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: HashMap<String, String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}
