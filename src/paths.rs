use std::path::PathBuf;

/// Data-dir override for hosts that sandbox the companion process.
const DATA_DIR_ENV: &str = "BRIDGE_DATA_DIR";

pub fn user_home_dir() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME") {
        if !home.is_empty() {
            return Some(PathBuf::from(home));
        }
    }

    // Windows hosts
    if let Ok(profile) = std::env::var("USERPROFILE") {
        if !profile.is_empty() {
            return Some(PathBuf::from(profile));
        }
    }

    None
}

/// Where the persisted key/value store and the log file live.
/// `BRIDGE_DATA_DIR` wins, then `~/.watchface-bridge/`, then the exe dir.
pub fn bridge_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        if !dir.is_empty() {
            return PathBuf::from(dir);
        }
    }

    if let Some(home) = user_home_dir() {
        return home.join(".watchface-bridge");
    }

    match std::env::current_exe() {
        Ok(path) => path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".")),
        Err(_) => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    }
}
