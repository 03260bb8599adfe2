use std::path::{Path, PathBuf};

/// Per-user settings directory (~/.pingbot)
pub fn pingbot_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir)
        .join(".pingbot")
}

/// Path of ~/.pingbot/config.json
pub fn config_json_path() -> PathBuf {
    pingbot_dir().join("config.json")
}

/// Load a JSON settings file
pub fn load_config_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    if !path.exists() {
        return Err(format!("Config file not found: {}", path.display()));
    }
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("Failed to read config: {e}"))?;
    serde_json::from_str(&content).map_err(|e| format!("Failed to parse config: {e}"))
}
