use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::paths::{config_json_path, load_config_json};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const CONFIG_FILE_PATH: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Origin of the authentication API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub http_proxy: String,
    #[serde(default)]
    pub https_proxy: String,
    #[serde(default)]
    pub http_proxy_auth: Option<ProxyAuth>,
    #[serde(default)]
    pub https_proxy_auth: Option<ProxyAuth>,
    /// Keep cookies set by the auth endpoints and send them back.
    #[serde(default = "default_true")]
    pub with_credentials: bool,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProxyAuth {
    pub username: String,
    pub password: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn parse_bool_env(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: default_base_url(),
            http_proxy: String::new(),
            https_proxy: String::new(),
            http_proxy_auth: None,
            https_proxy_auth: None,
            with_credentials: true,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load from ~/.pingbot/config.json, falling back to ./config.toml, then
    /// apply environment overrides.
    pub fn new() -> Self {
        let mut config = Self::load_files(&config_json_path(), Path::new(CONFIG_FILE_PATH));
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Load a single settings file. `.toml` files are parsed as TOML,
    /// anything else as JSON.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        if path.extension().is_some_and(|ext| ext == "toml") {
            let content = std::fs::read_to_string(path)
                .map_err(|e| format!("Failed to read config: {e}"))?;
            toml::from_str(&content).map_err(|e| format!("Failed to parse config: {e}"))
        } else {
            load_config_json(path)
        }
    }

    fn load_files(json_path: &Path, toml_path: &Path) -> Self {
        if json_path.exists() {
            match load_config_json::<Config>(json_path) {
                Ok(config) => return config,
                Err(e) => log::warn!("Ignoring {}: {}", json_path.display(), e),
            }
        }

        if toml_path.exists() {
            match Self::from_file(toml_path) {
                Ok(config) => return config,
                Err(e) => log::warn!("Ignoring {}: {}", toml_path.display(), e),
            }
        }

        Config::default()
    }

    /// Override fields from environment variables, looked up through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base_url) = lookup("PINGBOT_BASE_URL").or_else(|| lookup("BASE_URL")) {
            self.base_url = base_url;
        }
        if let Some(http_proxy) = lookup("HTTP_PROXY") {
            self.http_proxy = http_proxy;
        }
        if let Some(https_proxy) = lookup("HTTPS_PROXY") {
            self.https_proxy = https_proxy;
        }
        if let Some(with_credentials) = lookup("PINGBOT_WITH_CREDENTIALS") {
            self.with_credentials = parse_bool_env(&with_credentials);
        }
        if let Some(timeout) = lookup("PINGBOT_TIMEOUT_SECS") {
            match timeout.trim().parse() {
                Ok(secs) => self.request_timeout_secs = secs,
                Err(_) => log::warn!("Ignoring invalid PINGBOT_TIMEOUT_SECS: {timeout:?}"),
            }
        }
    }

    /// Join an API path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn parse_bool_env_true_values() {
        for value in ["1", "true", "TRUE", " yes ", "Y", "on"] {
            assert!(parse_bool_env(value), "value {value:?} should be true");
        }
    }

    #[test]
    fn parse_bool_env_false_values() {
        for value in ["0", "false", "no", "off", "", "  "] {
            assert!(!parse_bool_env(value), "value {value:?} should be false");
        }
    }

    #[test]
    fn env_overrides_file_values() {
        let vars: HashMap<&str, &str> = [
            ("BASE_URL", "http://fallback:1"),
            ("PINGBOT_BASE_URL", "http://api.example:8080"),
            ("PINGBOT_WITH_CREDENTIALS", "off"),
            ("PINGBOT_TIMEOUT_SECS", "5"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_env(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.base_url, "http://api.example:8080");
        assert!(!config.with_credentials);
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn invalid_timeout_is_ignored() {
        let mut config = Config::default();
        config.apply_env(|key| (key == "PINGBOT_TIMEOUT_SECS").then(|| "soon".to_string()));
        assert_eq!(config.request_timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn json_file_wins_over_toml() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("config.json");
        let toml_path = dir.path().join("config.toml");
        std::fs::write(&json_path, r#"{"base_url":"http://json:1"}"#).unwrap();
        std::fs::write(&toml_path, "base_url = \"http://toml:2\"\n").unwrap();

        let config = Config::load_files(&json_path, &toml_path);
        assert_eq!(config.base_url, "http://json:1");
        assert!(config.with_credentials);
    }

    #[test]
    fn unparseable_json_falls_back_to_toml() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("config.json");
        let toml_path = dir.path().join("config.toml");
        std::fs::write(&json_path, "{not json").unwrap();
        std::fs::write(&toml_path, "base_url = \"http://toml:2\"\nrequest_timeout_secs = 9\n")
            .unwrap();

        let config = Config::load_files(&json_path, &toml_path);
        assert_eq!(config.base_url, "http://toml:2");
        assert_eq!(config.request_timeout_secs, 9);
    }

    #[test]
    fn missing_files_give_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_files(&dir.path().join("a.json"), &dir.path().join("b.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let mut config = Config::default();
        config.base_url = "http://host/".to_string();
        assert_eq!(config.endpoint("/api/auth/login"), "http://host/api/auth/login");
    }
}
