use anyhow::{anyhow, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub greeting: GreetingConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8080 }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GreetingConfig {
    #[serde(default = "default_greeting_port")]
    pub port: u16,
    /// Absent configuration yields an empty message; no validation is done.
    #[serde(default)]
    pub default_msg: String,
    #[serde(default)]
    pub special_msg: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            port: default_greeting_port(),
            default_msg: String::new(),
            special_msg: String::new(),
        }
    }
}

fn default_greeting_port() -> u16 {
    9000
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_path")]
    pub data_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_path: default_data_path() }
    }
}

fn default_data_path() -> String {
    "data/reservations.json".into()
}

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load `config.toml` when present, otherwise fall back to environment
    /// variables over the built-in defaults. Blank greeting messages are
    /// filled from the environment either way.
    pub fn load() -> Self {
        let mut cfg = load_default().unwrap_or_else(|_| Self::from_env());
        cfg.fill_missing_from_env();
        cfg
    }

    /// Environment-only configuration for deployments without a config file.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = env_port("SERVER_PORT") {
            cfg.server.port = port;
        }
        if let Some(port) = env_port("GREETING_PORT") {
            cfg.greeting.port = port;
        }
        if let Ok(path) = std::env::var("RESERVATIONS_DATA_PATH") {
            cfg.storage.data_path = path;
        }
        cfg
    }

    fn fill_missing_from_env(&mut self) {
        // a config file takes precedence, the environment only fills blanks
        if self.greeting.default_msg.is_empty() {
            if let Ok(msg) = std::env::var("GREETING_DEFAULT_MSG") {
                self.greeting.default_msg = msg;
            }
        }
        if self.greeting.special_msg.is_empty() {
            if let Ok(msg) = std::env::var("GREETING_SPECIAL_MSG") {
                self.greeting.special_msg = msg;
            }
        }
        if self.storage.data_path.is_empty() {
            if let Ok(path) = std::env::var("RESERVATIONS_DATA_PATH") {
                self.storage.data_path = path;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(anyhow!("server.host must not be empty"));
        }
        if self.server.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if self.greeting.port == 0 {
            return Err(anyhow!("greeting.port must be in 1..=65535"));
        }
        if self.storage.data_path.trim().is_empty() {
            return Err(anyhow!("storage.data_path must not be empty"));
        }
        Ok(())
    }
}

fn env_port(key: &str) -> Option<u16> {
    std::env::var(key).ok().and_then(|p| p.parse::<u16>().ok())
}
