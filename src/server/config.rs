use std::fs;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    // listen address: eg: 0.0.0.0:8000
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
        }
    }
}

fn default_listen_addr() -> String {
    "0.0.0.0:8000".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    // json file holding the latest record
    #[serde(default = "default_state_file")]
    pub state_file: String,

    #[serde(default)]
    pub startup: StartupPolicy,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            startup: StartupPolicy::default(),
        }
    }
}

fn default_state_file() -> String {
    "sotd_state.json".to_string()
}

/// How the in-memory slot is filled at process start
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartupPolicy {
    /// Load the stored record once; stay empty if there is none
    #[default]
    Eager,
    /// Start from the placeholder record so the slot is never empty
    Seeded,
}

pub fn load(path: &str) -> anyhow::Result<Config> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(content)?;
    Ok(config)
}

/// Replace the port of `listen_addr` with `port`
pub fn with_port(listen_addr: &str, port: u16) -> String {
    match listen_addr.rsplit_once(':') {
        Some((host, _)) => format!("{}:{}", host, port),
        None => format!("{}:{}", listen_addr, port),
    }
}
