use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::query::transport::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use crate::query::types::ServerAddress;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    #[serde(default)]
    pub command: CommandConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            command: CommandConfig::default(),
            server: ServerConfig::default(),
            query: QueryConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandConfig {
    /// Literal prefix that marks a message as a status-query command.
    #[serde(default = "default_trigger")]
    pub trigger: String,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            trigger: default_trigger(),
        }
    }
}

fn default_trigger() -> String {
    "查询服务器".to_string()
}

/// Server queried when the command names no address of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> ServerAddress {
        ServerAddress::new(self.host.clone(), self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "103.205.253.14".to_string()
}

fn default_port() -> u16 {
    23007
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl QueryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl BotConfig {
    /// Load bot configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents =
            fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {}", e))?;

        let config: BotConfig =
            toml::from_str(&contents).map_err(|e| format!("Failed to parse config file: {}", e))?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.command.trigger.trim().is_empty() {
            return Err("command trigger cannot be empty".to_string());
        }

        if self.server.host.is_empty() {
            return Err("default server host cannot be empty".to_string());
        }

        if self.server.port == 0 {
            return Err("default server port cannot be 0".to_string());
        }

        if self.query.endpoint.is_empty() {
            return Err("query endpoint cannot be empty".to_string());
        }

        if self.query.timeout_secs == 0 {
            return Err("query timeout must be at least 1 second".to_string());
        }

        Ok(())
    }
}
