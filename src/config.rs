//! Service configuration from environment variables

use crate::data::ArtifactPaths;
use std::path::PathBuf;
use thiserror::Error;
use tracing::Level;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_ARTIFACT_DIR: &str = ".";

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub artifacts: ArtifactPaths,
    pub log_level: Level,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            artifacts: ArtifactPaths::in_dir(DEFAULT_ARTIFACT_DIR),
            log_level: Level::INFO,
        }
    }
}

impl ServiceConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through a variable lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let log_level = match lookup("LOG_LEVEL") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name: "LOG_LEVEL", value })?,
            None => Level::INFO,
        };

        let artifact_dir = lookup("ARTIFACT_DIR").unwrap_or_else(|| DEFAULT_ARTIFACT_DIR.to_string());
        let mut artifacts = ArtifactPaths::in_dir(artifact_dir);
        if let Some(path) = lookup("ENCODER_PATH") {
            artifacts.encoder = PathBuf::from(path);
        }
        if let Some(path) = lookup("SCALER_PATH") {
            artifacts.scaler = PathBuf::from(path);
        }
        if let Some(path) = lookup("MODEL_PATH") {
            artifacts.model = PathBuf::from(path);
        }

        Ok(Self {
            host,
            port,
            artifacts,
            log_level,
        })
    }

    /// Socket address to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
