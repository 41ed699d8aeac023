use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::{env, time::Duration};

use crate::utils::constants::DEFAULT_AUTH_COOKIE_NAME;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub verifier: VerifierConfig,
    pub cors: CorsConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Authentication cookie configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub cookie_name: String,
}

/// Remote token verification endpoint
#[derive(Debug, Deserialize, Clone)]
pub struct VerifierConfig {
    pub url: String,
    pub timeout_ms: u64,
}

/// CORS configuration
#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: String,
}

impl VerifierConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl CorsConfig {
    /// Split the comma-separated origin list, dropping blank entries.
    pub fn origins(&self) -> Vec<String> {
        self.allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

impl Settings {
    /// Load configuration from multiple sources in order of precedence:
    /// 1. Built-in defaults (auth.cookie_name)
    /// 2. Configuration files (config/default.toml, config/{RUN_MODE}.toml)
    /// 3. Environment variables (prefixed with APP_, `__` between sections)
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "default".into());

        Config::builder()
            .set_default("auth.cookie_name", DEFAULT_AUTH_COOKIE_NAME)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Get the complete server address (host:port)
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
