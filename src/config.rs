// SPDX-License-Identifier: PMPL-1.0-or-later
//! Configuration management for a11y-audit
//!
//! Values come from an optional TOML file, overridden by environment
//! variables of the form `A11Y_AUDIT__SERVER__PORT=9000`.

use serde::Deserialize;
use std::path::Path;

use crate::error::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    /// HTTP API settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Scoring thresholds for CLI checks
    #[serde(default)]
    pub audit: AuditConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Largest accepted upload body in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_upload_bytes() -> usize {
    5 * 1024 * 1024
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AuditConfig {
    /// `check` fails when any document scores below this. Unset means
    /// `check` never fails on score.
    #[serde(default)]
    pub min_score: Option<i64>,
}

impl Config {
    /// Load configuration from file (if present) and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            if path.exists() {
                builder = builder.add_source(config::File::from(path));
            } else {
                tracing::warn!("Config file {} not found, using defaults", path.display());
            }
        }

        let config = builder
            .add_source(config::Environment::with_prefix("A11Y_AUDIT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// `host:port` for the HTTP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
