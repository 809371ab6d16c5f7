//! Configuration Management
//!
//! Loads ring settings from TOML files:
//! - Explicit path, or `ringq.toml` / `~/.config/ringq/config.toml`
//! - `RINGQ_CAPACITY` environment override
//! - Defaults for anything missing

use crate::errors::RingError;
use crate::ring::RingBuffer;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Environment variable overriding the configured capacity.
pub const CAPACITY_ENV: &str = "RINGQ_CAPACITY";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingConfig {
    /// Maximum number of retained elements
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Report contents in physical storage order instead of oldest-first
    #[serde(default)]
    pub physical_order: bool,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            physical_order: false,
        }
    }
}

fn default_capacity() -> usize {
    10
}

impl RingConfig {
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut config = match path {
            Some(p) => {
                let content = std::fs::read_to_string(p)
                    .map_err(|e| RingError::Config(format!("{}: {}", p, e)))
                    .with_context(|| format!("Failed to read config from {}", p))?;
                Self::parse(&content)?
            }
            None => {
                let home_config = dirs::home_dir()
                    .map(|h| h.join(".config/ringq/config.toml"))
                    .and_then(|p| p.to_str().map(String::from));

                let mut default_paths: Vec<String> = vec!["ringq.toml".to_string()];
                if let Some(hc) = home_config {
                    default_paths.push(hc);
                }

                let mut loaded = None;
                for p in &default_paths {
                    if let Ok(content) = std::fs::read_to_string(p) {
                        debug!(path = %p, "Loaded config file");
                        loaded = Some(Self::parse(&content)?);
                        break;
                    }
                }
                loaded.unwrap_or_else(|| {
                    info!("No config file found, using defaults");
                    Self::default()
                })
            }
        };

        config.apply_env();
        Ok(config)
    }

    /// Parse TOML content into a config.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| RingError::Config(e.to_string()))
            .context("Failed to parse config")
    }

    fn apply_env(&mut self) {
        if let Ok(capacity) = std::env::var(CAPACITY_ENV) {
            if let Ok(n) = capacity.trim().parse::<usize>() {
                self.capacity = n;
            }
        }
    }

    /// Build an empty ring with the configured capacity.
    pub fn build<T>(&self) -> RingBuffer<T> {
        RingBuffer::with_capacity(self.capacity)
    }
}
