// src/config.rs

//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Rendering engine settings
    #[serde(default)]
    pub renderer: RendererConfig,

    /// Content storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            warn!(
                "config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::validation("server.port must be > 0"));
        }
        if self.renderer.timeout_secs == 0 {
            return Err(AppError::validation("renderer.timeout_secs must be > 0"));
        }
        if self.renderer.user_agent.trim().is_empty() {
            return Err(AppError::validation("renderer.user_agent is empty"));
        }
        if self.renderer.viewport_width == 0 || self.renderer.viewport_height == 0 {
            return Err(AppError::validation("renderer viewport must be non-zero"));
        }
        Ok(())
    }

    /// Apply environment overrides. `PORT` replaces `server.port`.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("PORT") {
            self.apply_port_override(&value);
        }
    }

    fn apply_port_override(&mut self, value: &str) {
        match value.parse::<u16>() {
            Ok(port) => self.server.port = port,
            Err(_) => warn!("ignoring unparsable PORT value: {value}"),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    #[serde(default = "defaults::bind")]
    pub bind: String,

    /// Port to listen on (the PORT environment variable overrides this)
    #[serde(default = "defaults::port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: defaults::bind(),
            port: defaults::port(),
        }
    }
}

/// Rendering engine selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderEngine {
    /// Headless Chromium over the DevTools protocol
    #[default]
    Chromium,

    /// Plain HTTP client, no script execution
    Http,
}

/// Rendering engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RendererConfig {
    /// Which engine fetches pages
    #[serde(default)]
    pub engine: RenderEngine,

    /// Per-navigation timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Extra settle time after navigation completes, in milliseconds
    #[serde(default = "defaults::settle_ms")]
    pub settle_ms: u64,

    /// User-Agent presented to fetched sites
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Browser viewport width in pixels
    #[serde(default = "defaults::viewport_width")]
    pub viewport_width: u32,

    /// Browser viewport height in pixels
    #[serde(default = "defaults::viewport_height")]
    pub viewport_height: u32,

    /// Path to a Chrome/Chromium executable (auto-detected when unset)
    #[serde(default)]
    pub chrome_path: Option<String>,
}

impl RendererConfig {
    /// Per-navigation timeout as a Duration.
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Post-navigation settle delay as a Duration.
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            engine: RenderEngine::default(),
            timeout_secs: defaults::timeout(),
            settle_ms: defaults::settle_ms(),
            user_agent: defaults::user_agent(),
            viewport_width: defaults::viewport_width(),
            viewport_height: defaults::viewport_height(),
            chrome_path: None,
        }
    }
}

/// Content storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory page records are written to
    #[serde(default = "defaults::storage_root")]
    pub root: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: defaults::storage_root(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // Server defaults
    pub fn bind() -> String {
        "0.0.0.0".into()
    }
    pub fn port() -> u16 {
        3000
    }

    // Renderer defaults
    pub fn timeout() -> u64 {
        30
    }
    pub fn settle_ms() -> u64 {
        500
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".into()
    }
    pub fn viewport_width() -> u32 {
        1280
    }
    pub fn viewport_height() -> u32 {
        800
    }

    // Storage defaults
    pub fn storage_root() -> PathBuf {
        PathBuf::from("content")
    }
}
