//! Configuration loading, validation, and management for EdgePersona.
//!
//! Loads configuration from `~/.edgepersona/config.toml` with environment
//! variable overrides. The completion-endpoint API key is resolved once at
//! startup with a documented precedence order and the service fails closed
//! when no key is configured — there is no built-in fallback credential.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.edgepersona/config.toml`.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Completion-endpoint API key. Usually supplied via environment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Default user id for the single-user CLI flows
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Completion provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Key-value store configuration
    #[serde(default)]
    pub store: StoreConfig,

    /// Gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,
}

fn default_user_id() -> String {
    "local".into()
}

/// Redact a secret for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("user_id", &self.user_id)
            .field("provider", &self.provider)
            .field("store", &self.store)
            .field("gateway", &self.gateway)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider kind: "dashscope", "deepseek", "openai", or "custom"
    #[serde(default = "default_provider_kind")]
    pub kind: String,

    /// Base URL override (required when kind = "custom")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Model to request
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_provider_kind() -> String {
    "dashscope".into()
}
fn default_model() -> String {
    "deepseek-v3".into()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: default_provider_kind(),
            base_url: None,
            model: default_model(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Backend: "file" or "memory"
    #[serde(default = "default_store_backend")]
    pub backend: String,

    /// Directory for the file backend (one JSON document per key)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_store_backend() -> String {
    "file".into()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: default_store_backend(),
            path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,
}

fn default_port() -> u16 {
    8788
}
fn default_host() -> String {
    "127.0.0.1".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.edgepersona/config.toml).
    ///
    /// Environment overrides, highest priority first:
    /// - `EDGEPERSONA_API_KEY`
    /// - `DASHSCOPE_API_KEY`
    /// - `DEEPSEEK_API_KEY`
    /// - `EDGEPERSONA_MODEL` overrides `provider.model`
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;

        if config.api_key.is_none() {
            config.api_key = std::env::var("EDGEPERSONA_API_KEY")
                .ok()
                .or_else(|| std::env::var("DASHSCOPE_API_KEY").ok())
                .or_else(|| std::env::var("DEEPSEEK_API_KEY").ok());
        }

        if let Ok(model) = std::env::var("EDGEPERSONA_MODEL") {
            config.provider.model = model;
        }

        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".edgepersona")
    }

    /// Default directory for the file store backend.
    pub fn data_dir() -> PathBuf {
        Self::config_dir().join("data")
    }

    /// Resolve the API key or fail closed.
    ///
    /// The completion endpoint is never called with a baked-in credential.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        self.api_key.as_deref().ok_or(ConfigError::MissingApiKey)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        match self.store.backend.as_str() {
            "file" | "memory" => {}
            other => {
                return Err(ConfigError::ValidationError(format!(
                    "store.backend must be 'file' or 'memory', got '{other}'"
                )))
            }
        }

        if self.provider.kind == "custom" && self.provider.base_url.is_none() {
            return Err(ConfigError::ValidationError(
                "provider.base_url is required when provider.kind = 'custom'".into(),
            ));
        }

        Ok(())
    }

    /// Generate a default config TOML string (for the onboarding command).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&Self::default()).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            user_id: default_user_id(),
            provider: ProviderConfig::default(),
            store: StoreConfig::default(),
            gateway: GatewayConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    #[error(
        "No API key configured. Set EDGEPERSONA_API_KEY (or DASHSCOPE_API_KEY / \
         DEEPSEEK_API_KEY), or add api_key to config.toml"
    )]
    MissingApiKey,
}
