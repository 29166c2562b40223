//! Global configuration types for Deskmate.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls the
//! Completion Service connection, the order directory source, and the HTTP
//! server bind address.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration.
///
/// Loaded from `~/.deskmate/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub completion: CompletionConfig,

    /// JSON file mapping contact identifier to order record. When absent the
    /// built-in demo directory is used.
    #[serde(default)]
    pub order_directory: Option<PathBuf>,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Completion Service connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Provider name (e.g., "openai", "gemini", "mistral").
    #[serde(default = "default_provider_name")]
    pub provider_name: String,
    /// Override the provider's default base URL.
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Upper bound on a single Completion Service call.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub temperature: Option<f64>,
}

fn default_provider_name() -> String {
    "openai".to_string()
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_tokens() -> u32 {
    1024
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            provider_name: default_provider_name(),
            base_url: None,
            model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
            max_tokens: default_max_tokens(),
            temperature: None,
        }
    }
}

/// HTTP server bind address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}
