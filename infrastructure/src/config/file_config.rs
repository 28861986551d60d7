//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types
//! where appropriate.

use borderpass_application::AssistantParams;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw server configuration from TOML
///
/// # Example
///
/// ```toml
/// [server]
/// host = "0.0.0.0"
/// port = 8787
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Address to bind the HTTP listener to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
        }
    }
}

/// Raw assistant configuration from TOML
///
/// # Example
///
/// ```toml
/// [assistant]
/// model = "llama3-8b-8192"
/// temperature = 0.7
/// max_tokens = 500
/// api_key_env = "GROQ_API_KEY"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssistantConfig {
    /// Model identifier to request from the provider
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens per completion
    pub max_tokens: u32,
    /// Environment variable holding the provider API key
    pub api_key_env: String,
    /// Override for the provider base URL (useful for proxies and tests)
    pub base_url: Option<String>,
}

impl Default for FileAssistantConfig {
    fn default() -> Self {
        let params = AssistantParams::default();
        Self {
            model: params.model,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            api_key_env: "GROQ_API_KEY".to_string(),
            base_url: None,
        }
    }
}

impl FileAssistantConfig {
    /// Convert into the application-layer parameter set.
    pub fn params(&self) -> AssistantParams {
        AssistantParams::default()
            .with_model(self.model.clone())
            .with_temperature(self.temperature)
            .with_max_tokens(self.max_tokens)
    }
}

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Path to a JSON questionnaire file; the built-in catalog is used
    /// when unset
    pub path: Option<PathBuf>,
}

/// Top-level configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub server: FileServerConfig,
    pub assistant: FileAssistantConfig,
    pub catalog: FileCatalogConfig,
}
