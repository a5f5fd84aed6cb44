/// Configuration module for the Ollama embedder.
///
/// Handles loading, validating, and providing default configuration values.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Config file used when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "ollama.json";

// ── Default value functions ──────────────────────────────────────────

fn default_url() -> String {
    "http://localhost:11434/api/".to_string()
}

fn default_model() -> String {
    "mxbai-embed-large".to_string()
}

// ── Config struct ────────────────────────────────────────────────────

/// Where the Ollama server lives and which model it should run.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OllamaConfig {
    /// Base URI; request paths are resolved against it.
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Request timeout. `None` keeps the HTTP client's default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            model: default_model(),
            timeout_secs: None,
        }
    }
}

// ── Config implementation ────────────────────────────────────────────

impl OllamaConfig {
    /// Load configuration from a JSON file.
    ///
    /// If `config_path` is empty, defaults to [`DEFAULT_CONFIG_PATH`].
    /// A missing file or invalid JSON yields the default config.
    pub fn load(config_path: &str) -> Result<Self> {
        let path = if config_path.is_empty() {
            DEFAULT_CONFIG_PATH
        } else {
            config_path
        };

        if !Path::new(path).exists() {
            info!("{path} not found, using defaults");
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {path}"))?;

        let cfg: OllamaConfig = match serde_json::from_str(&data) {
            Ok(c) => c,
            Err(e) => {
                warn!("Invalid JSON in {path}: {e}");
                warn!("Using default configuration");
                return Ok(Self::default());
            }
        };

        info!("Loaded configuration from {path}");
        Ok(cfg)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &str) -> Result<()> {
        let data = serde_json::to_string_pretty(self).context("failed to marshal config")?;
        std::fs::write(path, data).with_context(|| format!("failed to write config: {path}"))?;
        Ok(())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(!self.url.trim().is_empty(), "url must not be empty");
        anyhow::ensure!(!self.model.trim().is_empty(), "model must not be empty");
        anyhow::ensure!(
            self.timeout_secs != Some(0),
            "timeout_secs must be positive"
        );
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OllamaConfig::default();
        assert_eq!(config.url, "http://localhost:11434/api/");
        assert_eq!(config.model, "mxbai-embed-large");
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_parse_with_defaults() {
        let json = r#"{"model": "nomic-embed-text"}"#;
        let config: OllamaConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.model, "nomic-embed-text");
        assert_eq!(config.url, "http://localhost:11434/api/");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("absent.json");
        let config = OllamaConfig::load(&path.to_string_lossy()).unwrap();
        assert_eq!(config, OllamaConfig::default());
    }

    #[test]
    fn test_load_invalid_json_falls_back() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let config = OllamaConfig::load(&path.to_string_lossy()).unwrap();
        assert_eq!(config, OllamaConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("ollama.json");
        let path = path.to_string_lossy();

        let config = OllamaConfig {
            url: "http://gpu-box:11434/api/".to_string(),
            model: "bge-m3".to_string(),
            timeout_secs: Some(30),
        };
        config.save(&path).unwrap();

        assert_eq!(OllamaConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_validate_ok() {
        assert!(OllamaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_model() {
        let mut config = OllamaConfig::default();
        config.model = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = OllamaConfig::default();
        config.timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }
}
