//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/geocoder/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use crate::geo::{Params, Provider, ProviderConfig};
use defaults::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Provider selection and transport settings
    #[serde(default)]
    pub geocoder: GeocoderConfig,

    /// CLI output settings
    #[serde(default)]
    pub output: OutputConfig,

    /// API keys for commercial providers
    #[serde(default)]
    pub api_keys: ApiKeysConfig,

    /// Default parameters merged into every request
    #[serde(default)]
    pub extra: Params,
}

/// Provider selection and transport settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocoderConfig {
    /// Provider name ("openstreetmap" or "mapquest")
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Self-hosted Nominatim base URL (openstreetmap only, empty = public instance)
    #[serde(default)]
    pub server: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// CLI output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output format ("text" or "json")
    #[serde(default = "default_format")]
    pub format: String,
}

/// API keys for external services
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiKeysConfig {
    /// MapQuest Open API key
    #[serde(default)]
    pub mapquest: String,
}

// Default value functions for serde
fn default_provider() -> String {
    DEFAULT_PROVIDER.to_string()
}
fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            server: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, creating it with defaults if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))
        } else {
            let config = Config::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"; request defaults use "extra.<param>"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.splitn(2, '.').collect();

        match parts.as_slice() {
            ["geocoder", "provider"] => Some(self.geocoder.provider.clone()),
            ["geocoder", "server"] => Some(self.geocoder.server.clone()),
            ["geocoder", "timeout_secs"] => Some(self.geocoder.timeout_secs.to_string()),

            ["output", "format"] => Some(self.output.format.clone()),

            ["api_keys", "mapquest"] => Some(self.api_keys.mapquest.clone()),

            ["extra", name] => self.extra.get(*name).map(|value| match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            }),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.splitn(2, '.').collect();

        match parts.as_slice() {
            ["geocoder", "provider"] => {
                let provider: Provider = value.parse()?;
                self.geocoder.provider = provider.name().to_string();
            }
            ["geocoder", "server"] => {
                self.geocoder.server = value.to_string();
            }
            ["geocoder", "timeout_secs"] => {
                self.geocoder.timeout_secs = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid timeout value: {}", value))
                })?;
            }

            ["output", "format"] => {
                self.output.format = value.to_string();
            }

            ["api_keys", "mapquest"] => {
                self.api_keys.mapquest = value.to_string();
            }

            ["extra", name] if !name.is_empty() => {
                self.extra.insert(name.to_string(), parse_param(value));
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "geocoder.provider",
            "geocoder.server",
            "geocoder.timeout_secs",
            "output.format",
            "api_keys.mapquest",
            "extra.<param>",
        ]
    }

    /// The configured provider
    pub fn provider(&self) -> Result<Provider> {
        self.geocoder.provider.parse()
    }

    /// Adapter options for `provider`
    ///
    /// Only commercial providers receive an API key; only the free
    /// provider honors the server override.
    pub fn provider_config(&self, provider: Provider) -> ProviderConfig {
        let api_key = match provider {
            Provider::Mapquest if !self.api_keys.mapquest.is_empty() => {
                Some(self.api_keys.mapquest.clone())
            }
            _ => None,
        };
        let server = match provider {
            Provider::OpenStreetMap if !self.geocoder.server.is_empty() => {
                Some(self.geocoder.server.clone())
            }
            _ => None,
        };

        ProviderConfig {
            api_key,
            extra: self.extra.clone(),
            server,
        }
    }

    /// HTTP timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.geocoder.timeout_secs)
    }
}

/// Interpret a CLI/config string as the most specific JSON scalar
pub fn parse_param(value: &str) -> Value {
    if let Ok(n) = value.parse::<i64>() {
        Value::from(n)
    } else if let Ok(n) = value.parse::<f64>() {
        Value::from(n)
    } else if let Ok(b) = value.parse::<bool>() {
        Value::from(b)
    } else {
        Value::from(value)
    }
}
