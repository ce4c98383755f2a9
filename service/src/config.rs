use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Application configuration loaded from multiple sources.
///
/// Configuration is loaded in priority order (lowest to highest):
/// 1. Struct defaults
/// 2. config.yaml file (if exists)
/// 3. Environment variables with RSVP_ prefix (always wins)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub civic: CivicConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CivicConfig {
    /// Scheme and host of the civic-info endpoint.
    #[serde(default = "default_civic_base_url")]
    pub base_url: String,

    /// API key sent with every lookup (required for lookups, no compiled-in default).
    #[serde(default)]
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log filter directive (debug, info, warn, error, or a full `EnvFilter` string).
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_civic_base_url() -> String {
    "https://www.googleapis.com".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl CivicConfig {
    /// The API key, required only when a lookup will be made.
    ///
    /// # Errors
    /// Returns a validation error if the key is empty.
    pub fn require_api_key(&self) -> Result<&str, ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "civic.api_key is required. Set RSVP_CIVIC__API_KEY environment variable or configure in config.yaml.".into(),
            ));
        }
        Ok(&self.api_key)
    }
}

impl Default for CivicConfig {
    fn default() -> Self {
        Self {
            base_url: default_civic_base_url(),
            api_key: String::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl Config {
    /// Load configuration from all sources, reading `config.yaml` from the
    /// working directory.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config.yaml")
    }

    /// Load configuration with a custom YAML file path.
    ///
    /// A missing file is not an error; defaults and environment still apply.
    ///
    /// # Errors
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(yaml_path: &str) -> Result<Self, ConfigError> {
        let config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Yaml::file(yaml_path))
            .merge(Env::prefixed("RSVP_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// The API key is not checked here; see [`CivicConfig::require_api_key`].
    ///
    /// # Errors
    /// Returns an error if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.civic.base_url;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "civic.base_url '{base_url}' must start with http:// or https://"
            )));
        }

        Ok(())
    }
}
