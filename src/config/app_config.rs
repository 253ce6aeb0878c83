use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::domain::id::{IdError, Namespace, PrefixRegistry};
use crate::infrastructure::id::{
    IdGenerator, DEFAULT_BYTE_LENGTH, DEFAULT_MAX_BATCH_SIZE, DEFAULT_MAX_BYTE_LENGTH,
    DEFAULT_MAX_CODEC_BYTES,
};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ids: IdConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Identifier generation settings
#[derive(Debug, Clone, Deserialize)]
pub struct IdConfig {
    /// Random bytes per identifier when the caller does not choose
    #[serde(default = "default_byte_length")]
    pub default_byte_length: usize,
    /// Largest byte length a caller may request
    #[serde(default = "default_max_byte_length")]
    pub max_byte_length: usize,
    /// Largest number of identifiers per batch
    #[serde(default = "default_max_batch_size")]
    pub max_batch_size: usize,
    /// Largest input, in bytes, for the standalone base58 encode/decode
    #[serde(default = "default_max_codec_bytes")]
    pub max_codec_bytes: usize,
    /// Prefix overrides keyed by namespace name
    #[serde(default)]
    pub prefixes: HashMap<String, String>,
}

/// Prometheus metrics settings
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_enabled")]
    pub enabled: bool,
    #[serde(default = "default_metrics_path")]
    pub path: String,
}

fn default_byte_length() -> usize {
    DEFAULT_BYTE_LENGTH
}

fn default_max_byte_length() -> usize {
    DEFAULT_MAX_BYTE_LENGTH
}

fn default_max_batch_size() -> usize {
    DEFAULT_MAX_BATCH_SIZE
}

fn default_max_codec_bytes() -> usize {
    DEFAULT_MAX_CODEC_BYTES
}

fn default_metrics_enabled() -> bool {
    true
}

fn default_metrics_path() -> String {
    "/metrics".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            default_byte_length: DEFAULT_BYTE_LENGTH,
            max_byte_length: DEFAULT_MAX_BYTE_LENGTH,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            max_codec_bytes: DEFAULT_MAX_CODEC_BYTES,
            prefixes: HashMap::new(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_metrics_enabled(),
            path: default_metrics_path(),
        }
    }
}

impl IdConfig {
    /// Build the prefix registry, applying configured overrides
    pub fn build_registry(&self) -> Result<PrefixRegistry, IdError> {
        let overrides = self
            .prefixes
            .iter()
            .map(|(name, prefix)| Ok((name.parse::<Namespace>()?, prefix.clone())))
            .collect::<Result<Vec<_>, IdError>>()?;

        PrefixRegistry::with_overrides(overrides)
    }

    /// Build a generator from this section
    pub fn build_generator(&self) -> Result<IdGenerator, IdError> {
        if self.max_byte_length == 0 {
            return Err(IdError::InvalidByteLength {
                length: 0,
                max: self.max_byte_length,
            });
        }

        if self.default_byte_length == 0 || self.default_byte_length > self.max_byte_length {
            return Err(IdError::InvalidByteLength {
                length: self.default_byte_length,
                max: self.max_byte_length,
            });
        }

        if self.max_batch_size == 0 {
            return Err(IdError::InvalidBatchSize {
                count: 0,
                max: self.max_batch_size,
            });
        }

        Ok(IdGenerator::new(Arc::new(self.build_registry()?))
            .with_default_byte_length(self.default_byte_length)
            .with_max_byte_length(self.max_byte_length)
            .with_max_batch_size(self.max_batch_size)
            .with_max_codec_bytes(self.max_codec_bytes))
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
