//! Application configuration

mod app_config;

pub use app_config::{AppConfig, IdConfig, LogFormat, LoggingConfig, MetricsConfig, ServerConfig};
