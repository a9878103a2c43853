//! Application configuration

mod app_config;

pub use app_config::{
    AnalysisConfig, AppConfig, ConfigError, LoggingConfig, Result, ServerConfig, DEFAULT_TIMEZONE,
};
