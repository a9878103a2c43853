//! Unified Application Configuration
//!
//! One explicit configuration value replaces process-wide defaults. It is
//! built from the environment or from YAML and handed to every component
//! that needs a default.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_TIMEZONE: &str = "Asia/Shanghai";

/// Unified application configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Defaults applied to analysis requests
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file, inline YAML, or the environment
    pub fn load() -> Result<Self> {
        let config = match (
            std::env::var("SOULCHAT_CONFIG_PATH").ok(),
            std::env::var("SOULCHAT_CONFIG_YAML").ok(),
        ) {
            (Some(path), None) => {
                let path = PathBuf::from(path);
                if !path.exists() {
                    return Err(ConfigError::FileNotFound(path));
                }
                let content = std::fs::read_to_string(&path).map_err(ConfigError::FileRead)?;
                Self::from_yaml(&content)?
            }
            (None, Some(yaml)) => Self::from_yaml(&yaml)?,
            (Some(_), Some(_)) => {
                return Err(ConfigError::InvalidValue(
                    "set only one of SOULCHAT_CONFIG_PATH and SOULCHAT_CONFIG_YAML".to_string(),
                ));
            }
            (None, None) => Self::from_env()?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(ConfigError::ParseYaml)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            logging: LoggingConfig::from_env()?,
            analysis: AnalysisConfig::from_env()?,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.server.validate()?;
        self.logging.validate()?;
        self.analysis.validate()?;
        Ok(())
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: std::str::FromStr>(name: &str, default: &str) -> Result<T> {
    env_or(name, default)
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidValue(name.to_string()))
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let port = parse_env::<u16>("SOULCHAT_PORT", "8000")?;
        let host = env_or("SOULCHAT_HOST", "0.0.0.0");

        Ok(Self { port, host })
    }

    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(ConfigError::InvalidValue("port must be > 0".to_string()));
        }
        if self.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue("host must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level, used when RUST_LOG is not set
    pub level: String,

    /// Log format: `pretty` or `json`
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    pub const FORMATS: [&'static str; 2] = ["pretty", "json"];

    pub fn from_env() -> Result<Self> {
        let level = env_or("SOULCHAT_LOG_LEVEL", "info");
        let format = env_or("SOULCHAT_LOG_FORMAT", "pretty");

        Ok(Self { level, format })
    }

    pub fn validate(&self) -> Result<()> {
        if !Self::FORMATS.contains(&self.format.as_str()) {
            return Err(ConfigError::InvalidValue(format!(
                "log format must be one of {:?}, got {}",
                Self::FORMATS,
                self.format
            )));
        }
        Ok(())
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

/// Defaults for the analysis endpoint
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// IANA timezone used when a request does not name one
    pub default_timezone: String,

    /// Value of `use_true_solar_time` when a request omits it
    pub default_use_true_solar_time: bool,

    /// Whether responses carry the `debug` object
    pub include_debug: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_timezone: DEFAULT_TIMEZONE.to_string(),
            default_use_true_solar_time: false,
            include_debug: true,
        }
    }
}

impl AnalysisConfig {
    pub fn from_env() -> Result<Self> {
        let default_timezone = env_or("SOULCHAT_DEFAULT_TIMEZONE", DEFAULT_TIMEZONE);
        let default_use_true_solar_time =
            parse_env::<bool>("SOULCHAT_DEFAULT_TRUE_SOLAR_TIME", "false")?;
        let include_debug = parse_env::<bool>("SOULCHAT_INCLUDE_DEBUG", "true")?;

        Ok(Self {
            default_timezone,
            default_use_true_solar_time,
            include_debug,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_timezone.parse::<chrono_tz::Tz>().is_err() {
            return Err(ConfigError::InvalidValue(format!(
                "unknown default timezone: {}",
                self.default_timezone
            )));
        }
        if self.default_use_true_solar_time {
            tracing::warn!("true solar time is not implemented; the flag has no effect");
        }
        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    FileRead(std::io::Error),

    #[error("Failed to parse YAML configuration: {0}")]
    ParseYaml(serde_yaml::Error),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
