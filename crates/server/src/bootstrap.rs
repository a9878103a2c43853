//! Server Bootstrap
//!
//! Loads configuration, installs the tracing subscriber and wires the chart
//! service the router depends on.

use soulchat_adapters::config::{AppConfig, LoggingConfig};
use soulchat_core::{ChartService, PlaceholderChartService, TraitCatalog};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Configuration error: {0}")]
    Config(#[from] soulchat_adapters::config::ConfigError),

    #[error("Failed to initialize tracing: {0}")]
    Tracing(String),
}

pub type Result<T> = std::result::Result<T, BootstrapError>;

#[derive(Clone)]
pub struct ServerComponents {
    pub config: AppConfig,
    pub chart_service: Arc<dyn ChartService>,
}

impl ServerComponents {
    /// Components backed by the placeholder engine and built-in trait catalog.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            chart_service: Arc::new(PlaceholderChartService::new(TraitCatalog::default())),
        }
    }
}

/// Load and validate the configuration. Runs before tracing is installed,
/// so failures are only reported through the returned error.
pub fn load_config() -> Result<AppConfig> {
    Ok(AppConfig::load()?)
}

pub fn initialize_server(config: AppConfig) -> ServerComponents {
    info!("🚀 Initializing SoulChat BaZi Server");

    let components = ServerComponents::new(config);
    info!("✅ Placeholder chart service initialized");
    info!(
        "🌐 Ready to accept connections on {}",
        components.config.server.bind_address()
    );

    components
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = build_env_filter(logging)?;

    let installed = if logging.is_json() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init()
    };

    installed.map_err(|e| BootstrapError::Tracing(e.to_string()))
}

fn build_env_filter(logging: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&logging.level).map_err(|e| {
            BootstrapError::Tracing(format!("invalid log level '{}': {}", logging.level, e))
        }),
    }
}

pub fn log_config_summary(config: &AppConfig) {
    info!("📋 Configuration Summary:");
    info!("   Server: {}", config.server.bind_address());
    info!(
        "   Logging: level={} format={}",
        config.logging.level, config.logging.format
    );
    info!(
        "   Analysis: default_timezone={} include_debug={}",
        config.analysis.default_timezone, config.analysis.include_debug
    );
    if config.analysis.default_use_true_solar_time {
        warn!("   use_true_solar_time defaults to true but has no effect on charts");
    }
}
