//! Adapters - Boundary Implementations
//!
//! Configuration loading and request-input resolution that sit between the
//! HTTP surface and the pure core.

pub mod birth;
pub mod config;

pub use crate::birth::{resolve_birth, BirthInput, BirthInputError, ResolvedBirth};
pub use crate::config::{AnalysisConfig, AppConfig, ConfigError, LoggingConfig, ServerConfig};
