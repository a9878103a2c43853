//! SoulChat BaZi Server Library
//!
//! HTTP surface of the placeholder Four Pillars service: routing, DTOs,
//! error mapping and process bootstrap.

pub mod api_docs;
pub mod bazi_api;
pub mod bootstrap;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod middleware;

// API Router module for shared routes
pub mod api_router;

pub use bootstrap::{
    init_tracing, initialize_server, load_config, BootstrapError, Result as BootstrapResult,
    ServerComponents,
};

// Re-export create_api_router for testing
pub use crate::api_router::create_api_router;

pub use crate::handlers::{health_check, index, not_found};
