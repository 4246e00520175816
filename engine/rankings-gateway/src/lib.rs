//! Rankings gateway - REST API for fantasy football position rankings
//!
//! This crate exposes the ranking engine over HTTP: per-position rankings,
//! single players, team filters, ADP boards and a health check, all as
//! JSON envelopes with CORS enabled.

pub mod config;
pub mod error;
pub mod logging;
pub mod rest_api;

pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use rest_api::create_routes;

/// Version of the rankings API
pub const VERSION: &str = "0.1.0";

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 5000;
