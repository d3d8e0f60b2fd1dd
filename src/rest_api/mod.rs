//! # REST API Module
//!
//! HTTP surface for client records: configuration, query-parameter parsing,
//! error-to-status mapping, and the axum router.

pub mod config;
pub mod errors;
pub mod params;
pub mod server;

pub use config::ApiServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use params::{ListParams, Page};
pub use server::RestServer;
