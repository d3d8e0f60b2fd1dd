//! # Observability
//!
//! Structured JSON logging for the service. One log line = one event; the
//! HTTP layer logs every domain failure before converting it to a status
//! code, and the CLI logs lifecycle events.

pub mod logger;

pub use logger::{Logger, Severity};
