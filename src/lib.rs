//! client-registry - an administrative CRUD service over client records
//!
//! A single resource (Client: id, name, email) served over HTTP with JSON
//! payloads. The service layer owns the lifecycle and validation rules; the
//! store is a keyed contract behind a trait.

pub mod cli;
pub mod model;
pub mod observability;
pub mod rest_api;
pub mod service;
pub mod store;
