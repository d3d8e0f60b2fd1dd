//! # REST API HTTP Server
//!
//! Axum router and handlers for the client endpoints. Handlers translate
//! routes and verbs into service calls; failures surface through
//! [`ApiError`](super::errors::ApiError) and its status mapping.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::model::{Client, ClientPatch};
use crate::observability::Logger;
use crate::service::ClientService;
use crate::store::ClientStore;

use super::config::ApiServerConfig;
use super::errors::ApiError;
use super::params::ListParams;

/// HTTP server over a client service
pub struct RestServer<S: ClientStore> {
    config: ApiServerConfig,
    service: Arc<ClientService<S>>,
}

/// Shared state type
type ServiceState<S> = Arc<ClientService<S>>;

impl<S: ClientStore + 'static> RestServer<S> {
    /// Create a server with default configuration
    pub fn new(service: ClientService<S>) -> Self {
        Self::with_config(service, ApiServerConfig::default())
    }

    /// Create a server with custom configuration
    pub fn with_config(service: ClientService<S>, config: ApiServerConfig) -> Self {
        Self {
            config,
            service: Arc::new(service),
        }
    }

    /// Build the axum router
    pub fn router(&self) -> Router {
        let cors = if self.config.cors_origins.is_empty() {
            // No origins configured: permissive, for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = self
                .config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .route("/health", get(health_handler))
            .route("/api/clients", get(list_handler::<S>).post(create_handler::<S>))
            .route(
                "/api/clients/{id}",
                get(get_handler::<S>)
                    .put(put_handler::<S>)
                    .patch(patch_handler::<S>)
                    .delete(delete_handler::<S>),
            )
            .layer(cors)
            .with_state(self.service.clone())
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Bind and serve until terminated
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address: {}", e),
            )
        })?;

        let router = self.router();
        let listener = TcpListener::bind(addr).await?;
        Logger::info("server_listening", &[("addr", &addr.to_string())]);

        axum::serve(listener, router).await
    }
}

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

/// Full-update request body; the record id comes from the path and any id
/// carried in the body is ignored
#[derive(Debug, Clone, Deserialize)]
struct UpdateBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: Option<String>,
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// List clients: all, by exact name, or one page
async fn list_handler<S: ClientStore + 'static>(
    State(service): State<ServiceState<S>>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Client>>, ApiError> {
    let params = ListParams::parse(&query)?;

    let clients = if let Some(name) = &params.name {
        service.find_by_name(name)?
    } else if let Some(page) = params.page {
        service.find_page(page.number, page.per_page)?
    } else {
        service.find_all()?
    };

    Ok(Json(clients))
}

/// Get a single client by id
async fn get_handler<S: ClientStore + 'static>(
    State(service): State<ServiceState<S>>,
    Path(id): Path<String>,
) -> Result<Json<Client>, ApiError> {
    Ok(Json(service.find_by_id(&id)?))
}

/// Create a client; answers 201 with a Location header
async fn create_handler<S: ClientStore + 'static>(
    State(service): State<ServiceState<S>>,
    Json(client): Json<Client>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<Client>), ApiError> {
    let created = service.create(client)?;
    let location = format!("/api/clients/{}", created.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

/// Replace a client; the path id wins over any body id
async fn put_handler<S: ClientStore + 'static>(
    State(service): State<ServiceState<S>>,
    Path(id): Path<String>,
    Json(body): Json<UpdateBody>,
) -> Result<StatusCode, ApiError> {
    service.update(Client {
        id,
        name: body.name,
        email: body.email,
    })?;

    Ok(StatusCode::OK)
}

/// Partially update a client's name and/or email
async fn patch_handler<S: ClientStore + 'static>(
    State(service): State<ServiceState<S>>,
    Path(id): Path<String>,
    Json(patch): Json<ClientPatch>,
) -> Result<StatusCode, ApiError> {
    service.update_name_email(&id, patch)?;

    Ok(StatusCode::OK)
}

/// Delete a client by id
async fn delete_handler<S: ClientStore + 'static>(
    State(service): State<ServiceState<S>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    service.delete_by_id(&id)?;

    Ok(StatusCode::OK)
}
