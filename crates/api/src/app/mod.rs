//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: storefront, checkout workflow and their in-memory collaborators
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    let sessioned = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn(middleware::session_middleware));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(sessioned)
        .layer(ServiceBuilder::new())
}
