use axum::Router;

pub mod cart;
pub mod products;
pub mod system;

/// Router for all session-scoped endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/products", products::router())
        .nest("/cart", cart::router())
}
