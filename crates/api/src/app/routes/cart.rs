use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};

use climastore_cart::Cart;
use climastore_checkout::{CheckoutOutcome, ShippingDetails};
use climastore_core::ProductId;
use climastore_infra::CartChange;

use crate::app::{dto, errors};
use crate::app::services::AppServices;
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new()
        .route("/", get(view_cart).delete(clear_cart))
        .route("/lines", post(add_to_cart))
        .route("/lines/:product_id", delete(remove_from_cart))
        .route("/checkout", post(checkout))
}

fn cart_view(cart: &Cart, return_url: Option<String>) -> axum::response::Response {
    match dto::CartView::new(cart, return_url) {
        Ok(view) => Json(view).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn view_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Query(query): Query<dto::CartQuery>,
) -> axum::response::Response {
    let cart = services.storefront.cart(session.session_id());
    cart_view(&cart, query.return_url)
}

pub async fn add_to_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    body: Result<Json<dto::AddToCartRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let product_id = match ProductId::new(body.product_id) {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let quantity = body.quantity.unwrap_or(1);

    let cart = match services
        .storefront
        .add_to_cart(session.session_id(), product_id, quantity)
    {
        Ok(CartChange::Applied(cart)) => cart,
        // Stale product references leave the cart as it was.
        Ok(CartChange::UnknownProduct) => services.storefront.cart(session.session_id()),
        Err(e) => return errors::domain_error_to_response(e),
    };

    cart_view(&cart, body.return_url)
}

pub async fn remove_from_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    Path(product_id): Path<String>,
    Query(query): Query<dto::CartQuery>,
) -> axum::response::Response {
    let product_id: ProductId = match product_id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let cart = match services
        .storefront
        .remove_from_cart(session.session_id(), product_id)
    {
        Ok(CartChange::Applied(cart)) => cart,
        Ok(CartChange::UnknownProduct) => services.storefront.cart(session.session_id()),
        Err(e) => return errors::domain_error_to_response(e),
    };

    cart_view(&cart, query.return_url)
}

pub async fn clear_cart(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
) -> axum::response::Response {
    match services.storefront.clear_cart(session.session_id()) {
        Ok(cart) => cart_view(&cart, None),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn checkout(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(session): Extension<SessionContext>,
    shipping: Result<Json<ShippingDetails>, JsonRejection>,
) -> axum::response::Response {
    let Json(shipping) = match shipping {
        Ok(v) => v,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let outcome = match services
        .storefront
        .checkout(session.session_id(), &services.checkout, &shipping)
    {
        Ok(o) => o,
        Err(e) => return errors::processing_error_to_response(e),
    };

    match outcome {
        CheckoutOutcome::Submitted(confirmation) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "status": "submitted",
                "order_number": confirmation.order_number,
            })),
        )
            .into_response(),
        CheckoutOutcome::Rejected(rejection) => errors::rejection_to_response(rejection),
    }
}
