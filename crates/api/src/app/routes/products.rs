use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use climastore_catalog::{PageRequest, ProductLookup};
use climastore_core::{DomainError, ProductId};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/categories", get(list_categories))
        .route("/:id", get(get_product))
        .route("/:id/image", get(get_product_image))
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::ListProductsQuery>,
) -> axum::response::Response {
    let category = query.category.filter(|c| !c.trim().is_empty());
    let request = PageRequest::new(query.page, services.page_size);
    let page = services.catalog.products_page(category.as_deref(), request);

    Json(dto::ProductListView::new(page, category)).into_response()
}

pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    Json(services.catalog.categories()).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog.find_product_by_id(product_id) {
        Some(p) => Json(dto::ProductView::from(&p)).into_response(),
        None => errors::domain_error_to_response(DomainError::not_found()),
    }
}

pub async fn get_product_image(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let Some(image) = services
        .catalog
        .find_product_by_id(product_id)
        .and_then(|p| p.image().cloned())
    else {
        return errors::json_error(StatusCode::NOT_FOUND, "not_found", "no image for product");
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, image.mime_type)],
        image.data,
    )
        .into_response()
}
