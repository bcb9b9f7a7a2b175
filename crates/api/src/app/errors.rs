use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use climastore_checkout::{CheckoutRejection, OrderProcessingError};
use climastore_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, "conflict", msg),
    }
}

pub fn rejection_to_response(rejection: CheckoutRejection) -> axum::response::Response {
    let message = rejection.to_string();
    match rejection {
        CheckoutRejection::EmptyCart => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "cart_empty", message)
        }
        CheckoutRejection::InvalidShipping(violations) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            axum::Json(json!({
                "error": "invalid_shipping",
                "message": message,
                "violations": violations,
            })),
        )
            .into_response(),
    }
}

pub fn processing_error_to_response(err: OrderProcessingError) -> axum::response::Response {
    tracing::error!(error = %err, "order processing failed");
    json_error(StatusCode::BAD_GATEWAY, "order_processing_failed", err.to_string())
}

/// Malformed or mistyped JSON bodies keep the extractor's status code.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(rejection.status(), "invalid_body", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
