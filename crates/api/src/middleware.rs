use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};

use climastore_core::SessionId;

use crate::context::SessionContext;

/// Header carrying the caller's session id in both directions.
pub const SESSION_HEADER: &str = "x-session-id";

/// Resolve the caller's session, minting a new one when the header is missing
/// or malformed, and echo it back on the response.
pub async fn session_middleware(mut req: Request, next: Next) -> Response {
    let session_id = extract_session(req.headers()).unwrap_or_else(|| {
        let fresh = SessionId::new();
        tracing::debug!(session = %fresh, "starting new session");
        fresh
    });

    req.extensions_mut().insert(SessionContext::new(session_id));

    let mut res = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&session_id.to_string()) {
        res.headers_mut().insert(SESSION_HEADER, value);
    }
    res
}

fn extract_session(headers: &HeaderMap) -> Option<SessionId> {
    let header = headers.get(SESSION_HEADER)?;
    let value = header.to_str().ok()?.trim();
    value.parse().ok()
}
