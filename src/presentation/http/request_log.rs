use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use http_body_util::LengthLimitError;

use crate::presentation::http::error::ApiError;

/// Logs method, path and raw body of every request before it is dispatched.
/// The body is buffered up to `limit` bytes and handed on unchanged.
pub async fn log_request(
    State(limit): State<usize>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, limit).await.map_err(|e| {
        let err = e.into_inner();
        if err.downcast_ref::<LengthLimitError>().is_some() {
            ApiError::PayloadTooLarge
        } else {
            ApiError::Validation(vec![format!("failed to read request body: {err}")])
        }
    })?;
    tracing::info!(
        method = %parts.method,
        path = %parts.uri.path(),
        body = %String::from_utf8_lossy(&bytes),
        "contact_request"
    );
    Ok(next.run(Request::from_parts(parts, Body::from(bytes))).await)
}
