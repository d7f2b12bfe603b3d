use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

use crate::presentation::http::error::not_found;

pub const SERVER_OK: &str = "Servidor de contacto funcionando";

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResp {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: String,
}

pub fn timestamp_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

// Liveness only; never touches the contact store.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, body = HealthResp))
)]
pub async fn health() -> Json<HealthResp> {
    Json(HealthResp {
        status: "OK",
        message: SERVER_OK,
        timestamp: timestamp_now(),
    })
}

pub fn routes() -> Router {
    Router::new().route("/health", get(health).fallback(not_found))
}
