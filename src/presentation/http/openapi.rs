use axum::{Json, Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::contacts::send_contact_message,
        crate::presentation::http::contacts::list_contact_messages,
        crate::presentation::http::contacts::contact_router_status,
        crate::presentation::http::health::health,
    ),
    components(schemas(
        crate::presentation::http::contacts::ContactMessageBody,
        crate::presentation::http::contacts::SendContactRequest,
        crate::presentation::http::contacts::SendContactResponse,
        crate::presentation::http::contacts::ContactListResponse,
        crate::presentation::http::contacts::ContactRouterStatus,
        crate::presentation::http::error::FailureBody,
        crate::presentation::http::health::HealthResp,
    )),
    tags(
        (name = "Contact", description = "Contact form submissions"),
        (name = "Health", description = "Liveness checks")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}
