use axum::{
    Form, Json, Router,
    extract::{FromRequest, Request, State},
    http::{HeaderMap, StatusCode, header},
    middleware,
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::use_cases::contacts::list_messages::ListContactMessages;
use crate::application::use_cases::contacts::send_message::SendContactMessage;
use crate::bootstrap::app_context::AppContext;
use crate::domain::contacts::contact_message::{ContactMessage, ContactSubmission};
use crate::presentation::http::error::{ApiError, not_found};
use crate::presentation::http::request_log::log_request;

pub const SENT: &str = "Mensaje enviado correctamente";
pub const SEND_FAILED: &str = "Error al enviar el mensaje";
pub const LIST_FAILED: &str = "Error al obtener los mensajes";
pub const ROUTER_OK: &str = "Router de contacto funcionando correctamente";

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessageBody {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ContactMessage> for ContactMessageBody {
    fn from(m: ContactMessage) -> Self {
        ContactMessageBody {
            id: m.id,
            name: m.name,
            email: m.email,
            message: m.message,
            read: m.read,
            created_at: m.created_at,
        }
    }
}

/// Submission payload. Values are loosely typed: numbers and booleans are
/// accepted as text, anything else is a field error.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SendContactRequest {
    #[serde(default, alias = "nombre")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub email: Option<Value>,
    #[serde(default, alias = "mensaje")]
    #[schema(value_type = Option<String>)]
    pub message: Option<Value>,
}

fn text_field(field: &str, value: Option<Value>, errors: &mut Vec<String>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => None,
        Value::Array(_) | Value::Object(_) => {
            errors.push(format!("{field} must be a string"));
            None
        }
    }
}

impl SendContactRequest {
    pub fn into_submission(self) -> Result<ContactSubmission, ApiError> {
        let mut errors = Vec::new();
        let submission = ContactSubmission {
            name: text_field("name", self.name, &mut errors),
            email: text_field("email", self.email, &mut errors),
            message: text_field("message", self.message, &mut errors),
        };
        if errors.is_empty() {
            Ok(submission)
        } else {
            Err(ApiError::Validation(errors))
        }
    }
}

fn is_form_encoded(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| {
            v.trim()
                .to_ascii_lowercase()
                .starts_with("application/x-www-form-urlencoded")
        })
        .unwrap_or(false)
}

/// Submission body, read as `application/x-www-form-urlencoded` when the
/// request says so and as JSON otherwise.
#[derive(Debug)]
pub struct ContactPayload(pub SendContactRequest);

#[axum::async_trait]
impl<S> FromRequest<S> for ContactPayload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form_encoded(req.headers()) {
            let Form(body) = Form::<SendContactRequest>::from_request(req, state).await?;
            Ok(Self(body))
        } else {
            let Json(body) = Json::<SendContactRequest>::from_request(req, state).await?;
            Ok(Self(body))
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SendContactResponse {
    pub success: bool,
    pub message: &'static str,
    pub data: ContactMessageBody,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactListResponse {
    pub success: bool,
    pub data: Vec<ContactMessageBody>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactRouterStatus {
    pub success: bool,
    pub message: &'static str,
    pub timestamp: String,
}

#[utoipa::path(post, path = "/api/contact", tag = "Contact",
    request_body(content = SendContactRequest, content_type = "application/json"),
    responses(
        (status = 201, body = SendContactResponse),
        (status = 400, body = FailureBody),
        (status = 500, body = FailureBody),
        (status = 503, body = FailureBody)
    ))]
pub async fn send_contact_message(
    State(ctx): State<AppContext>,
    ContactPayload(req): ContactPayload,
) -> Result<(StatusCode, Json<SendContactResponse>), ApiError> {
    let submission = req.into_submission()?;

    let repo = ctx.contact_repo();
    let uc = SendContactMessage {
        repo: repo.as_ref(),
    };
    let saved = uc.execute(submission).await?;
    tracing::info!(id = %saved.id, "contact_message_stored");

    Ok((
        StatusCode::CREATED,
        Json(SendContactResponse {
            success: true,
            message: SENT,
            data: saved.into(),
        }),
    ))
}

// Unpaginated: returns every stored message.
#[utoipa::path(get, path = "/api/contact", tag = "Contact",
    responses(
        (status = 200, body = ContactListResponse),
        (status = 500, body = FailureBody),
        (status = 503, body = FailureBody)
    ))]
pub async fn list_contact_messages(
    State(ctx): State<AppContext>,
) -> Result<Json<ContactListResponse>, ApiError> {
    let repo = ctx.contact_repo();
    let uc = ListContactMessages {
        repo: repo.as_ref(),
    };
    let messages = uc
        .execute()
        .await
        .map_err(|e| ApiError::from_store(e, LIST_FAILED))?;
    Ok(Json(ContactListResponse {
        success: true,
        data: messages.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(get, path = "/api/contact/test", tag = "Contact",
    responses((status = 200, body = ContactRouterStatus)))]
pub async fn contact_router_status() -> Json<ContactRouterStatus> {
    Json(ContactRouterStatus {
        success: true,
        message: ROUTER_OK,
        timestamp: crate::presentation::http::health::timestamp_now(),
    })
}

pub fn routes(ctx: AppContext) -> Router {
    let body_limit = ctx.cfg.body_limit_bytes;
    Router::new()
        .route(
            "/",
            get(list_contact_messages)
                .post(send_contact_message)
                .fallback(not_found),
        )
        .route("/test", get(contact_router_status).fallback(not_found))
        // own fallback so unmatched paths under the prefix are logged too
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(body_limit, log_request))
        .with_state(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> SendContactRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn accepts_legacy_field_names() {
        let sub = request(json!({"nombre": "Ana", "email": "ana@example.com", "mensaje": "hola"}))
            .into_submission()
            .unwrap();
        assert_eq!(sub.name.as_deref(), Some("Ana"));
        assert_eq!(sub.message.as_deref(), Some("hola"));
    }

    #[test]
    fn coerces_scalars_to_text() {
        let sub = request(json!({"name": 42, "email": "x@y.z", "message": true}))
            .into_submission()
            .unwrap();
        assert_eq!(sub.name.as_deref(), Some("42"));
        assert_eq!(sub.message.as_deref(), Some("true"));
    }

    #[test]
    fn rejects_structured_values() {
        let err = request(json!({"name": {"first": "Ana"}, "email": ["a"], "message": "hi"}))
            .into_submission()
            .unwrap_err();
        match err {
            ApiError::Validation(errors) => assert_eq!(
                errors,
                ["name must be a string", "email must be a string"]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn detects_form_content_type() {
        let mut headers = HeaderMap::new();
        assert!(!is_form_encoded(&headers));
        headers.insert(
            header::CONTENT_TYPE,
            "Application/X-WWW-Form-Urlencoded; charset=UTF-8".parse().unwrap(),
        );
        assert!(is_form_encoded(&headers));
        headers.insert(header::CONTENT_TYPE, "application/json".parse().unwrap());
        assert!(!is_form_encoded(&headers));
    }

    #[test]
    fn null_and_missing_fields_are_absent() {
        let sub = request(json!({"name": null})).into_submission().unwrap();
        assert!(sub.name.is_none());
        assert!(sub.email.is_none());
    }
}
