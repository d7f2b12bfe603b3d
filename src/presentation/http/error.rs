//! Centralized error translation.
//!
//! Handlers and middleware return [`ApiError`]. Its `IntoResponse` renders the
//! redacted body and stashes the error in the response extensions;
//! [`translate_errors`] re-renders it when the configured policy allows raw
//! error detail to reach the client.

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Request, State,
        rejection::{FormRejection, JsonRejection},
    },
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::ports::contact_repository::StoreError;
use crate::application::use_cases::contacts::send_message::SendContactError;

pub const VALIDATION_FAILED: &str = "Error de validación";
pub const STORAGE_UNAVAILABLE: &str = "Error de conexión a la base de datos";
pub const INTERNAL_ERROR: &str = "Error interno del servidor";
pub const PAYLOAD_TOO_LARGE: &str = "El cuerpo de la solicitud excede el tamaño permitido";
pub const ROUTE_NOT_FOUND: &str = "Ruta no encontrada";

#[derive(Debug, Serialize, ToSchema)]
pub struct FailureBody {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl FailureBody {
    fn new(message: &str) -> Self {
        Self {
            success: false,
            message: message.to_string(),
            error: None,
            errors: None,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("contact store unavailable")]
    StorageUnavailable(#[source] anyhow::Error),
    #[error("request body too large")]
    PayloadTooLarge,
    #[error("{message}")]
    Unclassified {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

#[derive(Clone, Copy, Debug)]
pub struct ErrorPolicy {
    pub expose_detail: bool,
}

#[derive(Clone)]
struct ErrorReport(Arc<ApiError>);

impl ApiError {
    pub fn unclassified(message: &'static str, source: impl Into<anyhow::Error>) -> Self {
        ApiError::Unclassified {
            message,
            source: source.into(),
        }
    }

    /// Maps a store failure, using `message` when the failure is unclassified.
    pub fn from_store(err: StoreError, message: &'static str) -> Self {
        match err {
            StoreError::Unavailable(e) => ApiError::StorageUnavailable(e),
            StoreError::Rejected(messages) => ApiError::Validation(messages),
            StoreError::Other(e) => ApiError::unclassified(message, e),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Unclassified { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self, policy: ErrorPolicy) -> FailureBody {
        match self {
            ApiError::Validation(messages) => FailureBody {
                errors: Some(messages.clone()),
                ..FailureBody::new(VALIDATION_FAILED)
            },
            ApiError::StorageUnavailable(_) => FailureBody::new(STORAGE_UNAVAILABLE),
            ApiError::PayloadTooLarge => FailureBody::new(PAYLOAD_TOO_LARGE),
            ApiError::Unclassified { message, source } => FailureBody {
                error: policy.expose_detail.then(|| format!("{source:#}")),
                ..FailureBody::new(message)
            },
        }
    }

    fn render(&self, policy: ErrorPolicy) -> Response {
        (self.status(), Json(self.body(policy))).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::Validation(vec![rejection.body_text()])
        }
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::Validation(vec![rejection.body_text()])
        }
    }
}

impl From<SendContactError> for ApiError {
    fn from(err: SendContactError) -> Self {
        match err {
            SendContactError::Invalid(v) => ApiError::Validation(v.into_messages()),
            SendContactError::Store(e) => {
                ApiError::from_store(e, crate::presentation::http::contacts::SEND_FAILED)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(messages) => {
                tracing::warn!(errors = ?messages, "request_rejected")
            }
            ApiError::PayloadTooLarge => tracing::warn!("request_body_too_large"),
            ApiError::StorageUnavailable(e) => tracing::error!(error = ?e, "contact_store_unavailable"),
            ApiError::Unclassified { message, source } => {
                tracing::error!(error = ?source, %message, "request_failed")
            }
        }
        let mut res = self.render(ErrorPolicy {
            expose_detail: false,
        });
        res.extensions_mut().insert(ErrorReport(Arc::new(self)));
        res
    }
}

pub async fn translate_errors(
    State(policy): State<ErrorPolicy>,
    req: Request,
    next: Next,
) -> Response {
    let mut res = next.run(req).await;
    match res.extensions_mut().remove::<ErrorReport>() {
        Some(ErrorReport(err)) if policy.expose_detail => err.render(policy),
        _ => res,
    }
}

pub async fn not_found() -> (StatusCode, Json<FailureBody>) {
    (StatusCode::NOT_FOUND, Json(FailureBody::new(ROUTE_NOT_FOUND)))
}
