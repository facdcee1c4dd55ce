use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use irblast_core::CoreError;
use irblast_store::{ServiceError, StoreError};
use irblast_transport::{SendError, TransportError};
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps the domain, storage, and transport error types and implements
/// [`IntoResponse`] to produce consistent `{ "error", "code" }` JSON.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `irblast-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence error from `irblast-store`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A send resolution/dispatch error.
    #[error(transparent)]
    Send(#[from] SendError),

    /// A transport-level error outside a full send (connect, raw envelope).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Core(e) => AppError::Core(e),
            ServiceError::Store(e) => AppError::Store(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
            },

            AppError::Store(err) => {
                tracing::error!(error = %err, "Storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "Failed to persist the library".to_string(),
                )
            }

            AppError::Send(send) => match send {
                SendError::RemoteNotFound(id) => (
                    StatusCode::NOT_FOUND,
                    "REMOTE_NOT_FOUND",
                    format!("remote not found: {id}"),
                ),
                SendError::NoSignalConfigured(key) => (
                    StatusCode::CONFLICT,
                    "NO_SIGNAL_CONFIGURED",
                    format!("no signal configured for key {key}"),
                ),
                SendError::Transport(err) => transport_response(err),
            },

            AppError::Transport(err) => transport_response(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Map a transport failure to an HTTP status, error code, and message.
///
/// Connectivity and wire errors surface as 502 (the device, not this
/// service, failed); unsupported encodings are the client's configuration
/// problem and map to 422.
fn transport_response(err: &TransportError) -> (StatusCode, &'static str, String) {
    match err {
        TransportError::Unsupported(format) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "UNSUPPORTED_ENCODING",
            format!("encoding {format} not supported by the active transport"),
        ),
        TransportError::MissingSignal => (
            StatusCode::CONFLICT,
            "NO_SIGNAL_CONFIGURED",
            "key definition has no recorded signal".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Transport error");
            (
                StatusCode::BAD_GATEWAY,
                "TRANSPORT_ERROR",
                other.to_string(),
            )
        }
    }
}
