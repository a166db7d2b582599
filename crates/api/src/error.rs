use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use marquee_core::error::CoreError;
use marquee_db::StoreError;
use serde_json::json;

const NOT_FOUND_MESSAGE: &str = "the requested resource could not be found";
const EDIT_CONFLICT_MESSAGE: &str =
    "unable to update the record due to an edit conflict, please try again";
const INTERNAL_MESSAGE: &str = "the server encountered a problem and could not process your request";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors, [`StoreError`] for repository
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `marquee_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A repository error from `marquee_db`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// No route, or no record, matches the request path.
    #[error("Not found")]
    NotFound,

    /// The path exists but does not accept this method.
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(Method),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::Validation(fields) => {
                    let body = json!({
                        "error": "request failed validation",
                        "code": "VALIDATION_ERROR",
                        "fields": fields,
                    });
                    return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(body)).into_response();
                }
                CoreError::EditConflict { entity, id } => {
                    tracing::debug!(entity, id, "Edit conflict");
                    (
                        StatusCode::CONFLICT,
                        "EDIT_CONFLICT",
                        EDIT_CONFLICT_MESSAGE.to_string(),
                    )
                }
            },

            // --- Repository errors ---
            AppError::Store(err) => classify_store_error(&err),

            // --- HTTP-specific errors ---
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                NOT_FOUND_MESSAGE.to_string(),
            ),
            AppError::MethodNotAllowed(method) => (
                StatusCode::METHOD_NOT_ALLOWED,
                "METHOD_NOT_ALLOWED",
                format!("the {method} method is not supported for this resource"),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    INTERNAL_MESSAGE.to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a repository error into an HTTP status, error code, and message.
///
/// Failures are logged with full detail; the client only sees a generic
/// message.
fn classify_store_error(err: &StoreError) -> (StatusCode, &'static str, String) {
    match err {
        StoreError::RecordNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            NOT_FOUND_MESSAGE.to_string(),
        ),
        StoreError::EditConflict => (
            StatusCode::CONFLICT,
            "EDIT_CONFLICT",
            EDIT_CONFLICT_MESSAGE.to_string(),
        ),
        StoreError::Failure(cause) => {
            tracing::error!(error = %cause, timeout = err.is_timeout(), "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_MESSAGE.to_string(),
            )
        }
    }
}
