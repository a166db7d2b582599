//! Request extractors with project-specific rejections.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use marquee_core::types::DbId;

use crate::error::AppError;

/// Maximum accepted request body size (1 MiB).
pub const MAX_BODY_BYTES: usize = 1_048_576;

/// Like [`Json`], but a malformed, oversized, or mistyped body is rejected
/// as [`AppError::BadRequest`] so it shares the JSON error envelope.
///
/// Unknown fields are rejected by the target type's
/// `#[serde(deny_unknown_fields)]`.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
    T: Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// The `{id}` path segment as a positive [`DbId`].
///
/// A segment that is not a positive integer names no record, so it is
/// answered with the same 404 as an unknown id.
#[derive(Debug, Clone, Copy)]
pub struct IdParam(pub DbId);

impl<S> FromRequestParts<S> for IdParam
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::NotFound)?;

        match raw.parse::<DbId>() {
            Ok(id) if id >= 1 => Ok(Self(id)),
            _ => Err(AppError::NotFound),
        }
    }
}
