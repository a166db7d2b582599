//! Handlers for the `/movies` resource.

use axum::extract::{Query, State};
use axum::http::header::LOCATION;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use marquee_core::error::CoreError;
use marquee_core::filters::validate_filters;
use marquee_core::movie::validate_movie;
use marquee_core::validator::Validator;
use marquee_db::models::movie::{CreateMovie, Movie, UpdateMovie};
use marquee_db::repositories::MovieRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdParam, JsonBody};
use crate::query::ListMoviesParams;
use crate::response::{DataResponse, PagedResponse};
use crate::state::AppState;

/// Lets a client assert the version it last read before patching.
pub const EXPECTED_VERSION_HEADER: &str = "x-expected-version";

/// POST /api/v1/movies
pub async fn create(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateMovie>,
) -> AppResult<impl IntoResponse> {
    let new_movie = input.into_new_movie()?;
    let movie = MovieRepo::insert(&state.pool, &new_movie).await?;

    tracing::info!(id = movie.id, title = %movie.title, "Movie created");

    let location = HeaderValue::from_str(&format!("/api/v1/movies/{}", movie.id))
        .map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(DataResponse { data: movie }),
    ))
}

/// GET /api/v1/movies
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListMoviesParams>,
) -> AppResult<Json<PagedResponse<Movie>>> {
    let mut v = Validator::new();
    let query = params.parse(&mut v);

    let mut filter_checks = Validator::new();
    validate_filters(&mut filter_checks, &query.filters);
    v.merge(filter_checks);
    v.into_result()?;

    let (movies, metadata) =
        MovieRepo::list(&state.pool, &query.title, &query.genres, &query.filters).await?;

    Ok(Json(PagedResponse {
        data: movies,
        metadata,
    }))
}

/// GET /api/v1/movies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    IdParam(id): IdParam,
) -> AppResult<Json<DataResponse<Movie>>> {
    let movie = MovieRepo::get(&state.pool, id).await?;
    Ok(Json(DataResponse { data: movie }))
}

/// PATCH /api/v1/movies/{id}
///
/// Fetches the current row, overlays the fields present in the body,
/// validates the result, and writes it back guarded by the fetched version.
pub async fn update(
    State(state): State<AppState>,
    IdParam(id): IdParam,
    headers: HeaderMap,
    JsonBody(input): JsonBody<UpdateMovie>,
) -> AppResult<Json<DataResponse<Movie>>> {
    let expected_version = expected_version(&headers)?;

    let mut movie = MovieRepo::get(&state.pool, id).await?;

    if let Some(expected) = expected_version {
        if expected != movie.version {
            return Err(CoreError::EditConflict { entity: "Movie", id }.into());
        }
    }

    input.apply_to(&mut movie);

    let mut v = Validator::new();
    validate_movie(&mut v, &movie.fields());
    v.into_result()?;

    MovieRepo::update(&state.pool, &mut movie).await?;

    tracing::info!(id = movie.id, version = movie.version, "Movie updated");
    Ok(Json(DataResponse { data: movie }))
}

/// DELETE /api/v1/movies/{id}
pub async fn delete(State(state): State<AppState>, IdParam(id): IdParam) -> AppResult<StatusCode> {
    MovieRepo::delete(&state.pool, id).await?;
    tracing::info!(id, "Movie deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Read the optional `X-Expected-Version` header.
fn expected_version(headers: &HeaderMap) -> AppResult<Option<i32>> {
    let Some(value) = headers.get(EXPECTED_VERSION_HEADER) else {
        return Ok(None);
    };

    value
        .to_str()
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .map(Some)
        .ok_or_else(|| AppError::BadRequest("X-Expected-Version must be an integer".into()))
}
