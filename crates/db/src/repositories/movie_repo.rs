//! Repository for the `movies` table.
//!
//! Updates are compare-and-swap on `version`: a write only lands when the
//! stored version still equals the one the caller read. Zero affected rows
//! means another writer got there first (or the row is gone) and is reported
//! as [`StoreError::EditConflict`].

use marquee_core::filters::{calculate_metadata, Filters, Metadata};
use marquee_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::error::StoreError;
use crate::models::movie::{Movie, NewMovie};
use crate::with_deadline;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, created_at, title, year, runtime, genres, version";

/// A movie row plus the total match count computed by `count(*) OVER()`.
#[derive(FromRow)]
struct MovieWithTotal {
    total_records: i64,
    #[sqlx(flatten)]
    movie: Movie,
}

/// Provides CRUD and filtered listing for movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a validated movie, returning the stored row with its assigned
    /// `id`, `created_at` and `version` (always 1).
    pub async fn insert(pool: &PgPool, input: &NewMovie) -> Result<Movie, StoreError> {
        let query = format!(
            "INSERT INTO movies (title, year, runtime, genres)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        with_deadline(
            sqlx::query_as::<_, Movie>(&query)
                .bind(&input.title)
                .bind(input.year)
                .bind(input.runtime.minutes())
                .bind(&input.genres)
                .fetch_one(pool),
        )
        .await
    }

    /// Fetch a movie by id. Ids below 1 never exist and are rejected
    /// without touching the database.
    pub async fn get(pool: &PgPool, id: DbId) -> Result<Movie, StoreError> {
        if id < 1 {
            return Err(StoreError::RecordNotFound);
        }

        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        with_deadline(
            sqlx::query_as::<_, Movie>(&query)
                .bind(id)
                .fetch_optional(pool),
        )
        .await?
        .ok_or(StoreError::RecordNotFound)
    }

    /// List one page of movies.
    ///
    /// - `title`: full-text match against the title; empty matches all.
    /// - `genres`: the movie must carry every listed genre; empty matches all.
    /// - `filters`: sort and page. Ties on the sort column are broken by
    ///   `id ASC` so pages are stable.
    ///
    /// The pre-pagination match count comes back on every row via a window
    /// function, so metadata needs no second query. `filters` must have
    /// passed `validate_filters`.
    pub async fn list(
        pool: &PgPool,
        title: &str,
        genres: &[String],
        filters: &Filters,
    ) -> Result<(Vec<Movie>, Metadata), StoreError> {
        let query = format!(
            "SELECT count(*) OVER() AS total_records, {COLUMNS}
             FROM movies
             WHERE (to_tsvector('simple', title) @@ plainto_tsquery('simple', $1) OR $1 = '')
               AND (genres @> $2 OR $2 = '{{}}')
             ORDER BY {} {}, id ASC
             LIMIT $3 OFFSET $4",
            filters.sort_column(),
            filters.sort_direction(),
        );

        let rows = with_deadline(
            sqlx::query_as::<_, MovieWithTotal>(&query)
                .bind(title)
                .bind(genres)
                .bind(filters.limit())
                .bind(filters.offset())
                .fetch_all(pool),
        )
        .await?;

        let total_records = rows.first().map_or(0, |row| row.total_records);
        let metadata = calculate_metadata(total_records, filters.page, filters.page_size);
        let movies = rows.into_iter().map(|row| row.movie).collect();

        Ok((movies, metadata))
    }

    /// Write every mutable field of `movie` and bump its version, but only
    /// if the stored version still equals `movie.version`.
    ///
    /// On success `movie.version` holds the new version. No retry is
    /// attempted on conflict; the caller must re-fetch.
    pub async fn update(pool: &PgPool, movie: &mut Movie) -> Result<(), StoreError> {
        if movie.id < 1 {
            return Err(StoreError::RecordNotFound);
        }

        let new_version = with_deadline(
            sqlx::query_scalar::<_, i32>(
                "UPDATE movies
                 SET title = $1, year = $2, runtime = $3, genres = $4, version = version + 1
                 WHERE id = $5 AND version = $6
                 RETURNING version",
            )
            .bind(&movie.title)
            .bind(movie.year)
            .bind(movie.runtime.minutes())
            .bind(&movie.genres)
            .bind(movie.id)
            .bind(movie.version)
            .fetch_optional(pool),
        )
        .await?
        .ok_or(StoreError::EditConflict)?;

        movie.version = new_version;
        Ok(())
    }

    /// Permanently delete a movie by id. Not version-checked.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), StoreError> {
        if id < 1 {
            return Err(StoreError::RecordNotFound);
        }

        let result = with_deadline(
            sqlx::query("DELETE FROM movies WHERE id = $1")
                .bind(id)
                .execute(pool),
        )
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::RecordNotFound);
        }
        Ok(())
    }
}
