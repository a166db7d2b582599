//! Movie entity model and DTOs.

use marquee_core::error::CoreError;
use marquee_core::movie::{validate_movie, MovieFields};
use marquee_core::runtime::Runtime;
use marquee_core::types::{DbId, Timestamp};
use marquee_core::validator::Validator;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie row from the `movies` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    #[serde(skip_serializing)]
    pub created_at: Timestamp,
    pub title: String,
    pub year: i32,
    #[sqlx(try_from = "i32")]
    pub runtime: Runtime,
    pub genres: Vec<String>,
    /// Optimistic concurrency token; starts at 1, bumped on every update.
    pub version: i32,
}

impl Movie {
    pub fn fields(&self) -> MovieFields<'_> {
        MovieFields {
            title: &self.title,
            year: self.year,
            runtime: Some(self.runtime),
            genres: Some(&self.genres),
        }
    }
}

/// A validated movie ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub runtime: Runtime,
    pub genres: Vec<String>,
}

/// DTO for creating a new movie.
///
/// Missing fields decode to their zero value so validation can report each
/// one as "must be provided".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateMovie {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: i32,
    pub runtime: Option<Runtime>,
    pub genres: Option<Vec<String>>,
}

impl CreateMovie {
    pub fn fields(&self) -> MovieFields<'_> {
        MovieFields {
            title: &self.title,
            year: self.year,
            runtime: self.runtime,
            genres: self.genres.as_deref(),
        }
    }

    /// Validate the request, producing a [`NewMovie`] or the field errors.
    pub fn into_new_movie(self) -> Result<NewMovie, CoreError> {
        let mut v = Validator::new();
        validate_movie(&mut v, &self.fields());

        match (self.runtime, self.genres) {
            (Some(runtime), Some(genres)) if v.valid() => Ok(NewMovie {
                title: self.title,
                year: self.year,
                runtime,
                genres,
            }),
            _ => Err(v.into_error()),
        }
    }
}

/// DTO for patching an existing movie. Absent or `null` fields are left
/// unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateMovie {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub runtime: Option<Runtime>,
    pub genres: Option<Vec<String>>,
}

impl UpdateMovie {
    /// Overlay every present field onto `movie`.
    pub fn apply_to(self, movie: &mut Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(runtime) = self.runtime {
            movie.runtime = runtime;
        }
        if let Some(genres) = self.genres {
            movie.genres = genres;
        }
    }
}
