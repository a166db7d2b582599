//! Query-string parsing for list endpoints.
//!
//! Values arrive as raw strings so that a malformed integer is reported
//! through the [`Validator`] under its own key rather than rejecting the
//! whole request.

use marquee_core::filters::{Filters, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use marquee_core::movie::{DEFAULT_MOVIE_SORT, MOVIE_SORT_SAFELIST};
use marquee_core::validator::Validator;
use serde::Deserialize;

/// Query parameters for `GET /movies`.
#[derive(Debug, Default, Deserialize)]
pub struct ListMoviesParams {
    pub title: Option<String>,
    /// Comma-separated, e.g. `drama,war`.
    pub genres: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort: Option<String>,
}

/// Parsed and defaulted movie list query. Not yet validated.
#[derive(Debug)]
pub struct MovieListQuery {
    pub title: String,
    pub genres: Vec<String>,
    pub filters: Filters,
}

impl ListMoviesParams {
    pub fn parse(self, v: &mut Validator) -> MovieListQuery {
        let mut filters = Filters::new(
            read_string(self.sort, DEFAULT_MOVIE_SORT),
            MOVIE_SORT_SAFELIST,
        );
        filters.page = read_int(self.page, "page", DEFAULT_PAGE, v);
        filters.page_size = read_int(self.page_size, "page_size", DEFAULT_PAGE_SIZE, v);

        MovieListQuery {
            title: read_string(self.title, ""),
            genres: read_csv(self.genres),
            filters,
        }
    }
}

/// The value, or `default` when absent or empty.
pub fn read_string(value: Option<String>, default: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s,
        _ => default.to_string(),
    }
}

/// Split a comma-separated value; absent or empty yields no items.
pub fn read_csv(value: Option<String>) -> Vec<String> {
    match value {
        Some(s) if !s.is_empty() => s.split(',').map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// Parse an integer, recording "must be an integer value" under `key` and
/// returning `default` when the value is not one.
pub fn read_int(value: Option<String>, key: &str, default: i64, v: &mut Validator) -> i64 {
    match value {
        Some(s) if !s.is_empty() => s.parse().unwrap_or_else(|_| {
            v.add_error(key, "must be an integer value");
            default
        }),
        _ => default,
    }
}
