//! Movie field rules shared by the create and update paths.

use chrono::Datelike;

use crate::runtime::Runtime;
use crate::validator::{unique, Validator};

/* --------------------------------------------------------------------------
   Limits
   -------------------------------------------------------------------------- */

/// Longest accepted title, in bytes.
pub const MAX_TITLE_BYTES: usize = 500;

/// Release years must be strictly greater than this.
pub const EARLIEST_YEAR: i32 = 1888;

pub const MIN_GENRES: usize = 1;

pub const MAX_GENRES: usize = 5;

/// Sort tokens accepted by the movie list endpoint.
pub const MOVIE_SORT_SAFELIST: &[&str] = &[
    "id", "title", "year", "runtime", "-id", "-title", "-year", "-runtime",
];

pub const DEFAULT_MOVIE_SORT: &str = "id";

/* --------------------------------------------------------------------------
   Validation
   -------------------------------------------------------------------------- */

/// Borrowed view of the client-controlled fields of a movie candidate.
///
/// `runtime` and `genres` are optional so a create request that omitted
/// them can be reported field by field.
#[derive(Debug, Clone, Copy)]
pub struct MovieFields<'a> {
    pub title: &'a str,
    pub year: i32,
    pub runtime: Option<Runtime>,
    pub genres: Option<&'a [String]>,
}

/// Record every rule violation of `movie` in `v`.
pub fn validate_movie(v: &mut Validator, movie: &MovieFields<'_>) {
    let current_year = chrono::Utc::now().year();

    v.check(!movie.title.is_empty(), "title", "must be provided");
    v.check(
        movie.title.len() <= MAX_TITLE_BYTES,
        "title",
        "must not be more than 500 bytes long",
    );

    v.check(movie.year != 0, "year", "must be provided");
    v.check(
        movie.year > EARLIEST_YEAR,
        "year",
        "must be greater than 1888",
    );
    v.check(movie.year <= current_year, "year", "must not be in the future");

    // `Runtime` is positive by construction; "0 mins" fails body decoding.
    v.check(movie.runtime.is_some(), "runtime", "must be provided");

    let genres = movie.genres.unwrap_or_default();
    v.check(movie.genres.is_some(), "genres", "must be provided");
    v.check(
        genres.len() >= MIN_GENRES,
        "genres",
        "must contain at least 1 genre",
    );
    v.check(
        genres.len() <= MAX_GENRES,
        "genres",
        "must not contain more than 5 genres",
    );
    v.check(
        genres.iter().all(|g| !g.is_empty()),
        "genres",
        "must not contain empty genres",
    );
    v.check(
        unique(genres.iter()),
        "genres",
        "must not contain duplicate genres",
    );
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn genres(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn errors_for(fields: MovieFields<'_>) -> Validator {
        let mut v = Validator::new();
        validate_movie(&mut v, &fields);
        v
    }

    fn casablanca(g: &[String]) -> MovieFields<'_> {
        MovieFields {
            title: "Casablanca",
            year: 1942,
            runtime: Some(Runtime::new(102).unwrap()),
            genres: Some(g),
        }
    }

    #[test]
    fn valid_movie_passes() {
        let g = genres(&["drama", "romance", "war"]);
        assert!(errors_for(casablanca(&g)).valid());
    }

    #[test]
    fn empty_candidate_reports_every_field_as_missing() {
        let v = errors_for(MovieFields {
            title: "",
            year: 0,
            runtime: None,
            genres: None,
        });
        let errors = v.errors();
        assert_eq!(errors["title"], "must be provided");
        assert_eq!(errors["year"], "must be provided");
        assert_eq!(errors["runtime"], "must be provided");
        assert_eq!(errors["genres"], "must be provided");
    }

    #[test]
    fn title_length_is_measured_in_bytes() {
        let g = genres(&["drama"]);
        let at_limit = "a".repeat(MAX_TITLE_BYTES);
        assert!(errors_for(MovieFields {
            title: &at_limit,
            ..casablanca(&g)
        })
        .valid());

        let over = "a".repeat(MAX_TITLE_BYTES + 1);
        let v = errors_for(MovieFields {
            title: &over,
            ..casablanca(&g)
        });
        assert_eq!(v.errors()["title"], "must not be more than 500 bytes long");

        // 250 two-byte characters sit exactly on the limit.
        let multibyte = "é".repeat(MAX_TITLE_BYTES / 2);
        assert!(errors_for(MovieFields {
            title: &multibyte,
            ..casablanca(&g)
        })
        .valid());
    }

    #[test]
    fn year_bounds() {
        let g = genres(&["drama"]);
        let v = errors_for(MovieFields {
            year: EARLIEST_YEAR,
            ..casablanca(&g)
        });
        assert_eq!(v.errors()["year"], "must be greater than 1888");

        let next_year = chrono::Utc::now().year() + 1;
        let v = errors_for(MovieFields {
            year: next_year,
            ..casablanca(&g)
        });
        assert_eq!(v.errors()["year"], "must not be in the future");
    }

    #[test]
    fn genre_count_bounds() {
        let none = genres(&[]);
        assert_eq!(
            errors_for(casablanca(&none)).errors()["genres"],
            "must contain at least 1 genre"
        );

        let six = genres(&["a", "b", "c", "d", "e", "f"]);
        assert_eq!(
            errors_for(casablanca(&six)).errors()["genres"],
            "must not contain more than 5 genres"
        );

        let five = genres(&["a", "b", "c", "d", "e"]);
        assert!(errors_for(casablanca(&five)).valid());
    }

    #[test]
    fn duplicate_genres_rejected() {
        let g = genres(&["drama", "drama"]);
        assert_eq!(
            errors_for(casablanca(&g)).errors()["genres"],
            "must not contain duplicate genres"
        );
    }

    #[test]
    fn empty_genre_entry_rejected() {
        let g = genres(&["drama", ""]);
        assert_eq!(
            errors_for(casablanca(&g)).errors()["genres"],
            "must not contain empty genres"
        );
    }

    #[test]
    fn safelist_has_no_duplicates() {
        assert!(unique(MOVIE_SORT_SAFELIST.iter()));
        assert!(MOVIE_SORT_SAFELIST.contains(&DEFAULT_MOVIE_SORT));
    }
}
