//! Pagination and sorting parameters for list queries.
//!
//! [`Filters`] carries the client-requested page, page size and sort token
//! together with the safelist of sort tokens the endpoint accepts. Only
//! safelist entries (compiled-in `&'static str`) are ever handed to the SQL
//! layer, so a client-chosen string never becomes part of query text.

use serde::Serialize;

use crate::validator::{permitted_value, unique, Validator};

// ---------------------------------------------------------------------------
// Bounds and defaults
// ---------------------------------------------------------------------------

/// Highest page number accepted. Keeps OFFSET values sane.
pub const MAX_PAGE: i64 = 10_000_000;

/// Largest page size accepted.
pub const MAX_PAGE_SIZE: i64 = 100;

pub const DEFAULT_PAGE: i64 = 1;

pub const DEFAULT_PAGE_SIZE: i64 = 20;

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub page: i64,
    pub page_size: i64,
    pub sort: String,
    pub sort_safelist: &'static [&'static str],
}

impl Filters {
    /// Filters with default page and page size.
    pub fn new(sort: impl Into<String>, sort_safelist: &'static [&'static str]) -> Self {
        debug_assert!(unique(sort_safelist.iter()), "sort safelist has duplicates");
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            sort: sort.into(),
            sort_safelist,
        }
    }

    /// Bare column name for the sort token, taken from the safelist.
    ///
    /// # Panics
    ///
    /// Panics if the token is not in the safelist. [`validate_filters`] must
    /// have rejected such input before a query is built.
    pub fn sort_column(&self) -> &'static str {
        let entry: &'static str = self
            .sort_safelist
            .iter()
            .copied()
            .find(|safe| *safe == self.sort)
            .unwrap_or_else(|| panic!("unsafe sort parameter: {}", self.sort));
        entry.trim_start_matches('-')
    }

    /// `"DESC"` for a `-`-prefixed token, otherwise `"ASC"`.
    pub fn sort_direction(&self) -> &'static str {
        if self.sort.starts_with('-') {
            "DESC"
        } else {
            "ASC"
        }
    }

    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.page_size
    }
}

/// Record any out-of-range page values or unknown sort token in `v`.
pub fn validate_filters(v: &mut Validator, filters: &Filters) {
    v.check(filters.page > 0, "page", "must be greater than zero");
    v.check(
        filters.page <= MAX_PAGE,
        "page",
        "must be a maximum of 10 million",
    );
    v.check(filters.page_size > 0, "page_size", "must be greater than zero");
    v.check(
        filters.page_size <= MAX_PAGE_SIZE,
        "page_size",
        "must be a maximum of 100",
    );
    v.check(
        permitted_value(filters.sort.as_str(), filters.sort_safelist),
        "sort",
        "invalid sort value",
    );
}

// ---------------------------------------------------------------------------
// Metadata
// ---------------------------------------------------------------------------

/// Pagination details returned alongside a page of results.
///
/// All fields are zero when the query matched nothing; zero fields are
/// omitted when serialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metadata {
    #[serde(skip_serializing_if = "is_zero")]
    pub current_page: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub page_size: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub first_page: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub last_page: i64,
    #[serde(skip_serializing_if = "is_zero")]
    pub total_records: i64,
}

fn is_zero(n: &i64) -> bool {
    *n == 0
}

pub fn calculate_metadata(total_records: i64, page: i64, page_size: i64) -> Metadata {
    if total_records <= 0 || page_size <= 0 {
        return Metadata::default();
    }

    Metadata {
        current_page: page,
        page_size,
        first_page: 1,
        last_page: (total_records + page_size - 1) / page_size,
        total_records,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
