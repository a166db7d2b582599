//! Domain primitives for the movie catalog.
//!
//! Holds everything that has no database or HTTP dependency: the validation
//! accumulator, pagination/sort filters, the runtime scalar, movie field
//! rules, and the shared error type.

pub mod error;
pub mod filters;
pub mod movie;
pub mod runtime;
pub mod types;
pub mod validator;
