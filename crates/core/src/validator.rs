//! Field-level validation accumulator.
//!
//! A [`Validator`] collects one message per field during a validation pass.
//! The first failure recorded for a field wins; later checks against the
//! same field are skipped so a specific message is never replaced by a more
//! generic one.

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

use crate::error::CoreError;

/// Field name -> message. Ordered so responses are stable.
pub type FieldErrors = BTreeMap<String, String>;

/// Accumulates named-field violations for a single validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validator {
    errors: FieldErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when no violation has been recorded.
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Record `message` under `field` unless the field already has one.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_insert_with(|| message.into());
    }

    /// Record `message` under `field` when `ok` is false.
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add_error(field, message);
        }
    }

    /// Fold another pass into this one. Fields already failed here keep
    /// their existing message.
    pub fn merge(&mut self, other: Validator) {
        for (field, message) in other.errors {
            self.add_error(field, message);
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Convert the pass into a `Result`, yielding [`CoreError::Validation`]
    /// when any field failed.
    pub fn into_result(self) -> Result<(), CoreError> {
        if self.valid() {
            Ok(())
        } else {
            Err(CoreError::Validation(self.errors))
        }
    }

    /// Unconditionally convert the accumulated errors into a [`CoreError`].
    pub fn into_error(self) -> CoreError {
        CoreError::Validation(self.errors)
    }
}

/// `true` iff `value` is one of `permitted`.
pub fn permitted_value<T: PartialEq + ?Sized>(value: &T, permitted: &[&T]) -> bool {
    permitted.iter().any(|p| *p == value)
}

/// `true` iff no two items of `values` are equal.
pub fn unique<I>(values: I) -> bool
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    let mut seen = HashSet::new();
    values.into_iter().all(|v| seen.insert(v))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
