//! Movie runtime in whole minutes.
//!
//! On the wire a runtime is a JSON string such as `"102 mins"`; in the
//! database it is a plain `INTEGER`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    #[error("invalid runtime format")]
    InvalidFormat,

    #[error("runtime must be a positive number of minutes, got {0}")]
    NotPositive(i64),
}

/// A strictly positive number of minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Runtime(i32);

impl Runtime {
    pub fn new(minutes: i32) -> Result<Self, RuntimeError> {
        if minutes > 0 {
            Ok(Self(minutes))
        } else {
            Err(RuntimeError::NotPositive(i64::from(minutes)))
        }
    }

    pub fn minutes(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Runtime {
    type Error = RuntimeError;

    fn try_from(minutes: i32) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mins", self.0)
    }
}

impl FromStr for Runtime {
    type Err = RuntimeError;

    /// Parses `"<n> mins"`. Exactly one space, lowercase unit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (number, unit) = s.split_once(' ').ok_or(RuntimeError::InvalidFormat)?;
        if unit != "mins" {
            return Err(RuntimeError::InvalidFormat);
        }
        let minutes: i64 = number.parse().map_err(|_| RuntimeError::InvalidFormat)?;
        let minutes = i32::try_from(minutes).map_err(|_| RuntimeError::InvalidFormat)?;
        Self::new(minutes)
    }
}

impl Serialize for Runtime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Runtime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
