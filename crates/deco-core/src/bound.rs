//! The exclusive upper limit of a prime scan.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::errors::CoreError;

/// A non-negative scan bound. The range scanned is `[0, bound)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bound(i64);

impl Bound {
    /// Bound used when nothing else is configured.
    pub const DEFAULT: Self = Self(100_000);

    pub fn new(value: i64) -> Result<Self, CoreError> {
        if value < 0 {
            return Err(CoreError::invalid_bound(value, "bound must not be negative"));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Default for Bound {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Serialize for Bound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

/// Accepts integers and integer text; everything else is `InvalidBound`.
impl<'de> Deserialize<'de> for Bound {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(BoundVisitor)
    }
}

struct BoundVisitor;

impl Visitor<'_> for BoundVisitor {
    type Value = Bound;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer bound")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Bound, E> {
        Bound::new(value).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Bound, E> {
        let value = i64::try_from(value)
            .map_err(|error| E::custom(CoreError::invalid_bound(value, error.to_string())))?;
        Bound::new(value).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Bound, E> {
        Err(E::custom(CoreError::invalid_bound(
            value,
            "bound must be an integer",
        )))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Bound, E> {
        value.parse().map_err(E::custom)
    }
}

impl FromStr for Bound {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|error| CoreError::invalid_bound(trimmed, error.to_string()))?;
        Self::new(value)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
