use std::fmt;
use std::str::FromStr;

use crate::error::RouteError;

/// Identifier carried in the `:id` segment of detail and edit routes.
///
/// Ids are opaque to the router but must fill exactly one path segment.
/// Empty ids are rejected, as are ids containing `/`, `?`, `#`, `%`,
/// whitespace or control characters, so a typed route always displays as a
/// URL that parses back to the same route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(String);

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn fits_segment(c: char) -> bool {
    !matches!(c, '/' | '?' | '#' | '%') && !c.is_whitespace() && !c.is_control()
}

impl FromStr for EntityId {
    type Err = RouteError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() || !input.chars().all(fits_segment) {
            return Err(RouteError::InvalidId(input.to_string()));
        }
        Ok(Self(input.to_string()))
    }
}

impl From<u64> for EntityId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
