//! Semantic client version identifiers.
//!
//! Client builds report their release as a `major.minor.patch` triple.
//! Ordering is numeric and component-wise, never lexicographic, so
//! `1.10.0` sorts after `1.9.0`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A `major.minor.patch` client version.
///
/// ## Invariants
/// - Components are non-negative integers compared numerically.
/// - The derived ordering compares `major`, then `minor`, then `patch`.
///
/// # Examples
/// ```
/// use backend::domain::SemanticVersion;
///
/// let old: SemanticVersion = "1.9.9".parse().expect("well formed");
/// let new: SemanticVersion = "2.0.0".parse().expect("well formed");
///
/// assert!(new > old);
/// assert_eq!(new.to_string(), "2.0.0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SemanticVersion {
    major: u32,
    minor: u32,
    patch: u32,
}

/// Errors returned when parsing a [`SemanticVersion`] string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseClientVersionError {
    /// The input is not exactly three dot-separated digit runs.
    #[error("client version must be MAJOR.MINOR.PATCH digits: {input:?}")]
    Malformed {
        /// The rejected input value.
        input: String,
    },
    /// A component is all digits but does not fit the component type.
    #[error("client version component out of range: {input:?}")]
    ComponentOutOfRange {
        /// The rejected input value.
        input: String,
    },
}

impl SemanticVersion {
    /// Construct a version from its numeric components.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Major release component.
    #[must_use]
    pub const fn major(&self) -> u32 {
        self.major
    }

    /// Minor release component.
    #[must_use]
    pub const fn minor(&self) -> u32 {
        self.minor
    }

    /// Patch release component.
    #[must_use]
    pub const fn patch(&self) -> u32 {
        self.patch
    }
}

fn parse_component(raw: &str, input: &str) -> Result<u32, ParseClientVersionError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseClientVersionError::Malformed {
            input: input.to_owned(),
        });
    }
    raw.parse()
        .map_err(|_| ParseClientVersionError::ComponentOutOfRange {
            input: input.to_owned(),
        })
}

impl FromStr for SemanticVersion {
    type Err = ParseClientVersionError;

    /// Parse a version matching exactly `\d+\.\d+\.\d+`.
    ///
    /// Surrounding whitespace, sign characters, build metadata, and
    /// pre-release suffixes are all rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('.');
        let (Some(major), Some(minor), Some(patch), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseClientVersionError::Malformed {
                input: s.to_owned(),
            });
        };

        Ok(Self {
            major: parse_component(major, s)?,
            minor: parse_component(minor, s)?,
            patch: parse_component(patch, s)?,
        })
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl TryFrom<String> for SemanticVersion {
    type Error = ParseClientVersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SemanticVersion> for String {
    fn from(value: SemanticVersion) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
#[path = "client_version_tests.rs"]
mod tests;
