//! Dotted numeric versions for the host tool and the package itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A `major[.minor[.patch]]` version. Missing components are zero.
///
/// Ordering is lexicographic over `(major, minor, patch)`, which is all the
/// compatibility predicates need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    /// Major component.
    pub major: u32,
    /// Minor component.
    pub minor: u32,
    /// Patch component.
    pub patch: u32,
}

/// A version string that is not `major[.minor[.patch]]`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid version {input:?}: {reason}")]
pub struct VersionParseError {
    input: String,
    reason: &'static str,
}

impl Version {
    /// Builds a version from its three components.
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl FromStr for Version {
    type Err = VersionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |reason| VersionParseError {
            input: s.to_string(),
            reason,
        };

        // Tool versions such as "3.16.0-rc2" or "8.11.0-DEV" carry a suffix
        // after the numeric part; only the numeric prefix matters here.
        let numeric = s.trim().split(['-', '+', ' ']).next().unwrap_or_default();
        if numeric.is_empty() {
            return Err(err("empty version"));
        }

        let mut parts = [0u32; 3];
        for (idx, part) in numeric.split('.').enumerate() {
            if idx >= parts.len() {
                // Fourth and later components (e.g. "3.28.0.1") never affect
                // the predicates.
                break;
            }
            parts[idx] = part.parse().map_err(|_| err("non-numeric component"))?;
        }

        Ok(Self::new(parts[0], parts[1], parts[2]))
    }
}

impl TryFrom<String> for Version {
    type Error = VersionParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Version> for String {
    fn from(value: Version) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Version {
        s.parse().unwrap()
    }

    #[test]
    fn parses_full_version() {
        assert_eq!(parse("3.17.2"), Version::new(3, 17, 2));
    }

    #[test]
    fn missing_components_are_zero() {
        assert_eq!(parse("3"), Version::new(3, 0, 0));
        assert_eq!(parse("3.18"), Version::new(3, 18, 0));
    }

    #[test]
    fn suffix_is_ignored() {
        assert_eq!(parse("3.16.0-rc2"), Version::new(3, 16, 0));
        assert_eq!(parse("8.11.0-DEV"), Version::new(8, 11, 0));
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<Version>().is_err());
        assert!("three.x".parse::<Version>().is_err());
    }

    #[test]
    fn orders_numerically() {
        assert!(parse("3.9.6") < parse("3.17"));
    }
}
