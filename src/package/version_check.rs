//! Version requests a consumer places on the package.

use serde::Serialize;

use crate::version::Version;

/// A requested package version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VersionRequest {
    /// Requested version.
    pub version: Version,
    /// Whether only exactly this version is acceptable.
    pub exact: bool,
}

/// Outcome of checking a [`VersionRequest`] against the package version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionCheck {
    /// What the consumer asked for.
    pub requested: Version,
    /// Whether an exact match was required.
    pub exact: bool,
    /// Version of the package, if known.
    pub found: Option<Version>,
    /// Whether the package satisfies the request.
    pub compatible: bool,
    /// Why the package was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl VersionRequest {
    /// A request for at least `version` within the same major release.
    #[must_use]
    pub const fn at_least(version: Version) -> Self {
        Self {
            version,
            exact: false,
        }
    }

    /// A request for exactly `version`.
    #[must_use]
    pub const fn exact(version: Version) -> Self {
        Self {
            version,
            exact: true,
        }
    }

    /// Checks the request against the package version.
    ///
    /// Same major and not older is compatible; an exact request needs all
    /// three components equal. An unknown package version never satisfies
    /// a request.
    #[must_use]
    pub fn check(&self, found: Option<Version>) -> VersionCheck {
        let reason = match found {
            Some(v) => self.rejection(v),
            None => Some("package version is unknown".to_string()),
        };

        VersionCheck {
            requested: self.version,
            exact: self.exact,
            found,
            compatible: reason.is_none(),
            reason,
        }
    }

    fn rejection(&self, found: Version) -> Option<String> {
        let wanted = self.version;
        let problem = if self.exact && found != wanted {
            "is not the exact requested version"
        } else if found.major != wanted.major {
            "is not compatible with requested version"
        } else if found < wanted {
            "is older than requested version"
        } else {
            return None;
        };
        Some(format!("version {found} {problem} {wanted}"))
    }
}
