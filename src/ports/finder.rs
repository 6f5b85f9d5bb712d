//! Dependency finder port.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::PortError;
use crate::registry::DependencySpec;

/// A dependency the finder located.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoundDependency {
    /// Name from the spec that was looked up.
    pub name: String,
    /// Identifier consumers link against.
    pub link_target: String,
    /// Version the finder reported, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Locates external dependencies on behalf of the resolver.
///
/// The finder owns version matching: a spec whose `min_version` is not met
/// is reported as an error like any other lookup failure.
pub trait DependencyFinder {
    /// Looks up one dependency, searching `search_path` in addition to the
    /// finder's own defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the dependency is missing or too old.
    fn find(
        &self,
        spec: &DependencySpec,
        search_path: &[PathBuf],
    ) -> Result<FoundDependency, PortError>;

    /// Interface link directories of a previously found link target.
    ///
    /// Returns an empty list when the target carries none.
    fn interface_link_directories(&self, link_target: &str) -> Vec<PathBuf>;
}

/// Joins search path entries the way `PATH`-style variables expect.
#[must_use]
pub fn join_search_path(search_path: &[PathBuf]) -> String {
    let parts: Vec<_> = search_path.iter().map(|p| p.to_string_lossy()).collect();
    parts.join(":")
}

