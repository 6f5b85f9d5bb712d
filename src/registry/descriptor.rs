//! On-disk package descriptor.
//!
//! A descriptor replaces the built-in feature table with the one written out
//! for another build of the library:
//!
//! ```yaml
//! package: CURL
//! version: 8.11.0
//! library: libcurl
//! features:
//!   - name: USE_OPENSSL
//!     enabled: true
//!     dependencies:
//!       - name: libssl
//!         min_version: "3"
//!         group_id: openssl
//! ```
//!
//! The supported protocol and feature lists are not part of the descriptor.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DependencySpec, FeatureEntry, FeatureFlag, FeatureRegistry};
use crate::error::DescriptorError;
use crate::ports::FileSystem;
use crate::version::Version;

/// Serialized form of a feature registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageDescriptor {
    /// Target namespace.
    pub package: String,
    /// Version of the build the descriptor was generated for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Version>,
    /// Library base name.
    pub library: String,
    /// Features in declared order.
    #[serde(default)]
    pub features: Vec<FeatureDescriptor>,
}

/// Serialized form of one feature entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureDescriptor {
    /// Flag name.
    pub name: String,
    /// Whether the feature is enabled.
    pub enabled: bool,
    /// Dependencies required when enabled.
    #[serde(default)]
    pub dependencies: Vec<DependencySpec>,
}

impl FeatureRegistry {
    /// Builds a registry from a parsed descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::DuplicateFeature`] if a flag is declared twice.
    pub fn from_descriptor(descriptor: PackageDescriptor) -> Result<Self, DescriptorError> {
        let features = descriptor
            .features
            .into_iter()
            .map(|f| FeatureEntry {
                flag: FeatureFlag {
                    name: f.name,
                    enabled: f.enabled,
                },
                dependencies: f.dependencies,
            })
            .collect();
        Self::new(
            descriptor.package,
            descriptor.version,
            descriptor.library,
            features,
        )
    }
}

/// Reads and parses a descriptor through the filesystem port.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a valid descriptor,
/// or declares a feature twice.
pub fn load_descriptor(
    fs: &dyn FileSystem,
    path: &Path,
) -> Result<FeatureRegistry, DescriptorError> {
    let contents = fs
        .read_to_string(path)
        .map_err(|source| DescriptorError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let parsed = serde_yaml::from_str::<PackageDescriptor>(&contents);
    let descriptor = parsed.map_err(|source| DescriptorError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    FeatureRegistry::from_descriptor(descriptor)
}
