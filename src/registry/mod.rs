//! Feature registry: the feature flags this libcurl build was generated with,
//! the dependencies each enabled feature drags in, and the fixed set of
//! capabilities clients may request.
//!
//! The registry is built once and never mutated. Declaration order matters:
//! it determines the order of the resolved link set.

pub mod builtin;
pub mod descriptor;

use serde::{Deserialize, Serialize};

pub use builtin::{SUPPORTED_FEATURES, SUPPORTED_PROTOCOLS};
pub use descriptor::{load_descriptor, FeatureDescriptor, PackageDescriptor};

use crate::error::DescriptorError;
use crate::version::Version;

/// One external library requirement of a feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencySpec {
    /// Name handed to the dependency finder.
    pub name: String,
    /// Minimum version, passed to the finder verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_version: Option<String>,
    /// Specs of one feature sharing a group must resolve together.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
}

impl DependencySpec {
    /// A spec with no version constraint and no group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            min_version: None,
            group_id: None,
        }
    }

    /// Sets the minimum version constraint.
    #[must_use]
    pub fn min_version(mut self, version: impl Into<String>) -> Self {
        self.min_version = Some(version.into());
        self
    }

    /// Places the spec in a dependency group.
    #[must_use]
    pub fn group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }
}

/// A feature toggle fixed when the library was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlag {
    /// Flag name (e.g. `USE_OPENSSL`).
    pub name: String,
    /// Whether the library was built with the feature.
    pub enabled: bool,
}

/// A feature flag together with the dependencies it requires when enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureEntry {
    /// The flag.
    pub flag: FeatureFlag,
    /// Dependencies, in lookup order.
    pub dependencies: Vec<DependencySpec>,
}

impl FeatureEntry {
    /// Creates an entry for `name` with the given enabled state and no dependencies.
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            flag: FeatureFlag {
                name: name.into(),
                enabled,
            },
            dependencies: Vec::new(),
        }
    }

    /// Adds a dependency to the entry.
    #[must_use]
    pub fn requires(mut self, spec: DependencySpec) -> Self {
        self.dependencies.push(spec);
        self
    }

    /// Flag name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.flag.name
    }

    /// Whether the feature is enabled.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.flag.enabled
    }
}

/// Kind of a supported capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityKind {
    /// A wire protocol the library speaks.
    Protocol,
    /// A compile-time feature.
    Feature,
}

/// Immutable table of features for one package build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRegistry {
    package: String,
    version: Option<Version>,
    library: String,
    features: Vec<FeatureEntry>,
}

impl FeatureRegistry {
    /// Builds a registry from features in declared order.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::DuplicateFeature`] if two entries share a name.
    pub fn new(
        package: impl Into<String>,
        version: Option<Version>,
        library: impl Into<String>,
        features: Vec<FeatureEntry>,
    ) -> Result<Self, DescriptorError> {
        let mut seen = std::collections::HashSet::new();
        for feature in &features {
            if !seen.insert(feature.name()) {
                return Err(DescriptorError::DuplicateFeature(feature.name().to_string()));
            }
        }
        Ok(Self {
            package: package.into(),
            version,
            library: library.into(),
            features,
        })
    }

    /// Package name used as the target namespace (e.g. `CURL`).
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Version of the package build, when known.
    #[must_use]
    pub fn version(&self) -> Option<Version> {
        self.version
    }

    /// Library base name (e.g. `libcurl`).
    #[must_use]
    pub fn library(&self) -> &str {
        &self.library
    }

    /// All features, in declared order.
    #[must_use]
    pub fn features(&self) -> &[FeatureEntry] {
        &self.features
    }

    /// Enabled features, in declared order.
    pub fn enabled(&self) -> impl Iterator<Item = &FeatureEntry> {
        self.features.iter().filter(|f| f.enabled())
    }

    /// Looks up a feature by flag name.
    #[must_use]
    pub fn feature(&self, name: &str) -> Option<&FeatureEntry> {
        self.features.iter().find(|f| f.name() == name)
    }

    /// The supported capability set: protocols followed by features.
    pub fn supported_capabilities() -> impl Iterator<Item = &'static str> {
        SUPPORTED_PROTOCOLS
            .iter()
            .chain(SUPPORTED_FEATURES.iter())
            .copied()
    }

    /// Classifies a capability name, or `None` if it is not supported.
    #[must_use]
    pub fn capability_kind(name: &str) -> Option<CapabilityKind> {
        if SUPPORTED_PROTOCOLS.contains(&name) {
            Some(CapabilityKind::Protocol)
        } else if SUPPORTED_FEATURES.contains(&name) {
            Some(CapabilityKind::Feature)
        } else {
            None
        }
    }
}
