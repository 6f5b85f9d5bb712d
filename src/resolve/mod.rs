//! Dependency resolution: turns the enabled features of a registry into the
//! ordered, deduplicated list of link targets a consumer must link against.

pub mod search_path;

use std::path::PathBuf;

use indexmap::IndexSet;
use serde::Serialize;
use tracing::{debug, info};

pub use search_path::{SearchPath, SearchPathGuard};

use crate::error::FindError;
use crate::ports::{DependencyFinder, FoundDependency};
use crate::registry::{FeatureEntry, FeatureRegistry};

/// Link targets in first-activation order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedLibrarySet {
    targets: IndexSet<String>,
}

impl ResolvedLibrarySet {
    /// Appends `target` unless it is already present.
    ///
    /// Returns `true` if the set changed.
    pub fn append(&mut self, target: impl Into<String>) -> bool {
        self.targets.insert(target.into())
    }

    /// Returns `true` if `target` is in the set.
    #[must_use]
    pub fn contains(&self, target: &str) -> bool {
        self.targets.contains(target)
    }

    /// Number of link targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if no feature contributed a link target.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Link targets in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.targets.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a ResolvedLibrarySet {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.targets.iter()
    }
}

/// Resolves the dependencies of a registry's enabled features.
pub struct Resolver<'a> {
    registry: &'a FeatureRegistry,
    finder: &'a dyn DependencyFinder,
    module_dirs: Vec<PathBuf>,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over `registry` using `finder` for lookups.
    #[must_use]
    pub fn new(registry: &'a FeatureRegistry, finder: &'a dyn DependencyFinder) -> Self {
        Self {
            registry,
            finder,
            module_dirs: Vec::new(),
        }
    }

    /// Adds a directory that is put on the search path while resolving.
    #[must_use]
    pub fn with_module_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.module_dirs.push(dir.into());
        self
    }

    /// Resolves every enabled feature in declared order.
    ///
    /// `search_path` is augmented with the module directories for the
    /// duration of the call and is back to its previous value when this
    /// returns, whether it succeeds or not.
    ///
    /// # Errors
    ///
    /// Returns [`FindError::DependencyNotFound`] for the first dependency of
    /// an enabled feature the finder cannot locate. No partial set is
    /// returned.
    pub fn resolve(&self, search_path: &mut SearchPath) -> Result<ResolvedLibrarySet, FindError> {
        let guard = search_path.augment(self.module_dirs.iter().cloned());
        let mut resolved = ResolvedLibrarySet::default();

        for feature in self.registry.features() {
            if !feature.enabled() {
                debug!(feature = feature.name(), "feature disabled, skipping");
                continue;
            }
            for found in self.resolve_feature(feature, &guard)? {
                if resolved.contains(&found.link_target) {
                    debug!(feature = feature.name(), dependency = %found.name, "already linked");
                    continue;
                }
                resolved.append(found.link_target);
            }
        }

        info!(
            package = self.registry.package(),
            libraries = resolved.len(),
            "resolved dependencies"
        );
        Ok(resolved)
    }

    /// Looks up every dependency of one feature. Nothing is returned unless
    /// all of them resolve, so a group is never half-linked.
    fn resolve_feature(
        &self,
        feature: &FeatureEntry,
        search_path: &SearchPath,
    ) -> Result<Vec<FoundDependency>, FindError> {
        feature
            .dependencies
            .iter()
            .map(|spec| {
                debug!(
                    feature = feature.name(),
                    dependency = %spec.name,
                    min_version = spec.min_version.as_deref().unwrap_or("-"),
                    "looking up dependency"
                );
                self.finder.find(spec, search_path.entries()).map_err(|source| {
                    FindError::DependencyNotFound {
                        feature: feature.name().to_string(),
                        dependency: spec.name.clone(),
                        min_version: spec.min_version.clone(),
                        group: spec.group_id.clone(),
                        source,
                    }
                })
            })
            .collect()
    }
}
