//! Target aliasing: picks which library artifact consumers link against and
//! builds the imported targets for it.
//!
//! Up to two imported targets exist, `<PKG>::<lib>_shared` and
//! `<PKG>::<lib>_static`. Consumers use the canonical alias `<PKG>::<lib>`,
//! which points at the shared variant when it exists and at the static one
//! otherwise.

pub mod compat;

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexSet;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

pub use compat::{CompatPolicy, GlobalImportShim, LinkDirPropagation};

use crate::error::FindError;
use crate::ports::DependencyFinder;
use crate::resolve::ResolvedLibrarySet;
use crate::version::Version;

/// Library variant an imported target or alias refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AliasTarget {
    /// Shared library.
    Shared,
    /// Static archive.
    Static,
}

impl AliasTarget {
    fn suffix(self) -> &'static str {
        match self {
            Self::Shared => "shared",
            Self::Static => "static",
        }
    }
}

impl fmt::Display for AliasTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Neither library variant is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("neither a shared nor a static library artifact exists")]
pub struct NoLibraryArtifact;

/// Picks the variant the canonical alias resolves to: shared if present,
/// else static.
///
/// # Errors
///
/// Returns [`NoLibraryArtifact`] when neither variant is present.
pub fn select_alias(
    shared_present: bool,
    static_present: bool,
) -> Result<AliasTarget, NoLibraryArtifact> {
    match (shared_present, static_present) {
        (true, _) => Ok(AliasTarget::Shared),
        (false, true) => Ok(AliasTarget::Static),
        (false, false) => Err(NoLibraryArtifact),
    }
}

/// Which library artifacts exist in the installation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LibraryArtifacts {
    /// Directory the artifacts were looked for in.
    pub dir: PathBuf,
    /// Shared library (or import library) present.
    pub shared: bool,
    /// Static archive present.
    pub static_lib: bool,
}

/// A linkable target produced for one library variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportedTarget {
    /// Fully qualified target name.
    pub name: String,
    /// Variant this target stands for.
    pub variant: AliasTarget,
    /// Whether the target is visible outside the importing directory.
    pub global: bool,
    /// Link targets consumers of this target also link against.
    pub interface_link_libraries: Vec<String>,
    /// Extra link directories consumers need.
    pub interface_link_directories: IndexSet<PathBuf>,
}

impl ImportedTarget {
    /// Creates a non-global target with no link directories.
    pub fn new(name: impl Into<String>, variant: AliasTarget, libraries: Vec<String>) -> Self {
        Self {
            name: name.into(),
            variant,
            global: false,
            interface_link_libraries: libraries,
            interface_link_directories: IndexSet::new(),
        }
    }
}

/// The single handle consumers link against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalAlias {
    /// Alias name (e.g. `CURL::libcurl`).
    pub name: String,
    /// Variant the alias resolves to.
    pub target: AliasTarget,
}

/// Imported targets and the canonical alias over them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTargets {
    /// Shared variant, if present.
    pub shared: Option<ImportedTarget>,
    /// Static variant, if present.
    pub static_lib: Option<ImportedTarget>,
    /// Canonical alias.
    pub alias: CanonicalAlias,
}

impl LinkTargets {
    /// The imported target the canonical alias resolves to.
    #[must_use]
    pub fn canonical(&self) -> Option<&ImportedTarget> {
        match self.alias.target {
            AliasTarget::Shared => self.shared.as_ref(),
            AliasTarget::Static => self.static_lib.as_ref(),
        }
    }
}

/// Builds the imported targets for the artifacts present and applies the
/// compatibility policies that hold for `host`.
///
/// # Errors
///
/// Returns [`FindError::NoLibraryArtifact`] when neither variant exists.
pub fn build_targets(
    package: &str,
    library: &str,
    artifacts: &LibraryArtifacts,
    resolved: &ResolvedLibrarySet,
    host: Option<Version>,
    finder: &dyn DependencyFinder,
) -> Result<LinkTargets, FindError> {
    let Ok(selected) = select_alias(artifacts.shared, artifacts.static_lib) else {
        return Err(FindError::NoLibraryArtifact {
            library: library.to_string(),
            dir: artifacts.dir.clone(),
        });
    };

    let libraries: Vec<String> = resolved.iter().map(str::to_string).collect();
    let make = |variant: AliasTarget| {
        let name = format!("{package}::{library}_{variant}");
        ImportedTarget::new(name, variant, libraries.clone())
    };

    let mut shared = artifacts.shared.then(|| make(AliasTarget::Shared));
    let mut static_lib = artifacts.static_lib.then(|| make(AliasTarget::Static));

    if let Some(target) = shared.as_mut() {
        if GlobalImportShim.applies(host) {
            GlobalImportShim.apply(target);
        }
    }
    if let Some(target) = static_lib.as_mut() {
        if LinkDirPropagation.applies(host) {
            LinkDirPropagation.apply(target, resolved, finder);
        }
    }

    let alias = CanonicalAlias {
        name: format!("{package}::{library}"),
        target: selected,
    };
    info!(alias = %alias.name, variant = %selected, "selected link target");

    Ok(LinkTargets {
        shared,
        static_lib,
        alias,
    })
}
