//! Package lookup: ties the registry, resolver, aliaser and validator into a
//! single find operation over an installation prefix.

pub mod report;
pub mod version_check;

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

pub use report::{format_report, PackageReport};
pub use version_check::{VersionCheck, VersionRequest};

use crate::alias::{build_targets, LibraryArtifacts};
use crate::components::{validate, ComponentRequest, ValidationReport};
use crate::context::ServiceContext;
use crate::error::FindError;
use crate::ports::{DependencyFinder, FileSystem};
use crate::registry::FeatureRegistry;
use crate::resolve::{ResolvedLibrarySet, Resolver, SearchPath};
use crate::version::Version;

/// Shared library file suffixes. On Windows the import library stands in
/// for the DLL: `.dll.a` from MinGW, `_imp.lib` from MSVC.
const SHARED_SUFFIXES: &[&str] = &[".so", ".dylib", ".dll.a", "_imp.lib"];
/// Static archive suffixes. A bare `.lib` is an MSVC static library.
const STATIC_SUFFIXES: &[&str] = &[".a", ".lib"];

/// What a consumer asks for.
#[derive(Debug, Clone, Default)]
pub struct FindRequest {
    /// Installation prefix holding `include/` and `lib/`.
    pub prefix: PathBuf,
    /// Version of the host build tool, when known.
    pub host_version: Option<Version>,
    /// Requested protocols and features.
    pub components: Vec<ComponentRequest>,
    /// Requested package version.
    pub version_request: Option<VersionRequest>,
    /// Module search path in effect before the lookup.
    pub search_path: Vec<PathBuf>,
}

impl FindRequest {
    /// A request for the package under `prefix`.
    pub fn new(prefix: impl Into<PathBuf>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// Public include directory of the installation.
    #[must_use]
    pub fn include_dir(&self) -> PathBuf {
        self.prefix.join("include")
    }

    /// Library directory of the installation.
    #[must_use]
    pub fn lib_dir(&self) -> PathBuf {
        self.prefix.join("lib")
    }

    /// Directory holding the installation's own pkg-config modules.
    #[must_use]
    pub fn module_dir(&self) -> PathBuf {
        self.lib_dir().join("pkgconfig")
    }
}

/// Checks which variants of `library` exist in `dir`.
pub fn detect_artifacts(fs: &dyn FileSystem, dir: &Path, library: &str) -> LibraryArtifacts {
    let present = |suffix: &str| fs.exists(&dir.join(format!("{library}{suffix}")));
    let shared = SHARED_SUFFIXES.iter().any(|suffix| present(suffix));
    let static_lib = STATIC_SUFFIXES.iter().any(|suffix| present(suffix));
    debug!(dir = %dir.display(), library, shared, static_lib, "detected library artifacts");
    LibraryArtifacts {
        dir: dir.to_path_buf(),
        shared,
        static_lib,
    }
}

/// Finds the package described by `registry` under `request.prefix`.
///
/// A rejected version request or a missing required component yields a
/// report with `found == false`; a rejected version skips dependency
/// resolution entirely.
///
/// # Errors
///
/// Returns [`FindError::ConfigurationPath`] when the include directory does
/// not exist, and any fatal resolution or aliasing error.
pub fn find_package(
    ctx: &ServiceContext,
    finder: &dyn DependencyFinder,
    registry: &FeatureRegistry,
    request: &FindRequest,
) -> Result<PackageReport, FindError> {
    let include_dir = request.include_dir();
    if !ctx.fs.exists(&include_dir) {
        return Err(FindError::ConfigurationPath {
            name: format!("{}_INCLUDE_DIR", registry.package()),
            path: include_dir,
        });
    }

    let version_check = request.version_request.map(|r| r.check(registry.version()));
    let rejection = version_check.as_ref().and_then(|c| c.reason.clone());

    let mut report = PackageReport {
        package: registry.package().to_string(),
        version: registry.version(),
        found: false,
        version_check,
        components: ValidationReport::default(),
        include_dir,
        targets: None,
        libraries: ResolvedLibrarySet::default(),
    };

    if let Some(reason) = rejection {
        warn!(package = %report.package, %reason, "version request rejected");
        report.components = validate(&request.components);
        return Ok(report);
    }

    let mut search_path = SearchPath::new(request.search_path.iter().cloned());
    let libraries = Resolver::new(registry, finder)
        .with_module_dir(request.module_dir())
        .resolve(&mut search_path)?;

    let artifacts = detect_artifacts(ctx.fs.as_ref(), &request.lib_dir(), registry.library());
    let targets = build_targets(
        registry.package(),
        registry.library(),
        &artifacts,
        &libraries,
        request.host_version,
        finder,
    )?;

    report.components = validate(&request.components);
    report.found = report.components.success();
    report.targets = Some(targets);
    report.libraries = libraries;
    info!(package = %report.package, found = report.found, "package lookup finished");
    Ok(report)
}
