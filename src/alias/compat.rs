//! Compatibility policies for older host build tools.
//!
//! Each policy is keyed off a single version predicate: it applies when the
//! host tool is older than the release that made it unnecessary. An unknown
//! host version is treated as current, so no policy applies.

use tracing::debug;

use super::ImportedTarget;
use crate::ports::DependencyFinder;
use crate::resolve::ResolvedLibrarySet;
use crate::version::Version;

/// A version-gated adjustment to imported targets.
pub trait CompatPolicy {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// First host version that no longer needs the policy.
    fn fixed_in(&self) -> Version;

    /// Returns `true` if the policy must be applied for `host`.
    fn applies(&self, host: Option<Version>) -> bool {
        host.is_some_and(|v| v < self.fixed_in())
    }
}

/// Marks the shared target as globally visible so an alias can refer to it.
///
/// Host tools before 3.18 refuse to alias non-global imported targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalImportShim;

impl CompatPolicy for GlobalImportShim {
    fn name(&self) -> &'static str {
        "global-import"
    }

    fn fixed_in(&self) -> Version {
        Version::new(3, 18, 0)
    }
}

impl GlobalImportShim {
    /// Sets global import visibility on `target`.
    pub fn apply(&self, target: &mut ImportedTarget) {
        debug!(policy = self.name(), target = %target.name, "marking imported target global");
        target.global = true;
    }
}

/// Copies dependency link directories onto the static target.
///
/// Host tools before 3.17 do not propagate interface link directories of
/// private dependencies of static libraries, so linking by bare library name
/// fails without them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkDirPropagation;

impl CompatPolicy for LinkDirPropagation {
    fn name(&self) -> &'static str {
        "link-dir-propagation"
    }

    fn fixed_in(&self) -> Version {
        Version::new(3, 17, 0)
    }
}

impl LinkDirPropagation {
    /// Attaches the union of the resolved dependencies' interface link
    /// directories to `target`. Returns how many directories were added.
    pub fn apply(
        &self,
        target: &mut ImportedTarget,
        resolved: &ResolvedLibrarySet,
        finder: &dyn DependencyFinder,
    ) -> usize {
        let before = target.interface_link_directories.len();
        for library in resolved {
            let dirs = finder.interface_link_directories(library);
            target.interface_link_directories.extend(dirs);
        }
        let added = target.interface_link_directories.len() - before;
        debug!(policy = self.name(), target = %target.name, added, "propagated link directories");
        added
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rstest::rstest;

    use super::*;
    use crate::alias::AliasTarget;
    use crate::error::PortError;
    use crate::ports::FoundDependency;
    use crate::registry::DependencySpec;

    struct DirFinder;

    impl DependencyFinder for DirFinder {
        fn find(
            &self,
            _spec: &DependencySpec,
            _search_path: &[PathBuf],
        ) -> Result<FoundDependency, PortError> {
            Err("unused".into())
        }

        fn interface_link_directories(&self, link_target: &str) -> Vec<PathBuf> {
            match link_target {
                "OpenSSL::SSL" | "OpenSSL::Crypto" => vec![PathBuf::from("/opt/openssl/lib")],
                "ZLIB::ZLIB" => vec![PathBuf::from("/opt/zlib/lib")],
                _ => Vec::new(),
            }
        }
    }

    fn target(name: &str, variant: AliasTarget) -> ImportedTarget {
        ImportedTarget::new(name, variant, Vec::new())
    }

    #[rstest]
    #[case(Some("3.16.3"), true)]
    #[case(Some("3.17.0"), false)]
    #[case(Some("3.28.1"), false)]
    #[case(None, false)]
    fn link_dir_predicate(#[case] host: Option<&str>, #[case] expected: bool) {
        let host = host.map(|v| v.parse().unwrap());
        assert_eq!(LinkDirPropagation.applies(host), expected);
    }

    #[rstest]
    #[case(Some("3.11.0"), true)]
    #[case(Some("3.17.5"), true)]
    #[case(Some("3.18.0"), false)]
    #[case(None, false)]
    fn global_import_predicate(#[case] host: Option<&str>, #[case] expected: bool) {
        let host = host.map(|v| v.parse().unwrap());
        assert_eq!(GlobalImportShim.applies(host), expected);
    }

    #[test]
    fn propagates_union_of_link_directories() {
        let mut resolved = ResolvedLibrarySet::default();
        resolved.append("OpenSSL::SSL");
        resolved.append("OpenSSL::Crypto");
        resolved.append("ZLIB::ZLIB");

        let mut target = target("CURL::libcurl_static", AliasTarget::Static);
        let added = LinkDirPropagation.apply(&mut target, &resolved, &DirFinder);

        assert_eq!(added, 2);
        let dirs: Vec<_> = target.interface_link_directories.iter().cloned().collect();
        let expected = ["/opt/openssl/lib", "/opt/zlib/lib"].map(PathBuf::from);
        assert_eq!(dirs, expected);
    }

    #[test]
    fn nothing_to_propagate_is_fine() {
        let mut resolved = ResolvedLibrarySet::default();
        resolved.append("Brotli::dec");

        let mut target = target("CURL::libcurl_static", AliasTarget::Static);
        let added = LinkDirPropagation.apply(&mut target, &resolved, &DirFinder);
        assert_eq!(added, 0);
        assert!(target.interface_link_directories.is_empty());
    }

    #[test]
    fn global_shim_marks_target() {
        let mut target = target("CURL::libcurl_shared", AliasTarget::Shared);
        GlobalImportShim.apply(&mut target);
        assert!(target.global);
    }
}
