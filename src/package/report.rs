//! The result of a package lookup and its `NAME=VALUE` rendering.

use std::fmt::Write as _;
use std::path::PathBuf;

use serde::Serialize;

use super::version_check::VersionCheck;
use crate::alias::LinkTargets;
use crate::components::ValidationReport;
use crate::registry::{SUPPORTED_FEATURES, SUPPORTED_PROTOCOLS};
use crate::resolve::ResolvedLibrarySet;
use crate::version::Version;

/// Everything a consumer learns from one lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageReport {
    /// Package name (e.g. `CURL`).
    pub package: String,
    /// Package version, if known.
    pub version: Option<Version>,
    /// Whether the package is usable: version accepted and no required
    /// component missing.
    pub found: bool,
    /// Result of the version request, if one was made.
    pub version_check: Option<VersionCheck>,
    /// Per-component found flags.
    pub components: ValidationReport,
    /// Public include directory.
    pub include_dir: PathBuf,
    /// Imported targets; absent when the version check rejected the package.
    pub targets: Option<LinkTargets>,
    /// Dependency link targets.
    pub libraries: ResolvedLibrarySet,
}

impl PackageReport {
    /// Returns `true` if the package is usable.
    #[must_use]
    pub fn found(&self) -> bool {
        self.found
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "TRUE"
    } else {
        "FALSE"
    }
}

/// Renders the report as CMake-style `NAME=VALUE` lines. Lists use `;`.
#[must_use]
pub fn format_report(report: &PackageReport) -> String {
    let prefix = &report.package;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{prefix}_FOUND={}", flag(report.found));
    for (component, found) in &report.components.found {
        let _ = writeln!(out, "{prefix}_{component}_FOUND={}", flag(*found));
    }
    if let Some(version) = report.version {
        let _ = writeln!(out, "{prefix}_VERSION={version}");
    }
    let include_dir = report.include_dir.display();
    let _ = writeln!(out, "{prefix}_INCLUDE_DIRS={include_dir}");
    if let Some(targets) = &report.targets {
        let _ = writeln!(out, "{prefix}_LIBRARIES={}", targets.alias.name);
    }
    let libraries: Vec<&str> = report.libraries.iter().collect();
    let _ = writeln!(out, "{prefix}_LINK_LIBRARIES={}", libraries.join(";"));
    let protocols = SUPPORTED_PROTOCOLS.join(";");
    let _ = writeln!(out, "{prefix}_SUPPORTED_PROTOCOLS={protocols}");
    let features = SUPPORTED_FEATURES.join(";");
    let _ = writeln!(out, "{prefix}_SUPPORTED_FEATURES={features}");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::{AliasTarget, CanonicalAlias};
    use crate::components::{validate, ComponentRequest};

    fn report() -> PackageReport {
        let mut libraries = ResolvedLibrarySet::default();
        libraries.append("PkgConfig::libssl");
        libraries.append("PkgConfig::zlib");

        let requested = [
            ComponentRequest::required("HTTP2"),
            ComponentRequest::optional("QUIC"),
        ];

        PackageReport {
            package: "CURL".into(),
            version: Some(Version::new(8, 11, 0)),
            found: true,
            version_check: None,
            components: validate(&requested),
            include_dir: PathBuf::from("/opt/curl/include"),
            targets: Some(LinkTargets {
                shared: None,
                static_lib: None,
                alias: CanonicalAlias {
                    name: "CURL::libcurl".into(),
                    target: AliasTarget::Static,
                },
            }),
            libraries,
        }
    }

    #[test]
    fn renders_cmake_style_lines() {
        let text = format_report(&report());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "CURL_FOUND=TRUE");
        assert_eq!(lines[1], "CURL_HTTP2_FOUND=TRUE");
        assert_eq!(lines[2], "CURL_QUIC_FOUND=FALSE");
        assert!(lines.contains(&"CURL_VERSION=8.11.0"));
        assert!(lines.contains(&"CURL_INCLUDE_DIRS=/opt/curl/include"));
        assert!(lines.contains(&"CURL_LIBRARIES=CURL::libcurl"));
        assert!(lines.contains(&"CURL_LINK_LIBRARIES=PkgConfig::libssl;PkgConfig::zlib"));
        assert!(text.contains("CURL_SUPPORTED_PROTOCOLS=DICT;FILE;FTP;"));
        assert!(text.contains("CURL_SUPPORTED_FEATURES=alt-svc;AsynchDNS;"));
    }

    #[test]
    fn not_found_report_flags_missing_components() {
        let mut report = report();
        report.components = validate(&[ComponentRequest::required("QUIC")]);
        report.found = false;

        let text = format_report(&report);
        assert!(text.starts_with("CURL_FOUND=FALSE\nCURL_QUIC_FOUND=FALSE\n"));
    }

    #[test]
    fn json_output_carries_alias_and_libraries() {
        let value = serde_json::to_value(report()).unwrap();
        assert_eq!(value["version"], "8.11.0");
        assert_eq!(value["targets"]["alias"]["target"], "static");
        assert_eq!(value["libraries"][1], "PkgConfig::zlib");
    }
}
