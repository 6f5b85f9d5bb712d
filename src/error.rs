//! Error taxonomy for package discovery.

use std::path::PathBuf;

use thiserror::Error;

/// Error type returned by port traits and the dependency finder.
pub type PortError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that end a find-package invocation.
#[derive(Debug, Error)]
pub enum FindError {
    /// An enabled feature's dependency (or a member of its group) was not found.
    #[error(
        "feature {feature} requires {dependency}{} but it could not be found{}: {source}",
        .min_version.as_deref().map(|v| format!(" >= {v}")).unwrap_or_default(),
        .group.as_deref().map(|g| format!(" (dependency group {g})")).unwrap_or_default()
    )]
    DependencyNotFound {
        /// Feature flag that activated the lookup.
        feature: String,
        /// Dependency name passed to the finder.
        dependency: String,
        /// Minimum version passed verbatim to the finder.
        min_version: Option<String>,
        /// Group the dependency belongs to, if any.
        group: Option<String>,
        /// Finder failure.
        #[source]
        source: PortError,
    },

    /// Neither the shared nor the static library artifact exists.
    #[error(
        "no importable {library} library found under {}: neither shared nor static variant exists",
        .dir.display()
    )]
    NoLibraryArtifact {
        /// Library base name (e.g. `libcurl`).
        library: String,
        /// Directory that was searched.
        dir: PathBuf,
    },

    /// Required components absent from the supported capability set.
    #[error("missing required components: {}", .0.join(" "))]
    MissingComponents(Vec<String>),

    /// An expected anchor path does not exist.
    #[error("{name} path does not exist: {}", .path.display())]
    ConfigurationPath {
        /// Logical name the path is bound to.
        name: String,
        /// The missing path.
        path: PathBuf,
    },

    /// The package descriptor could not be loaded.
    #[error(transparent)]
    Descriptor(#[from] DescriptorError),
}

/// Errors raised while loading a package descriptor.
#[derive(Debug, Error)]
pub enum DescriptorError {
    /// The descriptor file could not be read.
    #[error("failed to read descriptor {}: {source}", .path.display())]
    Read {
        /// Descriptor path.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: PortError,
    },

    /// The descriptor is not valid YAML for the descriptor schema.
    #[error("failed to parse descriptor {}: {source}", .path.display())]
    Parse {
        /// Descriptor path.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_yaml::Error,
    },

    /// The same feature flag is declared twice.
    #[error("feature {0} is declared more than once")]
    DuplicateFeature(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dependency_error_names_feature_version_and_group() {
        let err = FindError::DependencyNotFound {
            feature: "USE_OPENSSL".into(),
            dependency: "libcrypto".into(),
            min_version: Some("3".into()),
            group: Some("openssl".into()),
            source: "not installed".into(),
        };
        assert_eq!(
            err.to_string(),
            "feature USE_OPENSSL requires libcrypto >= 3 but it could not be found \
             (dependency group openssl): not installed"
        );
    }

    #[test]
    fn missing_components_are_space_joined() {
        let err = FindError::MissingComponents(vec!["QUIC".into(), "SCP".into()]);
        assert_eq!(err.to_string(), "missing required components: QUIC SCP");
    }

    #[test]
    fn configuration_path_reports_name_and_path() {
        let err = FindError::ConfigurationPath {
            name: "CURL_INCLUDE_DIRS".into(),
            path: PathBuf::from("/opt/curl/include"),
        };
        assert_eq!(
            err.to_string(),
            "CURL_INCLUDE_DIRS path does not exist: /opt/curl/include"
        );
    }
}
