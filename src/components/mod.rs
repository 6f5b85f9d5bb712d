//! Component validation: checks a client's requested protocols and features
//! against the capabilities this build supports.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::FindError;
use crate::registry::FeatureRegistry;

/// One requested component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRequest {
    /// Protocol or feature name, matched exactly.
    pub name: String,
    /// Whether its absence makes the whole lookup fail.
    pub required: bool,
}

impl ComponentRequest {
    /// A component the client cannot do without.
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: true,
        }
    }

    /// A component the client can do without.
    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
        }
    }
}

/// Outcome of validating a component request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Found flag per requested component, in request order.
    pub found: IndexMap<String, bool>,
    /// Required components that are not supported, in request order.
    pub missing_required: Vec<String>,
}

impl ValidationReport {
    /// Returns `true` if every required component was found.
    #[must_use]
    pub fn success(&self) -> bool {
        self.missing_required.is_empty()
    }

    /// Missing required components joined with spaces.
    #[must_use]
    pub fn missing_message(&self) -> String {
        self.missing_required.join(" ")
    }

    /// Converts a failed report into [`FindError::MissingComponents`].
    ///
    /// # Errors
    ///
    /// Returns the aggregated missing list when any required component is absent.
    pub fn into_result(self) -> Result<Self, FindError> {
        if self.success() {
            Ok(self)
        } else {
            Err(FindError::MissingComponents(self.missing_required))
        }
    }
}

/// Validates `requested` against the supported capability set.
///
/// Every component is checked; missing required ones are collected rather
/// than stopping at the first.
#[must_use]
pub fn validate(requested: &[ComponentRequest]) -> ValidationReport {
    validate_against(FeatureRegistry::supported_capabilities(), requested)
}

/// Validates `requested` against an explicit capability list.
pub fn validate_against<'a>(
    capabilities: impl IntoIterator<Item = &'a str>,
    requested: &[ComponentRequest],
) -> ValidationReport {
    let supported: Vec<&str> = capabilities.into_iter().collect();
    let mut report = ValidationReport::default();

    for request in requested {
        let found = supported.contains(&request.name.as_str());
        report.found.insert(request.name.clone(), found);
        if request.required && !found && !report.missing_required.contains(&request.name) {
            report.missing_required.push(request.name.clone());
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    use ComponentRequest as Request;

    #[test]
    fn supported_required_component_is_found() {
        let report = validate(&[ComponentRequest::required("HTTP2")]);
        assert_eq!(report.found.get("HTTP2"), Some(&true));
        assert!(report.missing_required.is_empty());
        assert!(report.success());
    }

    #[test]
    fn unsupported_required_component_fails() {
        let report = validate(&[ComponentRequest::required("QUIC")]);
        assert_eq!(report.found.get("QUIC"), Some(&false));
        assert_eq!(report.missing_required, vec!["QUIC".to_string()]);
        assert!(!report.success());
    }

    #[test]
    fn unsupported_optional_component_does_not_fail() {
        let report = validate(&[Request::optional("QUIC"), Request::required("HTTPS")]);
        assert_eq!(report.found.get("QUIC"), Some(&false));
        assert!(report.success());
    }

    #[test]
    fn all_missing_are_collected_in_request_order() {
        let report = validate(&[
            ComponentRequest::required("SCP"),
            ComponentRequest::required("HTTP"),
            ComponentRequest::required("QUIC"),
            ComponentRequest::required("SCP"),
        ]);
        assert_eq!(report.missing_required, ["SCP", "QUIC"]);
        assert_eq!(report.missing_message(), "SCP QUIC");
        let order: Vec<&str> = report.found.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["SCP", "HTTP", "QUIC"]);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let report = validate(&[ComponentRequest::required("http2")]);
        assert!(!report.success());
    }

    #[test]
    fn empty_request_succeeds() {
        let report = validate(&[]);
        assert!(report.found.is_empty());
        assert!(report.success());
    }

    #[test]
    fn into_result_aggregates_missing() {
        let report = validate(&[Request::required("QUIC"), Request::required("SCP")]);
        let err = report.into_result().unwrap_err();
        assert_eq!(err.to_string(), "missing required components: QUIC SCP");
    }
}
