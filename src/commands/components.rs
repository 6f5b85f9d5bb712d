//! `findcurl components` command.

use std::io::Write;

use super::write_err;
use crate::registry::{CapabilityKind, FeatureRegistry};

/// Print every supported capability with its kind, protocols first.
///
/// # Errors
///
/// Returns an error string if the output cannot be written.
pub fn run(out: &mut dyn Write) -> Result<(), String> {
    for name in FeatureRegistry::supported_capabilities() {
        let kind = match FeatureRegistry::capability_kind(name) {
            Some(CapabilityKind::Protocol) => "protocol",
            Some(CapabilityKind::Feature) | None => "feature",
        };
        writeln!(out, "{kind}\t{name}").map_err(|e| write_err(&e))?;
    }
    Ok(())
}
