//! `findcurl find` command.

use std::io::Write;

use super::{inherited_search_path, load_registry, write_err};
use crate::adapters::live::pkg_config::PkgConfigFinder;
use crate::cli::FindArgs;
use crate::context::ServiceContext;
use crate::package::{find_package, format_report};

/// Find the package and print its report.
///
/// The report is printed even when the package is not usable, so the
/// per-component flags are visible.
///
/// # Errors
///
/// Returns an error string if the lookup fails, the version request is
/// rejected, or a required component is missing.
pub fn run(ctx: &ServiceContext, args: &FindArgs, out: &mut dyn Write) -> Result<(), String> {
    let registry = load_registry(ctx, args.install.descriptor.as_deref())?;
    let finder = PkgConfigFinder::new(ctx.shell.as_ref());
    let request = args.to_request(inherited_search_path());

    let report = find_package(ctx, &finder, &registry, &request).map_err(|e| e.to_string())?;

    if args.json {
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("failed to serialize report: {e}"))?;
        writeln!(out, "{json}").map_err(|e| write_err(&e))?;
    } else {
        write!(out, "{}", format_report(&report)).map_err(|e| write_err(&e))?;
    }

    if let Some(check) = &report.version_check {
        if let Some(reason) = &check.reason {
            return Err(format!("{}: {reason}", report.package));
        }
    }
    report.components.into_result().map_err(|e| e.to_string())?;
    Ok(())
}
