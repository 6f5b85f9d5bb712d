//! `findcurl resolve` command.

use std::io::Write;

use super::{inherited_search_path, load_registry, write_err};
use crate::adapters::live::pkg_config::PkgConfigFinder;
use crate::cli::InstallArgs;
use crate::context::ServiceContext;
use crate::package::FindRequest;
use crate::resolve::{Resolver, SearchPath};

/// Print the resolved link targets, one per line.
///
/// # Errors
///
/// Returns an error string if the registry cannot be loaded or a
/// dependency of an enabled feature is missing.
pub fn run(ctx: &ServiceContext, args: &InstallArgs, out: &mut dyn Write) -> Result<(), String> {
    let registry = load_registry(ctx, args.descriptor.as_deref())?;
    let finder = PkgConfigFinder::new(ctx.shell.as_ref());
    let module_dir = FindRequest::new(&args.prefix).module_dir();

    let mut search_path = SearchPath::new(inherited_search_path());
    let resolved = Resolver::new(&registry, &finder)
        .with_module_dir(module_dir)
        .resolve(&mut search_path)
        .map_err(|e| e.to_string())?;

    for target in &resolved {
        writeln!(out, "{target}").map_err(|e| write_err(&e))?;
    }
    Ok(())
}
