//! Command dispatch and handlers.

pub mod components;
pub mod find;
pub mod resolve;

use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::context::ServiceContext;
use crate::registry::builtin::PACKAGE_VERSION;
use crate::registry::{load_descriptor, FeatureRegistry};

/// Dispatch a parsed command to its handler.
///
/// When `FINDCURL_RECORD` is set to a directory path, all port interactions
/// are recorded to per-port cassette files under that directory.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails, or if the
/// recording cannot be saved after a successful command.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let (ctx, session) = if let Ok(path) = env::var("FINDCURL_RECORD") {
        let version = PACKAGE_VERSION.to_string();
        let (ctx, session) = ServiceContext::recording_at(Path::new(&path), &version)?;
        (ctx, Some(session))
    } else {
        (ServiceContext::live(), None)
    };

    let stdout = io::stdout();
    let result = dispatch_with_context(command, &ctx, &mut stdout.lock());

    // Finish recording even when the command failed.
    match session {
        Some(session) => {
            // The recording adapters hold the session's recorders.
            drop(ctx);
            finish_recording(session, result)
        }
        None => result,
    }
}

/// Writes the session's cassettes. The command's own error takes precedence
/// over a failure to save the recording.
fn finish_recording(session: RecordingSession, result: Result<(), String>) -> Result<(), String> {
    match session.finish() {
        Ok(output_dir) => {
            info!(dir = %output_dir.display(), "recording saved");
            result
        }
        Err(e) => {
            warn!(error = %e, "failed to save recording");
            result.and(Err(e))
        }
    }
}

/// Dispatch a command with the given service context and output stream.
///
/// # Errors
///
/// Returns an error string if the command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    out: &mut dyn Write,
) -> Result<(), String> {
    match command {
        Command::Find(args) => find::run(ctx, args, out),
        Command::Resolve(args) => resolve::run(ctx, args, out),
        Command::Components => components::run(out),
    }
}

/// The feature table to use: a descriptor when given, else the built-in one.
fn load_registry(
    ctx: &ServiceContext,
    descriptor: Option<&Path>,
) -> Result<FeatureRegistry, String> {
    match descriptor {
        Some(path) => load_descriptor(ctx.fs.as_ref(), path).map_err(|e| e.to_string()),
        None => Ok(FeatureRegistry::builtin()),
    }
}

/// Module search path inherited from `PKG_CONFIG_PATH`.
fn inherited_search_path() -> Vec<PathBuf> {
    match env::var_os("PKG_CONFIG_PATH") {
        Some(value) => env::split_paths(&value).collect(),
        None => Vec::new(),
    }
}

fn write_err(e: &io::Error) -> String {
    format!("failed to write output: {e}")
}
