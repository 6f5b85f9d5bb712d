//! Recording adapters that capture port interactions to cassettes.

pub mod filesystem;
pub mod shell;

pub use filesystem::RecordingFileSystem;
pub use shell::RecordingShellExecutor;

use std::sync::{Arc, Mutex};

use serde::Serialize;
use tracing::warn;

use crate::cassette::recorder::CassetteRecorder;

/// Record an interaction with a plain (non-Result) return value.
///
/// Mirror of `replaying::next_output`.
pub(crate) fn record_interaction<I, O>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    output: &O,
) where
    I: Serialize,
    O: Serialize,
{
    match (serde_json::to_value(input), serde_json::to_value(output)) {
        (Ok(input), Ok(output)) => push(recorder, port, method, input, output),
        (Err(e), _) | (_, Err(e)) => {
            warn!(port, method, error = %e, "interaction not recorded");
        }
    }
}

/// Record a `Result<T, E>` interaction.
///
/// Mirror of `replaying::replay_result`. `Ok(v)` is stored as `{"ok": v}`
/// and `Err(e)` as `{"err": e.to_string()}`.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let output = match result {
        Ok(v) => serde_json::to_value(v).map(|inner| serde_json::json!({ "ok": inner })),
        Err(e) => Ok(serde_json::json!({ "err": e.to_string() })),
    };
    match (serde_json::to_value(input), output) {
        (Ok(input), Ok(output)) => push(recorder, port, method, input, output),
        (Err(e), _) | (_, Err(e)) => {
            warn!(port, method, error = %e, "interaction not recorded");
        }
    }
}

fn push(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: serde_json::Value,
    output: serde_json::Value,
) {
    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, method, input, output);
}
