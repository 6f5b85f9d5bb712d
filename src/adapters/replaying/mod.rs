//! Replaying adapters that serve recorded interactions.

pub mod filesystem;
pub mod shell;

pub use filesystem::ReplayingFileSystem;
pub use shell::ReplayingShellExecutor;

use std::sync::Mutex;

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::error::PortError;

/// Take the output of the next interaction for `port::method`.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    replayer.next_interaction(port, method).output
}

/// Decode a recorded `{"ok": v}` / `{"err": "message"}` output.
pub(crate) fn replay_result<T: DeserializeOwned>(
    output: serde_json::Value,
    context: &str,
) -> Result<T, PortError> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = output.get("ok").cloned().unwrap_or(output);
    serde_json::from_value(value)
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}
