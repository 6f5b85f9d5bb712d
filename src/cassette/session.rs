//! Recording session managing per-port cassette recorders.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use tracing::info;

use super::recorder::CassetteRecorder;

/// Per-port recorders writing into one timestamped directory.
pub struct RecordingSession {
    /// Recorder for filesystem interactions.
    pub fs: Arc<Mutex<CassetteRecorder>>,
    /// Recorder for shell interactions.
    pub shell: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Starts a session under `<root>/<timestamp>/`.
    ///
    /// # Errors
    ///
    /// Returns an error if the timestamped directory already exists or
    /// cannot be created.
    pub fn new(root: &Path, package_version: &str) -> Result<Self, String> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let output_dir = root.join(&timestamp);

        if output_dir.exists() {
            let dir = output_dir.display();
            return Err(format!("Cassette directory already exists: {dir}"));
        }
        std::fs::create_dir_all(&output_dir)
            .map_err(|e| format!("Failed to create cassette directory: {e}"))?;

        let make_recorder = |port: &str| {
            let path = output_dir.join(format!("{port}.cassette.yaml"));
            let name = format!("{timestamp}-{port}");
            Arc::new(Mutex::new(CassetteRecorder::new(path, name, package_version)))
        };

        Ok(Self {
            fs: make_recorder("fs"),
            shell: make_recorder("shell"),
            output_dir,
        })
    }

    /// Directory the cassettes are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes every port's cassette and returns the output directory.
    ///
    /// # Errors
    ///
    /// Returns an error if a recording adapter is still alive or a cassette
    /// file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        fn finish_one(arc: Arc<Mutex<CassetteRecorder>>, port: &str) -> Result<(), String> {
            let recorder = Arc::try_unwrap(arc)
                .map_err(|_| format!("Recording adapter for {port} still has references"))?
                .into_inner()
                .map_err(|e| format!("Recorder lock for {port} poisoned: {e}"))?;
            let interactions = recorder.len();
            let path = recorder
                .finish()
                .map_err(|e| format!("Failed to write {port} cassette: {e}"))?;
            info!(port, interactions, path = %path.display(), "cassette written");
            Ok(())
        }

        finish_one(self.fs, "fs")?;
        finish_one(self.shell, "shell")?;
        Ok(self.output_dir)
    }
}
