//! Service context bundling the port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::filesystem::LiveFileSystem;
use crate::adapters::live::shell::LiveShellExecutor;
use crate::adapters::recording::{RecordingFileSystem, RecordingShellExecutor};
use crate::adapters::replaying::{ReplayingFileSystem, ReplayingShellExecutor};
use crate::cassette::config::CassetteConfig;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::error::PortError;
use crate::ports::{FileSystem, ShellExecutor, ShellOutput};

/// Bundles the external boundaries a package lookup touches.
///
/// Constructors wire up live, recording or replaying adapters.
pub struct ServiceContext {
    /// Filesystem for probing the installation.
    pub fs: Box<dyn FileSystem>,
    /// Shell executor for running `pkg-config`.
    pub shell: Box<dyn ShellExecutor>,
}

impl ServiceContext {
    /// Context backed by the real filesystem and shell.
    #[must_use]
    pub fn live() -> Self {
        Self {
            fs: Box::new(LiveFileSystem),
            shell: Box::new(LiveShellExecutor),
        }
    }

    /// Live context whose interactions are captured into a new recording
    /// session under `root`.
    ///
    /// Drop the context before calling [`RecordingSession::finish`].
    ///
    /// # Errors
    ///
    /// Returns an error if the session directory cannot be created.
    pub fn recording_at(
        root: &Path,
        package_version: &str,
    ) -> Result<(Self, RecordingSession), String> {
        let session = RecordingSession::new(root, package_version)?;
        let fs = RecordingFileSystem::new(Box::new(LiveFileSystem), Arc::clone(&session.fs));
        let live_shell = Box::new(LiveShellExecutor);
        let shell = RecordingShellExecutor::new(live_shell, Arc::clone(&session.shell));
        let ctx = Self {
            fs: Box::new(fs),
            shell: Box::new(shell),
        };
        Ok((ctx, session))
    }

    /// Replaying context served from one cassette holding every port's
    /// interactions.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = CassetteConfig::load_cassette(path)?;

        // Each port gets its own replayer so their queues are independent.
        Ok(Self {
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
            shell: Box::new(ReplayingShellExecutor::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// Replaying context from per-port cassette files. Unconfigured ports
    /// panic when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            fs: match replayers.fs {
                Some(r) => Box::new(ReplayingFileSystem::new(r)),
                None => Box::new(PanickingFileSystem),
            },
            shell: match replayers.shell {
                Some(r) => Box::new(ReplayingShellExecutor::new(r)),
                None => Box::new(PanickingShellExecutor),
            },
        })
    }
}

struct PanickingFileSystem;
impl FileSystem for PanickingFileSystem {
    fn read_to_string(&self, _path: &Path) -> Result<String, PortError> {
        panic!("FileSystem port not configured in CassetteConfig: no cassette loaded for fs");
    }
    fn exists(&self, _path: &Path) -> bool {
        panic!("FileSystem port not configured in CassetteConfig: no cassette loaded for fs");
    }
}

struct PanickingShellExecutor;
impl ShellExecutor for PanickingShellExecutor {
    fn run(&self, _command: &str) -> Result<ShellOutput, PortError> {
        panic!("ShellExecutor port not configured in CassetteConfig: no cassette loaded for shell");
    }
}
