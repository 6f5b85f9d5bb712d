//! Cassette configuration for composable per-port replay.

use std::path::{Path, PathBuf};

use super::format::Cassette;
use super::replayer::CassetteReplayer;

/// Per-port cassette file paths. Ports without a cassette path panic if
/// called during replay.
#[derive(Debug, Clone, Default)]
pub struct CassetteConfig {
    /// Path to the filesystem port cassette file.
    pub fs: Option<PathBuf>,
    /// Path to the shell port cassette file.
    pub shell: Option<PathBuf>,
}

/// Per-port replayers, each with its own interaction stream.
pub struct PortReplayers {
    /// Replayer for the filesystem port.
    pub fs: Option<CassetteReplayer>,
    /// Replayer for the shell port.
    pub shell: Option<CassetteReplayer>,
}

impl CassetteConfig {
    /// Config with every port unconfigured.
    #[must_use]
    pub fn panic_on_unspecified() -> Self {
        Self::default()
    }

    /// Reads and parses a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_cassette(path: &Path) -> Result<Cassette, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }

    /// Loads a cassette holding interactions for any number of ports.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_monolithic(path: &Path) -> Result<CassetteReplayer, String> {
        Self::load_cassette(path).map(|cassette| CassetteReplayer::new(&cassette))
    }

    /// Loads a single port's cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_port_cassette(path: &Path) -> Result<CassetteReplayer, String> {
        Self::load_monolithic(path)
    }

    /// Loads every configured per-port cassette.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn load_all(&self) -> Result<PortReplayers, String> {
        let fs = self.fs.as_deref().map(Self::load_port_cassette);
        let shell = self.shell.as_deref().map(Self::load_port_cassette);
        Ok(PortReplayers {
            fs: fs.transpose()?,
            shell: shell.transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn write_cassette(path: &Path, interactions: Vec<Interaction>) {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            package_version: "8.11.0".into(),
            interactions,
        };
        std::fs::write(path, serde_yaml::to_string(&cassette).unwrap()).unwrap();
    }

    fn exists(seq: u64, path: &str, found: bool) -> Interaction {
        Interaction {
            seq,
            port: "fs".into(),
            method: "exists".into(),
            input: json!({"path": path}),
            output: json!(found),
        }
    }

    fn run(seq: u64, command: &str, stdout: &str) -> Interaction {
        Interaction {
            seq,
            port: "shell".into(),
            method: "run".into(),
            input: json!({"command": command}),
            output: json!({"ok": {"exit_code": 0, "stdout": stdout, "stderr": ""}}),
        }
    }

    #[test]
    fn load_monolithic_cassette() {
        let dir = std::env::temp_dir().join("findcurl_config_test_mono");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("full.cassette.yaml");
        let interactions = vec![
            exists(0, "/opt/curl/include", true),
            run(1, "pkg-config --modversion zlib", "1.3.1\n"),
        ];
        write_cassette(&path, interactions);

        let mut replayer = CassetteConfig::load_monolithic(&path).unwrap();
        let first = replayer.next_interaction("fs", "exists");
        assert_eq!(first.output, json!(true));
        assert_eq!(replayer.next_interaction("shell", "run").seq, 1);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn load_per_port_cassettes() {
        let dir = std::env::temp_dir().join("findcurl_config_test_ports");
        std::fs::create_dir_all(&dir).unwrap();
        let fs_path = dir.join("fs.cassette.yaml");
        write_cassette(&fs_path, vec![exists(0, "/opt/curl/lib/libcurl.a", false)]);

        let config = CassetteConfig {
            fs: Some(fs_path),
            ..CassetteConfig::default()
        };
        let mut replayers = config.load_all().unwrap();

        let fs = replayers.fs.as_mut().unwrap();
        assert_eq!(fs.next_interaction("fs", "exists").output, json!(false));
        assert!(replayers.shell.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unreadable_cassette_is_reported() {
        let path = Path::new("/nonexistent/findcurl.cassette.yaml");
        let err = CassetteConfig::load_monolithic(path).err().unwrap();
        assert!(err.starts_with("Failed to read cassette file"));
    }

    #[test]
    fn load_all_with_no_cassettes() {
        let replayers = CassetteConfig::panic_on_unspecified().load_all().unwrap();
        assert!(replayers.fs.is_none());
        assert!(replayers.shell.is_none());
    }
}
