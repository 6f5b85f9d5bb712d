//! Record-replay round-trip integration test.
//!
//! Runs a full package lookup through recording adapters, then replays the
//! cassette twice and checks the reports are identical each time.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use findcurl::adapters::live::filesystem::LiveFileSystem;
use findcurl::adapters::live::pkg_config::PkgConfigFinder;
use findcurl::adapters::recording::{RecordingFileSystem, RecordingShellExecutor};
use findcurl::cassette::recorder::CassetteRecorder;
use findcurl::context::ServiceContext;
use findcurl::error::PortError;
use findcurl::package::{find_package, FindRequest, PackageReport};
use findcurl::ports::{ShellExecutor, ShellOutput};
use findcurl::registry::FeatureRegistry;
use findcurl::version::Version;

/// Answers `pkg-config` queries as a host with every dependency installed
/// would, with zlib living outside the default library path.
struct FakePkgConfig;

impl ShellExecutor for FakePkgConfig {
    fn run(&self, command: &str) -> Result<ShellOutput, PortError> {
        let stdout = if command.contains("--modversion zlib") {
            "1.3.1\n"
        } else if command.contains("--libs-only-L zlib") {
            "-L/opt/zlib/lib\n"
        } else {
            ""
        };
        Ok(ShellOutput {
            exit_code: 0,
            stdout: stdout.to_string(),
            stderr: String::new(),
        })
    }
}

fn fake_install(dir: &Path) -> PathBuf {
    let prefix = dir.join("prefix");
    std::fs::create_dir_all(prefix.join("include")).unwrap();
    std::fs::create_dir_all(prefix.join("lib")).unwrap();
    std::fs::write(prefix.join("lib/libcurl.a"), b"").unwrap();
    prefix
}

fn lookup(ctx: &ServiceContext, prefix: &Path) -> PackageReport {
    let finder = PkgConfigFinder::new(ctx.shell.as_ref());
    let mut request = FindRequest::new(prefix);
    request.host_version = Some(Version::new(3, 16, 0));
    find_package(ctx, &finder, &FeatureRegistry::builtin(), &request).unwrap()
}

#[test]
fn record_then_replay_produces_identical_reports() {
    let dir = std::env::temp_dir().join("findcurl_record_replay_test");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let prefix = fake_install(&dir);
    let cassette_path = dir.join("roundtrip.cassette.yaml");

    // --- Record ---
    let recorder = CassetteRecorder::new(&cassette_path, "roundtrip", "8.11.0");
    let recorder = Arc::new(Mutex::new(recorder));
    let recorded = {
        let fs = RecordingFileSystem::new(Box::new(LiveFileSystem), Arc::clone(&recorder));
        let shell = RecordingShellExecutor::new(Box::new(FakePkgConfig), Arc::clone(&recorder));
        let ctx = ServiceContext {
            fs: Box::new(fs),
            shell: Box::new(shell),
        };
        lookup(&ctx, &prefix)
    };
    let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
    assert!(!recorder.is_empty());
    assert_eq!(recorder.finish().unwrap(), cassette_path);

    let targets = recorded.targets.as_ref().unwrap();
    let canonical = targets.canonical().unwrap();
    assert_eq!(canonical.name, "CURL::libcurl_static");
    let dirs = &canonical.interface_link_directories;
    assert!(dirs.contains(&PathBuf::from("/opt/zlib/lib")));

    // The installation is gone; replay must not touch the disk or a shell.
    std::fs::remove_dir_all(&prefix).unwrap();

    // --- Replay, twice ---
    for _ in 0..2 {
        let ctx = ServiceContext::replaying(&cassette_path).unwrap();
        assert_eq!(lookup(&ctx, &prefix), recorded);
    }

    let _ = std::fs::remove_dir_all(&dir);
}
