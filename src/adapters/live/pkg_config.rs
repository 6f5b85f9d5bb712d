//! Dependency finder backed by `pkg-config`.
//!
//! Each dependency name is a pkg-config module. A found module becomes the
//! link target `PkgConfig::<module>`, and its `-L` directories are captured
//! at lookup time as the target's interface link directories.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::debug;

use crate::error::PortError;
use crate::ports::finder::join_search_path;
use crate::ports::{DependencyFinder, FoundDependency, ShellExecutor, ShellOutput};
use crate::registry::DependencySpec;

const TARGET_PREFIX: &str = "PkgConfig::";

/// Finds dependencies by running `pkg-config` through a shell port.
pub struct PkgConfigFinder<'a> {
    shell: &'a dyn ShellExecutor,
    link_dirs: Mutex<HashMap<String, Vec<PathBuf>>>,
}

impl<'a> PkgConfigFinder<'a> {
    /// Creates a finder running commands through `shell`.
    #[must_use]
    pub fn new(shell: &'a dyn ShellExecutor) -> Self {
        Self {
            shell,
            link_dirs: Mutex::new(HashMap::new()),
        }
    }

    fn pkg_config(&self, search_path: &[PathBuf], args: &str) -> Result<ShellOutput, PortError> {
        let command = if search_path.is_empty() {
            format!("pkg-config {args}")
        } else {
            let path = quote(&join_search_path(search_path));
            format!("PKG_CONFIG_PATH={path} pkg-config {args}")
        };
        self.shell.run(&command)
    }
}

impl DependencyFinder for PkgConfigFinder<'_> {
    fn find(
        &self,
        spec: &DependencySpec,
        search_path: &[PathBuf],
    ) -> Result<FoundDependency, PortError> {
        validate_token(&spec.name)?;

        let constraint = match spec.min_version.as_deref() {
            Some(version) => {
                validate_token(version)?;
                format!(" --atleast-version={version}")
            }
            None => String::new(),
        };

        let exists = self.pkg_config(search_path, &format!("--exists{constraint} {}", spec.name))?;
        if !exists.success() {
            let detail = exists.stderr.trim();
            return Err(match (spec.min_version.as_deref(), detail.is_empty()) {
                (Some(v), true) => format!("pkg-config module {} >= {v} not found", spec.name),
                (None, true) => format!("pkg-config module {} not found", spec.name),
                (_, false) => detail.to_string(),
            }
            .into());
        }

        let version = self
            .pkg_config(search_path, &format!("--modversion {}", spec.name))
            .ok()
            .filter(ShellOutput::success)
            .map(|out| out.stdout.trim().to_string())
            .filter(|v| !v.is_empty());

        let link_target = format!("{TARGET_PREFIX}{}", spec.name);
        let libs = self.pkg_config(search_path, &format!("--libs-only-L {}", spec.name))?;
        let dirs = if libs.success() {
            parse_link_dirs(&libs.stdout)
        } else {
            Vec::new()
        };
        debug!(
            module = %spec.name,
            version = version.as_deref().unwrap_or("?"),
            dirs = dirs.len(),
            "pkg-config module found"
        );
        self.link_dirs
            .lock()
            .expect("link dir cache lock poisoned")
            .insert(link_target.clone(), dirs);

        Ok(FoundDependency {
            name: spec.name.clone(),
            link_target,
            version,
        })
    }

    fn interface_link_directories(&self, link_target: &str) -> Vec<PathBuf> {
        self.link_dirs
            .lock()
            .expect("link dir cache lock poisoned")
            .get(link_target)
            .cloned()
            .unwrap_or_default()
    }
}

/// Extracts the directories of `-L<dir>` flags.
fn parse_link_dirs(output: &str) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = Vec::new();
    let flags = output.split_whitespace();
    for dir in flags.filter_map(|flag| flag.strip_prefix("-L")) {
        let dir = PathBuf::from(dir);
        if !dir.as_os_str().is_empty() && !dirs.contains(&dir) {
            dirs.push(dir);
        }
    }
    dirs
}

/// Module names and versions end up in a shell command line.
fn validate_token(token: &str) -> Result<(), PortError> {
    if !token.is_empty() && token.chars().all(is_token_char) {
        Ok(())
    } else {
        Err(format!("refusing to pass {token:?} to pkg-config").into())
    }
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '+')
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
