//! Live shell executor using `std::process::Command`.

use std::process::Command;

use tracing::trace;

use crate::error::PortError;
use crate::ports::shell::{ShellExecutor, ShellOutput};

/// Live shell executor that runs commands via the system shell.
pub struct LiveShellExecutor;

impl ShellExecutor for LiveShellExecutor {
    fn run(&self, command: &str) -> Result<ShellOutput, PortError> {
        // Tool output is parsed, so keep it free of translations.
        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .env("LC_ALL", "C")
            .output()?;
        let exit_code = output.status.code().unwrap_or(-1);
        trace!(command, exit_code, "shell command finished");
        Ok(ShellOutput {
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_stdout_and_stderr() {
        let shell = LiveShellExecutor;
        let result = shell.run("echo -L/opt/zlib/lib; echo warn >&2").unwrap();

        assert!(result.success());
        assert_eq!(result.stdout.trim(), "-L/opt/zlib/lib");
        assert_eq!(result.stderr.trim(), "warn");
    }

    #[test]
    fn captures_exit_code() {
        let shell = LiveShellExecutor;
        let result = shell.run("exit 3").unwrap();

        assert_eq!(result.exit_code, 3);
        assert!(!result.success());
    }
}
