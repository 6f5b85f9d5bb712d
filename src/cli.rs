//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::components::ComponentRequest;
use crate::package::{FindRequest, VersionRequest};
use crate::version::Version;

/// Top-level CLI parser for `findcurl`.
#[derive(Debug, Parser)]
#[command(
    name = "findcurl",
    version,
    about = "Locate libcurl and describe how to link against it"
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find the package and print its link description.
    Find(FindArgs),
    /// Print the dependency link targets of the enabled features.
    Resolve(InstallArgs),
    /// List the supported protocols and features.
    Components,
}

/// Where the installation lives and which feature table describes it.
#[derive(Debug, Clone, Args)]
pub struct InstallArgs {
    /// Installation prefix containing `include/` and `lib/`.
    #[arg(long, env = "FINDCURL_PREFIX", default_value = "/usr/local")]
    pub prefix: PathBuf,

    /// Package descriptor replacing the built-in feature table.
    #[arg(long, env = "FINDCURL_DESCRIPTOR")]
    pub descriptor: Option<PathBuf>,
}

/// Arguments of `findcurl find`.
#[derive(Debug, Clone, Args)]
pub struct FindArgs {
    /// Installation location.
    #[command(flatten)]
    pub install: InstallArgs,

    /// Version of the host build tool; enables compatibility shims for old hosts.
    #[arg(long, env = "FINDCURL_HOST_VERSION")]
    pub host_version: Option<Version>,

    /// Components that must be supported.
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub components: Vec<String>,

    /// Components that are reported but not required.
    #[arg(long, value_delimiter = ',', num_args = 1..)]
    pub optional_components: Vec<String>,

    /// Minimum package version (same major release).
    #[arg(long)]
    pub package_version: Option<Version>,

    /// Require exactly `--package-version`.
    #[arg(long, requires = "package_version")]
    pub exact: bool,

    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl FindArgs {
    /// Builds the lookup request, starting from `search_path`.
    #[must_use]
    pub fn to_request(&self, search_path: Vec<PathBuf>) -> FindRequest {
        let required = self.components.iter().map(ComponentRequest::required);
        let optional = self
            .optional_components
            .iter()
            .map(ComponentRequest::optional);

        let version_request = self.package_version.map(|version| {
            if self.exact {
                VersionRequest::exact(version)
            } else {
                VersionRequest::at_least(version)
            }
        });

        FindRequest {
            prefix: self.install.prefix.clone(),
            host_version: self.host_version,
            components: required.chain(optional).collect(),
            version_request,
            search_path,
        }
    }
}
