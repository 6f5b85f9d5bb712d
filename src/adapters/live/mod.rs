//! Live adapters for real external interactions.

pub mod filesystem;
pub mod pkg_config;
pub mod shell;
