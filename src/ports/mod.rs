//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the resolution core and the
//! outside world (filesystem, shell, dependency lookup). Implementations live
//! in `src/adapters/`.

pub mod filesystem;
pub mod finder;
pub mod shell;

pub use filesystem::FileSystem;
pub use finder::{DependencyFinder, FoundDependency};
pub use shell::{ShellExecutor, ShellOutput};
