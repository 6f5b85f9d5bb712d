//! Scoped augmentation of the dependency search path.

use std::ops::Deref;
use std::path::PathBuf;

/// Ordered list of directories dependency finders search in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl SearchPath {
    /// Creates a search path from existing entries.
    pub fn new(entries: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Current entries, highest priority first.
    #[must_use]
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Prepends `extra` entries not already present and returns a guard that
    /// restores the previous list when dropped.
    pub fn augment(&mut self, extra: impl IntoIterator<Item = PathBuf>) -> SearchPathGuard<'_> {
        let saved = self.entries.clone();
        let mut prefix: Vec<PathBuf> = Vec::new();
        for dir in extra {
            if !self.entries.contains(&dir) && !prefix.contains(&dir) {
                prefix.push(dir);
            }
        }
        prefix.append(&mut self.entries);
        self.entries = prefix;
        SearchPathGuard { path: self, saved }
    }
}

/// Holds an augmented [`SearchPath`]; restores it on drop.
#[derive(Debug)]
pub struct SearchPathGuard<'a> {
    path: &'a mut SearchPath,
    saved: Vec<PathBuf>,
}

impl Deref for SearchPathGuard<'_> {
    type Target = SearchPath;

    fn deref(&self) -> &SearchPath {
        self.path
    }
}

impl Drop for SearchPathGuard<'_> {
    fn drop(&mut self) {
        self.path.entries = std::mem::take(&mut self.saved);
    }
}
