//! Path sets for expanded and pinned directories.

use super::path::{is_equal_or_descendant, normalize, replace_prefix};
use rustc_hash::FxHashMap;

/// Keyed by normalized path; values keep the inserted spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectorySet {
    paths: FxHashMap<String, String>,
}

fn key(path: &str) -> String {
    normalize(path).into_owned()
}

impl DirectorySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains_key(&*normalize(path))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn sorted_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.paths.values().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    pub fn insert(&self, path: &str) -> Self {
        if self.contains(path) {
            return self.clone();
        }
        let mut paths = self.paths.clone();
        paths.insert(key(path), path.to_string());
        Self { paths }
    }

    pub fn remove(&self, path: &str) -> Self {
        let mut paths = self.paths.clone();
        paths.remove(&*normalize(path));
        Self { paths }
    }

    /// Cascading removal: drops `paths` and everything under them.
    pub fn remove_under<S: AsRef<str>>(&self, removed: &[S]) -> Self {
        let paths = self
            .paths
            .iter()
            .filter(|(_, dir)| {
                !removed
                    .iter()
                    .any(|gone| is_equal_or_descendant(dir.as_str(), gone.as_ref()))
            })
            .map(|(key, dir)| (key.clone(), dir.clone()))
            .collect();
        Self { paths }
    }

    pub fn rewrite_prefix(&self, old_prefix: &str, new_prefix: &str) -> Self {
        let paths = self
            .paths
            .values()
            .map(|dir| {
                let dir = replace_prefix(dir, old_prefix, new_prefix).into_owned();
                (key(&dir), dir)
            })
            .collect();
        Self { paths }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/dir_set.rs"]
mod tests;
