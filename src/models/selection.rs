//! Multi-selection over explorer entries, with an anchor for shift-ranges.

use super::path::{is_equal_or_descendant, is_same, normalize};
use rustc_hash::FxHashMap;

/// Selected paths are keyed by their normalized form and keep the spelling
/// they were selected with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    paths: FxHashMap<String, String>,
    anchor: Option<String>,
}

fn key(path: &str) -> String {
    normalize(path).into_owned()
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
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

    /// Selected paths in a stable order.
    pub fn sorted_paths(&self) -> Vec<&str> {
        let mut paths: Vec<&str> = self.paths.values().map(String::as_str).collect();
        paths.sort_unstable();
        paths
    }

    /// Plain click: `path` becomes the whole selection and the anchor.
    pub fn select(&self, path: &str) -> Self {
        let mut paths = FxHashMap::default();
        paths.insert(key(path), path.to_string());
        Self {
            paths,
            anchor: Some(path.to_string()),
        }
    }

    /// Ctrl/cmd click: flips membership of `path` and moves the anchor to it.
    pub fn toggle(&self, path: &str) -> Self {
        let mut paths = self.paths.clone();
        if paths.remove(&*normalize(path)).is_none() {
            paths.insert(key(path), path.to_string());
        }
        Self {
            paths,
            anchor: Some(path.to_string()),
        }
    }

    /// Shift click: selects the inclusive range between the anchor and `path`
    /// in the order the explorer currently shows. Falls back to a plain
    /// select when either end is not visible.
    pub fn extend_to<S: AsRef<str>>(&self, path: &str, visible_order: &[S]) -> Self {
        let position = |target: &str| {
            visible_order
                .iter()
                .position(|candidate| is_same(candidate.as_ref(), target))
        };

        let Some(anchor) = self.anchor.as_deref() else {
            return self.select(path);
        };
        let (Some(from), Some(to)) = (position(anchor), position(path)) else {
            return self.select(path);
        };

        let (start, end) = if from <= to { (from, to) } else { (to, from) };
        let paths = visible_order[start..=end]
            .iter()
            .map(|candidate| (key(candidate.as_ref()), candidate.as_ref().to_string()))
            .collect();
        Self {
            paths,
            anchor: Some(anchor.to_string()),
        }
    }

    pub fn clear(&self) -> Self {
        Self::default()
    }

    /// Drops every selected path equal to or under any of `removed`. The
    /// anchor is cleared when it was dropped.
    pub fn purge<S: AsRef<str>>(&self, removed: &[S]) -> Self {
        let is_removed = |path: &str| {
            removed
                .iter()
                .any(|gone| is_equal_or_descendant(path, gone.as_ref()))
        };

        let paths: FxHashMap<String, String> = self
            .paths
            .iter()
            .filter(|(_, path)| !is_removed(path.as_str()))
            .map(|(key, path)| (key.clone(), path.clone()))
            .collect();
        let anchor = self
            .anchor
            .as_ref()
            .filter(|anchor| !is_removed(anchor.as_str()))
            .cloned();

        Self { paths, anchor }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/selection.rs"]
mod tests;
