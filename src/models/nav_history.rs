//! Back/forward navigation history.
//!
//! Browser-style: visiting a new document from the middle of the history
//! drops the forward branch. Every transition returns a new [`HistoryState`];
//! entries that a transition does not touch are shared with the old state.

use super::path::{is_equal_or_descendant, is_same, replace_prefix};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

pub const DEFAULT_MAX_HISTORY_LENGTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub path: String,
    /// Caret/range state owned by the editor. Passed through unexamined.
    #[serde(default)]
    pub selection: Option<serde_json::Value>,
}

impl HistoryEntry {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            selection: None,
        }
    }

    pub fn with_selection(path: impl Into<String>, selection: serde_json::Value) -> Self {
        Self {
            path: path.into(),
            selection: Some(selection),
        }
    }
}

/// Ordered oldest to newest. `index` is `None` exactly when `entries` is empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryState {
    entries: Vec<Arc<HistoryEntry>>,
    index: Option<usize>,
}

impl HistoryState {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_parts(entries: Vec<Arc<HistoryEntry>>, index: Option<usize>) -> Self {
        debug_assert_eq!(index.is_none(), entries.is_empty());
        debug_assert!(index.map_or(true, |i| i < entries.len()));
        Self { entries, index }
    }

    pub fn entries(&self) -> &[Arc<HistoryEntry>] {
        &self.entries
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn current(&self) -> Option<&Arc<HistoryEntry>> {
        self.index.and_then(|i| self.entries.get(i))
    }

    pub fn can_go_back(&self) -> bool {
        self.navigate(-1).is_some()
    }

    pub fn can_go_forward(&self) -> bool {
        self.navigate(1).is_some()
    }

    /// Records a visit. Returns the new state and whether anything changed.
    ///
    /// Visiting the document that is already current is a no-op.
    pub fn append(&self, entry: HistoryEntry, max_len: usize) -> (Self, bool) {
        if self.current().is_some_and(|current| current.path == entry.path) {
            return (self.clone(), false);
        }

        let keep = self.index.map_or(0, |i| i + 1);
        let mut entries: Vec<Arc<HistoryEntry>> = self.entries[..keep].to_vec();
        entries.push(Arc::new(entry));

        let max_len = max_len.max(1);
        let mut index = entries.len() - 1;
        if entries.len() > max_len {
            let evicted = entries.len() - max_len;
            entries.drain(..evicted);
            index = index.saturating_sub(evicted);
        }

        (Self::from_parts(entries, Some(index)), true)
    }

    /// Target of a back (`-1`) or forward (`+1`) step, without moving.
    ///
    /// The caller commits the index with [`HistoryState::commit`] once the
    /// target document has actually been opened.
    pub fn navigate(&self, delta: isize) -> Option<(usize, Arc<HistoryEntry>)> {
        let index = self.index?;
        let target = index.checked_add_signed(delta)?;
        self.entries
            .get(target)
            .map(|entry| (target, Arc::clone(entry)))
    }

    /// Moves the current pointer to the entry for `path`.
    ///
    /// `index` is where `path` was when the navigation target was handed
    /// out. If entries shifted since then, the occurrence of `path` closest
    /// to `index` is used. Returns `None` when `path` is no longer in the
    /// history or the pointer is already there.
    pub fn commit(&self, index: usize, path: &str) -> Option<Self> {
        let target = match self.entries.get(index) {
            Some(entry) if is_same(&entry.path, path) => index,
            _ => self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| is_same(&entry.path, path))
                .map(|(position, _)| position)
                .min_by_key(|position| position.abs_diff(index))?,
        };
        if self.index == Some(target) {
            return None;
        }
        Some(Self::from_parts(self.entries.clone(), Some(target)))
    }

    /// Rewrites entries whose path is exactly `old_path`. Does not cascade.
    pub fn replace_path(&self, old_path: &str, new_path: &str) -> Self {
        self.map_paths(|path| is_same(path, old_path).then(|| new_path.to_string()))
    }

    /// Rewrites `old_prefix` and everything nested under it to `new_prefix`.
    pub fn replace_prefix(&self, old_prefix: &str, new_prefix: &str) -> Self {
        self.map_paths(|path| match replace_prefix(path, old_prefix, new_prefix) {
            Cow::Owned(rewritten) => Some(rewritten),
            Cow::Borrowed(_) => None,
        })
    }

    fn map_paths(&self, mut rewrite: impl FnMut(&str) -> Option<String>) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|entry| match rewrite(&entry.path) {
                Some(path) => Arc::new(HistoryEntry {
                    path,
                    selection: entry.selection.clone(),
                }),
                None => Arc::clone(entry),
            })
            .collect();
        Self::from_parts(entries, self.index)
    }

    /// Drops every entry equal to or nested under any of `paths`.
    ///
    /// The current pointer shifts left by the number of removed entries at or
    /// before it. When the current entry and everything before it are gone,
    /// the pointer snaps to the first surviving entry.
    pub fn remove_paths<S: AsRef<str>>(&self, paths: &[S]) -> Self {
        let is_removed = |entry: &HistoryEntry| {
            paths
                .iter()
                .any(|removed| is_equal_or_descendant(&entry.path, removed.as_ref()))
        };

        let Some(index) = self.index else {
            return self.clone();
        };

        let mut entries = Vec::with_capacity(self.entries.len());
        let mut removed_through_index = 0usize;
        for (position, entry) in self.entries.iter().enumerate() {
            if is_removed(entry) {
                if position <= index {
                    removed_through_index += 1;
                }
            } else {
                entries.push(Arc::clone(entry));
            }
        }

        if entries.len() == self.entries.len() {
            return self.clone();
        }
        if entries.is_empty() {
            return Self::default();
        }

        // index - removed + 1 is the count of survivors up to the old pointer.
        let survivors_through_index = index + 1 - removed_through_index;
        let index = survivors_through_index.saturating_sub(1);
        Self::from_parts(entries, Some(index))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/nav_history.rs"]
mod tests;
