//! Entry tree snapshots and the flat path index built over them.
//!
//! A tree is replaced wholesale on every rescan. The index is rebuilt from
//! the new snapshot rather than patched, so there is a single source of truth
//! for tree shape.

use super::path::{self, normalize};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub path: String,
    pub name: String,
    pub is_directory: bool,
    /// Direct children only. `None` or empty means unexpanded or empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Arc<Entry>>>,
    /// Milliseconds since the Unix epoch, as reported by the scanner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<i64>,
}

impl Entry {
    pub fn file(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: path::file_name(&path).to_string(),
            path,
            is_directory: false,
            children: None,
            modified_at: None,
        }
    }

    pub fn dir(path: impl Into<String>, children: Vec<Entry>) -> Self {
        let path = path.into();
        Self {
            name: path::file_name(&path).to_string(),
            path,
            is_directory: true,
            children: Some(children.into_iter().map(Arc::new).collect()),
            modified_at: None,
        }
    }

    pub fn children(&self) -> &[Arc<Entry>] {
        self.children.as_deref().unwrap_or(&[])
    }
}

/// Flat `path -> entry` lookup over one tree snapshot.
#[derive(Debug, Clone, Default)]
pub struct EntryIndex {
    by_path: FxHashMap<String, Arc<Entry>>,
}

impl EntryIndex {
    /// Depth-first walk over `roots`. Each entry is keyed by its own path and,
    /// when that differs, by its normalized path as well.
    pub fn build(roots: &[Arc<Entry>]) -> Self {
        let mut by_path: FxHashMap<String, Arc<Entry>> = FxHashMap::default();
        let mut stack: Vec<&Arc<Entry>> = roots.iter().rev().collect();

        while let Some(entry) = stack.pop() {
            by_path.insert(entry.path.clone(), Arc::clone(entry));
            if let Cow::Owned(normalized) = normalize(&entry.path) {
                by_path
                    .entry(normalized)
                    .or_insert_with(|| Arc::clone(entry));
            }
            stack.extend(entry.children().iter().rev());
        }

        Self { by_path }
    }

    pub fn get(&self, path: &str) -> Option<&Arc<Entry>> {
        if let Some(entry) = self.by_path.get(path) {
            return Some(entry);
        }
        match normalize(path) {
            Cow::Owned(normalized) => self.by_path.get(normalized.as_str()),
            Cow::Borrowed(_) => None,
        }
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn is_directory(&self, path: &str) -> Option<bool> {
        self.get(path).map(|entry| entry.is_directory)
    }

    pub fn children_of(&self, path: &str) -> &[Arc<Entry>] {
        self.get(path).map(|entry| entry.children()).unwrap_or(&[])
    }

    /// Number of keys, including normalized aliases.
    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/entry.rs"]
mod tests;
