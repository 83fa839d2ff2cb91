//! Drill-down "collection" view over one directory.
//!
//! Both fields are plain paths resolved against the live tree on read. A
//! stale path just resolves to nothing.

use super::entry::{Entry, EntryIndex};
use super::path::{is_equal_or_descendant, replace_prefix};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionViewState {
    current_collection_path: Option<String>,
    /// Most recent non-null `current_collection_path`, restored by `toggle`.
    last_collection_path: Option<String>,
}

impl CollectionViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_path(&self) -> Option<&str> {
        self.current_collection_path.as_deref()
    }

    pub fn last_path(&self) -> Option<&str> {
        self.last_collection_path.as_deref()
    }

    pub fn open(&self, path: &str) -> Self {
        Self {
            current_collection_path: Some(path.to_string()),
            last_collection_path: Some(path.to_string()),
        }
    }

    pub fn close(&self) -> Self {
        Self {
            current_collection_path: None,
            last_collection_path: self.last_collection_path.clone(),
        }
    }

    pub fn toggle(&self) -> Self {
        match (&self.current_collection_path, &self.last_collection_path) {
            (Some(_), _) => self.close(),
            (None, Some(last)) => self.open(last),
            (None, None) => self.clone(),
        }
    }

    /// Creating a directory makes it the active collection. Files never
    /// change the collection.
    pub fn on_created(&self, entry: &Entry) -> Self {
        if entry.is_directory {
            self.open(&entry.path)
        } else {
            self.clone()
        }
    }

    /// Each field is cleared independently when it lies under a deleted path.
    pub fn on_deleted<S: AsRef<str>>(&self, paths: &[S]) -> Self {
        let survives = |field: &Option<String>| match field {
            Some(path)
                if paths
                    .iter()
                    .any(|deleted| is_equal_or_descendant(path, deleted.as_ref())) =>
            {
                None
            }
            other => other.clone(),
        };
        Self {
            current_collection_path: survives(&self.current_collection_path),
            last_collection_path: survives(&self.last_collection_path),
        }
    }

    pub fn on_renamed(&self, old_path: &str, new_path: &str) -> Self {
        let rewrite = |field: &Option<String>| {
            field
                .as_deref()
                .map(|path| replace_prefix(path, old_path, new_path).into_owned())
        };
        Self {
            current_collection_path: rewrite(&self.current_collection_path),
            last_collection_path: rewrite(&self.last_collection_path),
        }
    }

    /// A move rewrites prefixes exactly like a rename to `new_path`.
    pub fn on_moved(&self, source_path: &str, new_path: &str) -> Self {
        self.on_renamed(source_path, new_path)
    }

    /// Direct, non-directory children of the active collection.
    pub fn collection_entries(&self, index: &EntryIndex) -> Vec<Arc<Entry>> {
        let Some(current) = self.current_path() else {
            return Vec::new();
        };
        index
            .children_of(current)
            .iter()
            .filter(|entry| !entry.is_directory)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/collection.rs"]
mod tests;
