use std::sync::Arc;

use serde::Serialize;

use crate::models::{
    CollectionViewState, DirectorySet, Entry, EntryIndex, HistoryEntry, HistoryState,
    SelectionSet,
};
use crate::services::config::WorkspaceConfig;

/// Everything the engine keeps about one open workspace.
///
/// The tree and its index are replaced together; everything else survives
/// rescans and is only touched by navigation actions or mutation events.
#[derive(Debug, Clone)]
pub struct WorkspaceState {
    pub max_history_length: usize,
    tree: Vec<Arc<Entry>>,
    index: EntryIndex,
    pub history: HistoryState,
    pub collection: CollectionViewState,
    pub selection: SelectionSet,
    pub expanded: DirectorySet,
    pub pinned: DirectorySet,
}

/// The parts of [`WorkspaceState`] a mutation event fans out to.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DerivedViews {
    pub history: HistoryState,
    pub collection: CollectionViewState,
    pub selection: SelectionSet,
    pub expanded: DirectorySet,
    pub pinned: DirectorySet,
}

impl WorkspaceState {
    pub fn new(config: &WorkspaceConfig) -> Self {
        Self {
            max_history_length: config.max_history_length(),
            tree: Vec::new(),
            index: EntryIndex::default(),
            history: HistoryState::default(),
            collection: CollectionViewState::default(),
            selection: SelectionSet::default(),
            expanded: DirectorySet::default(),
            pinned: DirectorySet::default(),
        }
    }

    pub fn with_tree(config: &WorkspaceConfig, roots: Vec<Arc<Entry>>) -> Self {
        let mut state = Self::new(config);
        state.set_tree(roots);
        state
    }

    pub fn tree(&self) -> &[Arc<Entry>] {
        &self.tree
    }

    pub fn index(&self) -> &EntryIndex {
        &self.index
    }

    /// Swaps in a new snapshot. Returns whether the tree differs.
    pub fn set_tree(&mut self, roots: Vec<Arc<Entry>>) -> bool {
        if roots == self.tree {
            return false;
        }
        self.index = EntryIndex::build(&roots);
        self.tree = roots;
        true
    }

    /// Path of the document under the history pointer, i.e. the open tab.
    pub fn current_path(&self) -> Option<&str> {
        self.history.current().map(|entry| entry.path.as_str())
    }

    pub fn collection_entries(&self) -> Vec<Arc<Entry>> {
        self.collection.collection_entries(&self.index)
    }

    pub(crate) fn derived_views(&self) -> DerivedViews {
        DerivedViews {
            history: self.history.clone(),
            collection: self.collection.clone(),
            selection: self.selection.clone(),
            expanded: self.expanded.clone(),
            pinned: self.pinned.clone(),
        }
    }

    /// Commits views computed from one "before" snapshot.
    pub(crate) fn apply_views(&mut self, views: DerivedViews) -> bool {
        let changed = views != self.derived_views();
        let DerivedViews {
            history,
            collection,
            selection,
            expanded,
            pinned,
        } = views;
        self.history = history;
        self.collection = collection;
        self.selection = selection;
        self.expanded = expanded;
        self.pinned = pinned;
        changed
    }

    pub fn snapshot(&self) -> WorkspaceSnapshot {
        let to_strings =
            |paths: Vec<&str>| -> Vec<String> { paths.into_iter().map(str::to_string).collect() };
        WorkspaceSnapshot {
            history: self.history.entries().to_vec(),
            history_index: self.history.index().map_or(-1, |i| i as i64),
            current_path: self.current_path().map(str::to_string),
            current_collection_path: self.collection.current_path().map(str::to_string),
            last_collection_path: self.collection.last_path().map(str::to_string),
            collection_entries: self.collection_entries(),
            selected_entry_paths: to_strings(self.selection.sorted_paths()),
            selection_anchor: self.selection.anchor().map(str::to_string),
            expanded_paths: to_strings(self.expanded.sorted_paths()),
            pinned_paths: to_strings(self.pinned.sorted_paths()),
        }
    }
}

/// Read-only view handed to the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSnapshot {
    pub history: Vec<Arc<HistoryEntry>>,
    /// `-1` when the history is empty.
    pub history_index: i64,
    pub current_path: Option<String>,
    pub current_collection_path: Option<String>,
    pub last_collection_path: Option<String>,
    pub collection_entries: Vec<Arc<Entry>>,
    pub selected_entry_paths: Vec<String>,
    pub selection_anchor: Option<String>,
    pub expanded_paths: Vec<String>,
    pub pinned_paths: Vec<String>,
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
