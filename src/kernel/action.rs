use std::sync::Arc;

use serde::Deserialize;

use crate::kernel::event::MutationEvent;
use crate::models::Entry;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    OpenPath {
        path: String,
        #[serde(default)]
        selection: Option<serde_json::Value>,
    },
    GoBack,
    GoForward,
    /// Sent by the caller once the target of `GoBack`/`GoForward` is open.
    CommitHistoryIndex {
        index: usize,
        path: String,
    },
    OpenCollection {
        path: String,
    },
    CloseCollection,
    ToggleCollection,
    ReplaceTree {
        roots: Vec<Arc<Entry>>,
    },
    SelectEntry {
        path: String,
    },
    ToggleEntrySelection {
        path: String,
    },
    ExtendEntrySelection {
        path: String,
        visible_order: Vec<String>,
    },
    ClearSelection,
    SetExpanded {
        path: String,
        expanded: bool,
    },
    SetPinned {
        path: String,
        pinned: bool,
    },
    Mutation(MutationEvent),
}
