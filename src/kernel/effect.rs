use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(
    tag = "type",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum Effect {
    /// Open a history target. Commit with `Action::CommitHistoryIndex` carrying the same
    /// index and path on success.
    OpenDocument {
        index: usize,
        path: String,
        selection: Option<serde_json::Value>,
    },
    /// The tree snapshot is stale and should be rescanned.
    RescanTree,
}
