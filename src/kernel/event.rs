use crate::models::Entry;
use serde::{Deserialize, Serialize};

/// One filesystem mutation, as delivered by the external watcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "kind",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum MutationEvent {
    Created {
        parent_path: String,
        entry: Entry,
    },
    Deleted {
        paths: Vec<String>,
    },
    Renamed {
        old_path: String,
        new_path: String,
        is_directory: bool,
        new_name: String,
    },
    Moved {
        source_path: String,
        destination_dir_path: String,
        new_path: String,
        is_directory: bool,
    },
}

impl MutationEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            MutationEvent::Created { .. } => "created",
            MutationEvent::Deleted { .. } => "deleted",
            MutationEvent::Renamed { .. } => "renamed",
            MutationEvent::Moved { .. } => "moved",
        }
    }
}
