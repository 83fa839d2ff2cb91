//! Data models: path algebra, entry trees and the views derived from them.

pub mod collection;
pub mod dir_set;
pub mod entry;
pub mod nav_history;
pub mod path;
pub mod selection;

pub use collection::CollectionViewState;
pub use dir_set::DirectorySet;
pub use entry::{Entry, EntryIndex};
pub use nav_history::{HistoryEntry, HistoryState, DEFAULT_MAX_HISTORY_LENGTH};
pub use selection::SelectionSet;
