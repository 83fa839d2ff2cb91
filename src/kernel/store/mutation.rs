use crate::kernel::state::DerivedViews;
use crate::kernel::{Effect, MutationEvent};

impl super::Store {
    /// Fans one mutation out to history, collection, selection and the
    /// expanded/pinned sets. Every view is derived from the same pre-event
    /// state and committed together.
    pub(super) fn reduce_mutation(&mut self, event: MutationEvent) -> super::DispatchResult {
        let before = &self.state;
        let next = match &event {
            MutationEvent::Created { parent_path, entry } => DerivedViews {
                history: before.history.clone(),
                collection: before.collection.on_created(entry),
                selection: before.selection.clone(),
                expanded: before.expanded.insert(parent_path),
                pinned: before.pinned.clone(),
            },
            MutationEvent::Deleted { paths } => DerivedViews {
                history: before.history.remove_paths(paths.as_slice()),
                collection: before.collection.on_deleted(paths.as_slice()),
                selection: before.selection.purge(paths.as_slice()),
                expanded: before.expanded.remove_under(paths.as_slice()),
                pinned: before.pinned.remove_under(paths.as_slice()),
            },
            MutationEvent::Renamed {
                old_path,
                new_path,
                is_directory,
                ..
            } => DerivedViews {
                history: rewrite_history(before, old_path, new_path, *is_directory),
                collection: before.collection.on_renamed(old_path, new_path),
                selection: before.selection.purge(&[old_path]),
                expanded: rewrite_dirs(&before.expanded, old_path, new_path, *is_directory),
                pinned: rewrite_dirs(&before.pinned, old_path, new_path, *is_directory),
            },
            MutationEvent::Moved {
                source_path,
                destination_dir_path,
                new_path,
                is_directory,
            } => {
                let expanded =
                    rewrite_dirs(&before.expanded, source_path, new_path, *is_directory);
                DerivedViews {
                    history: rewrite_history(before, source_path, new_path, *is_directory),
                    collection: before.collection.on_moved(source_path, new_path),
                    selection: before.selection.purge(&[source_path]),
                    expanded: expanded.insert(destination_dir_path),
                    pinned: rewrite_dirs(&before.pinned, source_path, new_path, *is_directory),
                }
            }
        };

        let state_changed = self.state.apply_views(next);
        if state_changed {
            tracing::debug!(
                kind = event.kind(),
                history_len = self.state.history.len(),
                history_index = ?self.state.history.index(),
                collection = ?self.state.collection.current_path(),
                "mutation applied"
            );
        } else {
            tracing::trace!(kind = event.kind(), "mutation did not touch any view");
        }

        super::DispatchResult {
            effects: vec![Effect::RescanTree],
            state_changed,
        }
    }
}

fn rewrite_history(
    before: &crate::kernel::WorkspaceState,
    old_path: &str,
    new_path: &str,
    is_directory: bool,
) -> crate::models::HistoryState {
    if is_directory {
        before.history.replace_prefix(old_path, new_path)
    } else {
        before.history.replace_path(old_path, new_path)
    }
}

fn rewrite_dirs(
    dirs: &crate::models::DirectorySet,
    old_path: &str,
    new_path: &str,
    is_directory: bool,
) -> crate::models::DirectorySet {
    if is_directory {
        dirs.rewrite_prefix(old_path, new_path)
    } else {
        dirs.clone()
    }
}
