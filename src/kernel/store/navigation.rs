use crate::kernel::{Action, Effect};
use crate::models::HistoryEntry;

impl super::Store {
    pub(super) fn reduce_navigation_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::OpenPath { path, selection } => {
                let entry = HistoryEntry { path, selection };
                let (history, changed) = self
                    .state
                    .history
                    .append(entry, self.state.max_history_length);
                if changed {
                    tracing::debug!(
                        path = ?history.current().map(|e| e.path.as_str()),
                        len = history.len(),
                        "history appended"
                    );
                    self.state.history = history;
                }
                super::DispatchResult::changed(changed)
            }
            Action::GoBack => self.open_history_target(-1),
            Action::GoForward => self.open_history_target(1),
            Action::CommitHistoryIndex { index, path } => match self
                .state
                .history
                .commit(index, &path)
            {
                Some(history) => {
                    self.state.history = history;
                    super::DispatchResult::changed(true)
                }
                None => {
                    tracing::trace!(index, path = %path, "history commit ignored");
                    super::DispatchResult::unchanged()
                }
            },
            Action::OpenCollection { path } => {
                let next = self.state.collection.open(&path);
                self.replace_collection(next)
            }
            Action::CloseCollection => {
                let next = self.state.collection.close();
                self.replace_collection(next)
            }
            Action::ToggleCollection => {
                let next = self.state.collection.toggle();
                self.replace_collection(next)
            }
            _ => unreachable!("non-navigation action passed to reduce_navigation_action"),
        }
    }

    fn open_history_target(&self, delta: isize) -> super::DispatchResult {
        let Some((index, entry)) = self.state.history.navigate(delta) else {
            return super::DispatchResult::unchanged();
        };
        super::DispatchResult {
            effects: vec![Effect::OpenDocument {
                index,
                path: entry.path.clone(),
                selection: entry.selection.clone(),
            }],
            state_changed: false,
        }
    }

    fn replace_collection(
        &mut self,
        next: crate::models::CollectionViewState,
    ) -> super::DispatchResult {
        let changed = next != self.state.collection;
        self.state.collection = next;
        super::DispatchResult::changed(changed)
    }
}
