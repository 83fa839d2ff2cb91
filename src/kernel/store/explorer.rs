use crate::kernel::Action;

impl super::Store {
    pub(super) fn reduce_explorer_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::ReplaceTree { roots } => {
                let changed = self.state.set_tree(roots);
                if changed {
                    tracing::debug!(entries = self.state.index().len(), "tree replaced");
                }
                super::DispatchResult::changed(changed)
            }
            Action::SelectEntry { path } => {
                let next = self.state.selection.select(&path);
                self.replace_selection(next)
            }
            Action::ToggleEntrySelection { path } => {
                let next = self.state.selection.toggle(&path);
                self.replace_selection(next)
            }
            Action::ExtendEntrySelection {
                path,
                visible_order,
            } => {
                let next = self.state.selection.extend_to(&path, &visible_order);
                self.replace_selection(next)
            }
            Action::ClearSelection => {
                let next = self.state.selection.clear();
                self.replace_selection(next)
            }
            Action::SetExpanded { path, expanded } => {
                let next = if expanded {
                    self.state.expanded.insert(&path)
                } else {
                    self.state.expanded.remove(&path)
                };
                let changed = next != self.state.expanded;
                self.state.expanded = next;
                super::DispatchResult::changed(changed)
            }
            Action::SetPinned { path, pinned } => {
                let next = if pinned {
                    self.state.pinned.insert(&path)
                } else {
                    self.state.pinned.remove(&path)
                };
                let changed = next != self.state.pinned;
                self.state.pinned = next;
                super::DispatchResult::changed(changed)
            }
            _ => unreachable!("non-explorer action passed to reduce_explorer_action"),
        }
    }

    fn replace_selection(&mut self, next: crate::models::SelectionSet) -> super::DispatchResult {
        let changed = next != self.state.selection;
        self.state.selection = next;
        super::DispatchResult::changed(changed)
    }
}
