use super::{Action, WorkspaceState};
use super::effect::Effect;

mod explorer;
mod mutation;
mod navigation;

#[derive(Debug)]
pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

/// Owns the workspace state and serializes every update through `dispatch`.
#[derive(Debug)]
pub struct Store {
    state: WorkspaceState,
}

impl Store {
    pub fn new(state: WorkspaceState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &WorkspaceState {
        &self.state
    }

    pub fn into_state(self) -> WorkspaceState {
        self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Mutation(event) => self.reduce_mutation(event),
            action @ (Action::OpenPath { .. }
            | Action::GoBack
            | Action::GoForward
            | Action::CommitHistoryIndex { .. }
            | Action::OpenCollection { .. }
            | Action::CloseCollection
            | Action::ToggleCollection) => self.reduce_navigation_action(action),
            action @ (Action::ReplaceTree { .. }
            | Action::SelectEntry { .. }
            | Action::ToggleEntrySelection { .. }
            | Action::ExtendEntrySelection { .. }
            | Action::ClearSelection
            | Action::SetExpanded { .. }
            | Action::SetPinned { .. }) => self.reduce_explorer_action(action),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
