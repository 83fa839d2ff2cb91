//! Headless workspace consistency engine (state/action/effect).

pub mod action;
pub mod effect;
pub mod event;
pub mod state;
pub mod store;

pub use action::Action;
pub use effect::Effect;
pub use event::MutationEvent;
pub use state::{WorkspaceSnapshot, WorkspaceState};
pub use store::{DispatchResult, Store};
