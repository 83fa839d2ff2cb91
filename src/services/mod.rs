//! Edges of the engine: configuration and the watcher bridge.

pub mod config;
pub mod watcher;

pub use config::{load_config, ConfigError, WorkspaceConfig};
pub use watcher::mutation_events;
