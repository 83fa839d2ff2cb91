//! mdspace - workspace consistency engine for a markdown workspace.
//!
//! Module layout:
//! - models: path algebra, entry tree index, navigation history, collection
//!   view, selection and directory sets
//! - kernel: workspace state, actions, effects and the dispatching store
//! - services: configuration and the filesystem watcher bridge
//! - replay: offline replay of recorded action sequences

pub mod kernel;
pub mod models;
pub mod replay;
pub mod services;
