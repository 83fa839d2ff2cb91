//! Workspace engine configuration.
//!
//! Loaded from a JSON settings file. Missing keys fall back to defaults.

use crate::models::DEFAULT_MAX_HISTORY_LENGTH;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const DEFAULT_LOG_FILTER: &str = "mdspace=info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkspaceConfig {
    pub max_history_length: usize,
    pub log_filter: String,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            max_history_length: DEFAULT_MAX_HISTORY_LENGTH,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl WorkspaceConfig {
    /// History bound actually applied; never below one entry.
    pub fn max_history_length(&self) -> usize {
        self.max_history_length.max(1)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "failed to read config: {err}"),
            ConfigError::Parse(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err)
    }
}

pub fn load_config(path: &Path) -> Result<WorkspaceConfig, ConfigError> {
    let data = std::fs::read_to_string(path)?;
    parse_config(&data)
}

pub fn parse_config(data: &str) -> Result<WorkspaceConfig, ConfigError> {
    if data.trim().is_empty() {
        return Ok(WorkspaceConfig::default());
    }
    Ok(serde_json::from_str(data)?)
}

#[cfg(test)]
#[path = "../../tests/unit/services/config.rs"]
mod tests;
