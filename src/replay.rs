//! Offline replay of recorded UI/watcher action sequences.

use crate::kernel::{Action, Effect, Store};
use std::fmt;
use std::io::BufRead;

#[derive(Debug)]
pub enum ReplayError {
    Io(std::io::Error),
    Parse {
        line: usize,
        source: serde_json::Error,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::Io(err) => write!(f, "failed to read actions: {err}"),
            ReplayError::Parse { line, source } => {
                write!(f, "invalid action on line {line}: {source}")
            }
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplayError::Io(err) => Some(err),
            ReplayError::Parse { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for ReplayError {
    fn from(err: std::io::Error) -> Self {
        ReplayError::Io(err)
    }
}

#[derive(Debug, Default)]
pub struct ReplaySummary {
    pub actions: usize,
    pub state_changes: usize,
    pub effects: Vec<Effect>,
}

/// Dispatches one JSON `Action` per line. Blank lines are skipped.
pub fn replay<R: BufRead>(reader: R, store: &mut Store) -> Result<ReplaySummary, ReplayError> {
    let mut summary = ReplaySummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let action: Action = serde_json::from_str(&line).map_err(|source| ReplayError::Parse {
            line: idx + 1,
            source,
        })?;
        let result = store.dispatch(action);

        summary.actions += 1;
        if result.state_changed {
            summary.state_changes += 1;
        }
        for effect in &result.effects {
            tracing::info!(line = idx + 1, ?effect, "effect");
        }
        summary.effects.extend(result.effects);
    }

    Ok(summary)
}

#[cfg(test)]
#[path = "../tests/unit/replay.rs"]
mod tests;
