//! Bridge from raw `notify` events to [`MutationEvent`]s.
//!
//! Nothing here touches the disk. Whether a removed or renamed path was a
//! directory is answered by the current tree snapshot.

use crate::kernel::MutationEvent;
use crate::models::path::{file_name, is_same, parent};
use crate::models::{Entry, EntryIndex};
use notify::event::{CreateKind, ModifyKind, RenameMode};
use notify::EventKind;
use rustc_hash::FxHashSet;
use std::path::PathBuf;

pub fn should_ignore(name: &str) -> bool {
    matches!(
        name,
        ".DS_Store"
            | ".Spotlight-V100"
            | ".Trashes"
            | ".fseventsd"
            | ".TemporaryItems"
            | "Thumbs.db"
            | "desktop.ini"
            | ".git"
            | "node_modules"
    )
}

/// Converts one drained batch of raw events into mutation events.
///
/// Split rename halves (`From`, `To`) are paired by their tracker cookie and
/// emitted as a single rename. The `Both` event that follows a paired rename
/// is dropped. A `From` with no partner in the batch degrades to `Deleted`
/// after every other event, and an unpaired `To` to `Created`.
pub fn mutation_events<I>(events: I, index: &EntryIndex) -> Vec<MutationEvent>
where
    I: IntoIterator<Item = notify::Event>,
{
    let mut batch = RenameBatch::default();
    let mut out = Vec::new();

    for event in events {
        let tracker = event.attrs.tracker();
        let paths: Vec<String> = event.paths.into_iter().map(path_string).collect();

        match event.kind {
            EventKind::Create(kind) => out.extend(
                paths
                    .into_iter()
                    .filter(|path| !is_ignored(path))
                    .filter_map(|path| {
                        let is_dir = match kind {
                            CreateKind::Folder => true,
                            CreateKind::File => false,
                            _ => index.is_directory(&path).unwrap_or(false),
                        };
                        created(path, is_dir)
                    }),
            ),
            EventKind::Remove(_) => out.extend(deleted(paths)),
            EventKind::Modify(ModifyKind::Name(mode)) => {
                batch.push(mode, tracker, paths, index, &mut out)
            }
            _ => {}
        }
    }

    out.extend(deleted(batch.unpaired_sources()));
    out
}

#[derive(Debug, Default)]
struct RenameBatch {
    pending: Vec<(Option<usize>, String)>,
    paired: FxHashSet<(String, String)>,
}

impl RenameBatch {
    fn push(
        &mut self,
        mode: RenameMode,
        tracker: Option<usize>,
        paths: Vec<String>,
        index: &EntryIndex,
        out: &mut Vec<MutationEvent>,
    ) {
        match mode {
            RenameMode::From => self
                .pending
                .extend(paths.into_iter().map(|path| (tracker, path))),
            RenameMode::To => {
                for to in paths {
                    match self.take_source(tracker) {
                        Some(from) => self.pair(from, to, index, out),
                        None if !is_ignored(&to) => {
                            let is_dir = index.is_directory(&to).unwrap_or(false);
                            out.extend(created(to, is_dir));
                        }
                        None => {}
                    }
                }
            }
            RenameMode::Both if paths.len() >= 2 => {
                let mut paths = paths.into_iter();
                let (Some(from), Some(to)) = (paths.next(), paths.next()) else {
                    return;
                };
                if self.paired.contains(&(from.clone(), to.clone())) {
                    return;
                }
                self.pending.retain(|(_, pending)| !is_same(pending, &from));
                self.pair(from, to, index, out);
            }
            _ => {}
        }
    }

    fn take_source(&mut self, tracker: Option<usize>) -> Option<String> {
        let tracker = tracker?;
        let position = self
            .pending
            .iter()
            .position(|(pending, _)| *pending == Some(tracker))?;
        Some(self.pending.remove(position).1)
    }

    fn pair(&mut self, from: String, to: String, index: &EntryIndex, out: &mut Vec<MutationEvent>) {
        self.paired.insert((from.clone(), to.clone()));
        let is_dir = index.is_directory(&from).unwrap_or(false);
        match (is_ignored(&from), is_ignored(&to)) {
            (false, false) => out.extend(rename_or_move(from, to, is_dir)),
            (false, true) => out.extend(deleted(vec![from])),
            (true, false) => out.extend(created(to, is_dir)),
            (true, true) => {}
        }
    }

    fn unpaired_sources(self) -> Vec<String> {
        self.pending.into_iter().map(|(_, path)| path).collect()
    }
}

fn rename_or_move(from: String, to: String, is_directory: bool) -> Option<MutationEvent> {
    if is_same(&from, &to) {
        return None;
    }
    let from_parent = parent(&from)?;
    let to_parent = parent(&to)?;

    if is_same(from_parent, to_parent) {
        let new_name = file_name(&to).to_string();
        return Some(MutationEvent::Renamed {
            old_path: from,
            new_path: to,
            is_directory,
            new_name,
        });
    }

    let destination_dir_path = to_parent.to_string();
    Some(MutationEvent::Moved {
        source_path: from,
        destination_dir_path,
        new_path: to,
        is_directory,
    })
}

fn created(path: String, is_dir: bool) -> Option<MutationEvent> {
    let parent_path = parent(&path)?.to_string();
    let entry = if is_dir {
        Entry::dir(path, Vec::new())
    } else {
        Entry::file(path)
    };
    Some(MutationEvent::Created { parent_path, entry })
}

fn deleted(paths: Vec<String>) -> Option<MutationEvent> {
    let paths: Vec<String> = paths.into_iter().filter(|path| !is_ignored(path)).collect();
    (!paths.is_empty()).then_some(MutationEvent::Deleted { paths })
}

fn is_ignored(path: &str) -> bool {
    path.split(['/', '\\']).any(should_ignore)
}

fn path_string(path: PathBuf) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(test)]
#[path = "../../tests/unit/services/watcher.rs"]
mod tests;
