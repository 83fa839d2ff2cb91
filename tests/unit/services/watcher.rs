use super::*;
use notify::event::RemoveKind;
use std::sync::Arc;

fn index() -> EntryIndex {
    EntryIndex::build(&[Arc::new(Entry::dir(
        "/ws",
        vec![
            Entry::file("/ws/a.md"),
            Entry::dir("/ws/folder", vec![Entry::file("/ws/folder/b.md")]),
            Entry::dir("/ws/archive", Vec::new()),
        ],
    ))])
}

fn event(kind: EventKind, paths: &[&str]) -> notify::Event {
    notify::Event {
        kind,
        paths: paths.iter().map(PathBuf::from).collect(),
        attrs: Default::default(),
    }
}

#[test]
fn create_folder_event_becomes_created_directory() {
    let events = mutation_events(
        [event(EventKind::Create(CreateKind::Folder), &["/ws/new"])],
        &index(),
    );
    assert_eq!(
        events,
        vec![MutationEvent::Created {
            parent_path: "/ws".to_string(),
            entry: Entry::dir("/ws/new", Vec::new()),
        }]
    );
}

#[test]
fn create_file_event_becomes_created_file() {
    let events = mutation_events(
        [event(EventKind::Create(CreateKind::File), &["/ws/folder/c.md"])],
        &index(),
    );
    assert_eq!(
        events,
        vec![MutationEvent::Created {
            parent_path: "/ws/folder".to_string(),
            entry: Entry::file("/ws/folder/c.md"),
        }]
    );
}

#[test]
fn remove_event_groups_paths_into_one_deletion() {
    let events = mutation_events(
        [event(
            EventKind::Remove(RemoveKind::Any),
            &["/ws/a.md", "/ws/folder"],
        )],
        &index(),
    );
    assert_eq!(
        events,
        vec![MutationEvent::Deleted {
            paths: vec!["/ws/a.md".to_string(), "/ws/folder".to_string()],
        }]
    );
}

#[test]
fn rename_within_same_parent_is_a_rename() {
    let events = mutation_events(
        [event(
            EventKind::Modify(ModifyKind::Name(RenameMode::Both)),
            &["/ws/folder", "/ws/renamed"],
        )],
        &index(),
    );
    assert_eq!(
        events,
        vec![MutationEvent::Renamed {
            old_path: "/ws/folder".to_string(),
            new_path: "/ws/renamed".to_string(),
            is_directory: true,
            new_name: "renamed".to_string(),
        }]
    );
}

#[test]
fn rename_across_parents_is_a_move() {
    let events = mutation_events(
        [event(
            EventKind::Modify(ModifyKind::Name(RenameMode::Both)),
            &["/ws/a.md", "/ws/archive/a.md"],
        )],
        &index(),
    );
    assert_eq!(
        events,
        vec![MutationEvent::Moved {
            source_path: "/ws/a.md".to_string(),
            destination_dir_path: "/ws/archive".to_string(),
            new_path: "/ws/archive/a.md".to_string(),
            is_directory: false,
        }]
    );
}

fn tracked(kind: EventKind, path: &str, tracker: usize) -> notify::Event {
    notify::Event::new(kind)
        .add_path(PathBuf::from(path))
        .set_tracker(tracker)
}

#[test]
fn rename_triple_from_inotify_becomes_one_directory_rename() {
    let events = mutation_events(
        [
            tracked(
                EventKind::Modify(ModifyKind::Name(RenameMode::From)),
                "/ws/folder",
                7,
            ),
            tracked(
                EventKind::Modify(ModifyKind::Name(RenameMode::To)),
                "/ws/renamed",
                7,
            ),
            event(
                EventKind::Modify(ModifyKind::Name(RenameMode::Both)),
                &["/ws/folder", "/ws/renamed"],
            )
            .set_tracker(7),
        ],
        &index(),
    );
    assert_eq!(
        events,
        vec![MutationEvent::Renamed {
            old_path: "/ws/folder".to_string(),
            new_path: "/ws/renamed".to_string(),
            is_directory: true,
            new_name: "renamed".to_string(),
        }]
    );
}

#[test]
fn rename_halves_pair_by_tracker_across_interleaved_events() {
    let events = mutation_events(
        [
            tracked(
                EventKind::Modify(ModifyKind::Name(RenameMode::From)),
                "/ws/a.md",
                1,
            ),
            event(EventKind::Create(CreateKind::File), &["/ws/new.md"]),
            tracked(
                EventKind::Modify(ModifyKind::Name(RenameMode::To)),
                "/ws/archive/a.md",
                1,
            ),
        ],
        &index(),
    );
    assert_eq!(
        events,
        vec![
            MutationEvent::Created {
                parent_path: "/ws".to_string(),
                entry: Entry::file("/ws/new.md"),
            },
            MutationEvent::Moved {
                source_path: "/ws/a.md".to_string(),
                destination_dir_path: "/ws/archive".to_string(),
                new_path: "/ws/archive/a.md".to_string(),
                is_directory: false,
            },
        ]
    );
}

#[test]
fn unpaired_rename_halves_degrade_to_delete_and_create() {
    let events = mutation_events(
        [
            tracked(
                EventKind::Modify(ModifyKind::Name(RenameMode::From)),
                "/ws/a.md",
                3,
            ),
            tracked(
                EventKind::Modify(ModifyKind::Name(RenameMode::To)),
                "/ws/z.md",
                4,
            ),
        ],
        &index(),
    );
    assert_eq!(
        events,
        vec![
            MutationEvent::Created {
                parent_path: "/ws".to_string(),
                entry: Entry::file("/ws/z.md"),
            },
            MutationEvent::Deleted {
                paths: vec!["/ws/a.md".to_string()],
            },
        ]
    );
}

#[test]
fn ignored_names_are_dropped() {
    let index = index();
    assert!(mutation_events(
        [event(EventKind::Create(CreateKind::File), &["/ws/.DS_Store"])],
        &index,
    )
    .is_empty());
    assert!(mutation_events(
        [event(EventKind::Remove(RemoveKind::Any), &["/ws/.git/index"])],
        &index,
    )
    .is_empty());
}

#[test]
fn content_modifications_are_not_mutations() {
    let events = mutation_events(
        [event(
            EventKind::Modify(ModifyKind::Data(notify::event::DataChange::Content)),
            &["/ws/a.md"],
        )],
        &index(),
    );
    assert!(events.is_empty());
}
