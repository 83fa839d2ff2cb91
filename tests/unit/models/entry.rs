use super::*;

fn sample_tree() -> Vec<Arc<Entry>> {
    vec![Arc::new(Entry::dir(
        "/ws",
        vec![
            Entry::file("/ws/a.md"),
            Entry::dir(
                "/ws/folder",
                vec![
                    Entry::file("/ws/folder/b.md"),
                    Entry::dir("/ws/folder/nested", vec![Entry::file("/ws/folder/nested/c.md")]),
                ],
            ),
        ],
    ))]
}

#[test]
fn constructors_derive_name_from_path() {
    let file = Entry::file("/ws/folder/b.md");
    assert_eq!(file.name, "b.md");
    assert!(!file.is_directory);
    assert!(file.children().is_empty());

    let dir = Entry::dir(r"C:\notes\folder", Vec::new());
    assert_eq!(dir.name, "folder");
    assert!(dir.is_directory);
}

#[test]
fn index_contains_every_file_and_directory() {
    let index = EntryIndex::build(&sample_tree());

    assert_eq!(index.len(), 6);
    for path in [
        "/ws",
        "/ws/a.md",
        "/ws/folder",
        "/ws/folder/b.md",
        "/ws/folder/nested",
        "/ws/folder/nested/c.md",
    ] {
        assert!(index.contains(path), "missing {path}");
    }
    assert_eq!(index.is_directory("/ws/folder/nested"), Some(true));
    assert_eq!(index.is_directory("/ws/a.md"), Some(false));
    assert_eq!(index.is_directory("/ws/missing.md"), None);
}

#[test]
fn index_shares_entries_with_the_tree() {
    let tree = sample_tree();
    let index = EntryIndex::build(&tree);

    let root = index.get("/ws").unwrap();
    assert!(Arc::ptr_eq(root, &tree[0]));
    let folder = index.get("/ws/folder").unwrap();
    assert!(Arc::ptr_eq(folder, &tree[0].children()[1]));
}

#[test]
fn windows_paths_are_found_with_either_separator() {
    let tree = vec![Arc::new(Entry::dir(
        r"C:\notes",
        vec![Entry::file(r"C:\notes\a.md")],
    ))];
    let index = EntryIndex::build(&tree);

    assert_eq!(index.len(), 4);
    assert_eq!(index.get("C:/notes/a.md").unwrap().path, r"C:\notes\a.md");
    assert_eq!(index.get(r"C:\notes\a.md").unwrap().path, r"C:\notes\a.md");
}

#[test]
fn posix_paths_are_found_with_backslash_lookup() {
    let index = EntryIndex::build(&sample_tree());
    assert_eq!(index.get(r"/ws\folder\b.md").unwrap().path, "/ws/folder/b.md");
}

#[test]
fn children_of_lists_direct_children_only() {
    let index = EntryIndex::build(&sample_tree());
    let names: Vec<&str> = index
        .children_of("/ws/folder")
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["b.md", "nested"]);
    assert!(index.children_of("/ws/a.md").is_empty());
    assert!(index.children_of("/nowhere").is_empty());
}

#[test]
fn entries_deserialize_from_camel_case_json() {
    let json = r#"{
        "path": "/ws",
        "name": "ws",
        "isDirectory": true,
        "children": [
            { "path": "/ws/a.md", "name": "a.md", "isDirectory": false, "modifiedAt": 1700000000000 }
        ]
    }"#;
    let entry: Entry = serde_json::from_str(json).unwrap();
    assert!(entry.is_directory);
    assert_eq!(entry.children()[0].modified_at, Some(1_700_000_000_000));
}
