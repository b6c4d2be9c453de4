//! Seed file loading against real files on disk.

use assert_fs::prelude::*;
use cookbook_core::{seed, summarize, CookbookError};

#[test]
fn seed_file_registers_entries_in_order() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("entries.yaml");
    file.write_str(
        "- type: recipe\n  name: brunch\n  requiredItems:\n    - name: omelette\n      quantity: 1\n    - name: egg\n      quantity: 3\n\
         - type: recipe\n  name: omelette\n  requiredItems:\n    - name: egg\n      quantity: 2\n\
         - type: ingredient\n  name: egg\n  cookTime: 5\n",
    )
    .expect("write");

    let registry = seed::registry_from_file(file.path()).expect("seed");
    assert_eq!(registry.len(), 3);
    let summary = summarize(&registry, "Brunch").expect("summary");
    assert_eq!(summary.cook_time, 25);
}

#[test]
fn malformed_yaml_returns_parse_error_with_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("broken.yaml");
    file.write_str(": : not [yaml").expect("write");

    let err = seed::load_entries_at(file.path()).unwrap_err();
    assert!(matches!(err, CookbookError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("broken.yaml"));
}

#[test]
fn mapping_instead_of_list_is_a_parse_error() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("single.yaml");
    file.write_str("type: ingredient\nname: Egg\ncookTime: 5\n").expect("write");

    let err = seed::load_entries_at(file.path()).unwrap_err();
    assert!(matches!(err, CookbookError::Parse { .. }), "got: {err}");
}

#[test]
fn invalid_entry_in_seed_fails_registration() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("entries.yaml");
    file.write_str("- type: ingredient\n  name: Egg\n  cookTime: 5\n- type: ingredient\n  name: egg\n  cookTime: 2\n")
        .expect("write");

    let err = seed::registry_from_file(file.path()).unwrap_err();
    assert!(matches!(err, CookbookError::DuplicateName { .. }), "got: {err}");
}
