//! Integration tests for loading payload files.

// Integration tests live outside cfg(test)
#![allow(clippy::tests_outside_test_module)]

use std::fs;

use wr_feed::{FeedError, load_file, load_files, merge_candidates};

#[test]
fn search_and_related_files_merge() {
    let dir = tempfile::tempdir().unwrap();
    let search = dir.path().join("search.json");
    let related = dir.path().join("related.json");
    fs::write(
        &search,
        r#"{"pages":[{"id":1,"title":"Kant","excerpt":"Philosoph"},{"id":2,"title":"Hegel"}]}"#,
    )
    .unwrap();
    fs::write(
        &related,
        r#"{"pages":[{"pageid":1,"title":"Kant","extract":"doppelt"},{"pageid":3,"title":"Fichte"}]}"#,
    )
    .unwrap();

    let batches = load_files(&[&search, &related]).unwrap();
    let merged = merge_candidates(batches);

    let ids: Vec<&str> = merged.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(merged[0].summary, None);
}

#[test]
fn missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_file(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, FeedError::ReadFile { .. }));
}

#[test]
fn errors_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{"unexpected": true}"#).unwrap();

    let err = load_file(&path).unwrap_err();
    assert!(err.to_string().contains("bad.json"));
}
