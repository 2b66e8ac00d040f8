use std::path::PathBuf;

use super::*;

fn companion_fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/workspace/debugtalk.py")
}

fn built_index() -> DebugtalkIndex {
    let index = DebugtalkIndex::new();
    index.set_companion_path(companion_fixture());
    index.rebuild();
    index
}

#[test]
fn indexes_function_with_comment_block() {
    let index = built_index();
    let entry = index.lookup("double").unwrap();

    assert_eq!(entry.signature, "def double(n):");
    assert_eq!(entry.comments, "doubles input\nreturns int");
    assert_eq!(entry.location.range.start, Position::new(5, 4));
    assert_eq!(entry.location.range.end, Position::new(5, 10));
    assert!(entry.location.uri.path().ends_with("debugtalk.py"));
}

#[test]
fn indexes_function_with_single_comment() {
    let index = built_index();
    let entry = index.lookup("sleep").unwrap();
    assert_eq!(entry.signature, "def sleep(n_secs):");
    assert_eq!(entry.comments, "sleep helper used by setup hooks");
}

#[test]
fn function_without_comments_has_empty_block() {
    let index = built_index();
    let entry = index.lookup("get_token").unwrap();
    assert_eq!(entry.comments, "");
}

#[test]
fn comment_walk_crosses_blank_lines() {
    // Two blank lines sit between the comment and the declaration.
    let index = built_index();
    let entry = index.lookup("spaced").unwrap();
    assert_eq!(entry.comments, "detached note");
}

#[test]
fn last_declaration_wins_on_duplicates() {
    let index = built_index();
    let entry = index.lookup("dup").unwrap();
    assert_eq!(entry.comments, "second version");
    assert_eq!(entry.location.range.start.line, 24);
}

#[test]
fn rebuild_is_reproducible() {
    let index = built_index();
    let first = index.snapshot();
    index.rebuild();
    let second = index.snapshot();
    assert!(!first.is_empty());
    assert_eq!(*first, *second);
}

#[test]
fn missing_companion_file_builds_empty_index() {
    let index = DebugtalkIndex::new();
    index.set_companion_path(PathBuf::from("/nonexistent/debugtalk.py"));
    index.rebuild();
    assert!(index.snapshot().is_empty());
    assert!(index.lookup("double").is_none());
}

#[test]
fn unseeded_index_is_empty() {
    let index = DebugtalkIndex::new();
    index.rebuild();
    assert!(index.snapshot().is_empty());
}

#[test]
fn comment_markers_and_padding_are_stripped() {
    let lines = vec!["#   padded comment", "def f():"];
    assert_eq!(leading_comments(&lines, 1), "padded comment");
}

#[test]
fn non_comment_line_stops_the_walk() {
    let lines = vec!["# unrelated", "x = 1", "# attached", "def f():"];
    assert_eq!(leading_comments(&lines, 3), "attached");
}
