//! Loading graph descriptions from disk.

use pathfinder::{load_graph, minimum_spanning_tree, LoadError, ParseError};
use std::fs;
use std::path::PathBuf;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pathfinder-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_graph_from_file() {
    let path = scratch_file(
        "small.txt",
        "stanford.png\nNODES\nA 0 0\nB 1 0\nC 1 1\nARCS\nA B 1\nB C 2\nA C 3\n",
    );
    let graph = load_graph(&path).unwrap();
    assert_eq!(graph.background(), Some("stanford.png"));
    assert_eq!(minimum_spanning_tree(&graph).total_weight, 3);
    fs::remove_file(path).unwrap();
}

#[test]
fn test_load_graph_wraps_parse_errors() {
    let path = scratch_file("broken.txt", "bg.png\nNODES\nA 0 0\nARCS\nA B 1\n");
    match load_graph(&path) {
        Err(LoadError::Parse { source: ParseError::Graph { line, .. }, .. }) => assert_eq!(line, 5),
        other => panic!("expected a parse error, got {other:?}"),
    }
    let message = load_graph(&path).unwrap_err().to_string();
    assert!(message.ends_with("line 5: unknown node `B`"), "{message}");
    fs::remove_file(path).unwrap();
}
