//! Filesystem traversal through IteratorSource
//!
//! Exercises the child-iterator adapter with a real consumer: directory
//! entries enumerated by `std::fs::read_dir`. The filesystem knowledge
//! lives entirely in the test; the engine only ever sees opaque `PathBuf`
//! nodes and a child-iterator factory.

use graph_walker::{GraphIterator, IteratorSource, Mode};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn dir_children(node: &PathBuf) -> Option<std::vec::IntoIter<PathBuf>> {
    if !node.is_dir() {
        return None;
    }
    let mut children: Vec<PathBuf> = fs::read_dir(node)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    children.sort();
    Some(children.into_iter())
}

fn create_sample_tree(root: &Path) {
    fs::create_dir_all(root.join("src/nested")).unwrap();
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::write(root.join("Cargo.toml"), "[package]").unwrap();
    fs::write(root.join("src/main.rs"), "fn main() {}").unwrap();
    fs::write(root.join("src/lib.rs"), "pub fn lib() {}").unwrap();
    fs::write(root.join("src/nested/util.rs"), "pub fn util() {}").unwrap();
    fs::write(root.join("docs/readme.md"), "# docs").unwrap();
}

fn names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect()
}

#[test]
fn test_preorder_walk_visits_every_entry_once() {
    let tmp = TempDir::new().unwrap();
    create_sample_tree(tmp.path());

    let source = IteratorSource::new(dir_children);
    let iter = GraphIterator::with_mode(tmp.path().to_path_buf(), source, Mode::DEFAULT);
    let visited: Vec<PathBuf> = iter.collect();

    // Root plus 7 created entries.
    assert_eq!(visited.len(), 8);
    let visited_names = names(&visited[1..]);
    for expected in [
        "Cargo.toml",
        "docs",
        "readme.md",
        "src",
        "lib.rs",
        "main.rs",
        "nested",
        "util.rs",
    ] {
        assert!(
            visited_names.iter().any(|n| n == expected),
            "missing entry {}",
            expected
        );
    }
}

#[test]
fn test_preorder_parents_precede_children() {
    let tmp = TempDir::new().unwrap();
    create_sample_tree(tmp.path());

    let source = IteratorSource::new(dir_children);
    let iter = GraphIterator::with_mode(tmp.path().to_path_buf(), source, Mode::DEFAULT);
    let visited: Vec<PathBuf> = iter.collect();

    for (i, path) in visited.iter().enumerate() {
        if let Some(parent) = path.parent() {
            if parent.starts_with(tmp.path()) {
                let parent_at = visited.iter().position(|p| p == parent);
                assert!(
                    parent_at.map_or(false, |at| at < i),
                    "parent of {:?} not visited first",
                    path
                );
            }
        }
    }
}

#[test]
fn test_postorder_children_precede_parents() {
    let tmp = TempDir::new().unwrap();
    create_sample_tree(tmp.path());

    let source = IteratorSource::new(dir_children);
    let iter = GraphIterator::with_mode(tmp.path().to_path_buf(), source, Mode::DEPTH_FIRST);
    let visited: Vec<PathBuf> = iter.collect();

    assert_eq!(visited.len(), 8);
    // The root comes last in a post-order walk.
    assert_eq!(visited.last().unwrap(), &tmp.path().to_path_buf());
    let src = tmp.path().join("src");
    let util = src.join("nested/util.rs");
    let src_at = visited.iter().position(|p| p == &src).unwrap();
    let util_at = visited.iter().position(|p| p == &util).unwrap();
    assert!(util_at < src_at);
}

#[test]
fn test_leaf_walk_yields_files_and_empty_dirs_only() {
    let tmp = TempDir::new().unwrap();
    create_sample_tree(tmp.path());
    fs::create_dir(tmp.path().join("empty")).unwrap();

    let source = IteratorSource::new(dir_children);
    let iter = GraphIterator::with_mode(tmp.path().to_path_buf(), source, Mode::LEAF);
    let visited: Vec<PathBuf> = iter.collect();

    let visited_names = names(&visited);
    assert!(visited_names.iter().any(|n| n == "empty"));
    assert!(visited_names.iter().all(|n| n != "src" && n != "docs"));
    // Every yielded entry is a file or an empty directory.
    for path in &visited {
        let is_empty_dir =
            path.is_dir() && fs::read_dir(path).unwrap().next().is_none();
        assert!(path.is_file() || is_empty_dir, "{:?} is not a leaf", path);
    }
}
