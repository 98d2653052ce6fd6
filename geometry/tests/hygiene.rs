//! Hygiene — scans the geometry crate for patterns that don't belong in pure math
//!
//! Every helper here returns a value for every input, so anything that can
//! abort or silently swallow a result is budgeted at zero. Test files
//! (`*_test.rs`) are excluded.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Assert that `pattern` appears on at most `budget` lines across the crate.
fn assert_budget(pattern: &str, budget: usize) {
    let hits: Vec<(String, usize)> = source_files()
        .into_iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then_some((file.path, count))
        })
        .collect();
    let found: usize = hits.iter().map(|(_, c)| c).sum();
    let listing = hits
        .iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(found <= budget, "`{pattern}` budget exceeded: found {found}, max {budget}.\n{listing}");
}

#[test]
fn sources_are_found() {
    assert!(source_files().iter().any(|f| f.path.ends_with("lib.rs")));
}

#[test]
fn no_unwrap() {
    assert_budget(".unwrap()", 0);
}

#[test]
fn no_expect() {
    assert_budget(".expect(", 0);
}

#[test]
fn no_panic() {
    assert_budget("panic!(", 0);
}

#[test]
fn no_unreachable() {
    assert_budget("unreachable!(", 0);
}

#[test]
fn no_todo() {
    assert_budget("todo!(", 0);
}

#[test]
fn no_unimplemented() {
    assert_budget("unimplemented!(", 0);
}

#[test]
fn no_silent_discard() {
    assert_budget("let _ =", 0);
}

#[test]
fn no_allow_dead_code() {
    assert_budget("#[allow(dead_code)]", 0);
}
