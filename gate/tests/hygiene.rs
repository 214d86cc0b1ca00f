//! Hygiene: keeps the gate crate free of panicking and error-swallowing code.
//!
//! Guards must never crash the UI, so the library sources are scanned for
//! antipatterns. Each pattern has a budget; the budget only ever shrinks.

use std::fs;
use std::path::{Path, PathBuf};

/// `(pattern, budget, why it matters)`
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on None/Err"),
    (".expect(", 0, "panics on None/Err"),
    ("panic!(", 0, "crashes the UI thread"),
    ("unreachable!(", 0, "crashes the UI thread"),
    ("todo!(", 0, "unfinished code path"),
    ("unimplemented!(", 0, "unfinished code path"),
    ("let _ =", 0, "discards a result without inspecting it"),
    // parse_role's userType fallback.
    (".ok()", 1, "converts an error into silence"),
    ("#[allow(dead_code)]", 0, "hides unused code"),
];

struct SourceFile {
    path: PathBuf,
    content: String,
}

/// Production `.rs` files under `src/`, test modules excluded.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new(env!("CARGO_MANIFEST_DIR")).join("src").as_path(), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

#[test]
fn sources_are_found() {
    assert!(source_files().len() >= 7, "hygiene scan found too few files; wrong directory?");
}

#[test]
fn antipattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, why) in BUDGETS {
        let hits: Vec<String> = files
            .iter()
            .filter_map(|file| {
                let count = file.content.lines().filter(|line| line.contains(pattern)).count();
                (count > 0).then(|| format!("    {}: {count}", file.path.display()))
            })
            .collect();
        let total: usize = files
            .iter()
            .map(|file| file.content.lines().filter(|line| line.contains(pattern)).count())
            .sum();
        if total > *budget {
            failures.push(format!("  `{pattern}` ({why}): found {total}, max {budget}\n{}", hits.join("\n")));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}
