//! Hygiene: enforces coding standards at test time
//!
//! Scans the evonto production sources for antipatterns. Each pattern has a
//! budget (ideally zero). If you must add one, fix an existing one first;
//! the budget never grows.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

impl SourceFile {
    /// Lines that are not `//` comments.
    fn code_lines(&self) -> impl Iterator<Item = &str> {
        self.content.lines().filter(|line| !line.trim_start().starts_with("//"))
    }
}

/// Production `.rs` files under `src/`; test files and fixtures are skipped.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        let production = name.ends_with(".rs") && !name.ends_with("_test.rs") && !name.ends_with("test_support.rs");
        if let (true, Ok(content)) = (production, fs::read_to_string(&path)) {
            out.push(SourceFile { path: name, content });
        }
    }
}

/// Per-file hit counts for lines where `matches` holds.
fn hits(files: &[SourceFile], matches: impl Fn(&str) -> bool) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| (file.path.clone(), file.code_lines().filter(|line| matches(line)).count()))
        .filter(|(_, count)| *count > 0)
        .collect()
}

fn assert_budget(label: &str, max: usize, found: &[(String, usize)]) {
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing: Vec<String> = found.iter().map(|(path, c)| format!("  {path}: {c}")).collect();
    assert!(count <= max, "{label} budget exceeded: found {count}, max {max}.\n{}", listing.join("\n"));
}

// ===== Crashes =====

#[test]
fn no_panicking_calls() {
    let files = source_files();
    for pattern in [".unwrap()", ".expect(", "panic!(", "unreachable!(", "todo!(", "unimplemented!("] {
        assert_budget(pattern, 0, &hits(&files, |line| line.contains(pattern)));
    }
}

// ===== Silent loss =====

#[test]
fn no_discarded_results() {
    assert_budget("let _ =", 0, &hits(&source_files(), |line| line.contains("let _ =")));
}

#[test]
fn dot_ok_budget() {
    // Header-to-str conversions, lenient body decodes, and query parsing.
    assert_budget(".ok()", 5, &hits(&source_files(), |line| line.contains(".ok()")));
}

#[test]
fn no_dead_code_allowances() {
    assert_budget("#[allow(dead_code)]", 0, &hits(&source_files(), |line| line.contains("#[allow(dead_code)]")));
}

// ===== Output =====

#[test]
fn library_logs_through_tracing_only() {
    assert_budget("println!/eprintln!", 0, &hits(&source_files(), |line| line.contains("println!(")));
}

// ===== Token handling =====

#[test]
fn token_is_never_rewritten_with_a_scheme() {
    let found = hits(&source_files(), |line| line.to_ascii_lowercase().contains("bearer"));
    assert_budget("Bearer prefix handling", 0, &found);
}

#[test]
fn authorization_header_is_set_in_one_place() {
    let found = hits(&source_files(), |line| line.contains("insert(AUTHORIZATION"));
    assert_budget("Authorization header insertion", 1, &found);
}
