//! Architectural Enforcement Integration Tests
//!
//! This package contains integration tests that enforce architectural principles:
//! - `folio-core` stays headless (no terminal UI crates)
//! - No blocking sleep in production code
//! - Timer sleeps only where the typed-text driver schedules ticks
//!
//! The helpers here find workspace sources and strip the parts of a file
//! that are not production code, so each rule only has to match text.

use std::fs;
use std::path::{Path, PathBuf};

/// Workspace root, two levels above this package
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}

/// Every `.rs` file under `dir` (relative to the workspace root)
///
/// Panics when the directory is missing so a moved crate cannot make a
/// rule pass vacuously.
pub fn rust_sources(dir: &str) -> Vec<PathBuf> {
    let root = workspace_root().join(dir);
    assert!(
        root.is_dir(),
        "{} does not exist; update the enforcement paths",
        root.display()
    );

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(&root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(walkdir::DirEntry::into_path)
        .collect();
    files.sort();
    files
}

/// Production lines of a source file as `(line_number, code)`
///
/// Comments are cut off and scanning stops at the first `#[cfg(test)]`,
/// which by convention opens the trailing test module.
pub fn production_lines(content: &str) -> Vec<(usize, &str)> {
    let mut lines = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("#[cfg(test)]") {
            break;
        }
        if trimmed.starts_with("//") {
            continue;
        }
        let code = line.split("//").next().unwrap_or(line);
        lines.push((idx + 1, code));
    }
    lines
}

/// Lines in production code under `dir` that match `pattern`
pub fn find_violations(dir: &str, pattern: impl Fn(&str) -> bool) -> Vec<String> {
    let root = workspace_root();
    let mut violations = Vec::new();

    for path in rust_sources(dir) {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for (line_number, code) in production_lines(&content) {
            if pattern(code) {
                let shown = path.strip_prefix(&root).unwrap_or(&path);
                violations.push(format!("{}:{} - {}", shown.display(), line_number, code.trim()));
            }
        }
    }
    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_root_has_members() {
        let root = workspace_root();
        assert!(root.join("Cargo.toml").is_file());
        assert!(root.join("core").is_dir());
        assert!(root.join("tui").is_dir());
    }

    #[test]
    fn test_production_lines_stop_at_tests() {
        let source = "fn a() {}\n// note\nlet x = 1; // trailing\n#[cfg(test)]\nmod tests {}\n";
        let lines = production_lines(source);
        assert_eq!(lines, vec![(1, "fn a() {}"), (3, "let x = 1; ")]);
    }
}
