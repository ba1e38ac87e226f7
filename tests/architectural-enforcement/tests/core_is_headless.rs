//! Integration Test: Headless Core
//!
//! **Policy**: `folio-core` holds content, page state, and the typed-text
//! engine. It MUST NOT depend on or import a terminal UI crate; those belong
//! in `folio-tui`.

use std::fs;

use architectural_enforcement::{find_violations, workspace_root};

const UI_CRATES: [&str; 2] = ["ratatui", "crossterm"];

fn mentions_ui_crate(code: &str) -> bool {
    UI_CRATES
        .iter()
        .any(|c| code.contains(&format!("use {c}")) || code.contains(&format!("{c}::")))
}

#[test]
fn test_core_manifest_has_no_ui_dependencies() {
    let manifest = fs::read_to_string(workspace_root().join("core/Cargo.toml"))
        .expect("core/Cargo.toml should be readable");

    let offending: Vec<&str> = manifest
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('#'))
        .filter(|line| UI_CRATES.iter().any(|c| line.starts_with(c)))
        .collect();

    assert!(
        offending.is_empty(),
        "folio-core must stay headless, found UI dependencies: {offending:?}"
    );
}

#[test]
fn test_core_sources_do_not_import_ui_crates() {
    let violations = find_violations("core/src", mentions_ui_crate);

    if !violations.is_empty() {
        eprintln!("\n❌ UI crate usage found in folio-core:\n");
        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }
        panic!(
            "\nFound {} UI import(s) in folio-core. Move rendering code to folio-tui.",
            violations.len()
        );
    }
}

#[test]
fn test_detector_flags_ui_import() {
    assert!(mentions_ui_crate("use ratatui::style::Color;"));
    assert!(mentions_ui_crate("let (w, h) = crossterm::terminal::size()?;"));
    assert!(!mentions_ui_crate("use tokio::sync::watch;"));
}
