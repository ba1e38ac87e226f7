//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code MUST NOT block a thread with
//! `std::thread::sleep`, and MUST NOT sleep on a timer to wait for events.
//! **Exception**: the typed-text driver (`core/src/driver.rs`) awaits
//! `tokio::time::sleep` between ticks; that is its schedule.
//! Periodic work uses `tokio::time::interval`.

use architectural_enforcement::find_violations;

/// File allowed to await timer sleeps
const TICK_SCHEDULER: &str = "core/src/driver.rs";

const PRODUCTION_DIRS: [&str; 2] = ["core/src", "tui/src"];

fn is_sleep_call(code: &str) -> bool {
    code.contains("::sleep(") || code.contains(".sleep(")
}

fn is_thread_sleep(code: &str) -> bool {
    code.contains("thread::sleep(")
}

#[test]
fn test_no_thread_sleep_in_production_code() {
    let violations: Vec<String> = PRODUCTION_DIRS
        .iter()
        .flat_map(|dir| find_violations(dir, is_thread_sleep))
        .collect();

    if !violations.is_empty() {
        eprintln!("\n❌ CRITICAL: Blocking sleep found in production code!\n");
        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }
        eprintln!("\n✅ Use tokio timers or wait on the event stream instead.");
        panic!(
            "\nFound {} blocking sleep(s) in production code.",
            violations.len()
        );
    }
}

#[test]
fn test_timer_sleep_only_in_tick_scheduler() {
    let violations: Vec<String> = PRODUCTION_DIRS
        .iter()
        .flat_map(|dir| find_violations(dir, is_sleep_call))
        .filter(|v| !v.starts_with(TICK_SCHEDULER))
        .collect();

    if !violations.is_empty() {
        eprintln!("\n❌ Sleep calls found outside the typed-text driver!\n");
        for violation in &violations {
            eprintln!("  ❌ {violation}");
        }
        eprintln!("\n✅ ACCEPTABLE: tokio::time::interval for periodic work");
        eprintln!("❌ FORBIDDEN: sleeping in loops to wait for something to happen");
        panic!("\nFound {} sleep violation(s).", violations.len());
    }
}

#[test]
fn test_driver_sleeps_between_ticks() {
    // If the driver stops using a timer, the exception above is stale.
    let found = find_violations("core/src", is_sleep_call);
    assert!(
        found.iter().any(|v| v.starts_with(TICK_SCHEDULER)),
        "expected the typed-text driver to await a timer"
    );
}

#[test]
fn test_detector_patterns() {
    assert!(is_sleep_call("std::thread::sleep(Duration::from_millis(10));"));
    assert!(is_sleep_call("tokio::time::sleep(delay).await;"));
    assert!(is_thread_sleep("thread::sleep(d);"));
    assert!(!is_thread_sleep("tokio::time::sleep(d).await;"));
    assert!(!is_sleep_call("let mut tick = tokio::time::interval(FRAME);"));
}
