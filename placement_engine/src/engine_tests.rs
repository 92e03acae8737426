//! Unit tests for Engine singleton manager
//!
//! Tests initialization, building grid management, bridge availability and logging APIs.
//!
//! IMPORTANT: ENGINE_STATE is a global OnceLock shared across all tests.
//! All tests are marked with #[serial] to run sequentially and avoid RwLock poisoning.

use crate::placement::{Engine, Error, GridConfig};
use crate::placement::log::{Logger, LogEntry, LogSeverity};
use crate::procedural::MemoryProceduralBridge;
use glam::Vec3;
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        let mut entries = self.entries.lock().unwrap();
        entries.push(format!("{:?}: {}", entry.severity, entry.message));
    }
}

/// Install a capturing logger and return its buffer
fn capture_logs() -> Arc<Mutex<Vec<String>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(TestLogger { entries: Arc::clone(&entries) });
    entries
}

fn captured_contains(entries: &Arc<Mutex<Vec<String>>>, needle: &str) -> bool {
    entries.lock().unwrap().iter().any(|entry| entry.contains(needle))
}

/// Setup function to reset engine state before each test
///
/// Note: ENGINE_STATE is a OnceLock, so once initialized it stays initialized.
/// We always call initialize() (idempotent) and use reset_for_testing() to clear singletons.
fn setup() {
    Engine::reset_for_testing();
    let _ = Engine::initialize();
}

// ============================================================================
// INITIALIZATION AND SHUTDOWN TESTS
// ============================================================================

#[test]
#[serial]
fn test_engine_initialize() {
    setup();
    assert!(Engine::initialize().is_ok());
}

#[test]
#[serial]
fn test_multiple_initialize_calls_idempotent() {
    setup();

    Engine::initialize().unwrap();
    Engine::initialize().unwrap();

    assert!(Engine::create_building_grid(GridConfig::default()).is_ok());
}

#[test]
#[serial]
fn test_shutdown_clears_singletons() {
    setup();

    Engine::create_building_grid(GridConfig::default()).unwrap();
    Engine::register_procedural_bridge(MemoryProceduralBridge::new("1.0")).unwrap();

    Engine::shutdown();

    assert!(Engine::building_grid().is_err());
    assert!(!Engine::procedural_bridge().is_available());
}

#[test]
#[serial]
fn test_shutdown_idempotent() {
    setup();

    Engine::shutdown();
    Engine::shutdown();

    Engine::initialize().unwrap();
}

// ============================================================================
// BUILDING GRID API TESTS
// ============================================================================

#[test]
#[serial]
fn test_create_building_grid_applies_config() {
    setup();

    let config = GridConfig { resolution: 16, ..GridConfig::default() };
    Engine::create_building_grid(config).unwrap();

    let grid = Engine::building_grid().unwrap();
    assert_eq!(grid.config().resolution, 16);
    assert!(grid.is_empty());
}

#[test]
#[serial]
fn test_create_building_grid_twice_fails() {
    setup();

    Engine::create_building_grid(GridConfig::default()).unwrap();
    let result = Engine::create_building_grid(GridConfig::default());

    match result {
        Err(Error::AlreadyExists(msg)) => assert!(msg.contains("already exists")),
        _ => panic!("Expected AlreadyExists error"),
    }
}

#[test]
#[serial]
fn test_building_grid_is_shared() {
    setup();

    Engine::create_building_grid(GridConfig::default()).unwrap();
    let first = Engine::building_grid().unwrap();
    let second = Engine::building_grid().unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    first.add(3, Vec3::new(10.0, 0.0, 10.0));
    assert_eq!(second.members_at(Vec3::new(10.0, 0.0, 10.0)), vec![3]);
}

#[test]
#[serial]
fn test_building_grid_missing_fails() {
    setup();

    match Engine::building_grid() {
        Err(Error::NotInitialized(msg)) => assert!(msg.contains("not created")),
        _ => panic!("Expected NotInitialized error"),
    }
}

#[test]
#[serial]
fn test_destroy_building_grid_keeps_outstanding_refs() {
    setup();

    Engine::create_building_grid(GridConfig::default()).unwrap();
    let grid = Engine::building_grid().unwrap();
    grid.add(1, Vec3::ZERO);

    Engine::destroy_building_grid().unwrap();

    assert!(Engine::building_grid().is_err());
    assert_eq!(grid.len(), 1);
    assert!(Engine::create_building_grid(GridConfig::default()).is_ok());
}

// ============================================================================
// PROCEDURAL BRIDGE API TESTS
// ============================================================================

#[test]
#[serial]
fn test_bridge_defaults_to_unavailable() {
    setup();

    let availability = Engine::procedural_bridge();
    assert!(!availability.is_available());
    assert!(matches!(availability.bridge(), Err(Error::BridgeUnavailable(_))));
}

#[test]
#[serial]
fn test_register_bridge_logs_version() {
    setup();
    let logs = capture_logs();

    Engine::register_procedural_bridge(MemoryProceduralBridge::new("1.7.2")).unwrap();

    let bridge = Engine::procedural_bridge().bridge().unwrap();
    assert_eq!(bridge.lock().unwrap().version(), "1.7.2");
    assert!(captured_contains(&logs, "version 1.7.2"));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_mark_bridge_unavailable_keeps_reason() {
    setup();

    Engine::register_procedural_bridge(MemoryProceduralBridge::new("1.0")).unwrap();
    Engine::mark_procedural_bridge_unavailable("assembly not found").unwrap();

    match Engine::procedural_bridge().bridge() {
        Err(Error::BridgeUnavailable(reason)) => assert_eq!(reason, "assembly not found"),
        _ => panic!("Expected BridgeUnavailable error"),
    }
}

// ============================================================================
// LOGGING API TESTS
// ============================================================================

#[test]
#[serial]
fn test_set_logger_captures_macros() {
    let logs = capture_logs();

    crate::engine_info!("placement::Test", "info from engine test {}", 42);
    crate::engine_error!("placement::Test", "error from engine test");

    assert!(captured_contains(&logs, "Info: info from engine test 42"));
    assert!(captured_contains(&logs, "Error: error from engine test"));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_errors_are_logged() {
    setup();
    let logs = capture_logs();

    let _ = Engine::building_grid();

    assert!(captured_contains(&logs, "BuildingGrid not created"));

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_log_detailed_carries_location() {
    let entries: Arc<Mutex<Vec<(Option<&'static str>, Option<u32>)>>> = Arc::new(Mutex::new(Vec::new()));

    struct LocationLogger(Arc<Mutex<Vec<(Option<&'static str>, Option<u32>)>>>);
    impl Logger for LocationLogger {
        fn log(&self, entry: &LogEntry) {
            if entry.source == "placement::LocationTest" {
                self.0.lock().unwrap().push((entry.file, entry.line));
            }
        }
    }

    Engine::set_logger(LocationLogger(Arc::clone(&entries)));
    Engine::log_detailed(LogSeverity::Error, "placement::LocationTest", "boom".to_string(), "grid.rs", 7);
    Engine::log(LogSeverity::Warn, "placement::LocationTest", "plain".to_string());
    Engine::reset_logger();

    let entries = entries.lock().unwrap();
    assert_eq!(entries.as_slice(), &[(Some("grid.rs"), Some(7)), (None, None)]);
}
