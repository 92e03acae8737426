/// Placement Engine - Singleton manager for process-wide state
///
/// This module holds the state shared by every gesture in the process: the
/// building grid, the procedural-object bridge registration and the logger.
/// It uses thread-safe static storage with RwLock for safe concurrent access.

use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::config::GridConfig;
use crate::error::{Result, Error};
use crate::grid::BuildingGrid;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use crate::procedural::{BridgeAvailability, ProceduralBridge};

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Reason reported while no bridge has been registered or rejected
const BRIDGE_NOT_REGISTERED: &str = "No procedural-object bridge registered";

/// Internal state structure holding all engine singletons
struct EngineState {
    /// Building grid singleton (internally synchronized)
    building_grid: RwLock<Option<Arc<BuildingGrid>>>,
    /// Procedural bridge availability, decided once by the host
    procedural_bridge: RwLock<Option<BridgeAvailability>>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            building_grid: RwLock::new(None),
            procedural_bridge: RwLock::new(None),
        }
    }
}

// ===== PUBLIC API =====

/// Main engine singleton manager
///
/// # Example
///
/// ```no_run
/// use placement_engine::placement::{Engine, GridConfig};
///
/// Engine::initialize()?;
/// Engine::create_building_grid(GridConfig::default())?;
///
/// let grid = Engine::building_grid()?;
/// grid.add(12, placement_engine::glam::Vec3::new(100.0, 0.0, -40.0));
///
/// Engine::shutdown();
/// # Ok::<(), placement_engine::placement::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Helper to log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::NotInitialized(msg) => {
                crate::engine_error!("placement::Engine", "Not initialized: {}", msg);
            }
            Error::LockPoisoned(msg) => {
                crate::engine_error!("placement::Engine", "Lock poisoned: {}", msg);
            }
            _ => {
                crate::engine_error!("placement::Engine", "Engine error: {}", error);
            }
        }
        error
    }

    fn state() -> Result<&'static EngineState> {
        ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::NotInitialized("Engine not initialized. Call Engine::initialize() first.".to_string())
            ))
    }

    /// Initialize the engine
    ///
    /// Must be called once before creating any singleton. Idempotent.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Destroy all singletons
    ///
    /// The building grid is dropped once the last outstanding `Arc` goes away.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut bridge) = state.procedural_bridge.write() {
                *bridge = None;
            }
            if let Ok(mut grid) = state.building_grid.write() {
                *grid = None;
            }
        }
    }

    // ===== BUILDING GRID API =====

    /// Create and register the building grid singleton
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - A building grid already exists
    /// - The grid lock is poisoned
    pub fn create_building_grid(config: GridConfig) -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.building_grid.write()
            .map_err(|_| Self::log_and_return_error(
                Error::LockPoisoned("BuildingGrid lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::AlreadyExists("BuildingGrid already exists. Call Engine::destroy_building_grid() first.".to_string())
            ));
        }

        let resolution = config.resolution;
        *lock = Some(Arc::new(BuildingGrid::with_config(config)));

        crate::engine_info!(
            "placement::Engine",
            "BuildingGrid singleton created ({}x{} buckets)", resolution, resolution
        );

        Ok(())
    }

    /// Get the building grid singleton
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized or the grid has not
    /// been created.
    pub fn building_grid() -> Result<Arc<BuildingGrid>> {
        let state = Self::state()?;

        let lock = state.building_grid.read()
            .map_err(|_| Self::log_and_return_error(
                Error::LockPoisoned("BuildingGrid lock poisoned".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::NotInitialized("BuildingGrid not created. Call Engine::create_building_grid() first.".to_string())
            ))
    }

    /// Destroy the building grid singleton
    ///
    /// Existing `Arc` references stay valid until dropped.
    pub fn destroy_building_grid() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.building_grid.write()
            .map_err(|_| Self::log_and_return_error(
                Error::LockPoisoned("BuildingGrid lock poisoned".to_string())
            ))?;

        *lock = None;

        crate::engine_info!("placement::Engine", "BuildingGrid singleton destroyed");

        Ok(())
    }

    // ===== PROCEDURAL BRIDGE API =====

    /// Register the procedural-object bridge
    ///
    /// Replaces any earlier registration or unavailability mark.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use placement_engine::placement::Engine;
    /// use placement_engine::procedural::MemoryProceduralBridge;
    ///
    /// Engine::initialize()?;
    /// Engine::register_procedural_bridge(MemoryProceduralBridge::new("1.7"))?;
    /// assert!(Engine::procedural_bridge().is_available());
    /// # Ok::<(), placement_engine::placement::Error>(())
    /// ```
    pub fn register_procedural_bridge<B: ProceduralBridge + 'static>(bridge: B) -> Result<()> {
        let version = bridge.version();
        let bridge: Arc<Mutex<dyn ProceduralBridge>> = Arc::new(Mutex::new(bridge));
        Self::set_bridge_availability(BridgeAvailability::Available(bridge))?;

        crate::engine_info!("placement::Engine", "Procedural-object bridge registered (version {})", version);

        Ok(())
    }

    /// Record that the procedural-object system cannot be used this session
    pub fn mark_procedural_bridge_unavailable(reason: impl Into<String>) -> Result<()> {
        let reason = reason.into();
        crate::engine_warn!("placement::Engine", "Procedural-object bridge unavailable: {}", reason);
        Self::set_bridge_availability(BridgeAvailability::Unavailable { reason })
    }

    fn set_bridge_availability(availability: BridgeAvailability) -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.procedural_bridge.write()
            .map_err(|_| Self::log_and_return_error(
                Error::LockPoisoned("Procedural bridge lock poisoned".to_string())
            ))?;

        *lock = Some(availability);
        Ok(())
    }

    /// Current procedural bridge availability
    ///
    /// Never fails: an uninitialized engine, a poisoned lock or a missing
    /// registration all read as `Unavailable` with a reason.
    pub fn procedural_bridge() -> BridgeAvailability {
        let Some(state) = ENGINE_STATE.get() else {
            return BridgeAvailability::Unavailable { reason: "Engine not initialized".to_string() };
        };

        match state.procedural_bridge.read() {
            Ok(lock) => lock.clone().unwrap_or_else(|| BridgeAvailability::Unavailable {
                reason: BRIDGE_NOT_REGISTERED.to_string(),
            }),
            Err(_) => BridgeAvailability::Unavailable {
                reason: "Procedural bridge lock poisoned".to_string(),
            },
        }
    }

    /// Reset all singletons for testing (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        Self::shutdown();
    }

    // ===== LOGGING API =====

    /// Set a custom logger
    ///
    /// # Example
    ///
    /// ```no_run
    /// use placement_engine::placement::{Engine, log::{Logger, LogEntry}};
    ///
    /// struct FileLogger;
    /// impl Logger for FileLogger {
    ///     fn log(&self, entry: &LogEntry) {
    ///         // Write to file...
    ///     }
    /// }
    ///
    /// Engine::set_logger(FileLogger);
    /// ```
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by engine_error! macro to include source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
