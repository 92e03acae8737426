/*!
# Placement Engine

Move/rotate transform core for city-builder world objects.

A gesture (drag, rotate, nudge) captures each selected object once as a
`Moveable`, then re-applies an absolute delta from that baseline on every
preview frame. Buildings carry their attached network nodes and
sub-buildings along rigidly. Building relocations keep the process-wide
spatial grid consistent and notify the rendering layer.

## Architecture

- **WorldAccess**: Read/write capability over live world state (host-provided)
- **RenderSink**: Best-effort render invalidation notifications
- **Moveable**: Baseline snapshot plus transform for one selected object
- **BuildingGrid**: Bucket grid of buildings behind one coarse lock
- **BoundsCalculator**: Footprint bounds, with deterministic per-instance scale
- **ProceduralBridge**: Optional peer capability for procedural objects

`MemoryWorld` and `DirtyTracker` are in-process implementations of the two
host capabilities, used by tests and headless tools.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod config;
pub mod entity;
pub mod bounds;
pub mod grid;
pub mod moveable;
pub mod procedural;
pub mod world;

// Main placement namespace module
pub mod placement {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Core types
    pub use crate::config::GridConfig;
    pub use crate::entity::{EntityHandle, EntityKind};
    pub use crate::grid::{BuildingGrid, GridRemoval};
    pub use crate::moveable::{Heading, MoveContext, Moveable};
    pub use crate::world::{RenderSink, WorldAccess};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, ThresholdLogger, format_entry};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }
}

// Re-export math library at crate root
pub use glam;
