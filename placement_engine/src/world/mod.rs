//! World access capabilities
//!
//! The engine never owns world data. It reads and writes object state through
//! `WorldAccess` and reports visual invalidation through `RenderSink`, both
//! provided by the surrounding simulation. `MemoryWorld` and `DirtyTracker`
//! are buffer-backed implementations for headless tools and tests.

mod world_access;
mod render_sink;
mod memory_world;

pub use world_access::WorldAccess;
pub use render_sink::{RenderSink, DirtyTracker};
pub use memory_world::{MemoryWorld, NODE_HALF_WIDTH};
