//! Procedural-object bridge
//!
//! Optional peer capability: the move tool can list, clone, delete and
//! convert objects owned by a separately loaded procedural-object system.
//! The transform core does not depend on it.

mod memory_bridge;
mod procedural_bridge;
mod procedural_object;

pub use memory_bridge::MemoryProceduralBridge;
pub use procedural_bridge::{BridgeAvailability, ProceduralBridge};
pub use procedural_object::{ProceduralObject, DISPLAY_NAME_MAX_CHARS, DISPLAY_NAME_PREFIX};
