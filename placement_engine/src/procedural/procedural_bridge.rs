/// Procedural-object bridge.
///
/// The procedural-object system is a separate component the host may or may
/// not have loaded. The engine never probes for it: the host registers a
/// `ProceduralBridge` with `Engine::register_procedural_bridge` (or marks it
/// unavailable), and consumers ask `Engine::procedural_bridge()` which
/// variant they got.

use std::fmt;
use std::sync::{Arc, Mutex};
use crate::entity::EntityHandle;
use crate::error::{Error, Result};
use crate::world::WorldAccess;
use super::procedural_object::ProceduralObject;

/// Capability offered by a loaded procedural-object system
pub trait ProceduralBridge: Send + Sync {
    /// Version string reported by the procedural-object system
    fn version(&self) -> String;

    /// Every object, or only the currently selected ones
    fn list_objects(&self, only_selected: bool) -> Vec<ProceduralObject>;

    /// Duplicate object `id` at `position`; returns the new object's public id
    fn clone_object(&mut self, id: u32, position: glam::Vec3) -> Result<u32>;

    /// Remove `object` and drop it from the selection
    fn delete(&mut self, object: &ProceduralObject) -> Result<()>;

    /// Turn a placed prop or building into a selected procedural object.
    ///
    /// Other kinds return `Error::UnsupportedKind`.
    fn convert_instance(&mut self, handle: EntityHandle, world: &dyn WorldAccess) -> Result<ProceduralObject>;
}

/// Whether the procedural-object system can be used this session
#[derive(Clone)]
pub enum BridgeAvailability {
    Available(Arc<Mutex<dyn ProceduralBridge>>),
    Unavailable { reason: String },
}

impl BridgeAvailability {
    pub fn is_available(&self) -> bool {
        matches!(self, BridgeAvailability::Available(_))
    }

    /// The bridge, or `Error::BridgeUnavailable` with the recorded reason
    pub fn bridge(&self) -> Result<Arc<Mutex<dyn ProceduralBridge>>> {
        match self {
            BridgeAvailability::Available(bridge) => Ok(Arc::clone(bridge)),
            BridgeAvailability::Unavailable { reason } => Err(Error::BridgeUnavailable(reason.clone())),
        }
    }
}

impl fmt::Debug for BridgeAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeAvailability::Available(_) => f.write_str("Available"),
            BridgeAvailability::Unavailable { reason } => {
                f.debug_struct("Unavailable").field("reason", reason).finish()
            }
        }
    }
}

#[cfg(test)]
#[path = "procedural_bridge_tests.rs"]
mod tests;
