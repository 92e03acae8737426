//! World object identifiers and the prefab metadata the engine reads.

use std::fmt;
use bitflags::bitflags;
use glam::Vec3;

/// Index of a network segment in the world's segment buffer.
pub type SegmentId = u32;

/// Kind of world object an `EntityHandle` names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    Building,
    Prop,
    Tree,
    NetNode,
}

/// Tagged identifier naming one world object.
///
/// Equality and hashing are by value. Validity of the index is a caller
/// contract: handles come from whatever allocated the object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityHandle {
    Building(u32),
    Prop(u32),
    Tree(u32),
    NetNode(u32),
}

impl EntityHandle {
    /// Build a handle from its tagged-pair form
    pub fn new(kind: EntityKind, index: u32) -> Self {
        match kind {
            EntityKind::Building => EntityHandle::Building(index),
            EntityKind::Prop => EntityHandle::Prop(index),
            EntityKind::Tree => EntityHandle::Tree(index),
            EntityKind::NetNode => EntityHandle::NetNode(index),
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            EntityHandle::Building(_) => EntityKind::Building,
            EntityHandle::Prop(_) => EntityKind::Prop,
            EntityHandle::Tree(_) => EntityKind::Tree,
            EntityHandle::NetNode(_) => EntityKind::NetNode,
        }
    }

    pub fn index(&self) -> u32 {
        match *self {
            EntityHandle::Building(i)
            | EntityHandle::Prop(i)
            | EntityHandle::Tree(i)
            | EntityHandle::NetNode(i) => i,
        }
    }
}

impl fmt::Display for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}#{}", self.kind(), self.index())
    }
}

/// Class layer of a network node's prefab.
///
/// Only `PublicTransport` matters to the engine: transit stops attached to a
/// building are not carried along when the building moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ItemLayer {
    #[default]
    Default,
    PublicTransport,
    Pipes,
    PowerLines,
    Markers,
}

bitflags! {
    /// Capabilities declared by a building prefab
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PrefabFlags: u32 {
        /// Prefab owns parking spaces that must be recomputed after a move
        const HAS_PARKING_SPACES = 1 << 0;
    }
}

/// Building prefab metadata
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuildingInfo {
    /// Footprint width in cells
    pub cell_width: u32,
    /// Footprint length in cells
    pub cell_length: u32,
    pub flags: PrefabFlags,
    /// Render data layer, passed along with region refresh notifications
    pub data_layer: u32,
}

impl BuildingInfo {
    pub fn has_parking_spaces(&self) -> bool {
        self.flags.contains(PrefabFlags::HAS_PARKING_SPACES)
    }
}

/// Prop or tree prefab metadata: generated mesh size and the scale range
/// placed instances are drawn from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledPrefabInfo {
    pub size: Vec3,
    pub min_scale: f32,
    pub max_scale: f32,
}
