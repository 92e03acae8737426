/// Read/write capability over live world state.
///
/// Indices are buffer indices of the respective kind. Passing an index that
/// does not name a live object is a caller contract violation; implementations
/// may panic.

use glam::Vec3;
use crate::bounds::AABB;
use crate::entity::{BuildingInfo, EntityHandle, ItemLayer, ScaledPrefabInfo, SegmentId};

pub trait WorldAccess {
    // ===== BUILDINGS =====

    fn building_position(&self, building: u32) -> Vec3;

    /// Building rotation in radians
    fn building_angle(&self, building: u32) -> f32;

    fn building_info(&self, building: u32) -> BuildingInfo;

    /// Head of the building's owned-node chain
    fn building_first_node(&self, building: u32) -> Option<u32>;

    /// Next building in the sub-building chain
    fn building_sub_building(&self, building: u32) -> Option<u32>;

    fn set_building_pose(&mut self, building: u32, position: Vec3, angle: f32);

    /// Re-derive the building's cached per-instance geometry
    fn update_building(&mut self, building: u32);

    /// Recompute placement-dependent data (terrain fit, collision) at the current pose
    fn calculate_building(&mut self, building: u32);

    fn update_parking_spaces(&mut self, building: u32);

    // ===== NETWORK NODES & SEGMENTS =====

    fn node_position(&self, node: u32) -> Vec3;

    fn node_layer(&self, node: u32) -> ItemLayer;

    /// Next node in the owning building's node chain
    fn node_next_building_node(&self, node: u32) -> Option<u32>;

    /// Segment occupying incident slot `slot` (0..8)
    fn node_segment(&self, node: u32, slot: usize) -> Option<SegmentId>;

    /// Precomputed world-space bounds of the node
    fn node_bounds(&self, node: u32) -> AABB;

    fn move_node(&mut self, node: u32, position: Vec3);

    fn segment_start_node(&self, segment: SegmentId) -> u32;

    /// Direction of `segment` where it leaves `node`
    fn segment_direction_at(&self, segment: SegmentId, node: u32) -> Vec3;

    fn set_segment_start_direction(&mut self, segment: SegmentId, direction: Vec3);

    fn set_segment_end_direction(&mut self, segment: SegmentId, direction: Vec3);

    // ===== PROPS =====

    fn prop_position(&self, prop: u32) -> Vec3;

    /// Prop rotation in native 16-bit angle units
    fn prop_angle(&self, prop: u32) -> u16;

    fn prop_info(&self, prop: u32) -> ScaledPrefabInfo;

    fn set_prop_angle(&mut self, prop: u32, angle: u16);

    fn move_prop(&mut self, prop: u32, position: Vec3);

    // ===== TREES =====

    fn tree_position(&self, tree: u32) -> Vec3;

    fn tree_info(&self, tree: u32) -> ScaledPrefabInfo;

    fn move_tree(&mut self, tree: u32, position: Vec3);

    // ===== DISPATCH =====

    /// Current position of any handle
    fn position(&self, handle: EntityHandle) -> Vec3 {
        match handle {
            EntityHandle::Building(b) => self.building_position(b),
            EntityHandle::Prop(p) => self.prop_position(p),
            EntityHandle::Tree(t) => self.tree_position(t),
            EntityHandle::NetNode(n) => self.node_position(n),
        }
    }
}
