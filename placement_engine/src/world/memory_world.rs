/// MemoryWorld - buffer-backed world for headless tools and tests.
///
/// Objects live in plain vectors indexed by their handle index, linked the
/// same way the simulation links them: owned nodes form a chain through
/// `next_building_node`, sub-buildings form a chain through `sub_building`,
/// and each node has eight incident segment slots.

use glam::Vec3;
use crate::bounds::AABB;
use crate::config::NODE_SEGMENT_SLOTS;
use crate::entity::{BuildingInfo, EntityHandle, ItemLayer, ScaledPrefabInfo, SegmentId};
use super::world_access::WorldAccess;

/// Half-width of a node's precomputed bounds
pub const NODE_HALF_WIDTH: f32 = 8.0;

struct BuildingRecord {
    position: Vec3,
    angle: f32,
    info: BuildingInfo,
    first_node: Option<u32>,
    sub_building: Option<u32>,
    update_count: u32,
    calculate_count: u32,
    parking_updates: u32,
}

struct NodeRecord {
    position: Vec3,
    layer: ItemLayer,
    next_building_node: Option<u32>,
    segments: [Option<SegmentId>; NODE_SEGMENT_SLOTS],
    bounds: AABB,
}

struct SegmentRecord {
    start_node: u32,
    end_node: u32,
    start_direction: Vec3,
    end_direction: Vec3,
}

struct PropRecord {
    position: Vec3,
    angle: u16,
    info: ScaledPrefabInfo,
}

struct TreeRecord {
    position: Vec3,
    info: ScaledPrefabInfo,
}

/// In-memory world implementing `WorldAccess`
#[derive(Default)]
pub struct MemoryWorld {
    buildings: Vec<BuildingRecord>,
    nodes: Vec<NodeRecord>,
    segments: Vec<SegmentRecord>,
    props: Vec<PropRecord>,
    trees: Vec<TreeRecord>,
}

impl MemoryWorld {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== POPULATION =====

    pub fn add_building(&mut self, position: Vec3, angle: f32, info: BuildingInfo) -> u32 {
        self.buildings.push(BuildingRecord {
            position,
            angle,
            info,
            first_node: None,
            sub_building: None,
            update_count: 0,
            calculate_count: 0,
            parking_updates: 0,
        });
        (self.buildings.len() - 1) as u32
    }

    pub fn add_node(&mut self, position: Vec3, layer: ItemLayer) -> u32 {
        self.nodes.push(NodeRecord {
            position,
            layer,
            next_building_node: None,
            segments: [None; NODE_SEGMENT_SLOTS],
            bounds: Self::node_bounds_at(position),
        });
        (self.nodes.len() - 1) as u32
    }

    pub fn add_prop(&mut self, position: Vec3, angle: u16, info: ScaledPrefabInfo) -> u32 {
        self.props.push(PropRecord { position, angle, info });
        (self.props.len() - 1) as u32
    }

    pub fn add_tree(&mut self, position: Vec3, info: ScaledPrefabInfo) -> u32 {
        self.trees.push(TreeRecord { position, info });
        (self.trees.len() - 1) as u32
    }

    /// Append `node` to the end of `building`'s owned-node chain.
    pub fn attach_node(&mut self, building: u32, node: u32) {
        match self.buildings[building as usize].first_node {
            None => self.buildings[building as usize].first_node = Some(node),
            Some(mut tail) => {
                while let Some(next) = self.nodes[tail as usize].next_building_node {
                    tail = next;
                }
                self.nodes[tail as usize].next_building_node = Some(node);
            }
        }
    }

    /// Append `sub` to the end of `parent`'s sub-building chain.
    pub fn attach_sub_building(&mut self, parent: u32, sub: u32) {
        let mut tail = parent;
        while let Some(next) = self.buildings[tail as usize].sub_building {
            tail = next;
        }
        self.buildings[tail as usize].sub_building = Some(sub);
    }

    /// Connect two nodes with a straight segment.
    ///
    /// The segment takes the first free slot on each node. Directions point
    /// away from each endpoint toward the other.
    ///
    /// # Panics
    ///
    /// Panics if either node has no free slot.
    pub fn connect(&mut self, start_node: u32, end_node: u32) -> SegmentId {
        let segment = self.segments.len() as SegmentId;
        let start = self.nodes[start_node as usize].position;
        let end = self.nodes[end_node as usize].position;
        let direction = (end - start).normalize_or_zero();

        self.segments.push(SegmentRecord {
            start_node,
            end_node,
            start_direction: direction,
            end_direction: -direction,
        });
        self.occupy_slot(start_node, segment);
        self.occupy_slot(end_node, segment);
        segment
    }

    fn occupy_slot(&mut self, node: u32, segment: SegmentId) {
        let slots = &mut self.nodes[node as usize].segments;
        let free = slots.iter().position(Option::is_none)
            .unwrap_or_else(|| panic!("node {} has no free segment slot", node));
        slots[free] = Some(segment);
    }

    /// Drop `segment` from `node`'s slots without touching the segment itself.
    pub fn detach_segment(&mut self, node: u32, segment: SegmentId) {
        for slot in self.nodes[node as usize].segments.iter_mut() {
            if *slot == Some(segment) {
                *slot = None;
            }
        }
    }

    /// Overwrite a node's owned-node link directly (used to build malformed chains).
    pub fn set_next_building_node(&mut self, node: u32, next: Option<u32>) {
        self.nodes[node as usize].next_building_node = next;
    }

    fn node_bounds_at(position: Vec3) -> AABB {
        AABB::from_center_half_extents(position, Vec3::splat(NODE_HALF_WIDTH))
    }

    // ===== INSPECTION =====

    pub fn building_count(&self) -> usize {
        self.buildings.len()
    }

    /// Handles of every object currently in the world
    pub fn handles(&self) -> Vec<EntityHandle> {
        let buildings = (0..self.buildings.len() as u32).map(EntityHandle::Building);
        let props = (0..self.props.len() as u32).map(EntityHandle::Prop);
        let trees = (0..self.trees.len() as u32).map(EntityHandle::Tree);
        let nodes = (0..self.nodes.len() as u32).map(EntityHandle::NetNode);
        buildings.chain(props).chain(trees).chain(nodes).collect()
    }

    /// Number of cached-geometry re-derivations triggered for `building`
    pub fn building_update_count(&self, building: u32) -> u32 {
        self.buildings[building as usize].update_count
    }

    pub fn building_calculate_count(&self, building: u32) -> u32 {
        self.buildings[building as usize].calculate_count
    }

    pub fn parking_update_count(&self, building: u32) -> u32 {
        self.buildings[building as usize].parking_updates
    }

    pub fn segment_end_node(&self, segment: SegmentId) -> u32 {
        self.segments[segment as usize].end_node
    }

    pub fn segment_start_direction(&self, segment: SegmentId) -> Vec3 {
        self.segments[segment as usize].start_direction
    }

    pub fn segment_end_direction(&self, segment: SegmentId) -> Vec3 {
        self.segments[segment as usize].end_direction
    }
}

impl WorldAccess for MemoryWorld {
    fn building_position(&self, building: u32) -> Vec3 {
        self.buildings[building as usize].position
    }

    fn building_angle(&self, building: u32) -> f32 {
        self.buildings[building as usize].angle
    }

    fn building_info(&self, building: u32) -> BuildingInfo {
        self.buildings[building as usize].info
    }

    fn building_first_node(&self, building: u32) -> Option<u32> {
        self.buildings[building as usize].first_node
    }

    fn building_sub_building(&self, building: u32) -> Option<u32> {
        self.buildings[building as usize].sub_building
    }

    fn set_building_pose(&mut self, building: u32, position: Vec3, angle: f32) {
        let record = &mut self.buildings[building as usize];
        record.position = position;
        record.angle = angle;
    }

    fn update_building(&mut self, building: u32) {
        self.buildings[building as usize].update_count += 1;
    }

    fn calculate_building(&mut self, building: u32) {
        self.buildings[building as usize].calculate_count += 1;
    }

    fn update_parking_spaces(&mut self, building: u32) {
        self.buildings[building as usize].parking_updates += 1;
    }

    fn node_position(&self, node: u32) -> Vec3 {
        self.nodes[node as usize].position
    }

    fn node_layer(&self, node: u32) -> ItemLayer {
        self.nodes[node as usize].layer
    }

    fn node_next_building_node(&self, node: u32) -> Option<u32> {
        self.nodes[node as usize].next_building_node
    }

    fn node_segment(&self, node: u32, slot: usize) -> Option<SegmentId> {
        self.nodes[node as usize].segments.get(slot).copied().flatten()
    }

    fn node_bounds(&self, node: u32) -> AABB {
        self.nodes[node as usize].bounds
    }

    fn move_node(&mut self, node: u32, position: Vec3) {
        let record = &mut self.nodes[node as usize];
        record.position = position;
        record.bounds = Self::node_bounds_at(position);
    }

    fn segment_start_node(&self, segment: SegmentId) -> u32 {
        self.segments[segment as usize].start_node
    }

    fn segment_direction_at(&self, segment: SegmentId, node: u32) -> Vec3 {
        let record = &self.segments[segment as usize];
        if record.start_node == node {
            record.start_direction
        } else {
            record.end_direction
        }
    }

    fn set_segment_start_direction(&mut self, segment: SegmentId, direction: Vec3) {
        self.segments[segment as usize].start_direction = direction;
    }

    fn set_segment_end_direction(&mut self, segment: SegmentId, direction: Vec3) {
        self.segments[segment as usize].end_direction = direction;
    }

    fn prop_position(&self, prop: u32) -> Vec3 {
        self.props[prop as usize].position
    }

    fn prop_angle(&self, prop: u32) -> u16 {
        self.props[prop as usize].angle
    }

    fn prop_info(&self, prop: u32) -> ScaledPrefabInfo {
        self.props[prop as usize].info
    }

    fn set_prop_angle(&mut self, prop: u32, angle: u16) {
        self.props[prop as usize].angle = angle;
    }

    fn move_prop(&mut self, prop: u32, position: Vec3) {
        self.props[prop as usize].position = position;
    }

    fn tree_position(&self, tree: u32) -> Vec3 {
        self.trees[tree as usize].position
    }

    fn tree_info(&self, tree: u32) -> ScaledPrefabInfo {
        self.trees[tree as usize].info
    }

    fn move_tree(&mut self, tree: u32, position: Vec3) {
        self.trees[tree as usize].position = position;
    }
}

#[cfg(test)]
#[path = "memory_world_tests.rs"]
mod tests;
