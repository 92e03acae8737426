/// BoundsCalculator - per-instance footprints.
///
/// - Building: square of half-extent `4 × max(cell_width, cell_length)`
/// - Prop / Tree: square of half-extent `max(size.x, size.z) × scale`, where
///   the scale is the instance's deterministic scale
/// - NetNode: the node's own precomputed bounds
///
/// Footprints are always taken at the instance's *current* position.

use crate::config::BUILDING_CELL_EXTENT;
use crate::entity::{EntityHandle, ScaledPrefabInfo};
use crate::world::WorldAccess;
use super::aabb::AABB;
use super::deterministic_scale::instance_scale;

/// Computes footprints against one world
pub struct BoundsCalculator<'a> {
    world: &'a dyn WorldAccess,
}

impl<'a> BoundsCalculator<'a> {
    pub fn new(world: &'a dyn WorldAccess) -> Self {
        Self { world }
    }

    /// Footprint of a single instance (children not included)
    pub fn footprint(&self, handle: EntityHandle) -> AABB {
        match handle {
            EntityHandle::Building(building) => {
                let info = self.world.building_info(building);
                let half_extent = (info.cell_width as f32 * BUILDING_CELL_EXTENT)
                    .max(info.cell_length as f32 * BUILDING_CELL_EXTENT);
                AABB::square_footprint(self.world.building_position(building), half_extent)
            }
            EntityHandle::Prop(prop) => {
                let info = self.world.prop_info(prop);
                AABB::square_footprint(self.world.prop_position(prop), Self::scaled_half_extent(prop, &info))
            }
            EntityHandle::Tree(tree) => {
                let info = self.world.tree_info(tree);
                AABB::square_footprint(self.world.tree_position(tree), Self::scaled_half_extent(tree, &info))
            }
            EntityHandle::NetNode(node) => self.world.node_bounds(node),
        }
    }

    fn scaled_half_extent(id: u32, info: &ScaledPrefabInfo) -> f32 {
        let scale = instance_scale(id, info.min_scale, info.max_scale);
        info.size.x.max(info.size.z) * scale
    }
}

#[cfg(test)]
#[path = "bounds_calculator_tests.rs"]
mod tests;
