/// Per-kind relocation: write one object's new pose and notify dependents.

use glam::Vec3;
use crate::entity::EntityHandle;
use crate::grid::GridRemoval;
use super::heading::rotation_about_up;
use super::move_context::MoveContext;
use super::moveable::Moveable;

impl Moveable {
    /// Place this object at `location` with its baseline angle plus `delta_units`.
    pub(super) fn relocate(&self, ctx: &mut MoveContext<'_>, location: Vec3, delta_units: u16) {
        match self.id {
            EntityHandle::Building(building) => self.relocate_building(ctx, building, location, delta_units),
            EntityHandle::Prop(prop) => {
                ctx.world.set_prop_angle(prop, self.baseline_angle.apply_delta(delta_units).as_units());
                ctx.world.move_prop(prop, location);
                ctx.render.mark_dirty(self.id);
            }
            EntityHandle::Tree(tree) => {
                ctx.world.move_tree(tree, location);
                ctx.render.mark_dirty(self.id);
            }
            EntityHandle::NetNode(node) => self.relocate_node(ctx, node, location, delta_units),
        }
    }

    fn relocate_building(&self, ctx: &mut MoveContext<'_>, building: u32, location: Vec3, delta_units: u16) {
        let info = ctx.world.building_info(building);
        let old_position = ctx.world.building_position(building);

        if ctx.grid.remove(building, old_position, info.data_layer, ctx.render) != GridRemoval::Removed {
            crate::engine_debug!(
                "placement::Moveable",
                "Building {} was not linked in its grid bucket before relocation", building
            );
        }

        ctx.world.update_building(building);
        ctx.render.mark_dirty(self.id);
        if info.has_parking_spaces() {
            ctx.world.update_parking_spaces(building);
        }

        let angle = self.baseline_angle.apply_delta(delta_units).as_radians();
        ctx.world.set_building_pose(building, location, angle);
        ctx.grid.add(building, location);

        ctx.world.calculate_building(building);
        ctx.world.update_building(building);
        ctx.render.mark_dirty(self.id);
    }

    fn relocate_node(&self, ctx: &mut MoveContext<'_>, node: u32, location: Vec3, delta_units: u16) {
        if let Some(directions) = &self.baseline_segment_directions {
            let rotation = rotation_about_up(delta_units);
            for (slot, baseline) in directions.iter().enumerate() {
                if *baseline == Vec3::ZERO {
                    continue;
                }
                let Some(segment) = ctx.world.node_segment(node, slot) else {
                    continue;
                };
                let direction = rotation * *baseline;
                if ctx.world.segment_start_node(segment) == node {
                    ctx.world.set_segment_start_direction(segment, direction);
                } else {
                    ctx.world.set_segment_end_direction(segment, direction);
                }
                ctx.render.mark_segment_dirty(segment);
            }
        }

        ctx.world.move_node(node, location);
        ctx.render.mark_dirty(self.id);
    }
}
