/// Moveable - one world object captured for a move/rotate gesture.
///
/// Construction snapshots the baseline pose. For buildings it also builds the
/// child list once from live topology:
/// - every owned node that is not on the public-transport layer
/// - every sub-building (with its own baseline pose, no children of its own)
/// - every non-transit node owned by those sub-buildings
///
/// The child list is never refreshed. All transforms are absolute deltas
/// from the baseline, so repeated previews during one drag never drift.

use std::hash::{Hash, Hasher};
use glam::Vec3;
use crate::bounds::{BoundsCalculator, AABB};
use crate::config::{MAX_CHAIN_LENGTH, NODE_SEGMENT_SLOTS};
use crate::entity::{EntityHandle, ItemLayer};
use crate::world::WorldAccess;
use super::heading::{rotation_about_up, Heading};
use super::move_context::MoveContext;

pub struct Moveable {
    pub(super) id: EntityHandle,
    pub(super) baseline_position: Vec3,
    pub(super) baseline_angle: Heading,
    /// NetNode only: direction of each incident segment at construction, ZERO where empty
    pub(super) baseline_segment_directions: Option<[Vec3; NODE_SEGMENT_SLOTS]>,
    /// Building only; `None` when nothing is attached
    pub(super) children: Option<Vec<Moveable>>,
}

impl Moveable {
    /// Capture `id`'s baseline pose and, for buildings, its child tree.
    pub fn new(id: EntityHandle, world: &dyn WorldAccess) -> Self {
        match id {
            EntityHandle::Building(building) => {
                let mut children = Vec::new();
                Self::collect_owned_nodes(world, building, &mut children);

                let mut visited = 0usize;
                let mut sub_building = world.building_sub_building(building);
                while let Some(sub) = sub_building {
                    visited += 1;
                    if visited > MAX_CHAIN_LENGTH {
                        crate::engine_error!(
                            "placement::Moveable",
                            "Invalid sub-building chain detected under building {}", building
                        );
                        break;
                    }
                    children.push(Self::bare_building(sub, world));
                    Self::collect_owned_nodes(world, sub, &mut children);
                    sub_building = world.building_sub_building(sub);
                }

                crate::engine_trace!(
                    "placement::Moveable",
                    "Captured building {} with {} attached objects", building, children.len()
                );

                Self {
                    children: if children.is_empty() { None } else { Some(children) },
                    ..Self::bare_building(building, world)
                }
            }
            EntityHandle::Prop(prop) => Self {
                id,
                baseline_position: world.prop_position(prop),
                baseline_angle: Heading::Units(world.prop_angle(prop)),
                baseline_segment_directions: None,
                children: None,
            },
            EntityHandle::Tree(tree) => Self {
                id,
                baseline_position: world.tree_position(tree),
                baseline_angle: Heading::Radians(0.0),
                baseline_segment_directions: None,
                children: None,
            },
            EntityHandle::NetNode(node) => {
                let mut directions = [Vec3::ZERO; NODE_SEGMENT_SLOTS];
                for (slot, direction) in directions.iter_mut().enumerate() {
                    if let Some(segment) = world.node_segment(node, slot) {
                        *direction = world.segment_direction_at(segment, node);
                    }
                }
                Self {
                    id,
                    baseline_position: world.node_position(node),
                    baseline_angle: Heading::Radians(0.0),
                    baseline_segment_directions: Some(directions),
                    children: None,
                }
            }
        }
    }

    /// A building's baseline pose without any children
    fn bare_building(building: u32, world: &dyn WorldAccess) -> Self {
        Self {
            id: EntityHandle::Building(building),
            baseline_position: world.building_position(building),
            baseline_angle: Heading::Radians(world.building_angle(building)),
            baseline_segment_directions: None,
            children: None,
        }
    }

    /// Append a child for every non-transit node in `building`'s owned-node chain.
    fn collect_owned_nodes(world: &dyn WorldAccess, building: u32, children: &mut Vec<Moveable>) {
        let mut visited = 0usize;
        let mut node = world.building_first_node(building);
        while let Some(current) = node {
            visited += 1;
            if visited > MAX_CHAIN_LENGTH {
                crate::engine_error!(
                    "placement::Moveable",
                    "Invalid owned-node chain detected under building {}", building
                );
                break;
            }
            if world.node_layer(current) != ItemLayer::PublicTransport {
                children.push(Moveable::new(EntityHandle::NetNode(current), world));
            }
            node = world.node_next_building_node(current);
        }
    }

    pub fn id(&self) -> EntityHandle {
        self.id
    }

    pub fn baseline_position(&self) -> Vec3 {
        self.baseline_position
    }

    pub fn baseline_angle(&self) -> Heading {
        self.baseline_angle
    }

    /// Segment directions captured at construction (NetNode only)
    pub fn baseline_segment_directions(&self) -> Option<&[Vec3; NODE_SEGMENT_SLOTS]> {
        self.baseline_segment_directions.as_ref()
    }

    /// Attached objects; empty when there are none
    pub fn children(&self) -> &[Moveable] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }

    /// Current live position of the wrapped object (not the baseline)
    pub fn position(&self, world: &dyn WorldAccess) -> Vec3 {
        world.position(self.id)
    }

    /// Apply a gesture transform relative to the baseline.
    ///
    /// The root moves to `R · (baseline − center) + center + delta_position`,
    /// where `R` rotates about world-up by `delta_angle` fixed-point units.
    /// Children are placed rigidly around the root's *new* position: each
    /// keeps its baseline offset from the root, rotated by `R`, and receives
    /// the same angle delta.
    ///
    /// Returns the root's new position.
    pub fn transform(
        &self,
        ctx: &mut MoveContext<'_>,
        delta_position: Vec3,
        delta_angle: u16,
        center: Vec3,
    ) -> Vec3 {
        let rotation = rotation_about_up(delta_angle);
        let new_position = rotation * (self.baseline_position - center) + center + delta_position;

        self.relocate(ctx, new_position, delta_angle);

        if let Some(children) = &self.children {
            for child in children {
                let offset = child.baseline_position - self.baseline_position;
                child.relocate(ctx, new_position + rotation * offset, delta_angle);
            }
        }

        new_position
    }

    /// Footprint of this object united with the bounds of every child.
    pub fn bounds(&self, world: &dyn WorldAccess) -> AABB {
        let mut bounds = BoundsCalculator::new(world).footprint(self.id);
        for child in self.children() {
            bounds.encapsulate(&child.bounds(world));
        }
        bounds
    }
}

impl PartialEq for Moveable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Moveable {}

impl Hash for Moveable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Debug for Moveable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Moveable")
            .field("id", &self.id)
            .field("baseline_position", &self.baseline_position)
            .field("baseline_angle", &self.baseline_angle)
            .field("children", &self.children().len())
            .finish()
    }
}

#[cfg(test)]
#[path = "moveable_tests.rs"]
mod tests;
