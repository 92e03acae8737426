/// Collaborators a transform writes through.

use crate::grid::BuildingGrid;
use crate::world::{RenderSink, WorldAccess};

/// Bundles the world, the render sink and the building grid for one
/// `Moveable::transform` call.
pub struct MoveContext<'a> {
    pub world: &'a mut dyn WorldAccess,
    pub render: &'a dyn RenderSink,
    pub grid: &'a BuildingGrid,
}

impl<'a> MoveContext<'a> {
    pub fn new(world: &'a mut dyn WorldAccess, render: &'a dyn RenderSink, grid: &'a BuildingGrid) -> Self {
        Self { world, render, grid }
    }
}
