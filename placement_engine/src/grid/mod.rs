//! Building spatial grid
//!
//! Fixed bucket grid indexing buildings by approximate world location,
//! shared with the rest of the simulation.

mod building_grid;

pub use building_grid::{BuildingGrid, GridRemoval};
