//! Integration tests for compound moves
//!
//! These tests run whole gestures against MemoryWorld: a building with
//! attached roads and sub-buildings dragged and rotated, and several
//! workers relocating buildings through one shared grid.
//!
//! Run with: cargo test --test moveable_integration_tests

use placement_engine::placement::{BuildingGrid, EntityHandle, MoveContext, Moveable};
use placement_engine::entity::{BuildingInfo, ItemLayer, PrefabFlags};
use placement_engine::world::{DirtyTracker, MemoryWorld, WorldAccess};
use placement_engine::glam::Vec3;
use std::sync::Arc;
use std::thread;

fn info(cells: u32) -> BuildingInfo {
    BuildingInfo { cell_width: cells, cell_length: cells, flags: PrefabFlags::HAS_PARKING_SPACES, data_layer: 1 }
}

fn near(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-3
}

// ============================================================================
// COMPOUND GESTURES
// ============================================================================

#[test]
fn test_integration_drag_then_rotate_station() {
    let mut world = MemoryWorld::new();
    let render = DirtyTracker::new();
    let grid = BuildingGrid::new();

    let station = world.add_building(Vec3::new(0.0, 0.0, 0.0), 0.0, info(4));
    let platform = world.add_building(Vec3::new(0.0, 0.0, 40.0), 0.0, info(2));
    let entrance = world.add_node(Vec3::new(20.0, 0.0, 0.0), ItemLayer::Default);
    let stop = world.add_node(Vec3::new(-20.0, 0.0, 0.0), ItemLayer::PublicTransport);
    let platform_node = world.add_node(Vec3::new(0.0, 0.0, 60.0), ItemLayer::Default);
    let outside = world.add_node(Vec3::new(120.0, 0.0, 0.0), ItemLayer::Default);
    let road = world.connect(entrance, outside);

    world.attach_node(station, entrance);
    world.attach_node(station, stop);
    world.attach_sub_building(station, platform);
    world.attach_node(platform, platform_node);
    grid.add(station, Vec3::ZERO);
    grid.add(platform, Vec3::new(0.0, 0.0, 40.0));

    let moveable = Moveable::new(EntityHandle::Building(station), &world);
    let pivot = moveable.baseline_position();
    let bounds_before = moveable.bounds(&world);

    {
        let mut ctx = MoveContext::new(&mut world, &render, &grid);
        // preview frames of a drag, then the rotation the user settles on
        for step in 1..=4 {
            moveable.transform(&mut ctx, Vec3::new(25.0 * step as f32, 0.0, 0.0), 0, pivot);
        }
        moveable.transform(&mut ctx, Vec3::new(100.0, 0.0, 0.0), 16384, pivot);
    }

    let root = Vec3::new(100.0, 0.0, 0.0);
    assert!(near(world.building_position(station), root));
    assert!(near(world.node_position(entrance), root + Vec3::new(0.0, 0.0, 20.0)));
    assert!(near(world.building_position(platform), root + Vec3::new(-40.0, 0.0, 0.0)));
    assert!(near(world.node_position(platform_node), root + Vec3::new(-60.0, 0.0, 0.0)));
    assert!(near(world.node_position(stop), Vec3::new(-20.0, 0.0, 0.0)));
    assert!(near(world.node_position(outside), Vec3::new(120.0, 0.0, 0.0)));

    // the entrance's road now leaves toward +Z
    assert!(near(world.segment_start_direction(road), Vec3::Z));
    assert!(near(world.segment_end_direction(road), -Vec3::X));

    assert_eq!(grid.len(), 2);
    assert_eq!(grid.members_at(root), vec![station]);
    assert_eq!(render.entity_count(EntityHandle::Building(station)), 10);
    assert_eq!(world.parking_update_count(platform), 5);

    let bounds_after = moveable.bounds(&world);
    assert!(bounds_after.contains_point(world.node_position(platform_node)));
    assert!(!bounds_after.contains_point(bounds_before.min));
}

// ============================================================================
// SHARED GRID
// ============================================================================

#[test]
fn test_integration_concurrent_relocations_share_grid() {
    const WORKERS: u32 = 6;
    const MOVES: usize = 50;

    let grid = Arc::new(BuildingGrid::new());

    let handles: Vec<_> = (0..WORKERS).map(|worker| {
        let grid = Arc::clone(&grid);
        thread::spawn(move || {
            let mut world = MemoryWorld::new();
            let render = DirtyTracker::new();

            // pad so this worker's building index is unique across workers
            let mut building = 0;
            for _ in 0..=worker {
                building = world.add_building(Vec3::ZERO, 0.0, info(1));
            }
            grid.add(building, Vec3::ZERO);

            let moveable = Moveable::new(EntityHandle::Building(building), &world);
            let mut ctx = MoveContext::new(&mut world, &render, &grid);
            for step in 0..MOVES {
                let offset = Vec3::new(64.0 * (step % 7) as f32, 0.0, -64.0 * (worker as f32 + 1.0));
                moveable.transform(&mut ctx, offset, 0, Vec3::ZERO);
            }
            (building, world.building_position(building))
        })
    }).collect();

    let finals: Vec<(u32, Vec3)> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(grid.len(), WORKERS as usize);
    for (building, position) in finals {
        assert!(grid.members_at(position).contains(&building));
    }
}
