/// BuildingGrid - fixed bucket grid over world space.
///
/// Each bucket holds the head of a singly linked list of buildings; each
/// building has one "next in bucket" link. Heads and links live in one table
/// behind one coarse lock shared by every reader and writer in the process.
///
/// Relocating a building is remove-then-add, done on every committed move so
/// the index stays consistent even in the middle of a drag. The building's
/// own position write happens outside the lock; readers tolerate that short
/// window.

use std::sync::{Mutex, MutexGuard, TryLockError};
use std::thread;
use std::time::Instant;
use glam::Vec3;
use crate::config::GridConfig;
use crate::world::RenderSink;

/// Outcome of `BuildingGrid::remove`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridRemoval {
    /// The building was unlinked from its bucket
    Removed,
    /// The bucket list did not contain the building
    NotFound,
    /// The bucket list exceeded the chain ceiling; the scan was aborted
    Corrupted,
}

/// Bucket heads plus per-building links, guarded together.
struct GridTable {
    heads: Vec<Option<u32>>,
    next: Vec<Option<u32>>,
}

impl GridTable {
    fn next_of(&self, building: u32) -> Option<u32> {
        self.next.get(building as usize).copied().flatten()
    }

    fn set_next(&mut self, building: u32, next: Option<u32>) {
        let index = building as usize;
        if index >= self.next.len() {
            if next.is_none() {
                return;
            }
            self.next.resize(index + 1, None);
        }
        self.next[index] = next;
    }
}

/// Process-wide building grid
pub struct BuildingGrid {
    config: GridConfig,
    table: Mutex<GridTable>,
}

impl Default for BuildingGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildingGrid {
    /// Create an empty grid with the default 270×270 layout
    pub fn new() -> Self {
        Self::with_config(GridConfig::default())
    }

    /// Create an empty grid with a custom layout
    pub fn with_config(config: GridConfig) -> Self {
        let table = GridTable {
            heads: vec![None; config.bucket_count()],
            next: Vec::new(),
        };
        Self { config, table: Mutex::new(table) }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Bucket coordinates `(bx, bz)` for a world position.
    ///
    /// `clamp(trunc(x / cell_size + resolution / 2), 0, resolution - 1)` per axis.
    pub fn bucket_of(&self, position: Vec3) -> (usize, usize) {
        (self.axis_bucket(position.x), self.axis_bucket(position.z))
    }

    fn axis_bucket(&self, coordinate: f32) -> usize {
        let max = self.config.resolution as i32 - 1;
        let scaled = (coordinate / self.config.cell_size + self.config.half_resolution()) as i32;
        scaled.clamp(0, max) as usize
    }

    fn bucket_index(&self, bx: usize, bz: usize) -> usize {
        bz * self.config.resolution + bx
    }

    /// Acquire the table lock.
    ///
    /// Each round waits at most `lock_timeout`; expired rounds are retried
    /// until the lock is obtained, so this never fails. A poisoned table only
    /// holds plain links and is used as-is.
    fn lock_table(&self) -> MutexGuard<'_, GridTable> {
        loop {
            let deadline = Instant::now() + self.config.lock_timeout;
            loop {
                match self.table.try_lock() {
                    Ok(guard) => return guard,
                    Err(TryLockError::Poisoned(poisoned)) => return poisoned.into_inner(),
                    Err(TryLockError::WouldBlock) => {
                        if Instant::now() >= deadline {
                            break;
                        }
                        thread::yield_now();
                    }
                }
            }
            crate::engine_trace!(
                "placement::BuildingGrid",
                "Grid lock still busy after {:?}, retrying",
                self.config.lock_timeout
            );
        }
    }

    /// Link `building` at the head of the bucket containing `position`.
    pub fn add(&self, building: u32, position: Vec3) {
        let (bx, bz) = self.bucket_of(position);
        let index = self.bucket_index(bx, bz);

        let mut table = self.lock_table();
        let head = table.heads[index];
        table.set_next(building, head);
        table.heads[index] = Some(building);
    }

    /// Unlink `building` from the bucket containing `position`.
    ///
    /// `position` must be the building's last-written position (the one it
    /// was added with). After the lock is released, the coarse render region
    /// the building vacated is marked dirty on `data_layer`.
    pub fn remove(
        &self,
        building: u32,
        position: Vec3,
        data_layer: u32,
        render: &dyn RenderSink,
    ) -> GridRemoval {
        let (bx, bz) = self.bucket_of(position);
        let index = self.bucket_index(bx, bz);

        let outcome = {
            let mut table = self.lock_table();
            let own_next = table.next_of(building);
            let mut previous: Option<u32> = None;
            let mut current = table.heads[index];
            let mut hops = 0usize;
            let mut outcome = GridRemoval::NotFound;

            while let Some(candidate) = current {
                if candidate == building {
                    match previous {
                        None => table.heads[index] = own_next,
                        Some(previous) => table.set_next(previous, own_next),
                    }
                    outcome = GridRemoval::Removed;
                    break;
                }
                previous = current;
                current = table.next_of(candidate);
                hops += 1;
                if hops > self.config.max_chain_length {
                    outcome = GridRemoval::Corrupted;
                    break;
                }
            }
            table.set_next(building, None);
            outcome
        };

        if outcome == GridRemoval::Corrupted {
            crate::engine_error!(
                "placement::BuildingGrid",
                "Invalid list detected in bucket ({}, {}) while removing building {}",
                bx, bz, building
            );
        }

        let groups = self.config.render_group_resolution;
        let resolution = self.config.resolution;
        render.mark_region_dirty(bx * groups / resolution, bz * groups / resolution, data_layer);

        outcome
    }

    /// Buildings linked in bucket `(bx, bz)`, head first.
    ///
    /// The walk stops at the chain ceiling, so a corrupted bucket returns a
    /// truncated list instead of looping.
    pub fn bucket_members(&self, bx: usize, bz: usize) -> Vec<u32> {
        let index = self.bucket_index(bx, bz);
        let table = self.lock_table();
        let mut members = Vec::new();
        let mut current = table.heads[index];
        while let Some(building) = current {
            if members.len() >= self.config.max_chain_length {
                break;
            }
            members.push(building);
            current = table.next_of(building);
        }
        members
    }

    /// Buildings linked in the bucket containing `position`, head first.
    pub fn members_at(&self, position: Vec3) -> Vec<u32> {
        let (bx, bz) = self.bucket_of(position);
        self.bucket_members(bx, bz)
    }

    /// The building linked after `building` in its bucket
    pub fn next_in_bucket(&self, building: u32) -> Option<u32> {
        self.lock_table().next_of(building)
    }

    /// Total number of linked buildings across all buckets
    pub fn len(&self) -> usize {
        let table = self.lock_table();
        table.heads.iter().map(|&head| {
            let mut count = 0usize;
            let mut current = head;
            while let Some(building) = current {
                if count >= self.config.max_chain_length {
                    break;
                }
                count += 1;
                current = table.next_of(building);
            }
            count
        }).sum()
    }

    pub fn is_empty(&self) -> bool {
        let table = self.lock_table();
        table.heads.iter().all(Option::is_none)
    }

    /// Unlink everything
    pub fn clear(&self) {
        let mut table = self.lock_table();
        table.heads.iter_mut().for_each(|head| *head = None);
        table.next.clear();
    }
}

#[cfg(test)]
#[path = "building_grid_tests.rs"]
mod tests;
