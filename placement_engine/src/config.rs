//! Engine-wide configuration constants and the building grid configuration.

use std::f32::consts::TAU;
use std::time::Duration;

/// Number of fixed-point angle units in one full turn.
pub const ANGLE_UNITS_PER_TURN: f32 = 65536.0;

/// Radians per fixed-point angle unit (2π / 65536).
pub const RADIANS_PER_ANGLE_UNIT: f32 = TAU / ANGLE_UNITS_PER_TURN;

/// Number of incident segment slots on a network node.
pub const NODE_SEGMENT_SLOTS: usize = 8;

/// Building footprint half-extent per prefab cell.
pub const BUILDING_CELL_EXTENT: f32 = 4.0;

/// Ceiling on linked-list walks (grid buckets, owned-node and sub-building chains).
pub const MAX_CHAIN_LENGTH: usize = 49152;

/// Configuration for the building grid
///
/// Defaults describe the 270×270 grid of 64-unit buckets centered on the
/// world origin.
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// World units covered by one bucket along each axis
    pub cell_size: f32,
    /// Buckets per axis
    pub resolution: usize,
    /// Hops after which a bucket scan is treated as corrupted
    pub max_chain_length: usize,
    /// How long one lock acquisition round waits before retrying
    pub lock_timeout: Duration,
    /// Resolution of the coarse render-group grid notified on removal
    pub render_group_resolution: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 64.0,
            resolution: 270,
            max_chain_length: MAX_CHAIN_LENGTH,
            lock_timeout: Duration::from_millis(200),
            render_group_resolution: 45,
        }
    }
}

impl GridConfig {
    /// Total number of buckets (`resolution²`)
    pub fn bucket_count(&self) -> usize {
        self.resolution * self.resolution
    }

    /// Offset added to the scaled coordinate so the origin lands mid-grid
    pub fn half_resolution(&self) -> f32 {
        (self.resolution / 2) as f32
    }
}

/// Convert a fixed-point angle delta into radians.
#[inline]
pub fn angle_units_to_radians(units: u16) -> f32 {
    units as f32 * RADIANS_PER_ANGLE_UNIT
}
