/// Axis-aligned bounding boxes for footprint queries.
///
/// Footprints of buildings, props and trees are flat squares (zero height
/// extent); network nodes supply their own precomputed boxes.

use glam::Vec3;

/// Axis-Aligned Bounding Box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    /// Box centered on `center` reaching `half_extents` along each axis.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> AABB {
        let half_extents = half_extents.abs();
        AABB { min: center - half_extents, max: center + half_extents }
    }

    /// Flat square footprint: `half_extent` on X and Z, zero on Y.
    pub fn square_footprint(center: Vec3, half_extent: f32) -> AABB {
        Self::from_center_half_extents(center, Vec3::new(half_extent, 0.0, half_extent))
    }

    /// Center point of this AABB.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half of the box size along each axis.
    pub fn half_extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Grow this box so it also covers `other` (per-axis min/max).
    pub fn encapsulate(&mut self, other: &AABB) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Smallest box covering both `self` and `other`.
    pub fn union(&self, other: &AABB) -> AABB {
        let mut result = *self;
        result.encapsulate(other);
        result
    }

    /// Test if this AABB fully contains another AABB.
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
        && self.min.z <= other.min.z && self.max.z >= other.max.z
    }

    /// Test if a point lies inside or on the boundary.
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Test if this AABB intersects (overlaps or touches) another AABB.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
        && self.min.z <= other.max.z && self.max.z >= other.min.z
    }
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
