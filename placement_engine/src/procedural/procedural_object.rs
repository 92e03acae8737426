/// ProceduralObject - snapshot of one object owned by the procedural-object
/// bridge, in the shape the move tool consumes.

use glam::{EulerRot, Quat, Vec3};
use std::f32::consts::TAU;

/// Longest prefab-name prefix kept in `display_name`
pub const DISPLAY_NAME_MAX_CHARS: usize = 35;

/// Prefix marking procedural objects in selection lists
pub const DISPLAY_NAME_PREFIX: &str = "[PO]";

#[derive(Debug, Clone, PartialEq)]
pub struct ProceduralObject {
    /// Public id, 1-based (bridge-internal index + 1)
    pub id: u32,
    pub base_prefab_name: String,
    pub position: Vec3,
    pub rotation: Quat,
    pub selected: bool,
}

impl ProceduralObject {
    /// Build from the bridge's 0-based internal index
    pub fn from_index(index: u32, base_prefab_name: impl Into<String>, position: Vec3, rotation: Quat) -> Self {
        Self {
            id: index + 1,
            base_prefab_name: base_prefab_name.into(),
            position,
            rotation,
            selected: false,
        }
    }

    /// The bridge's 0-based internal index
    pub fn index(&self) -> u32 {
        self.id - 1
    }

    /// `"[PO]"` followed by at most 35 characters of the prefab name
    pub fn display_name(&self) -> String {
        let name: String = self.base_prefab_name.chars().take(DISPLAY_NAME_MAX_CHARS).collect();
        format!("{}{}", DISPLAY_NAME_PREFIX, name)
    }

    /// Heading in radians, `[0, 2π)`, in the same sense as `rotation_about_up`.
    pub fn angle(&self) -> f32 {
        let (yaw, _, _) = self.rotation.to_euler(EulerRot::YXZ);
        let angle = (-yaw).rem_euclid(TAU);
        if angle >= TAU { 0.0 } else { angle }
    }

    /// Replace the heading, keeping pitch and roll.
    pub fn set_angle(&mut self, radians: f32) {
        let (_, pitch, roll) = self.rotation.to_euler(EulerRot::YXZ);
        self.rotation = Quat::from_euler(EulerRot::YXZ, -radians.rem_euclid(TAU), pitch, roll);
    }

    pub fn set_position_y(&mut self, height: f32) {
        self.position.y = height;
    }

    pub fn distance_to(&self, point: Vec3) -> f32 {
        self.position.distance(point)
    }
}

#[cfg(test)]
#[path = "procedural_object_tests.rs"]
mod tests;
