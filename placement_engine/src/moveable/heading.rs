/// Baseline headings in their native unit spaces.
///
/// Buildings store their rotation in radians; props store it in 16-bit
/// fixed-point units (65536 per turn). The two are kept apart: a prop's
/// angle delta is added in unit space with wrap-around, a building's in
/// radians without wrapping.

use glam::{Quat, Vec3};
use crate::config::{angle_units_to_radians, RADIANS_PER_ANGLE_UNIT};

/// Rotation of a world object in its native unit space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Heading {
    /// Radians (buildings; nodes and trees carry 0)
    Radians(f32),
    /// 16-bit fixed-point units (props)
    Units(u16),
}

impl Heading {
    /// Add a fixed-point delta, staying in this heading's unit space.
    pub fn apply_delta(self, delta_units: u16) -> Heading {
        match self {
            Heading::Radians(radians) => Heading::Radians(radians + angle_units_to_radians(delta_units)),
            Heading::Units(units) => Heading::Units(units.wrapping_add(delta_units)),
        }
    }

    /// The heading in radians
    pub fn as_radians(self) -> f32 {
        match self {
            Heading::Radians(radians) => radians,
            Heading::Units(units) => angle_units_to_radians(units),
        }
    }

    /// The heading in fixed-point units, wrapped to one turn
    pub fn as_units(self) -> u16 {
        match self {
            Heading::Radians(radians) => (radians / RADIANS_PER_ANGLE_UNIT).round().rem_euclid(65536.0) as u16,
            Heading::Units(units) => units,
        }
    }
}

/// Rotation about world-up by a fixed-point angle.
///
/// Positive angles turn +X toward +Z.
pub fn rotation_about_up(delta_units: u16) -> Quat {
    Quat::from_axis_angle(Vec3::NEG_Y, angle_units_to_radians(delta_units))
}
