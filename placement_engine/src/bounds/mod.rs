//! Footprint and bounds calculation
//!
//! Per-instance footprints used for hit-testing and selection overlays.

mod aabb;
mod bounds_calculator;
mod deterministic_scale;

pub use aabb::AABB;
pub use bounds_calculator::BoundsCalculator;
pub use deterministic_scale::{deterministic_scale, instance_scale};
