//! Deterministic per-instance scale.
//!
//! Props and trees are drawn at a scale picked from their prefab's
//! `[min_scale, max_scale]` range. The pick is never stored: it is re-derived
//! from the instance id whenever it is needed, so rendering, placement and
//! footprint queries all agree without extra per-instance state.
//!
//! Each call seeds a fresh `ChaCha8Rng` from the id and draws exactly one
//! value, so the result is a pure function of the id.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of discrete scale steps drawn from the seeded stream.
const SCALE_STEPS: u32 = 10_000;

/// Reproducible factor in `[0, 1)` for the instance with this id.
pub fn deterministic_scale(id: u32) -> f32 {
    let mut rng = ChaCha8Rng::seed_from_u64(id as u64);
    rng.gen_range(0..SCALE_STEPS) as f32 / SCALE_STEPS as f32
}

/// Scale of instance `id` within `[min_scale, max_scale]`.
///
/// This is the scale the instance is rendered with; footprint queries must
/// use the same value.
pub fn instance_scale(id: u32, min_scale: f32, max_scale: f32) -> f32 {
    min_scale + deterministic_scale(id) * (max_scale - min_scale)
}
