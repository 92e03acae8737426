/// Render invalidation capability.
///
/// All notifications are best-effort: the rendering layer picks them up on its
/// own schedule and nothing here waits for it.

use std::sync::Mutex;
use rustc_hash::FxHashMap;
use crate::entity::{EntityHandle, SegmentId};

pub trait RenderSink {
    /// The object's cached render data is stale
    fn mark_dirty(&self, handle: EntityHandle);

    /// A network segment's render data is stale
    fn mark_segment_dirty(&self, segment: SegmentId);

    /// A coarse map region needs a visual refresh on `layer`
    fn mark_region_dirty(&self, coarse_x: usize, coarse_z: usize, layer: u32);
}

/// RenderSink that records every notification.
///
/// Counts are kept per handle so callers can check how often an object was
/// invalidated (buildings are invalidated twice per relocation).
#[derive(Default)]
pub struct DirtyTracker {
    entities: Mutex<FxHashMap<EntityHandle, u32>>,
    segments: Mutex<FxHashMap<SegmentId, u32>>,
    regions: Mutex<Vec<(usize, usize, u32)>>,
}

impl DirtyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `handle` was marked dirty
    pub fn entity_count(&self, handle: EntityHandle) -> u32 {
        self.entities.lock().map(|map| map.get(&handle).copied().unwrap_or(0)).unwrap_or(0)
    }

    /// How many times `segment` was marked dirty
    pub fn segment_count(&self, segment: SegmentId) -> u32 {
        self.segments.lock().map(|map| map.get(&segment).copied().unwrap_or(0)).unwrap_or(0)
    }

    /// Region notifications in arrival order
    pub fn regions(&self) -> Vec<(usize, usize, u32)> {
        self.regions.lock().map(|regions| regions.clone()).unwrap_or_default()
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        if let Ok(mut map) = self.entities.lock() {
            map.clear();
        }
        if let Ok(mut map) = self.segments.lock() {
            map.clear();
        }
        if let Ok(mut regions) = self.regions.lock() {
            regions.clear();
        }
    }
}

impl RenderSink for DirtyTracker {
    fn mark_dirty(&self, handle: EntityHandle) {
        if let Ok(mut map) = self.entities.lock() {
            *map.entry(handle).or_insert(0) += 1;
        }
    }

    fn mark_segment_dirty(&self, segment: SegmentId) {
        if let Ok(mut map) = self.segments.lock() {
            *map.entry(segment).or_insert(0) += 1;
        }
    }

    fn mark_region_dirty(&self, coarse_x: usize, coarse_z: usize, layer: u32) {
        if let Ok(mut regions) = self.regions.lock() {
            regions.push((coarse_x, coarse_z, layer));
        }
    }
}
