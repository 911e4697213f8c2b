//! Segment interpolation

use skyparkour_sdk::NiPoint3;

use super::timeline::{MotionTimeline, Segment};

/// Normalized progress through a segment, clamped to `[0, 1]`
///
/// A zero-length segment has no progress.
pub fn progress(elapsed: f32, duration: f32) -> f32 {
    if duration == 0.0 {
        return 0.0;
    }
    (elapsed / duration).clamp(0.0, 1.0)
}

/// Per-motion interpolation state
///
/// `clip_move_index` is advanced by the movement marker animation event;
/// `accum_time` by whichever per-frame hook is running.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InterpolationState {
    /// Seconds elapsed in the current segment
    pub accum_time: f32,
    /// 1-based index of the marker most recently reached
    pub clip_move_index: i32,
    /// Last computed position
    pub interp_pos: NiPoint3,
}

impl InterpolationState {
    /// Position for the current segment, or `None` when the timeline is empty
    ///
    /// Caches the result in `interp_pos`. Does not advance time.
    pub fn sample(
        &mut self,
        timeline: &MotionTimeline,
        start: NiPoint3,
        target: NiPoint3,
    ) -> Option<NiPoint3> {
        let segment: Segment = timeline.segment(self.clip_move_index)?;
        let alpha = progress(self.accum_time, segment.duration());

        self.interp_pos = NiPoint3::lerp(start, target, alpha);
        Some(self.interp_pos)
    }

    pub fn advance(&mut self, dt: f32) {
        self.accum_time += dt;
    }

    /// Start timing a new segment
    pub fn next_segment(&mut self) {
        self.clip_move_index += 1;
        self.accum_time = 0.0;
    }

    pub fn reset(&mut self) {
        self.accum_time = 0.0;
        self.clip_move_index = 0;
    }
}
