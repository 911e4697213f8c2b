//! Movement marker timeline

/// Time interval between two consecutive recorded markers (seconds)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Segment {
    pub start: f32,
    pub end: f32,
}

impl Segment {
    pub fn duration(&self) -> f32 {
        self.end - self.start
    }
}

/// Marker timestamps of the active parkour clip, in trigger (chronological) order
///
/// Filled while the clip activates, read while it updates and cleared when it
/// deactivates. Only one clip is tracked at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotionTimeline {
    timestamps: Vec<f32>,
}

impl MotionTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, local_time: f32) {
        self.timestamps.push(local_time);
    }

    pub fn clear(&mut self) {
        self.timestamps.clear();
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn timestamps(&self) -> &[f32] {
        &self.timestamps
    }

    /// Segment index for a 1-based `clip_move_index`
    ///
    /// `clip_move_index - 1`, clamped into `[0, len - 1]`. `None` when the
    /// timeline is empty.
    pub fn segment_index(&self, clip_move_index: i32) -> Option<usize> {
        let last = self.timestamps.len().checked_sub(1)?;
        let index = (clip_move_index as i64 - 1).clamp(0, last as i64);
        Some(index as usize)
    }

    /// Time bounds of the segment a `clip_move_index` refers to
    ///
    /// Index 0 (the lead-in before the first marker, or any out-of-range low
    /// index) yields the zero segment.
    pub fn segment(&self, clip_move_index: i32) -> Option<Segment> {
        let index = self.segment_index(clip_move_index)?;
        if index == 0 {
            return Some(Segment::default());
        }

        Some(Segment {
            start: self.timestamps[index - 1],
            end: self.timestamps[index],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline(ts: &[f32]) -> MotionTimeline {
        let mut timeline = MotionTimeline::new();
        for &t in ts {
            timeline.push(t);
        }
        timeline
    }

    #[test]
    fn test_segment_for_move_index() {
        let timeline = timeline(&[0.2, 0.6, 1.0]);

        assert_eq!(timeline.segment(2), Some(Segment { start: 0.2, end: 0.6 }));
        assert_eq!(timeline.segment(3), Some(Segment { start: 0.6, end: 1.0 }));
    }

    #[test]
    fn test_first_segment_is_zero() {
        let timeline = timeline(&[0.2, 0.6, 1.0]);

        assert_eq!(timeline.segment(1), Some(Segment::default()));
        assert_eq!(timeline.segment(0), Some(Segment::default()));
    }

    #[test]
    fn test_segment_index_clamps() {
        let timeline = timeline(&[0.2, 0.6, 1.0]);

        assert_eq!(timeline.segment_index(i32::MIN), Some(0));
        assert_eq!(timeline.segment_index(-5), Some(0));
        assert_eq!(timeline.segment_index(0), Some(0));
        assert_eq!(timeline.segment_index(4), Some(2));
        assert_eq!(timeline.segment_index(i32::MAX), Some(2));
        assert_eq!(timeline.segment(100), Some(Segment { start: 0.6, end: 1.0 }));
    }

    #[test]
    fn test_empty_timeline_has_no_segment() {
        let timeline = MotionTimeline::new();

        assert_eq!(timeline.segment_index(1), None);
        assert_eq!(timeline.segment(1), None);
    }

    #[test]
    fn test_clear() {
        let mut timeline = timeline(&[0.5]);
        timeline.clear();
        assert!(timeline.is_empty());
    }
}
